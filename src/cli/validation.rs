use crate::cli::args::CliArgs;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if args.data.is_some() && args.base_url.is_some() {
        return Err("use either --data or --base-url, not both".to_string());
    }
    if let Some(raw) = args.output_format.as_deref() {
        crate::output::OutputFormat::parse(raw)
            .ok_or_else(|| format!("invalid --output-format '{raw}', expected html, json or text"))?;
    }
    if let Some(raw) = args.base_url.as_deref() {
        crate::loader::MenuSource::from_base_url(raw)
            .map_err(|e| format!("invalid --base-url: {e}"))?;
    }
    if let Some(raw) = args.fallback_image.as_deref() {
        if raw.trim().is_empty() {
            return Err("invalid --fallback-image, expected a path".to_string());
        }
    }
    if let Some(raw) = args.filter.as_deref() {
        if raw.chars().any(char::is_whitespace) {
            return Err(format!(
                "invalid --filter '{raw}', expected a category slug such as 'breads-parottas'"
            ));
        }
    }
    Ok(())
}
