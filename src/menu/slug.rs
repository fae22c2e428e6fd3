use std::sync::OnceLock;

use regex::Regex;

// Filter ids on the host page that differ from the derived slug.
const CATEGORY_ID_OVERRIDES: &[(&str, &str)] = &[("Briyani", "biriyani")];

fn non_alnum_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("static slug pattern"))
}

pub fn slugify(input: &str) -> String {
    if let Some((_, slug)) = CATEGORY_ID_OVERRIDES.iter().find(|(name, _)| *name == input) {
        return slug.to_string();
    }
    let lowered = input.to_lowercase();
    let stripped = lowered.trim().replace('&', "");
    non_alnum_runs()
        .replace_all(&stripped, "-")
        .trim_matches('-')
        .to_string()
}
