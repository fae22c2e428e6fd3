use std::time::Duration;

use clap::{error::ErrorKind, CommandFactory, Parser};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing_subscriber::EnvFilter;

use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::filter::Filter;
use crate::loader::MenuSource;
use crate::output::{self, OutputFormat};
use crate::page::PageShell;
use crate::render;
use crate::runner::{Options, RenderOutcome, Renderer};

fn print_banner() {
    const BANNER: &str = r#"
                              __                         __
   ____ ___  ___  ____  __  __/ /_  ____  ____ __________/ /
  / __ `__ \/ _ \/ __ \/ / / / __ \/ __ \/ __ `/ ___/ __  /
 / / / / / /  __/ / / / /_/ / /_/ / /_/ / /_/ / /  / /_/ /
/_/ /_/ /_/\___/_/ /_/\__,_/_.___/\____/\__,_/_/   \__,_/
       v0.1.0 - restaurant menu page renderer
    "#;
    eprint!("{}", BANNER);
    eprintln!();
}

fn format_kv_line(label: &str, value: &str) {
    eprintln!(":: {:<10}: {}", label, value);
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("menuboard={default_level}")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[derive(Clone, Debug)]
struct RunConfig {
    source: MenuSource,
    shell: PageShell,
    fallback_image: String,
    filter: Option<Filter>,
    output: Option<String>,
    output_format: OutputFormat,
    no_color: bool,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = args.no_color || cfg.no_color.unwrap_or(false);

    // CLI source flags win over both config source keys.
    let (data, base_url) = if args.data.is_some() || args.base_url.is_some() {
        (args.data, args.base_url)
    } else {
        (cfg.data.clone(), cfg.base_url.clone())
    };
    if data.is_some() && base_url.is_some() {
        return Err("use either data or base_url, not both".to_string());
    }
    let source = match (data, base_url) {
        (Some(data), _) => match MenuSource::parse(&data) {
            MenuSource::File(path) => {
                MenuSource::File(config::expand_tilde(&path.to_string_lossy()))
            }
            url => url,
        },
        (None, Some(base)) => {
            MenuSource::from_base_url(&base).map_err(|e| format!("invalid base_url: {e}"))?
        }
        (None, None) => MenuSource::File(render::MENU_DATA_FILE_NAME.into()),
    };

    let fallback_image = args
        .fallback_image
        .or(cfg.fallback_image.clone())
        .unwrap_or_else(|| render::DEFAULT_FALLBACK_IMAGE.to_string());

    let output = args
        .output
        .or(cfg.output.clone())
        .map(|p| config::expand_tilde_string(&p));
    let output_format = match args.output_format.or(cfg.output_format.clone()) {
        Some(raw) => OutputFormat::parse(&raw)
            .ok_or_else(|| format!("invalid output format '{raw}'"))?,
        None => output
            .as_deref()
            .and_then(output::infer_format_from_path)
            .unwrap_or(OutputFormat::Html),
    };

    Ok(RunConfig {
        source,
        shell: cfg.page_shell(),
        fallback_image,
        filter: args.filter.as_deref().map(Filter::parse),
        output,
        output_format,
        no_color,
    })
}

fn loading_spinner(source: &MenuSource) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_draw_target(ProgressDrawTarget::stderr());
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("Loading menu from {}", source.describe()));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

async fn run_async(run: RunConfig) -> Result<(), String> {
    if run.no_color {
        colored::control::set_override(false);
    }
    print_banner();
    format_kv_line("Source", &run.source.describe());

    let renderer = Renderer::new(Options {
        source: run.source.clone(),
        shell: run.shell.clone(),
        fallback_image: run.fallback_image.clone(),
        initial_filter: run.filter.clone(),
    })
    .map_err(|e| e.to_string())?;

    let pb = loading_spinner(&run.source);
    let result = renderer.render().await;
    pb.finish_and_clear();

    let status = match &result.outcome {
        RenderOutcome::Ready { categories, items } => format!(
            "{} ({categories} categories, {items} items)",
            "ready".bold().green()
        ),
        RenderOutcome::Empty => format!("{}", "menu unavailable".bold().yellow()),
        RenderOutcome::Failed { message } => {
            format!("{} ({message})", "couldn't load the menu".bold().red())
        }
        RenderOutcome::Skipped => format!("{}", "no sections container".bold().red()),
    };
    format_kv_line("Status", &status);
    if let Some(filter) = result.page.active_filter() {
        format_kv_line("Filter", filter.as_str());
    }
    let disabled = result.page.disabled_filters();
    if !disabled.is_empty() {
        format_kv_line("Disabled", &disabled.join(", "));
    }

    let bytes = output::render(&result.page, run.output_format);
    match run.output.as_deref() {
        Some(path) => {
            tokio::fs::write(path, &bytes)
                .await
                .map_err(|e| format!("failed to write output '{path}': {e}"))?;
            format_kv_line("Output", path);
        }
        None => {
            use tokio::io::AsyncWriteExt;
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(&bytes)
                .await
                .map_err(|e| format!("failed to write output: {e}"))?;
            stdout
                .flush()
                .await
                .map_err(|e| format!("failed to write output: {e}"))?;
        }
    }
    Ok(())
}

fn init_config(path: Option<std::path::PathBuf>) -> Result<(), String> {
    let path = path
        .or_else(config::default_config_path)
        .ok_or_else(|| "could not determine home directory for config".to_string())?;
    if config::ensure_default_config_file(&path)? {
        format_kv_line("Config", &format!("wrote {}", path.display()));
    } else {
        format_kv_line("Config", &format!("{} already exists", path.display()));
    }
    Ok(())
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp => {
                print!("{}", e);
                return Ok(());
            }
            ErrorKind::DisplayVersion => {
                let cmd = CliArgs::command();
                print!("{}", cmd.render_version());
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    init_logging(args.verbose);

    let user_config_path = args.config.clone().map(|p| config::expand_tilde(&p));
    if args.init_config {
        return init_config(user_config_path);
    }
    let cfg = match user_config_path.as_ref() {
        Some(path) => config::load_config(path, false)?,
        None => match config::default_config_path() {
            Some(path) => config::load_config(&path, true)?,
            None => ConfigFile::default(),
        },
    };

    let run = build_run_config(args, cfg)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to build runtime: {e}"))?;

    rt.block_on(run_async(run))?;
    Ok(())
}
