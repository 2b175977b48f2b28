// src/main.rs
//
// product-renamer command line
//
//   product-renamer [OPTIONS] <DIRECTORY>
//
// Exit codes: 0 when the run completed or there was nothing to do,
// 1 on configuration or fatal errors.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use product_renamer::application::{AppState, Backend, ErrorResponse, RenamerConfig};
use product_renamer::error::AppError;
use product_renamer::events::{register_logging_handlers, EventBus};
use product_renamer::services::RunSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BackendKind {
    /// tesseract for OCR, Finder metadata for color labels
    Tesseract,
    /// OCR text and color labels from a JSON manifest
    Manifest,
}

/// Groups product photos by color label and renames them after the product code
#[derive(Parser, Debug)]
#[command(name = "product-renamer", version)]
struct Args {
    /// Directory holding the product photos
    directory: PathBuf,

    /// OCR / color label backend
    #[arg(long, value_enum, default_value_t = BackendKind::Tesseract)]
    backend: BackendKind,

    /// Manifest JSON (default: <DIRECTORY>/ocr-manifest.json)
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Suffix of the label image name
    #[arg(long)]
    label_suffix: Option<String>,

    /// Compute and report the plan without renaming anything
    #[arg(long)]
    dry_run: bool,

    /// Write the run summary as JSON
    #[arg(long)]
    report: Option<PathBuf>,
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_config(args: &Args) -> anyhow::Result<RenamerConfig> {
    let mut config = match &args.config {
        Some(path) => RenamerConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => RenamerConfig::default(),
    };

    if let Some(suffix) = &args.label_suffix {
        config.label_suffix = suffix.clone();
    }
    config.validate().context("validating configuration")?;

    Ok(config)
}

fn backend(args: &Args, config: &RenamerConfig) -> Backend {
    match args.backend {
        BackendKind::Tesseract => Backend::Tesseract,
        BackendKind::Manifest => Backend::Manifest(
            args.manifest
                .clone()
                .unwrap_or_else(|| args.directory.join(&config.manifest_file_name)),
        ),
    }
}

fn write_report(path: &Path, summary: &RunSummary) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(path, json).with_context(|| format!("writing report to {}", path.display()))?;
    log::info!("Report written to {}", path.display());
    Ok(())
}

/// Reports a run-level error and picks the exit code
fn report_error(error: AppError) -> ExitCode {
    let response = ErrorResponse::from_app_error(error);
    if response.exit_code() == 0 {
        log::info!("{}", response.render());
    } else {
        eprintln!("Error: {}", response.render());
    }
    ExitCode::from(response.exit_code())
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    // Nothing else is worth loading when there is no directory
    if !args.directory.is_dir() {
        return Ok(report_error(AppError::DirectoryNotFound(args.directory.clone())));
    }

    let config = load_config(args)?;
    let backend = backend(args, &config);

    let event_bus = Arc::new(EventBus::new());
    register_logging_handlers(&event_bus);

    let state = AppState::build(&config, &backend, args.dry_run, Arc::clone(&event_bus))
        .context("initializing collaborators")?;

    if args.dry_run {
        log::info!("Dry run: no file will be renamed");
    }

    let summary = match state.processing_service.process_directory(&args.directory) {
        Ok(summary) => summary,
        Err(e) => return Ok(report_error(e)),
    };

    if summary.has_failures() {
        log::warn!("{} rename(s) failed, see above", summary.failed);
    }

    if let Some(path) = &args.report {
        write_report(path, &summary)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
