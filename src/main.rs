#![deny(missing_docs)]

//! Entry point for the StrokeRisk web server.

use std::path::PathBuf;
use std::sync::Arc;

use strokerisk::app_dirs::AppDirs;
use strokerisk::config::{self, ServerConfig};
use strokerisk::features;
use strokerisk::logging::{self, LogTarget};
use strokerisk::ml::LoadedClassifier;
use strokerisk::scoring::RiskScorer;
use strokerisk::web;

#[derive(Debug, Default)]
struct CliOptions {
    config_path: Option<PathBuf>,
    bind: Option<String>,
    model_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    init_logging();
    if let Err(err) = run().await {
        tracing::error!("{err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

/// Log to stdout and the app log file, or to stderr when the file is unavailable.
fn init_logging() {
    let file_target = AppDirs::resolve()
        .and_then(|dirs| dirs.logs_dir())
        .map_err(|err| err.to_string())
        .and_then(|dir| {
            logging::init(LogTarget::StdoutAndFile(dir)).map_err(|err| err.to_string())
        });
    if let Err(err) = file_target {
        eprintln!("File logging disabled: {err}");
        if let Err(err) = logging::init(LogTarget::Stderr) {
            eprintln!("Logging disabled: {err}");
        }
    }
}

async fn run() -> Result<(), String> {
    let options = parse_args(std::env::args().skip(1).collect())?;
    let mut config =
        config::load_or_default(options.config_path.as_deref()).map_err(|err| err.to_string())?;
    if let Some(bind) = &options.bind {
        config.set_bind_addr(bind).map_err(|err| err.to_string())?;
    }
    if let Some(model_path) = options.model_path {
        config.model_path = Some(model_path);
    }

    let classifier = load_classifier(&config)?;
    let scorer = RiskScorer::new(Arc::new(classifier));
    web::serve(config.bind_addr, scorer)
        .await
        .map_err(|err| format!("Server error: {err}"))
}

/// Load the classifier once; degrade to an empty schema unless strict.
fn load_classifier(config: &ServerConfig) -> Result<LoadedClassifier, String> {
    let model_path = config.resolved_model_path().map_err(|err| err.to_string())?;
    let classifier = if config.strict_schema {
        LoadedClassifier::load(&model_path).map_err(|err| err.to_string())?
    } else {
        LoadedClassifier::load_or_unavailable(&model_path)
    };
    if !classifier.is_available() {
        return Ok(classifier);
    }

    let report = features::check_schema(classifier.schema());
    if !report.never_set.is_empty() {
        tracing::info!(
            "Schema columns never set by the form (always 0): {}",
            report.never_set.join(", ")
        );
    }
    if !report.is_complete() {
        let message = format!(
            "Model schema lacks measurement columns: {}",
            report.missing.join(", ")
        );
        if config.strict_schema {
            return Err(message);
        }
        tracing::warn!("{message}");
    }
    Ok(classifier)
}

fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => options.config_path = Some(PathBuf::from(next_value(&mut iter, &arg)?)),
            "--bind" => options.bind = Some(next_value(&mut iter, &arg)?),
            "--model" => options.model_path = Some(PathBuf::from(next_value(&mut iter, &arg)?)),
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown argument: {arg}\n\n{}", help_text())),
        }
    }
    Ok(options)
}

fn next_value(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    iter.next().ok_or_else(|| format!("{flag} requires a value"))
}

fn help_text() -> String {
    [
        "strokerisk",
        "",
        "Serve the stroke risk screening form.",
        "",
        "Usage:",
        "  strokerisk [--config <strokerisk.toml>] [--bind <addr:port>] [--model <model.json>]",
    ]
    .join("\n")
}
