//! Developer utility to score one patient offline and print the breakdown as JSON.

use std::path::PathBuf;
use std::sync::Arc;

use strokerisk::config;
use strokerisk::logging::{self, LogTarget};
use strokerisk::ml::LoadedClassifier;
use strokerisk::scoring::RiskScorer;
use strokerisk::web::PredictForm;

fn main() {
    if let Err(err) = logging::init(LogTarget::Stderr) {
        eprintln!("Logging disabled: {err}");
    }
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Default)]
struct CliOptions {
    model_path: Option<PathBuf>,
    form: PredictForm,
}

fn run() -> Result<(), String> {
    let options = parse_args(std::env::args().skip(1).collect())?;
    let model_path = match options.model_path {
        Some(path) => path,
        None => config::load_or_default(None)
            .and_then(|settings| settings.resolved_model_path())
            .map_err(|err| err.to_string())?,
    };
    let classifier = LoadedClassifier::load(&model_path).map_err(|err| err.to_string())?;
    let scorer = RiskScorer::new(Arc::new(classifier));

    let input = options.form.into_patient().map_err(|err| err.to_string())?;
    let breakdown = scorer.evaluate(&input).map_err(|err| err.to_string())?;
    let json = serde_json::to_string_pretty(&breakdown).map_err(|err| err.to_string())?;
    println!("{json}");
    Ok(())
}

fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "-h" || arg == "--help" {
            println!("{}", help_text());
            std::process::exit(0);
        }
        let value = iter
            .next()
            .ok_or_else(|| format!("{arg} requires a value"))?;
        let form = &mut options.form;
        match arg.as_str() {
            "--model" => options.model_path = Some(PathBuf::from(value)),
            "--name" => form.name = Some(value),
            "--age" => form.age = Some(value),
            "--glucose" => form.glucose_level = Some(value),
            "--bmi" => form.bmi = Some(value),
            "--hypertension" => form.hypertension = Some(value),
            "--heart-disease" => form.heart_disease = Some(value),
            "--gender" => form.gender = Some(value),
            "--smoking" => form.smoking_status = Some(value),
            _ => return Err(format!("Unknown argument: {arg}\n\n{}", help_text())),
        }
    }
    Ok(options)
}

fn help_text() -> String {
    [
        "strokerisk-score",
        "",
        "Score a single patient against a classifier artifact.",
        "",
        "Usage:",
        "  strokerisk-score [--model <model.json>] --age <years> --glucose <mg/dL> --bmi <bmi>",
        "                   --hypertension <0|1> --heart-disease <0|1>",
        "                   --gender <male|female|other> --smoking <smokes|never|formerly|unknown>",
        "                   [--name <text>]",
    ]
    .join("\n")
}
