use std::path::{Path, PathBuf};
use std::process::ExitCode;

use lume_match::config::{LoggingSettings, Settings};
use lume_match::{MatchBatch, MatchesResponse, Matcher};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Failure anywhere between reading settings and printing results
#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("Usage: lume-match <batch.json>")]
    Usage,

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid batch file: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Match(#[from] lume_match::MatchError),
}

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "json" => subscriber.json().init(),
        "pretty" => subscriber.pretty().init(),
        _ => subscriber.compact().init(),
    }
}

fn read_batch(path: &Path) -> Result<MatchBatch, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(serde_json::from_str(&raw)?)
}

fn run(settings: &Settings) -> Result<(), AppError> {
    let path = std::env::args_os().nth(1).map(PathBuf::from).ok_or(AppError::Usage)?;

    let config = settings.match_config()?;
    let matcher = Matcher::new(config);

    info!("Matcher initialized with config: {:?}", config);

    let batch = read_batch(&path)?;
    let top_n = batch.top_n.unwrap_or(config.top_n);

    info!("Loaded {} members from {}", batch.members.len(), path.display());

    let result = matcher.rank(&batch.members, top_n)?;
    let response = MatchesResponse::from_result(&batch.members, &result);

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging);

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
