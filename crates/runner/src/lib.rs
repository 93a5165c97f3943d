//! JHLJ Runner
//!
//! Command-line wrapper around [`ReportEngine`]: reads a JSON array of daily
//! records, optionally a JSON config, and renders the report as JSON.

use std::path::PathBuf;

use jhlj_report::{ReportConfig, ReportEngine};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {
    #[error("{0}")]
    Usage(String),

    #[error("Failed to read records file '{path}': {error}")]
    Io { path: String, error: String },

    #[error(transparent)]
    Report(#[from] jhlj_report::Error),

    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(RunArgs),
}

/// Options for a report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArgs {
    pub records: PathBuf,
    pub config: Option<PathBuf>,
    pub compact: bool,
}

impl Command {
    /// Parse arguments, excluding the program name
    pub fn parse<I, S>(args: I) -> Result<Self, RunError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut records: Option<PathBuf> = None;
        let mut config: Option<PathBuf> = None;
        let mut compact = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--records" | "-r" => {
                    i += 1;
                    let path = args.get(i).ok_or_else(|| {
                        RunError::Usage("--records requires a path argument".to_string())
                    })?;
                    records = Some(PathBuf::from(path));
                }
                "--config" | "-c" => {
                    i += 1;
                    let path = args.get(i).ok_or_else(|| {
                        RunError::Usage("--config requires a path argument".to_string())
                    })?;
                    config = Some(PathBuf::from(path));
                }
                "--compact" => compact = true,
                arg => return Err(RunError::Usage(format!("Unknown argument: {}", arg))),
            }
            i += 1;
        }

        let records =
            records.ok_or_else(|| RunError::Usage("--records is required".to_string()))?;
        Ok(Command::Run(RunArgs {
            records,
            config,
            compact,
        }))
    }
}

/// Load inputs, compute the report and render it
pub fn run(args: &RunArgs) -> Result<String, RunError> {
    let config = match &args.config {
        Some(path) => {
            log::info!("[Runner] loading configuration from {}", path.display());
            ReportConfig::from_file(path).map_err(jhlj_report::Error::from)?
        }
        None => ReportConfig::default(),
    };
    let engine = ReportEngine::new(config)?;

    let json = std::fs::read_to_string(&args.records).map_err(|e| RunError::Io {
        path: args.records.display().to_string(),
        error: e.to_string(),
    })?;
    let report = engine.compute_json(&json)?;

    let rendered = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    Ok(rendered)
}
