use std::path::PathBuf;

use clap::Parser;

use crate::error::EvaluationError;

pub const DEFAULT_THRESHOLD: f64 = 0.95;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "pdmap",
    version,
    about = "MediaEval person discovery evaluation: mean average precision"
)]
pub struct EvaluateArgs {
    #[arg(value_name = "REFERENCE_SHOT")]
    pub shot_path: PathBuf,

    #[arg(value_name = "REFERENCE_REF")]
    pub reference_path: PathBuf,

    #[arg(value_name = "HYPOTHESIS_LABEL")]
    pub hypothesis_path: PathBuf,

    /// One query per line; defaults to every person in the reference.
    #[arg(long = "queries", value_name = "QUERIES_LST")]
    pub queries_path: Option<PathBuf>,

    /// Levenshtein ratio a hypothesis name must exceed to match a query.
    #[arg(long = "levenshtein", value_name = "THRESHOLD", default_value_t = DEFAULT_THRESHOLD, value_parser = parse_threshold)]
    pub threshold: f64,

    /// Label-annotated subset of the reference shots.
    #[arg(long = "consensus", value_name = "CONSENSUS_SHOT")]
    pub consensus_path: Option<PathBuf>,

    #[arg(long = "report", value_name = "REPORT_JSON")]
    pub report_path: Option<PathBuf>,
}

pub fn parse_threshold(raw: &str) -> Result<f64, EvaluationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            EvaluationError::Argument(format!("levenshtein threshold must be a number, got {raw:?}"))
        })
}
