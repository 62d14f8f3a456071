use std::fs::{self, File};
use std::io::{BufReader, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

use super::aggregate::{Evaluation, QueryOutcome, format_percentage};

#[derive(Debug, Serialize)]
pub struct InputDigest {
    pub path: String,
    pub sha256: String,
}

#[derive(Debug, Serialize)]
pub struct EvaluationInputs {
    pub shot: InputDigest,
    pub reference: InputDigest,
    pub hypothesis: InputDigest,
    pub queries: Option<InputDigest>,
    pub consensus: Option<InputDigest>,
}

#[derive(Debug, Serialize)]
pub struct EvaluationReport {
    pub generated_at: String,
    pub threshold: f64,
    pub inputs: EvaluationInputs,
    pub consensus_active: bool,
    pub labels_loaded: usize,
    pub labels_scored: usize,
    pub query_count: usize,
    pub mean_average_precision: f64,
    pub mean_average_precision_percent: String,
    pub queries: Vec<QueryOutcome>,
}

impl EvaluationReport {
    pub fn new(
        threshold: f64,
        inputs: EvaluationInputs,
        labels_loaded: usize,
        labels_scored: usize,
        evaluation: Evaluation,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            threshold,
            consensus_active: inputs.consensus.is_some(),
            inputs,
            labels_loaded,
            labels_scored,
            query_count: evaluation.queries.len(),
            mean_average_precision: evaluation.mean_average_precision,
            mean_average_precision_percent: format_percentage(evaluation.mean_average_precision),
            queries: evaluation.queries,
        }
    }
}

pub fn digest_input(path: &Path) -> Result<InputDigest> {
    let file = File::open(path)
        .with_context(|| format!("failed to open input for hashing: {}", path.display()))?;
    let mut reader = BufReader::new(file);

    let mut hasher = Sha256::new();
    let mut buf = [0_u8; 8192];
    loop {
        let count = reader
            .read(&mut buf)
            .with_context(|| format!("failed to read input for hashing: {}", path.display()))?;
        if count == 0 {
            break;
        }
        hasher.update(&buf[..count]);
    }

    Ok(InputDigest {
        path: path.display().to_string(),
        sha256: format!("{:x}", hasher.finalize()),
    })
}

pub fn write_report(path: &Path, report: &EvaluationReport) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create report directory: {}", parent.display()))?;
    }

    let data = serde_json::to_vec_pretty(report)
        .with_context(|| format!("failed to serialize report: {}", path.display()))?;

    let mut file = File::create(path)
        .with_context(|| format!("failed to create report: {}", path.display()))?;
    file.write_all(&data)
        .with_context(|| format!("failed to write report: {}", path.display()))?;
    file.write_all(b"\n")
        .with_context(|| format!("failed to finalize report: {}", path.display()))?;

    Ok(())
}
