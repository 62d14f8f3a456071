mod aggregate;
mod consensus;
mod matcher;
mod precision;
mod ranking;
mod report;


use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::EvaluateArgs;
use crate::loader::{load_labels, load_queries, load_reference, load_shots};

use self::aggregate::{Evaluation, evaluate_queries, format_percentage, reference_queries};
use self::consensus::{check_label_shots, filter_by_consensus};
use self::report::{EvaluationInputs, EvaluationReport, digest_input, write_report};

pub fn run(args: EvaluateArgs) -> Result<()> {
    let evaluation = evaluate(&args)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", format_percentage(evaluation.mean_average_precision))
        .context("failed to write result to stdout")?;

    Ok(())
}

fn evaluate(args: &EvaluateArgs) -> Result<Evaluation> {
    if !(0.0..=1.0).contains(&args.threshold) {
        warn!(threshold = args.threshold, "levenshtein threshold outside [0, 1]");
    }

    let shots = load_shots(&args.shot_path).context("failed to load shot table")?;
    if shots.is_empty() {
        warn!(path = %args.shot_path.display(), "shot table is empty");
    }
    let labels = load_labels(&args.hypothesis_path).context("failed to load hypothesis labels")?;
    check_label_shots(&labels, &shots).with_context(|| {
        format!(
            "hypothesis {} does not match shot table {}",
            args.hypothesis_path.display(),
            args.shot_path.display()
        )
    })?;

    let consensus = args
        .consensus_path
        .as_deref()
        .map(load_shots)
        .transpose()
        .context("failed to load consensus shot table")?;
    let scored_labels = filter_by_consensus(&labels, consensus.as_ref());
    if consensus.is_some() {
        info!(
            labels_loaded = labels.len(),
            labels_scored = scored_labels.len(),
            "restricted labels to consensus shots"
        );
    }

    let reference =
        load_reference(&args.reference_path).context("failed to load reference table")?;

    let queries = match args.queries_path.as_deref() {
        Some(path) => load_queries(path).context("failed to load query list")?,
        None => reference_queries(&reference),
    };

    let evaluation = evaluate_queries(&queries, &reference, &scored_labels, args.threshold)
        .context("failed to evaluate queries")?;

    let matched = evaluation
        .queries
        .iter()
        .filter(|outcome| outcome.matched.is_some())
        .count();
    info!(
        queries = evaluation.queries.len(),
        matched,
        threshold = args.threshold,
        mean_average_precision = evaluation.mean_average_precision,
        "evaluation completed"
    );

    if let Some(report_path) = args.report_path.as_deref() {
        let inputs = EvaluationInputs {
            shot: digest_input(&args.shot_path)?,
            reference: digest_input(&args.reference_path)?,
            hypothesis: digest_input(&args.hypothesis_path)?,
            queries: args.queries_path.as_deref().map(digest_input).transpose()?,
            consensus: args.consensus_path.as_deref().map(digest_input).transpose()?,
        };
        let report = EvaluationReport::new(
            args.threshold,
            inputs,
            labels.len(),
            scored_labels.len(),
            evaluation.clone(),
        );
        write_report(report_path, &report)?;
        info!(path = %report_path.display(), "wrote evaluation report");
    }

    Ok(evaluation)
}
