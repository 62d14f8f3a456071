use serde::Serialize;
use tracing::{debug, warn};

use super::matcher::{PersonMatch, closest_person};
use super::precision::average_precision;
use super::ranking::{relevant_shots, returned_shots};
use crate::error::{EvaluationError, Result};
use crate::model::{LabelEntry, ReferenceEntry, distinct_person_names};

#[derive(Debug, Clone, Serialize)]
pub struct QueryOutcome {
    pub query: String,
    pub matched: Option<PersonMatch>,
    pub relevant_count: usize,
    pub returned_count: usize,
    pub average_precision: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub queries: Vec<QueryOutcome>,
    pub mean_average_precision: f64,
}

pub fn reference_queries(reference: &[ReferenceEntry]) -> Vec<String> {
    distinct_person_names(reference.iter().map(|entry| entry.person_name.as_str()))
        .into_iter()
        .collect()
}

pub fn evaluate_queries(
    queries: &[String],
    reference: &[ReferenceEntry],
    labels: &[LabelEntry],
    threshold: f64,
) -> Result<Evaluation> {
    if queries.is_empty() {
        return Err(EvaluationError::EmptyQueryList);
    }

    let candidates = distinct_person_names(labels.iter().map(|label| label.person_name.as_str()));

    let outcomes: Vec<QueryOutcome> = queries
        .iter()
        .map(|query| {
            let matched = closest_person(query, &candidates, threshold);
            let relevant = relevant_shots(reference, query);
            let returned = returned_shots(
                labels,
                matched.as_ref().map(|found| found.person_name.as_str()),
            );
            let average_precision = average_precision(&returned, &relevant);

            if matched.is_none() && !relevant.is_empty() {
                warn!(query = %query, threshold, "no hypothesis person close enough to query");
            }
            debug!(
                query = %query,
                matched = ?matched.as_ref().map(|found| found.person_name.as_str()),
                relevant = relevant.len(),
                returned = returned.len(),
                average_precision,
                "query evaluated"
            );

            QueryOutcome {
                query: query.clone(),
                matched,
                relevant_count: relevant.len(),
                returned_count: returned.len(),
                average_precision,
            }
        })
        .collect();

    let total: f64 = outcomes.iter().map(|outcome| outcome.average_precision).sum();
    let mean_average_precision = total / outcomes.len() as f64;

    Ok(Evaluation {
        queries: outcomes,
        mean_average_precision,
    })
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.2} %", 100.0 * value)
}
