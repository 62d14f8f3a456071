use crate::error::{EvaluationError, Result};
use crate::model::{LabelEntry, ShotIndex};

pub fn check_label_shots(labels: &[LabelEntry], shots: &ShotIndex) -> Result<()> {
    let unknown = labels
        .iter()
        .map(|label| &label.shot)
        .filter(|shot| !shots.contains(shot));

    let mut count = 0usize;
    let mut first = None;
    for shot in unknown {
        count += 1;
        if first.is_none_or(|current| shot < current) {
            first = Some(shot);
        }
    }

    match first {
        Some(first) => Err(EvaluationError::InputConsistency {
            count,
            first: first.clone(),
        }),
        None => Ok(()),
    }
}

pub fn filter_by_consensus(labels: &[LabelEntry], consensus: Option<&ShotIndex>) -> Vec<LabelEntry> {
    match consensus {
        None => labels.to_vec(),
        Some(consensus) => labels
            .iter()
            .filter(|label| consensus.contains(&label.shot))
            .cloned()
            .collect(),
    }
}
