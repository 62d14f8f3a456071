use std::collections::HashSet;

use crate::model::ShotKey;

// Nothing to find counts as a perfect score; nothing returned for a non-empty
// relevant set scores zero.
pub fn average_precision(returned: &[ShotKey], relevant: &HashSet<ShotKey>) -> f64 {
    if relevant.is_empty() {
        return 1.0;
    }
    if returned.is_empty() {
        return 0.0;
    }

    let mut hits = 0usize;
    let mut precision_sum = 0.0;
    for (rank, shot) in returned.iter().enumerate() {
        if relevant.contains(shot) {
            hits += 1;
            precision_sum += hits as f64 / (rank + 1) as f64;
        }
    }

    precision_sum / relevant.len() as f64
}
