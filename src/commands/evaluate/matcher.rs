use std::collections::BTreeSet;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonMatch {
    pub person_name: String,
    pub similarity: f64,
}

// Levenshtein ratio: substitutions count as a deletion plus an insertion, so
// the distance is normalized by the combined length of both strings.
pub fn similarity(left: &str, right: &str) -> f64 {
    let left: Vec<char> = left.chars().collect();
    let right: Vec<char> = right.chars().collect();

    let total = left.len() + right.len();
    if total == 0 {
        return 1.0;
    }

    let distance = indel_distance(&left, &right);
    (total - distance) as f64 / total as f64
}

fn indel_distance(left: &[char], right: &[char]) -> usize {
    let mut previous: Vec<usize> = (0..=right.len()).collect();
    let mut current = vec![0usize; right.len() + 1];

    for (i, left_char) in left.iter().enumerate() {
        current[0] = i + 1;
        for (j, right_char) in right.iter().enumerate() {
            let substitution = if left_char == right_char { 0 } else { 2 };
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + substitution);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[right.len()]
}

pub fn closest_person(
    query: &str,
    candidates: &BTreeSet<String>,
    threshold: f64,
) -> Option<PersonMatch> {
    let mut best: Option<PersonMatch> = None;

    // BTreeSet iterates in lexicographic order and only a strictly higher score
    // replaces the incumbent, so ties resolve to the smallest name.
    for candidate in candidates {
        let score = similarity(query, candidate);
        let better = best
            .as_ref()
            .is_none_or(|incumbent| score > incumbent.similarity);
        if better {
            best = Some(PersonMatch {
                person_name: candidate.clone(),
                similarity: score,
            });
        }
    }

    best.filter(|candidate| candidate.similarity > threshold)
}
