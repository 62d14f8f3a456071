use std::collections::{HashMap, HashSet};

use crate::model::{LabelEntry, ReferenceEntry, ShotKey};

pub fn relevant_shots(reference: &[ReferenceEntry], query: &str) -> HashSet<ShotKey> {
    reference
        .iter()
        .filter(|entry| entry.person_name == query)
        .map(|entry| entry.shot.clone())
        .collect()
}

pub fn returned_shots(labels: &[LabelEntry], matched_person: Option<&str>) -> Vec<ShotKey> {
    let Some(person_name) = matched_person else {
        return Vec::new();
    };

    let mut best = HashMap::<&ShotKey, f64>::new();
    for label in labels.iter().filter(|label| label.person_name == person_name) {
        best.entry(&label.shot)
            .and_modify(|confidence| *confidence = confidence.max(label.confidence))
            .or_insert(label.confidence);
    }

    let mut ranked: Vec<(&ShotKey, f64)> = best.into_iter().collect();
    ranked.sort_by(|left, right| right.1.total_cmp(&left.1).then(left.0.cmp(right.0)));

    ranked.into_iter().map(|(shot, _)| shot.clone()).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{relevant_shots, returned_shots};
    use crate::model::{LabelEntry, ReferenceEntry, ShotKey};

    #[test]
    fn relevant_shots_uses_exact_person_name() {
        let reference = vec![
            ReferenceEntry::new("Alice", "v1", 1),
            ReferenceEntry::new("Alice", "v2", 4),
            ReferenceEntry::new("Alicia", "v1", 2),
            ReferenceEntry::new("Alice", "v1", 1),
        ];

        let relevant = relevant_shots(&reference, "Alice");
        let expected: HashSet<ShotKey> = [ShotKey::new("v1", 1), ShotKey::new("v2", 4)]
            .into_iter()
            .collect();
        assert_eq!(relevant, expected);
        assert!(relevant_shots(&reference, "alice").is_empty());
    }

    #[test]
    fn returned_shots_is_empty_without_match() {
        let labels = vec![LabelEntry::new("Alice", "v1", 1, 0.9)];
        assert!(returned_shots(&labels, None).is_empty());
    }

    #[test]
    fn returned_shots_orders_by_descending_confidence() {
        let labels = vec![
            LabelEntry::new("Alice", "v1", 3, 0.1),
            LabelEntry::new("Alice", "v1", 1, 0.9),
            LabelEntry::new("Bob", "v1", 2, 0.99),
            LabelEntry::new("Alice", "v1", 2, 0.5),
        ];

        assert_eq!(
            returned_shots(&labels, Some("Alice")),
            vec![
                ShotKey::new("v1", 1),
                ShotKey::new("v1", 2),
                ShotKey::new("v1", 3),
            ]
        );
    }

    #[test]
    fn returned_shots_collapses_duplicates_to_maximum_confidence() {
        let labels = vec![
            LabelEntry::new("Alice", "v1", 1, 0.2),
            LabelEntry::new("Alice", "v1", 2, 0.5),
            LabelEntry::new("Alice", "v1", 1, 0.8),
            LabelEntry::new("Alice", "v1", 1, 0.3),
        ];

        assert_eq!(
            returned_shots(&labels, Some("Alice")),
            vec![ShotKey::new("v1", 1), ShotKey::new("v1", 2)]
        );
    }

    #[test]
    fn returned_shots_breaks_confidence_ties_by_shot() {
        let labels = vec![
            LabelEntry::new("Alice", "v2", 1, 0.5),
            LabelEntry::new("Alice", "v1", 7, 0.5),
            LabelEntry::new("Alice", "v1", 3, 0.5),
        ];

        assert_eq!(
            returned_shots(&labels, Some("Alice")),
            vec![
                ShotKey::new("v1", 3),
                ShotKey::new("v1", 7),
                ShotKey::new("v2", 1),
            ]
        );
    }
}
