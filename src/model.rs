use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ShotKey {
    pub video_id: String,
    pub shot_number: u32,
}

impl ShotKey {
    pub fn new(video_id: impl Into<String>, shot_number: u32) -> Self {
        Self {
            video_id: video_id.into(),
            shot_number,
        }
    }
}

impl fmt::Display for ShotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.video_id, self.shot_number)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShotIndex {
    shots: BTreeSet<ShotKey>,
}

impl ShotIndex {
    pub fn contains(&self, shot: &ShotKey) -> bool {
        self.shots.contains(shot)
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }
}

impl FromIterator<ShotKey> for ShotIndex {
    fn from_iter<I: IntoIterator<Item = ShotKey>>(iter: I) -> Self {
        Self {
            shots: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub person_name: String,
    pub shot: ShotKey,
}

impl ReferenceEntry {
    pub fn new(person_name: impl Into<String>, video_id: impl Into<String>, shot_number: u32) -> Self {
        Self {
            person_name: person_name.into(),
            shot: ShotKey::new(video_id, shot_number),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelEntry {
    pub person_name: String,
    pub shot: ShotKey,
    pub confidence: f64,
}

impl LabelEntry {
    pub fn new(
        person_name: impl Into<String>,
        video_id: impl Into<String>,
        shot_number: u32,
        confidence: f64,
    ) -> Self {
        Self {
            person_name: person_name.into(),
            shot: ShotKey::new(video_id, shot_number),
            confidence,
        }
    }
}

pub fn distinct_person_names<'a, I>(names: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().map(str::to_string).collect()
}
