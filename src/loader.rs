use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EvaluationError, Result};
use crate::model::{LabelEntry, ReferenceEntry, ShotIndex, ShotKey};

// Tables are whitespace separated, one record per line, no header:
//   shot       videoID shotNumber [startTime endTime ...]
//   reference  videoID shotNumber personName [...]
//   label      videoID shotNumber personName confidence

pub fn load_shots(path: &Path) -> Result<ShotIndex> {
    let raw = read_table(path)?;
    let index = parse_shots(path, &raw)?;
    info!(path = %path.display(), shots = index.len(), "loaded shot table");
    Ok(index)
}

pub fn load_reference(path: &Path) -> Result<Vec<ReferenceEntry>> {
    let raw = read_table(path)?;
    let entries = parse_reference(path, &raw)?;
    info!(path = %path.display(), entries = entries.len(), "loaded reference table");
    Ok(entries)
}

pub fn load_labels(path: &Path) -> Result<Vec<LabelEntry>> {
    let raw = read_table(path)?;
    let labels = parse_labels(path, &raw)?;
    info!(path = %path.display(), labels = labels.len(), "loaded hypothesis labels");
    Ok(labels)
}

pub fn load_queries(path: &Path) -> Result<Vec<String>> {
    let raw = read_table(path)?;
    let queries = parse_queries(&raw);
    info!(path = %path.display(), queries = queries.len(), "loaded query list");
    Ok(queries)
}

fn read_table(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| EvaluationError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_shots(path: &Path, raw: &str) -> Result<ShotIndex> {
    records(raw)
        .map(|(line, fields)| {
            let row = Row::new(path, line, &fields);
            row.require(2)?;
            row.shot()
        })
        .collect()
}

pub fn parse_reference(path: &Path, raw: &str) -> Result<Vec<ReferenceEntry>> {
    records(raw)
        .map(|(line, fields)| {
            let row = Row::new(path, line, &fields);
            row.require(3)?;
            Ok(ReferenceEntry::new(fields[2], fields[0], row.shot_number()?))
        })
        .collect()
}

pub fn parse_labels(path: &Path, raw: &str) -> Result<Vec<LabelEntry>> {
    records(raw)
        .map(|(line, fields)| {
            let row = Row::new(path, line, &fields);
            row.require(4)?;
            if fields.len() > 4 {
                return Err(row.error(format!(
                    "expected 4 columns (videoID shotNumber personName confidence), found {}",
                    fields.len()
                )));
            }
            let confidence = fields[3]
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| row.error(format!("invalid confidence value: {}", fields[3])))?;
            Ok(LabelEntry::new(fields[2], fields[0], row.shot_number()?, confidence))
        })
        .collect()
}

pub fn parse_queries(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn records(raw: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    raw.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.split_whitespace().collect::<Vec<_>>()))
        .filter(|(_, fields)| !fields.is_empty())
}

struct Row<'a> {
    path: &'a Path,
    line: usize,
    fields: &'a [&'a str],
}

impl<'a> Row<'a> {
    fn new(path: &'a Path, line: usize, fields: &'a [&'a str]) -> Self {
        Self { path, line, fields }
    }

    fn require(&self, columns: usize) -> Result<()> {
        if self.fields.len() < columns {
            return Err(self.error(format!(
                "expected at least {columns} columns, found {}",
                self.fields.len()
            )));
        }
        Ok(())
    }

    fn shot_number(&self) -> Result<u32> {
        self.fields[1]
            .parse::<u32>()
            .map_err(|_| self.error(format!("invalid shot number: {}", self.fields[1])))
    }

    fn shot(&self) -> Result<ShotKey> {
        Ok(ShotKey::new(self.fields[0], self.shot_number()?))
    }

    fn error(&self, reason: String) -> EvaluationError {
        EvaluationError::FileFormat {
            path: self.path.to_path_buf(),
            line: self.line,
            reason,
        }
    }
}
