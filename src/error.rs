use std::path::PathBuf;

use thiserror::Error;

use crate::model::ShotKey;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("labels should only be computed for provided shots: {count} label(s) reference unknown shots, first is {first}")]
    InputConsistency { count: usize, first: ShotKey },

    #[error("{}:{line}: {reason}", path.display())]
    FileFormat {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Argument(String),

    #[error("no queries to evaluate")]
    EmptyQueryList,
}

pub type Result<T> = std::result::Result<T, EvaluationError>;
