//! Error types for artifact loading and per-submission inference

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the reference dataset or the model bundle.
///
/// All of these are fatal at startup: nothing can be served without both
/// artifacts.
#[derive(Error, Debug)]
pub enum ArtifactError {
    /// File does not exist
    #[error("artifact not found: {0}")]
    NotFound(PathBuf),

    /// File exists but could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File could not be parsed (bad CSV/JSON, missing keys or columns)
    #[error("malformed artifact {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    /// Bundle parsed but its shapes do not fit the car feature schema
    #[error("incompatible model bundle: {0}")]
    Incompatible(String),
}

impl ArtifactError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Malformed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Errors that abort a single prediction. The form stays usable afterwards.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    /// Category value never seen when the encoder was fitted
    #[error("unseen value {value:?} for column '{column}'")]
    UnseenCategory { column: String, value: String },

    /// Value outside the domain offered by the reference dataset
    #[error("value {value:?} is outside the allowed domain of '{field}'")]
    OutOfDomain { field: String, value: String },

    /// Feature vector width does not match a fitted transformer
    #[error("expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Regression produced NaN or infinity
    #[error("regression produced a non-finite price ({0})")]
    NonFinite(f64),
}
