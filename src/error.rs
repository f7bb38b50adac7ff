// src/error.rs
use std::error::Error as StdError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop an import.
///
/// File, parse, shape and config errors are raised before any connection is
/// opened, so they never leave documents behind in the target collection.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read input file {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unexpected JSON structure: {0}")]
    Shape(String),
    #[error("database error: {0}")]
    Database(#[source] Box<dyn StdError + Send + Sync>),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl LoadError {
    /// Short label for the error category, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::File { .. } => "file",
            Self::Parse { .. } => "parse",
            Self::Shape(_) => "shape",
            Self::Database(_) => "database",
            Self::Config(_) => "config",
        }
    }
}

impl From<mongodb::error::Error> for LoadError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Database(Box::new(err))
    }
}
