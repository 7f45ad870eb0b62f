use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Invalid ignore pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
    #[error("Invalid file: {0}")]
    InvalidName(PathBuf),
    #[error("Asset name '{name}' is produced by both {first} and {second}")]
    NameCollision {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
    #[error("Asset {0} not found")]
    NotFound(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Failed to write generated code: {0}")]
    Write(std::io::Error),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to embed asset {name}: {source}")]
    Emit {
        name: String,
        source: std::io::Error,
    },
}
impl SynthesisError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SynthesisError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn emit(name: impl Into<String>, source: std::io::Error) -> Self {
        SynthesisError::Emit {
            name: name.into(),
            source,
        }
    }
}
