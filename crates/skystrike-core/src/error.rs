//! Error types for the edges of the simulation.
//!
//! The tick path itself never fails; these cover settings loading and
//! collaborator calls.

use std::path::PathBuf;

/// Failure loading or validating `SimSettings`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Failure reported by an external collaborator (scene, audio, score display).
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{service} unsupported: {reason}")]
    Unsupported {
        service: &'static str,
        reason: String,
    },
    #[error("{service} call failed: {reason}")]
    Failed {
        service: &'static str,
        reason: String,
    },
}
