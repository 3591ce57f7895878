use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures that stop the engine from starting.
///
/// Ranking itself never fails: every per-request degraded condition has a
/// defined fallback and is handled without surfacing an error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog not found: {0}")]
    CatalogNotFound(PathBuf),

    #[error("Catalog {path} could not be parsed: {reason}")]
    CatalogUnparsable { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
