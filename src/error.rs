use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that stops a run. Per-line problems are not errors; they end up
/// in `TransformResult::unhandled`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to fetch gfwlist: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("online request returned code: {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid auto proxy file: missing `[AutoProxy ` header")]
    InvalidHeader,

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}
