use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the id-addressed and text-parsing entry points.
///
/// Lookups that have a sensible fallback (chat threads, icons, status tones)
/// never produce one of these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no scenario is loaded")]
    NoScenario,
    #[error("function {0:?} is not part of the active space")]
    UnknownFunction(String),
    #[error("object {0:?} is not part of the active space")]
    UnknownObject(String),
    #[error("unknown view mode {0:?}")]
    UnknownViewMode(String),
    #[error("unknown industry {0:?}")]
    UnknownIndustry(String),
    #[error("unknown category filter {0:?}")]
    UnknownCategory(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
