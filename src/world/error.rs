use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("map has no rows")]
    EmptyMap,

    #[error("Starting position not found on the map!")]
    NoStart,
}

impl WorldError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        WorldError::Io {
            path: path.into(),
            source,
        }
    }
}
