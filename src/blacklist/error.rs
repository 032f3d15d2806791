use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a domain list from disk or a reader.
#[derive(Debug, Error)]
pub enum BlacklistError {
    #[error("cannot open blacklist {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read blacklist entries: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },
}

impl BlacklistError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn read(source: std::io::Error) -> Self {
        Self::Read { source }
    }
}
