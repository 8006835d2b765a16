use std::{io, path::Path};
use thiserror::Error as ThisError;

use crate::domain::errors::AssemblyError;

#[derive(ThisError, Debug)]
pub enum FsError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FsError {
    pub fn write(path: &Path, source: io::Error) -> Self {
        FsError::Write {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn read(path: &Path, source: io::Error) -> Self {
        FsError::Read {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Convert filesystem errors to domain assembly errors
impl From<FsError> for AssemblyError {
    fn from(err: FsError) -> Self {
        match err {
            FsError::Write { path, source } => AssemblyError::WriteFailed {
                path,
                message: source.to_string(),
            },
            FsError::Read { path, source } if source.kind() == io::ErrorKind::NotFound => {
                AssemblyError::ArtifactNotFound { name: path }
            }
            FsError::Read { path, source } => AssemblyError::ReadFailed {
                path,
                message: source.to_string(),
            },
            FsError::Serialization(e) => AssemblyError::Serialization {
                message: e.to_string(),
            },
        }
    }
}
