/// Errors that can occur while persisting a cloud assembly
#[derive(Debug, Clone, PartialEq)]
pub enum AssemblyError {
    /// An artifact could not be written
    WriteFailed { path: String, message: String },

    /// An artifact could not be read back
    ReadFailed { path: String, message: String },

    /// Requested artifact does not exist
    ArtifactNotFound { name: String },

    /// Artifact content could not be rendered or parsed
    Serialization { message: String },
}

impl std::fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssemblyError::WriteFailed { path, message } => {
                write!(f, "Failed to write '{}': {}", path, message)
            }
            AssemblyError::ReadFailed { path, message } => {
                write!(f, "Failed to read '{}': {}", path, message)
            }
            AssemblyError::ArtifactNotFound { name } => {
                write!(f, "Artifact not found: {}", name)
            }
            AssemblyError::Serialization { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for AssemblyError {}

impl From<serde_json::Error> for AssemblyError {
    fn from(err: serde_json::Error) -> Self {
        AssemblyError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Result type for assembly operations
pub type AssemblyResult<T> = Result<T, AssemblyError>;
