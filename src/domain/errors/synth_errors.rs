use super::ValidationError;
use crate::domain::value_objects::StackName;

/// Errors raised while turning a stack declaration into a template
#[derive(Debug, Clone, PartialEq)]
pub enum SynthError {
    /// The stack name is not a valid CloudFormation stack name
    InvalidStackName {
        stack_name: String,
        reason: ValidationError,
    },

    /// The derived bucket name breaks S3 naming rules
    InvalidBucketName {
        stack_name: StackName,
        bucket_name: String,
        reason: ValidationError,
    },

    /// Template or policy could not be rendered as JSON
    Serialization { message: String },
}

impl std::fmt::Display for SynthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SynthError::InvalidStackName { stack_name, reason } => {
                write!(f, "Invalid stack name '{}': {}", stack_name, reason)
            }
            SynthError::InvalidBucketName {
                stack_name,
                bucket_name,
                reason,
            } => {
                write!(
                    f,
                    "Invalid bucket name '{}' in stack '{}': {}",
                    bucket_name, stack_name, reason
                )
            }
            SynthError::Serialization { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for SynthError {}

impl From<serde_json::Error> for SynthError {
    fn from(err: serde_json::Error) -> Self {
        SynthError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Result type for synthesis operations
pub type SynthResult<T> = Result<T, SynthError>;
