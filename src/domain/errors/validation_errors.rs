/// Validation errors for domain value objects
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    // StackName validation errors
    EmptyStackName,
    StackNameTooLong {
        actual: usize,
        max: usize,
    },
    StackNameInvalidStart(char),
    StackNameInvalidCharacter(char),

    // BucketName validation errors
    BucketNameTooShort {
        actual: usize,
        min: usize,
    },
    BucketNameTooLong {
        actual: usize,
        max: usize,
    },
    BucketNameInvalidStart,
    BucketNameInvalidEnd,
    BucketNameInvalidCharacter(char),
    BucketNameConsecutivePeriods,
    BucketNamePeriodNextToHyphen,
    BucketNameLooksLikeIpAddress,

    // LogicalId validation errors
    EmptyLogicalId,
    LogicalIdTooLong {
        actual: usize,
        max: usize,
    },
    InvalidLogicalIdCharacter(char),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // StackName errors
            ValidationError::EmptyStackName => write!(f, "Stack name cannot be empty"),
            ValidationError::StackNameTooLong { actual, max } => {
                write!(
                    f,
                    "Stack name too long: {} characters (max: {})",
                    actual, max
                )
            }
            ValidationError::StackNameInvalidStart(c) => {
                write!(f, "Stack name must start with a letter, found '{}'", c)
            }
            ValidationError::StackNameInvalidCharacter(c) => {
                write!(
                    f,
                    "Invalid character in stack name: '{}'. Only letters, numbers, and hyphens allowed",
                    c
                )
            }

            // BucketName errors
            ValidationError::BucketNameTooShort { actual, min } => {
                write!(
                    f,
                    "Bucket name too short: {} characters (min: {})",
                    actual, min
                )
            }
            ValidationError::BucketNameTooLong { actual, max } => {
                write!(
                    f,
                    "Bucket name too long: {} characters (max: {})",
                    actual, max
                )
            }
            ValidationError::BucketNameInvalidStart => {
                write!(f, "Bucket name must start with lowercase letter or number")
            }
            ValidationError::BucketNameInvalidEnd => {
                write!(f, "Bucket name must end with lowercase letter or number")
            }
            ValidationError::BucketNameInvalidCharacter(c) => {
                write!(
                    f,
                    "Invalid character in bucket name: '{}'. Only lowercase letters, numbers, periods, and hyphens allowed",
                    c
                )
            }
            ValidationError::BucketNameConsecutivePeriods => {
                write!(f, "Bucket name cannot contain consecutive periods")
            }
            ValidationError::BucketNamePeriodNextToHyphen => {
                write!(f, "Bucket name cannot have a period next to a hyphen")
            }
            ValidationError::BucketNameLooksLikeIpAddress => {
                write!(f, "Bucket name cannot be formatted as an IP address")
            }

            // LogicalId errors
            ValidationError::EmptyLogicalId => write!(f, "Logical ID cannot be empty"),
            ValidationError::LogicalIdTooLong { actual, max } => {
                write!(
                    f,
                    "Logical ID too long: {} characters (max: {})",
                    actual, max
                )
            }
            ValidationError::InvalidLogicalIdCharacter(c) => {
                write!(f, "Invalid character in logical ID: '{}'", c)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
