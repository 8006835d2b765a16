use super::StackName;
use crate::domain::errors::ValidationError;

/// Name of an S3 bucket declared by a stack
///
/// Names derived from a stack are not checked when they are created; the
/// synthesizer runs [`BucketName::validate`] before emitting a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketName(String);

impl BucketName {
    pub const MIN_LENGTH: usize = 3;
    pub const MAX_LENGTH: usize = 63;

    /// Create a new BucketName with S3-compatible validation rules
    pub fn new(value: String) -> Result<Self, ValidationError> {
        Self::check(&value)?;
        Ok(Self(value))
    }

    /// Derive the bucket name for a stack: `${prefix}-${stackName}`, lower-cased
    pub fn for_stack(prefix: &str, stack_name: &StackName) -> Self {
        Self(format!("{}-{}", prefix, stack_name.as_str()).to_lowercase())
    }

    /// Check the name against S3 naming rules
    pub fn validate(&self) -> Result<(), ValidationError> {
        Self::check(&self.0)
    }

    /// Get the bucket name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn check(value: &str) -> Result<(), ValidationError> {
        // Length validation
        if value.len() < Self::MIN_LENGTH {
            return Err(ValidationError::BucketNameTooShort {
                actual: value.len(),
                min: Self::MIN_LENGTH,
            });
        }

        if value.len() > Self::MAX_LENGTH {
            return Err(ValidationError::BucketNameTooLong {
                actual: value.len(),
                max: Self::MAX_LENGTH,
            });
        }

        // Must start and end with lowercase letter or number
        if !value
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(ValidationError::BucketNameInvalidStart);
        }

        if !value
            .chars()
            .last()
            .map_or(false, |c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(ValidationError::BucketNameInvalidEnd);
        }

        // Lowercase, numbers, periods, hyphens
        for c in value.chars() {
            if !c.is_ascii_lowercase() && !c.is_ascii_digit() && c != '-' && c != '.' {
                return Err(ValidationError::BucketNameInvalidCharacter(c));
            }
        }

        if value.contains("..") {
            return Err(ValidationError::BucketNameConsecutivePeriods);
        }

        if value.contains(".-") || value.contains("-.") {
            return Err(ValidationError::BucketNamePeriodNextToHyphen);
        }

        if Self::looks_like_ip_address(value) {
            return Err(ValidationError::BucketNameLooksLikeIpAddress);
        }

        Ok(())
    }

    /// Check if a string looks like an IP address
    fn looks_like_ip_address(s: &str) -> bool {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 4 {
            return false;
        }

        parts.iter().all(|part| part.parse::<u8>().is_ok())
    }
}

impl std::fmt::Display for BucketName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_stack_lowercases() {
        let stack = StackName::from("MyTestStack");
        let name = BucketName::for_stack("hereya", &stack);
        assert_eq!(name.as_str(), "hereya-myteststack");

        let name = BucketName::for_stack("Team-A", &stack);
        assert_eq!(name.as_str(), "team-a-myteststack");
    }

    #[test]
    fn test_valid_bucket_names() {
        assert!(BucketName::new("my-bucket".to_string()).is_ok());
        assert!(BucketName::new("bucket123".to_string()).is_ok());
        assert!(BucketName::new("123bucket".to_string()).is_ok());
        assert!(BucketName::new("my.bucket".to_string()).is_ok());
        assert!(BucketName::new("my--bucket".to_string()).is_ok());
    }

    #[test]
    fn test_invalid_bucket_names() {
        // Too short
        assert_eq!(
            BucketName::new("ab".to_string()),
            Err(ValidationError::BucketNameTooShort { actual: 2, min: 3 })
        );

        // Too long
        assert!(BucketName::new("a".repeat(64)).is_err());

        // Invalid start/end
        assert!(BucketName::new("-bucket".to_string()).is_err());
        assert!(BucketName::new("bucket-".to_string()).is_err());
        assert!(BucketName::new("Bucket".to_string()).is_err()); // uppercase

        // Invalid characters
        assert_eq!(
            BucketName::new("my_bucket".to_string()),
            Err(ValidationError::BucketNameInvalidCharacter('_'))
        );
        assert!(BucketName::new("my bucket".to_string()).is_err());

        // Periods
        assert!(BucketName::new("my..bucket".to_string()).is_err());
        assert!(BucketName::new("my.-bucket".to_string()).is_err());

        // IP address format
        assert!(BucketName::new("192.168.1.1".to_string()).is_err());
    }

    #[test]
    fn test_derived_name_validated_later() {
        let stack = StackName::from("Stack_With_Underscore");
        let name = BucketName::for_stack("hereya", &stack);
        assert_eq!(
            name.validate(),
            Err(ValidationError::BucketNameInvalidCharacter('_'))
        );
    }
}
