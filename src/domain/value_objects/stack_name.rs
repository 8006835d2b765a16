use crate::domain::errors::ValidationError;

/// Logical name of a stack, used verbatim in the bucket name and as the
/// CloudFormation stack name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackName(String);

impl StackName {
    pub const MAX_LENGTH: usize = 128;

    /// Create a StackName, rejecting names CloudFormation would refuse
    pub fn new(value: String) -> Result<Self, ValidationError> {
        let name = Self(value);
        name.validate()?;
        Ok(name)
    }

    /// Check against CloudFormation stack naming rules: `^[A-Za-z][A-Za-z0-9-]*$`
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut chars = self.0.chars();

        let first = chars.next().ok_or(ValidationError::EmptyStackName)?;
        if !first.is_ascii_alphabetic() {
            return Err(ValidationError::StackNameInvalidStart(first));
        }

        if self.0.len() > Self::MAX_LENGTH {
            return Err(ValidationError::StackNameTooLong {
                actual: self.0.len(),
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(c) = chars.find(|c| !c.is_ascii_alphanumeric() && *c != '-') {
            return Err(ValidationError::StackNameInvalidCharacter(c));
        }

        Ok(())
    }

    /// Get the stack name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StackName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for StackName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for StackName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
