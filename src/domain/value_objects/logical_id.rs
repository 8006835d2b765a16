use crate::domain::errors::ValidationError;

/// Construct path component that is dropped from both the ID and the hash
const HIDDEN_ID: &str = "Default";
/// Construct path component that is hashed but not shown in the ID
const HIDDEN_FROM_HUMAN_ID: &str = "Resource";
const PATH_SEP: &str = "/";
const HASH_LEN: usize = 8;
const MAX_HUMAN_LEN: usize = 240;

/// CloudFormation logical ID of a resource or output within a template
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogicalId(String);

impl LogicalId {
    pub const MAX_LENGTH: usize = 255;

    /// Create a LogicalId, which must be non-empty and alphanumeric
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyLogicalId);
        }

        if value.len() > Self::MAX_LENGTH {
            return Err(ValidationError::LogicalIdTooLong {
                actual: value.len(),
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(c) = value.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidLogicalIdCharacter(c));
        }

        Ok(Self(value))
    }

    /// Derive a stable logical ID from a construct path below the stack.
    ///
    /// A single component is used as-is. Longer paths get a human readable
    /// prefix followed by the first 8 hex digits of the MD5 of the path, so
    /// the same path always yields the same ID. The result is always a valid
    /// logical ID: the hash keeps it non-empty and the human part is capped.
    pub fn from_path(path: &[&str]) -> Self {
        let components: Vec<&str> = path.iter().copied().filter(|c| *c != HIDDEN_ID).collect();

        if let [single] = components.as_slice() {
            let candidate = remove_non_alphanumeric(single);
            if !candidate.is_empty() && candidate.len() <= Self::MAX_LENGTH {
                return Self(candidate);
            }
        }

        let hash = path_hash(&components);
        let human: String = remove_dupes(&components)
            .into_iter()
            .filter(|c| *c != HIDDEN_FROM_HUMAN_ID)
            .map(remove_non_alphanumeric)
            .collect::<String>()
            .chars()
            .take(MAX_HUMAN_LEN)
            .collect();

        Self(human + &hash)
    }

    /// Get the logical ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LogicalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn path_hash(components: &[&str]) -> String {
    let digest = format!("{:x}", md5::compute(components.join(PATH_SEP)));
    digest[..HASH_LEN].to_uppercase()
}

/// Drop components already contained at the end of their predecessor
fn remove_dupes<'a>(components: &[&'a str]) -> Vec<&'a str> {
    let mut ret: Vec<&str> = Vec::with_capacity(components.len());
    for component in components {
        match ret.last() {
            Some(last) if last.ends_with(*component) => {}
            _ => ret.push(*component),
        }
    }
    ret
}

fn remove_non_alphanumeric(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_component_used_verbatim() {
        let id = LogicalId::from_path(&["bucketName"]);
        assert_eq!(id.as_str(), "bucketName");

        let id = LogicalId::from_path(&["my-output"]);
        assert_eq!(id.as_str(), "myoutput");
    }

    #[test]
    fn test_resource_component_hidden_but_hashed() {
        let id = LogicalId::from_path(&["HereyaS3Bucket", "Resource"]);
        let expected_hash = format!("{:x}", md5::compute("HereyaS3Bucket/Resource"))[..8].to_uppercase();
        assert_eq!(id.as_str(), format!("HereyaS3Bucket{}", expected_hash));
    }

    #[test]
    fn test_default_component_dropped() {
        let with_default =
            LogicalId::from_path(&["HereyaS3Bucket", "AutoDeleteObjectsCustomResource", "Default"]);
        let without = LogicalId::from_path(&["HereyaS3Bucket", "AutoDeleteObjectsCustomResource"]);
        assert_eq!(with_default, without);
        assert!(with_default
            .as_str()
            .starts_with("HereyaS3BucketAutoDeleteObjectsCustomResource"));
    }

    #[test]
    fn test_path_ids_are_stable_and_distinct() {
        let a = LogicalId::from_path(&["Bucket", "Resource"]);
        let b = LogicalId::from_path(&["Bucket", "Resource"]);
        let c = LogicalId::from_path(&["Bucket", "Policy", "Resource"]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.as_str().len(), "Bucket".len() + 8);
    }

    #[test]
    fn test_invalid_logical_ids() {
        assert_eq!(
            LogicalId::new(String::new()),
            Err(ValidationError::EmptyLogicalId)
        );
        assert_eq!(
            LogicalId::new("bad-id".to_string()),
            Err(ValidationError::InvalidLogicalIdCharacter('-'))
        );
    }

    #[test]
    fn test_degenerate_paths_still_valid() {
        let hidden = LogicalId::from_path(&["Default"]);
        assert_eq!(hidden.as_str(), "D41D8CD9");
        assert!(LogicalId::new(hidden.as_str().to_string()).is_ok());

        let symbols = LogicalId::from_path(&["---"]);
        assert_eq!(symbols.as_str().len(), 8);

        let long = LogicalId::from_path(&["a".repeat(300).as_str()]);
        assert_eq!(long.as_str().len(), 248);
    }
}
