use bon::Builder;

/// Prefix used when `namePrefix` is unset or empty
pub const DEFAULT_NAME_PREFIX: &str = "hereya";

/// Object key of the auto-delete handler bundle in the bootstrap assets bucket
pub const DEFAULT_AUTO_DELETE_HANDLER_ASSET_KEY: &str = "auto-delete-objects-handler.zip";

/// Ambient configuration key for the bucket name prefix
pub const NAME_PREFIX_KEY: &str = "namePrefix";

/// Ambient configuration key for the auto-delete flag
pub const AUTO_DELETE_OBJECTS_KEY: &str = "autoDeleteObjects";

/// Ambient configuration key for the auto-delete handler asset
pub const AUTO_DELETE_HANDLER_ASSET_KEY: &str = "autoDeleteHandlerAssetKey";

/// Configuration for a single stack construction, read once and immutable after
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct StackConfig {
    /// Raw bucket name prefix; empty counts as unset
    #[builder(into)]
    pub name_prefix: Option<String>,

    /// Empty the bucket and delete it when the stack is destroyed
    #[builder(default)]
    pub auto_delete_objects: bool,

    #[builder(into, default = DEFAULT_AUTO_DELETE_HANDLER_ASSET_KEY.to_string())]
    pub auto_delete_handler_asset_key: String,
}

impl StackConfig {
    /// Build a config from raw ambient values.
    ///
    /// Only the exact string `"true"` turns auto-delete on.
    pub fn from_raw(
        name_prefix: Option<String>,
        auto_delete_objects: Option<&str>,
        auto_delete_handler_asset_key: Option<String>,
    ) -> Self {
        Self {
            name_prefix,
            auto_delete_objects: auto_delete_objects == Some("true"),
            auto_delete_handler_asset_key: auto_delete_handler_asset_key
                .filter(|key| !key.is_empty())
                .unwrap_or_else(|| DEFAULT_AUTO_DELETE_HANDLER_ASSET_KEY.to_string()),
        }
    }

    /// The prefix actually used for bucket names
    pub fn effective_prefix(&self) -> &str {
        match self.name_prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => prefix,
            _ => DEFAULT_NAME_PREFIX,
        }
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefix() {
        assert_eq!(StackConfig::default().effective_prefix(), "hereya");

        let empty = StackConfig::builder().name_prefix("").build();
        assert_eq!(empty.effective_prefix(), "hereya");

        let custom = StackConfig::builder().name_prefix("test-prefix").build();
        assert_eq!(custom.effective_prefix(), "test-prefix");
    }

    #[test]
    fn test_auto_delete_requires_exact_true() {
        assert!(StackConfig::from_raw(None, Some("true"), None).auto_delete_objects);
        assert!(!StackConfig::from_raw(None, Some("TRUE"), None).auto_delete_objects);
        assert!(!StackConfig::from_raw(None, Some("1"), None).auto_delete_objects);
        assert!(!StackConfig::from_raw(None, Some(""), None).auto_delete_objects);
        assert!(!StackConfig::from_raw(None, None, None).auto_delete_objects);
    }

    #[test]
    fn test_handler_asset_key_default() {
        let config = StackConfig::from_raw(None, None, Some(String::new()));
        assert_eq!(
            config.auto_delete_handler_asset_key,
            DEFAULT_AUTO_DELETE_HANDLER_ASSET_KEY
        );
        assert_eq!(StackConfig::default(), config);
    }
}
