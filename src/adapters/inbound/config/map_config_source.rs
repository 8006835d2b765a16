use std::collections::HashMap;

use crate::ports::config::ConfigSource;

/// Fixed in-memory configuration, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MapConfigSource {
    values: HashMap<String, String>,
}

impl MapConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapConfigSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ConfigSource for MapConfigSource {
    fn var(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::DEFAULT_AUTO_DELETE_HANDLER_ASSET_KEY;

    #[test]
    fn test_load_stack_config() {
        let source = MapConfigSource::new()
            .with("namePrefix", "test-prefix")
            .with("autoDeleteObjects", "true");
        let config = source.load_stack_config();

        assert_eq!(config.effective_prefix(), "test-prefix");
        assert!(config.auto_delete_objects);
        assert_eq!(
            config.auto_delete_handler_asset_key,
            DEFAULT_AUTO_DELETE_HANDLER_ASSET_KEY
        );
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let source: MapConfigSource = [("NAMEPREFIX", "other"), ("autodeleteobjects", "true")]
            .into_iter()
            .collect();
        let config = source.load_stack_config();

        assert_eq!(config.effective_prefix(), "hereya");
        assert!(!config.auto_delete_objects);
    }
}
