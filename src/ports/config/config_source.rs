use crate::domain::models::{
    StackConfig, AUTO_DELETE_HANDLER_ASSET_KEY, AUTO_DELETE_OBJECTS_KEY, NAME_PREFIX_KEY,
};

/// Read-only source of ambient configuration values
pub trait ConfigSource: Send + Sync {
    /// Look up a single value; `None` when unset
    fn var(&self, key: &str) -> Option<String>;

    /// Read the stack flags once into an immutable config
    fn load_stack_config(&self) -> StackConfig {
        StackConfig::from_raw(
            self.var(NAME_PREFIX_KEY),
            self.var(AUTO_DELETE_OBJECTS_KEY).as_deref(),
            self.var(AUTO_DELETE_HANDLER_ASSET_KEY),
        )
    }
}
