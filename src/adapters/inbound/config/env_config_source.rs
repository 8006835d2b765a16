use crate::ports::config::ConfigSource;

/// Reads configuration from the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfigSource;

impl EnvConfigSource {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigSource for EnvConfigSource {
    fn var(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values count as unset
        std::env::var(key).ok()
    }
}
