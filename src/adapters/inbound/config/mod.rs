pub mod env_config_source;
pub mod map_config_source;

pub use env_config_source::EnvConfigSource;
pub use map_config_source::MapConfigSource;
