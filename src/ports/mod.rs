pub mod assembly;
pub mod config;
pub mod services;

// Re-export all port traits for convenience
pub use assembly::AssemblyWriter;
pub use config::ConfigSource;
pub use services::{StackService, SynthesisService};
