// Infrastructure error types
pub mod error;

// Assembly writer implementations
pub mod filesystem;
pub mod in_memory;

// Re-export key types
pub use error::FsError;
pub use filesystem::FileSystemAssemblyWriter;
pub use in_memory::InMemoryAssemblyWriter;

/// File name of the assembly manifest
pub const MANIFEST_FILE: &str = "manifest.json";
