pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - stack declaration model and value objects
pub use domain::{
    AssemblyError,
    AssemblyManifest,
    BucketDescriptor,
    BucketEncryption,
    // Value objects
    BucketName,
    CloudFormationTemplate,
    Expr,
    LogicalId,
    OutputSet,
    PolicyDocument,
    PolicyStatement,
    PublicAccessBlock,
    RemovalPolicy,
    // Models
    StackConfig,
    StackDeclaration,
    StackEnvironment,
    StackName,
    StackOutput,
    // Errors
    SynthError,
    ValidationError,
};

// Port types - interfaces for external systems
pub use ports::{AssemblyWriter, ConfigSource, StackService, SynthesisService};

// Service implementations - stack declaration and synthesis
pub use services::{BucketStackTemplate, TemplateSynthesizer};

// Application factory and configuration
pub use app::{
    create_app_from_env, create_filesystem_app, create_in_memory_app, AppBuilder, AppConfig,
    AppDependencies, AppError, AppServices, AssemblyBackend, SynthesizedStack,
    DEFAULT_OUT_DIR, DEFAULT_STACK_NAME,
};

// Adapter types - infrastructure implementations
pub use adapters::{
    inbound::config::{EnvConfigSource, MapConfigSource},
    outbound::assembly::{FileSystemAssemblyWriter, InMemoryAssemblyWriter},
};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        create_in_memory_app, AppBuilder, AppServices, BucketStackTemplate, ConfigSource,
        EnvConfigSource, MapConfigSource, StackConfig, StackEnvironment, StackName,
        StackService, SynthesisService, TemplateSynthesizer,
    };
}
