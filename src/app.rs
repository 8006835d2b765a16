use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::{
    adapters::{
        inbound::config::EnvConfigSource,
        outbound::assembly::{FileSystemAssemblyWriter, InMemoryAssemblyWriter},
    },
    domain::{
        errors::{AssemblyError, SynthError},
        models::{AssemblyManifest, CloudFormationTemplate, StackDeclaration, StackEnvironment},
        value_objects::StackName,
    },
    ports::{
        assembly::AssemblyWriter,
        config::ConfigSource,
        services::{StackService, SynthesisService},
    },
    services::{BucketStackTemplate, TemplateSynthesizer},
};

/// Stack name used when none is given
pub const DEFAULT_STACK_NAME: &str = "HereyaAwsS3BucketStack";

/// Cloud assembly directory used when none is given
pub const DEFAULT_OUT_DIR: &str = "cdk.out";

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub assembly_backend: AssemblyBackend,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assembly_backend: AssemblyBackend::InMemory,
        }
    }
}

/// Where synthesized assemblies are written
#[derive(Debug, Clone)]
pub enum AssemblyBackend {
    InMemory,
    FileSystem { out_dir: PathBuf },
}

/// Application dependencies container
pub struct AppDependencies {
    pub config_source: Arc<dyn ConfigSource>,
    pub assembly_writer: Arc<dyn AssemblyWriter>,
}

/// Result of synthesizing one stack into the assembly
#[derive(Debug, Clone)]
pub struct SynthesizedStack {
    pub declaration: StackDeclaration,
    pub template: CloudFormationTemplate,
    pub template_file: String,
}

/// Application services container; the scope stacks are constructed in
pub struct AppServices {
    pub stack_service: BucketStackTemplate,
    pub synthesis_service: TemplateSynthesizer,
    pub config_source: Arc<dyn ConfigSource>,
    pub assembly_writer: Arc<dyn AssemblyWriter>,
}

impl AppServices {
    /// Declare a stack, reading the ambient configuration once for this call
    pub fn construct(
        &self,
        stack_name: StackName,
        environment: StackEnvironment,
    ) -> StackDeclaration {
        let config = self.config_source.load_stack_config();
        self.stack_service
            .construct(stack_name, environment, &config)
    }

    /// Declare and synthesize a stack without writing anything
    pub fn synthesize(
        &self,
        stack_name: StackName,
        environment: StackEnvironment,
    ) -> Result<(StackDeclaration, CloudFormationTemplate), AppError> {
        let declaration = self.construct(stack_name, environment);
        let template = self.synthesis_service.synthesize(&declaration)?;
        Ok((declaration, template))
    }

    /// Synthesize a stack and write its template and the manifest
    pub async fn synth_stack(
        &self,
        stack_name: StackName,
        environment: StackEnvironment,
    ) -> Result<SynthesizedStack, AppError> {
        let (declaration, template) = self.synthesize(stack_name, environment)?;

        let mut manifest = AssemblyManifest::new();
        let template_file = manifest.add_stack(
            declaration.stack_name.as_str(),
            declaration.environment.to_uri(),
        );

        self.assembly_writer
            .write_template(&template_file, &template)
            .await?;
        self.assembly_writer.write_manifest(&manifest).await?;

        info!(
            stack = %declaration.stack_name,
            bucket = %declaration.bucket.name,
            location = %self.assembly_writer.location(),
            "wrote cloud assembly"
        );

        Ok(SynthesizedStack {
            declaration,
            template,
            template_file,
        })
    }
}

/// Application builder for dependency injection
pub struct AppBuilder {
    config: AppConfig,
    config_source: Option<Arc<dyn ConfigSource>>,
}

impl AppBuilder {
    /// Create a new application builder
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            config_source: None,
        }
    }

    /// Configure the application with custom settings
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Configure assembly backend
    pub fn with_assembly_backend(mut self, backend: AssemblyBackend) -> Self {
        self.config.assembly_backend = backend;
        self
    }

    /// Read stack flags from this source instead of the process environment
    pub fn with_config_source(mut self, source: Arc<dyn ConfigSource>) -> Self {
        self.config_source = Some(source);
        self
    }

    /// Build the application dependencies
    pub async fn build_dependencies(self) -> Result<AppDependencies, AppError> {
        let assembly_writer = self.create_assembly_writer().await?;
        let config_source = self
            .config_source
            .unwrap_or_else(|| Arc::new(EnvConfigSource::new()));

        Ok(AppDependencies {
            config_source,
            assembly_writer,
        })
    }

    /// Build the complete application with services
    pub async fn build(self) -> Result<AppServices, AppError> {
        let deps = self.build_dependencies().await?;

        Ok(AppServices {
            stack_service: BucketStackTemplate::new(),
            synthesis_service: TemplateSynthesizer::new(),
            config_source: deps.config_source,
            assembly_writer: deps.assembly_writer,
        })
    }

    /// Create the assembly writer based on configuration
    async fn create_assembly_writer(&self) -> Result<Arc<dyn AssemblyWriter>, AppError> {
        match &self.config.assembly_backend {
            AssemblyBackend::InMemory => Ok(Arc::new(InMemoryAssemblyWriter::new())),
            AssemblyBackend::FileSystem { out_dir } => {
                tokio::fs::create_dir_all(out_dir)
                    .await
                    .map_err(|e| AppError::AssemblyInit {
                        message: format!("cannot create {}: {}", out_dir.display(), e),
                    })?;
                Ok(Arc::new(FileSystemAssemblyWriter::new(out_dir.clone())))
            }
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Assembly initialization error: {message}")]
    AssemblyInit { message: String },

    #[error(transparent)]
    Synthesis(#[from] SynthError),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),
}

/// Convenience functions for common configurations
///
/// Create an in-memory application reading flags from the given source
pub async fn create_in_memory_app(
    config_source: Arc<dyn ConfigSource>,
) -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_assembly_backend(AssemblyBackend::InMemory)
        .with_config_source(config_source)
        .build()
        .await
}

/// Create an application writing to `out_dir`
pub async fn create_filesystem_app(
    out_dir: impl Into<PathBuf>,
    config_source: Arc<dyn ConfigSource>,
) -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_assembly_backend(AssemblyBackend::FileSystem {
            out_dir: out_dir.into(),
        })
        .with_config_source(config_source)
        .build()
        .await
}

/// Create application from environment variables
pub async fn create_app_from_env() -> Result<AppServices, AppError> {
    let out_dir = match std::env::var("CDK_OUTDIR") {
        Ok(dir) if dir.is_empty() => {
            return Err(AppError::Configuration {
                message: "CDK_OUTDIR must not be empty".to_string(),
            })
        }
        Ok(dir) => PathBuf::from(dir),
        Err(_) => PathBuf::from(DEFAULT_OUT_DIR),
    };

    AppBuilder::new()
        .with_assembly_backend(AssemblyBackend::FileSystem { out_dir })
        .build()
        .await
}
