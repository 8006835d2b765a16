use crate::domain::{
    errors::AssemblyResult,
    models::{AssemblyManifest, CloudFormationTemplate},
};
use async_trait::async_trait;

/// Storage port for synthesized cloud assemblies
#[async_trait]
pub trait AssemblyWriter: Send + Sync + 'static {
    /// Write a template under the given file name
    async fn write_template(
        &self,
        file_name: &str,
        template: &CloudFormationTemplate,
    ) -> AssemblyResult<()>;

    /// Write (replace) the assembly manifest
    async fn write_manifest(&self, manifest: &AssemblyManifest) -> AssemblyResult<()>;

    /// Read the manifest back
    async fn read_manifest(&self) -> AssemblyResult<AssemblyManifest>;

    /// Read a written template back as raw JSON
    async fn read_template(&self, file_name: &str) -> AssemblyResult<serde_json::Value>;

    /// Human readable location of the assembly, for logs
    fn location(&self) -> String;
}
