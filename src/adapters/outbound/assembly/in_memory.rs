use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    domain::{
        errors::{AssemblyError, AssemblyResult},
        models::{AssemblyManifest, CloudFormationTemplate},
    },
    ports::assembly::AssemblyWriter,
};

/// In-memory implementation of AssemblyWriter for testing and development
#[derive(Clone, Default)]
pub struct InMemoryAssemblyWriter {
    data: Arc<RwLock<AssemblyData>>,
}

#[derive(Default)]
struct AssemblyData {
    // Map of template file name -> rendered template
    templates: HashMap<String, serde_json::Value>,
    manifest: Option<AssemblyManifest>,
}

impl InMemoryAssemblyWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of all templates written so far
    pub async fn template_files(&self) -> Vec<String> {
        let data = self.data.read().await;
        let mut names: Vec<String> = data.templates.keys().cloned().collect();
        names.sort();
        names
    }
}

#[async_trait]
impl AssemblyWriter for InMemoryAssemblyWriter {
    async fn write_template(
        &self,
        file_name: &str,
        template: &CloudFormationTemplate,
    ) -> AssemblyResult<()> {
        let value = serde_json::to_value(template)?;
        let mut data = self.data.write().await;
        data.templates.insert(file_name.to_string(), value);
        Ok(())
    }

    async fn write_manifest(&self, manifest: &AssemblyManifest) -> AssemblyResult<()> {
        let mut data = self.data.write().await;
        data.manifest = Some(manifest.clone());
        Ok(())
    }

    async fn read_manifest(&self) -> AssemblyResult<AssemblyManifest> {
        let data = self.data.read().await;
        data.manifest
            .clone()
            .ok_or_else(|| AssemblyError::ArtifactNotFound {
                name: super::MANIFEST_FILE.to_string(),
            })
    }

    async fn read_template(&self, file_name: &str) -> AssemblyResult<serde_json::Value> {
        let data = self.data.read().await;
        data.templates
            .get(file_name)
            .cloned()
            .ok_or_else(|| AssemblyError::ArtifactNotFound {
                name: file_name.to_string(),
            })
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_artifacts() {
        let writer = InMemoryAssemblyWriter::new();

        assert!(matches!(
            writer.read_manifest().await,
            Err(AssemblyError::ArtifactNotFound { .. })
        ));
        assert!(matches!(
            writer.read_template("Stack.template.json").await,
            Err(AssemblyError::ArtifactNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_write_and_read_back() {
        let writer = InMemoryAssemblyWriter::new();
        let template = CloudFormationTemplate::new(None);
        writer
            .write_template("Stack.template.json", &template)
            .await
            .unwrap();

        let mut manifest = AssemblyManifest::new();
        manifest.add_stack("Stack", "aws://unknown-account/unknown-region".to_string());
        writer.write_manifest(&manifest).await.unwrap();

        assert_eq!(writer.read_manifest().await.unwrap(), manifest);
        assert_eq!(
            writer.read_template("Stack.template.json").await.unwrap()["AWSTemplateFormatVersion"],
            "2010-09-09"
        );
        assert_eq!(writer.template_files().await, vec!["Stack.template.json"]);
    }
}
