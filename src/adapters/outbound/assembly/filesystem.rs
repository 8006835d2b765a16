use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{FsError, MANIFEST_FILE};
use crate::{
    domain::{
        errors::AssemblyResult,
        models::{AssemblyManifest, CloudFormationTemplate},
    },
    ports::assembly::AssemblyWriter,
};

/// Writes the cloud assembly into a directory, creating it on first write
#[derive(Debug, Clone)]
pub struct FileSystemAssemblyWriter {
    out_dir: PathBuf,
}

impl FileSystemAssemblyWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    async fn write_json(&self, file_name: &str, contents: String) -> Result<(), FsError> {
        tokio::fs::create_dir_all(&self.out_dir)
            .await
            .map_err(|e| FsError::write(&self.out_dir, e))?;

        let path = self.out_dir.join(file_name);
        tokio::fs::write(&path, contents)
            .await
            .map_err(|e| FsError::write(&path, e))?;

        debug!(path = %path.display(), "wrote assembly file");
        Ok(())
    }

    async fn read_json<T: serde::de::DeserializeOwned>(&self, file_name: &str) -> Result<T, FsError> {
        let path = self.out_dir.join(file_name);
        let contents = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| FsError::read(&path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[async_trait]
impl AssemblyWriter for FileSystemAssemblyWriter {
    async fn write_template(
        &self,
        file_name: &str,
        template: &CloudFormationTemplate,
    ) -> AssemblyResult<()> {
        let contents = template.to_json_pretty().map_err(FsError::from)?;
        Ok(self.write_json(file_name, contents).await?)
    }

    async fn write_manifest(&self, manifest: &AssemblyManifest) -> AssemblyResult<()> {
        let contents = serde_json::to_string_pretty(manifest).map_err(FsError::from)?;
        Ok(self.write_json(MANIFEST_FILE, contents).await?)
    }

    async fn read_manifest(&self) -> AssemblyResult<AssemblyManifest> {
        Ok(self.read_json(MANIFEST_FILE).await?)
    }

    async fn read_template(&self, file_name: &str) -> AssemblyResult<serde_json::Value> {
        Ok(self.read_json(file_name).await?)
    }

    fn location(&self) -> String {
        self.out_dir.display().to_string()
    }
}
