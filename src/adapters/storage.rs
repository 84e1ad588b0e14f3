use crate::core::DefinitionSource;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Reads definitions from the local filesystem, relative to `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl DefinitionSource for LocalStorage {
    async fn read_definition(&self, path: &str) -> Result<String> {
        let full_path = self.base_path.join(Path::new(path));
        tracing::debug!("Reading {}", full_path.display());
        let content = tokio::fs::read_to_string(full_path).await?;
        Ok(content)
    }
}
