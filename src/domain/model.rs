use crate::utils::error::PublishError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Surface syntax of a definition file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefinitionFileFormat {
    Json,
    #[serde(alias = "yml")]
    Yaml,
}

impl DefinitionFileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Media type used when handing the definition to a publisher.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Yaml => "application/yaml",
        }
    }
}

impl fmt::Display for DefinitionFileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Yaml => write!(f, "YAML"),
        }
    }
}

impl FromStr for DefinitionFileFormat {
    type Err = PublishError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s.trim()).ok_or_else(|| PublishError::InvalidConfigValueError {
            field: "format".to_string(),
            value: s.to_string(),
            reason: "Supported formats: json, yaml".to_string(),
        })
    }
}

/// Where a definition lives in the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCoordinates {
    pub owner: String,
    pub api_id: String,
    pub version: String,
}

impl ApiCoordinates {
    pub fn resource_path(&self) -> String {
        format!("{}/{}/{}", self.owner, self.api_id, self.version)
    }
}

impl fmt::Display for ApiCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resource_path())
    }
}

#[derive(Debug, Clone)]
pub struct PublishRequest {
    pub coordinates: ApiCoordinates,
    pub format: DefinitionFileFormat,
    /// Source text exactly as it was read.
    pub definition: String,
    pub is_private: bool,
}
