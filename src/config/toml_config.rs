use crate::core::{ConfigProvider, DefinitionFileFormat};
use crate::utils::error::{PublishError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_HOST: &str = "https://api.swaggerhub.com";

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishConfig {
    pub swaggerhub: SwaggerHubConfig,
    pub definition: DefinitionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwaggerHubConfig {
    pub owner: String,
    pub host: Option<String>,
    pub is_private: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionConfig {
    pub path: String,
    pub format: Option<DefinitionFileFormat>,
}

impl PublishConfig {
    pub fn new(owner: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            swaggerhub: SwaggerHubConfig {
                owner: owner.into(),
                host: None,
                is_private: None,
            },
            definition: DefinitionConfig {
                path: path.into(),
                format: None,
            },
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PublishError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${NAME}` with the value of the environment variable; unset
    /// variables are left untouched.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("swaggerhub.owner", &self.swaggerhub.owner)?;
        validation::validate_url("swaggerhub.host", self.host())?;
        validation::validate_path("definition.path", &self.definition.path)?;

        // Without an explicit format the extension is the only hint we get.
        if self.definition.format.is_none() {
            validation::validate_file_extensions(
                "definition.path",
                &[self.definition.path.as_str()],
                &["json", "yaml", "yml"],
            )?;
        }

        Ok(())
    }

    pub fn host(&self) -> &str {
        self.swaggerhub.host.as_deref().unwrap_or(DEFAULT_HOST)
    }
}

impl ConfigProvider for PublishConfig {
    fn owner(&self) -> &str {
        &self.swaggerhub.owner
    }

    fn definition_path(&self) -> &str {
        &self.definition.path
    }

    fn format(&self) -> Option<DefinitionFileFormat> {
        self.definition.format
    }

    fn is_private(&self) -> bool {
        self.swaggerhub.is_private.unwrap_or(false)
    }
}

impl Validate for PublishConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[swaggerhub]
owner = "acme"
is_private = true

[definition]
path = "api/petstore.yaml"
"#;

        let config = PublishConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.owner(), "acme");
        assert_eq!(config.host(), DEFAULT_HOST);
        assert!(config.is_private());
        assert_eq!(config.definition_path(), "api/petstore.yaml");
        assert_eq!(config.format(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_explicit_format() {
        let toml_content = r#"
[swaggerhub]
owner = "acme"
host = "http://localhost:8080"

[definition]
path = "api/petstore.txt"
format = "yml"
"#;

        let config = PublishConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.format(), Some(DefinitionFileFormat::Yaml));
        assert!(!config.is_private());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SWAGGERHUB_PUBLISH_TEST_OWNER", "env-owner");

        let toml_content = r#"
[swaggerhub]
owner = "${SWAGGERHUB_PUBLISH_TEST_OWNER}"

[definition]
path = "${SWAGGERHUB_PUBLISH_UNSET_VAR}.json"
"#;

        let config = PublishConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.owner(), "env-owner");
        assert_eq!(config.definition_path(), "${SWAGGERHUB_PUBLISH_UNSET_VAR}.json");

        std::env::remove_var("SWAGGERHUB_PUBLISH_TEST_OWNER");
    }

    #[test]
    fn test_config_validation() {
        let mut config = PublishConfig::new("acme", "petstore.json");
        assert!(config.validate().is_ok());

        config.swaggerhub.host = Some("invalid-url".to_string());
        assert!(config.validate().is_err());

        let config = PublishConfig::new(" ", "petstore.json");
        assert!(config.validate().is_err());

        let config = PublishConfig::new("acme", "petstore.txt");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = PublishConfig::from_toml_str("[swaggerhub\nowner=").unwrap_err();
        assert!(matches!(err, PublishError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[swaggerhub]
owner = "file-owner"

[definition]
path = "petstore.json"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = PublishConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.owner(), "file-owner");
    }
}
