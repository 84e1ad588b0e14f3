use crate::config::toml_config::PublishConfig;
use crate::core::DefinitionFileFormat;
use crate::utils::error::{PublishError, Result};
use crate::utils::validation::validate_required_field;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "swaggerhub-publish")]
#[command(about = "Publish an API definition to SwaggerHub")]
pub struct CliConfig {
    /// Path to the JSON or YAML definition file
    #[arg(short, long)]
    pub definition: Option<String>,

    /// SwaggerHub owner (user or organization)
    #[arg(short, long)]
    pub owner: Option<String>,

    /// Definition format; inferred from the file extension when omitted
    #[arg(short, long)]
    pub format: Option<DefinitionFileFormat>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// SwaggerHub host URL
    #[arg(long)]
    pub host: Option<String>,

    /// Publish as a private API
    #[arg(long)]
    pub private: bool,

    /// Resolve the definition and print its target without publishing
    #[arg(long)]
    pub dry_run: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the TOML file if one was given and applies the flags on top.
    pub fn to_publish_config(&self) -> Result<PublishConfig> {
        let mut config = match &self.config {
            Some(path) => PublishConfig::from_file(path).map_err(|e| match e {
                PublishError::IoError(io) => PublishError::ConfigValidationError {
                    field: "config".to_string(),
                    message: format!("Failed to read '{}': {}", path, io),
                },
                other => other,
            })?,
            None => PublishConfig::new(
                validate_required_field("owner", &self.owner)?.clone(),
                validate_required_field("definition", &self.definition)?.clone(),
            ),
        };

        if let Some(owner) = &self.owner {
            config.swaggerhub.owner = owner.clone();
        }
        if let Some(definition) = &self.definition {
            config.definition.path = definition.clone();
        }
        if let Some(format) = self.format {
            config.definition.format = Some(format);
        }
        if let Some(host) = &self.host {
            config.swaggerhub.host = Some(host.clone());
        }
        if self.private {
            config.swaggerhub.is_private = Some(true);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_flags_only() {
        let cli = CliConfig::parse_from([
            "swaggerhub-publish",
            "--definition",
            "petstore.yml",
            "--owner",
            "acme",
            "--private",
        ]);
        let config = cli.to_publish_config().unwrap();
        assert_eq!(config.owner(), "acme");
        assert_eq!(config.definition_path(), "petstore.yml");
        assert!(config.is_private());
    }

    #[test]
    fn test_missing_owner_without_config_file() {
        let cli = CliConfig::parse_from(["swaggerhub-publish", "--definition", "petstore.yml"]);
        let err = cli.to_publish_config().unwrap_err();
        assert!(matches!(err, PublishError::MissingConfigError { ref field } if field == "owner"));
    }

    #[test]
    fn test_format_flag_parses() {
        let cli = CliConfig::parse_from(["swaggerhub-publish", "-f", "yaml"]);
        assert_eq!(cli.format, Some(DefinitionFileFormat::Yaml));
        assert!(CliConfig::try_parse_from(["swaggerhub-publish", "-f", "xml"]).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[swaggerhub]\nowner = \"from-file\"\n\n[definition]\npath = \"a.json\"\n")
            .unwrap();
        let config_path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "swaggerhub-publish",
            "--config",
            config_path.as_str(),
            "--owner",
            "from-flag",
            "--format",
            "json",
        ]);
        let config = cli.to_publish_config().unwrap();
        assert_eq!(config.owner(), "from-flag");
        assert_eq!(config.definition_path(), "a.json");
        assert_eq!(config.format(), Some(DefinitionFileFormat::Json));
    }

    #[test]
    fn test_unreadable_config_file() {
        let cli = CliConfig::parse_from(["swaggerhub-publish", "--config", "/nonexistent/publish.toml"]);
        let err = cli.to_publish_config().unwrap_err();
        assert!(matches!(err, PublishError::ConfigValidationError { .. }));
    }
}
