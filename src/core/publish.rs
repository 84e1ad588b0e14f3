use crate::core::definition_parser::DefinitionParser;
use crate::core::{ConfigProvider, DefinitionSource, Publisher};
use crate::domain::model::{ApiCoordinates, DefinitionFileFormat, PublishRequest};
use crate::utils::error::{PublishError, Result};

/// Drives one definition from its source to the publisher.
pub struct PublishEngine<S: DefinitionSource, P: Publisher, C: ConfigProvider> {
    source: S,
    publisher: P,
    config: C,
    parser: DefinitionParser,
}

impl<S: DefinitionSource, P: Publisher, C: ConfigProvider> PublishEngine<S, P, C> {
    pub fn new(source: S, publisher: P, config: C) -> Self {
        Self {
            source,
            publisher,
            config,
            parser: DefinitionParser::new(),
        }
    }

    /// Configured format first, then the file extension.
    pub fn resolve_format(&self) -> Result<DefinitionFileFormat> {
        if let Some(format) = self.config.format() {
            return Ok(format);
        }

        let path = self.config.definition_path();
        DefinitionFileFormat::from_path(path).ok_or_else(|| PublishError::InvalidConfigValueError {
            field: "definition.format".to_string(),
            value: path.to_string(),
            reason: "Cannot infer format from extension; set it to json or yaml".to_string(),
        })
    }

    /// Reads and resolves the definition without publishing it.
    pub async fn plan(&self) -> Result<ApiCoordinates> {
        let (request, _) = self.prepare().await?;
        Ok(request.coordinates)
    }

    pub async fn run(&self) -> Result<String> {
        let (request, format) = self.prepare().await?;

        tracing::info!(
            "Publishing {} definition to {}{}",
            format,
            request.coordinates,
            if request.is_private { " (private)" } else { "" }
        );
        let resource_path = self.publisher.publish(request).await?;
        tracing::info!("Published {}", resource_path);

        Ok(resource_path)
    }

    async fn prepare(&self) -> Result<(PublishRequest, DefinitionFileFormat)> {
        let path = self.config.definition_path();
        let format = self.resolve_format()?;

        tracing::info!("Reading definition from {}", path);
        let definition = self.source.read_definition(path).await?;

        let doc = self.parser.parse(&definition, format)?;
        let coordinates = self.parser.resolve(&doc, self.config.owner())?;
        tracing::info!(
            "Resolved API '{}' version '{}'",
            coordinates.api_id,
            coordinates.version
        );

        let request = PublishRequest {
            coordinates,
            format,
            definition,
            is_private: self.config.is_private(),
        };
        Ok((request, format))
    }
}
