use crate::core::{PublishRequest, Publisher};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Publisher that only reports where a definition would go.
///
/// Used when no remote catalog client is wired in by the host.
#[derive(Debug, Clone, Default)]
pub struct DryRunPublisher {
    host: Option<String>,
}

impl DryRunPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(host: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
        }
    }

    /// Full location of the resource on the configured host, if one is set.
    pub fn target_url(&self, resource_path: &str) -> Option<String> {
        self.host
            .as_ref()
            .map(|host| format!("{}/apis/{}", host.trim_end_matches('/'), resource_path))
    }
}

#[async_trait]
impl Publisher for DryRunPublisher {
    async fn publish(&self, request: PublishRequest) -> Result<String> {
        let resource_path = request.coordinates.resource_path();
        tracing::info!(
            destination = self.target_url(&resource_path).as_deref().unwrap_or(&resource_path),
            content_type = request.format.content_type(),
            bytes = request.definition.len(),
            private = request.is_private,
            "Dry run: definition not uploaded"
        );
        Ok(resource_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ApiCoordinates, DefinitionFileFormat};

    fn request() -> PublishRequest {
        PublishRequest {
            coordinates: ApiCoordinates {
                owner: "acme".to_string(),
                api_id: "Pet_Store".to_string(),
                version: "1.0.0".to_string(),
            },
            format: DefinitionFileFormat::Json,
            definition: "{}".to_string(),
            is_private: false,
        }
    }

    #[test]
    fn test_dry_run_returns_resource_path() {
        let publisher = DryRunPublisher::new();
        let path = tokio_test::block_on(publisher.publish(request())).unwrap();
        assert_eq!(path, "acme/Pet_Store/1.0.0");
    }

    #[test]
    fn test_target_url_joins_host() {
        let publisher = DryRunPublisher::with_host("https://api.swaggerhub.com/");
        assert_eq!(
            publisher.target_url("acme/Pet_Store/1.0.0").as_deref(),
            Some("https://api.swaggerhub.com/apis/acme/Pet_Store/1.0.0")
        );
        assert_eq!(DryRunPublisher::new().target_url("a/b/c"), None);
    }
}
