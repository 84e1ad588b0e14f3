use crate::domain::model::{DefinitionFileFormat, PublishRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait DefinitionSource: Send + Sync {
    fn read_definition(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn owner(&self) -> &str;
    fn definition_path(&self) -> &str;
    fn format(&self) -> Option<DefinitionFileFormat>;
    fn is_private(&self) -> bool;
}

/// Hands a resolved definition to the remote catalog and returns the
/// resource path it was stored under.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, request: PublishRequest) -> Result<String>;
}
