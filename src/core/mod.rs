pub mod definition_parser;
pub mod document;
pub mod publish;

pub use crate::domain::model::{ApiCoordinates, DefinitionFileFormat, PublishRequest};
pub use crate::domain::ports::{ConfigProvider, DefinitionSource, Publisher};
pub use crate::utils::error::Result;
