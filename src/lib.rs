pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::PublishConfig;

pub use adapters::{DryRunPublisher, LocalStorage};
pub use core::{
    definition_parser::DefinitionParser, document::StructuredDocument, publish::PublishEngine,
};
pub use domain::model::{ApiCoordinates, DefinitionFileFormat, PublishRequest};
pub use utils::error::{DefinitionParsingError, PublishError, Result};
