#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::{DefinitionConfig, PublishConfig, SwaggerHubConfig, DEFAULT_HOST};
