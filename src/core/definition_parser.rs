use crate::core::document::{self, StructuredDocument, TITLE, VERSION};
use crate::domain::model::{ApiCoordinates, DefinitionFileFormat};
use crate::utils::error::DefinitionParsingError;
use regex::Regex;
use std::sync::LazyLock;

// Anything outside [A-Za-z0-9_] separates the words of an API identifier.
static DISALLOWED_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("identifier pattern is valid"));

/// Turns definition text into a document and reads the catalog identity out of it.
///
/// The parser holds no state; every call works only on its arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefinitionParser;

impl DefinitionParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses `text` with the grammar selected by `format`.
    ///
    /// Only syntax is checked here. A document without an `info` section
    /// parses fine and fails later, at extraction.
    pub fn parse(
        &self,
        text: &str,
        format: DefinitionFileFormat,
    ) -> Result<StructuredDocument, DefinitionParsingError> {
        if text.trim().is_empty() {
            return Err(DefinitionParsingError::malformed(
                format,
                "definition is empty",
            ));
        }

        tracing::debug!("Parsing {} definition ({} bytes)", format, text.len());

        let doc = match format {
            DefinitionFileFormat::Json => serde_json::from_str::<StructuredDocument>(text)
                .map_err(|e| DefinitionParsingError::malformed(format, e.to_string()))?,
            DefinitionFileFormat::Yaml => serde_yaml::from_str::<StructuredDocument>(text)
                .map_err(|e| DefinitionParsingError::malformed(format, e.to_string()))?,
        };

        Ok(doc)
    }

    /// Derives the catalog identifier from `info.title`.
    ///
    /// Runs of characters outside `[A-Za-z0-9_]` become a single `_`; runs
    /// at either end of the title are dropped.
    pub fn extract_api_id(
        &self,
        doc: &StructuredDocument,
    ) -> Result<String, DefinitionParsingError> {
        let title = document::require_info_string(doc, TITLE)?;
        let api_id = sanitize_title(title);

        if api_id.is_empty() {
            tracing::debug!("Title '{}' has no identifier characters", title);
            return Err(DefinitionParsingError::missing("info.title"));
        }

        tracing::debug!("Resolved API id '{}' from title '{}'", api_id, title);
        Ok(api_id)
    }

    /// Returns `info.version` exactly as written.
    pub fn extract_version(
        &self,
        doc: &StructuredDocument,
    ) -> Result<String, DefinitionParsingError> {
        let version = document::require_info_string(doc, VERSION)?;
        tracing::debug!("Resolved API version '{}'", version);
        Ok(version.to_string())
    }

    pub fn resolve(
        &self,
        doc: &StructuredDocument,
        owner: &str,
    ) -> Result<ApiCoordinates, DefinitionParsingError> {
        Ok(ApiCoordinates {
            owner: owner.to_string(),
            api_id: self.extract_api_id(doc)?,
            version: self.extract_version(doc)?,
        })
    }
}

fn sanitize_title(title: &str) -> String {
    DISALLOWED_RUN
        .split(title)
        .filter(|run| !run.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}
