//! Typed lookups over a parsed definition tree.
//!
//! A definition is held as a [`serde_json::Value`] regardless of whether it
//! was written in JSON or YAML. None of the accessors here panic on a type
//! mismatch: a field that is present but has the wrong shape is treated the
//! same as a field that is absent.

use crate::utils::error::DefinitionParsingError;
use serde_json::{Map, Value};

/// Parsed definition tree. Objects keep their keys in source order.
pub type StructuredDocument = Value;

pub const INFO: &str = "info";
pub const TITLE: &str = "title";
pub const VERSION: &str = "version";

pub fn object_field<'a>(value: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    value.get(key).and_then(Value::as_object)
}

pub fn string_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

pub fn require_info(doc: &StructuredDocument) -> Result<&Map<String, Value>, DefinitionParsingError> {
    object_field(doc, INFO).ok_or_else(|| DefinitionParsingError::missing(INFO))
}

/// Looks up `info.<key>` and requires it to be a string.
pub fn require_info_string<'a>(
    doc: &'a StructuredDocument,
    key: &str,
) -> Result<&'a str, DefinitionParsingError> {
    let info = require_info(doc)?;
    info.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| DefinitionParsingError::missing(format!("{}.{}", INFO, key)))
}
