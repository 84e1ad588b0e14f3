use crate::domain::model::DefinitionFileFormat;
use thiserror::Error;

/// Failures raised while turning definition text into API coordinates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionParsingError {
    #[error("Malformed {format} definition: {message}")]
    MalformedInput {
        format: DefinitionFileFormat,
        message: String,
    },

    #[error("Definition is missing required field '{field}'")]
    MissingField { field: String },
}

impl DefinitionParsingError {
    pub fn malformed(format: DefinitionFileFormat, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            format,
            message: message.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }

    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }

    /// Dotted path of the missing field, if this is a `MissingField` error.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field } => Some(field),
            Self::MalformedInput { .. } => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum PublishError {
    #[error(transparent)]
    Definition(#[from] DefinitionParsingError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration '{field}'")]
    MissingConfigError { field: String },

    #[error("Publish failed: {message}")]
    PublishFailed { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Definition,
    Configuration,
    Io,
    Publish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PublishError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PublishError::Definition(_) => ErrorCategory::Definition,
            PublishError::IoError(_) => ErrorCategory::Io,
            PublishError::ConfigValidationError { .. }
            | PublishError::InvalidConfigValueError { .. }
            | PublishError::MissingConfigError { .. } => ErrorCategory::Configuration,
            PublishError::PublishFailed { .. } => ErrorCategory::Publish,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Publish => ErrorSeverity::Medium,
            ErrorCategory::Definition | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PublishError::Definition(DefinitionParsingError::MalformedInput { format, .. }) => {
                format!(
                    "Check that the definition is valid {} or pass the correct --format",
                    format
                )
            }
            PublishError::Definition(DefinitionParsingError::MissingField { field }) => {
                format!("Add a '{}' entry to the definition", field)
            }
            PublishError::IoError(_) => {
                "Make sure the definition file exists and is readable".to_string()
            }
            PublishError::ConfigValidationError { field, .. }
            | PublishError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting in the config file or CLI flags", field)
            }
            PublishError::MissingConfigError { field } => {
                format!("Provide '{}' in the config file or on the command line", field)
            }
            PublishError::PublishFailed { .. } => {
                "Retry later or inspect the publisher output".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PublishError::Definition(e) => format!("Could not read the API definition: {}", e),
            PublishError::IoError(e) => format!("Could not access the definition file: {}", e),
            PublishError::ConfigValidationError { .. }
            | PublishError::InvalidConfigValueError { .. }
            | PublishError::MissingConfigError { .. } => format!("Invalid configuration: {}", self),
            PublishError::PublishFailed { message } => {
                format!("The definition could not be published: {}", message)
            }
        }
    }

    /// Process exit code for this error when it terminates the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, PublishError>;
