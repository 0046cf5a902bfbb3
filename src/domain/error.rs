use std::io;

use thiserror::Error;

use crate::domain::LifecycleState;

/// Library-wide error type for travelcine operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A required poster field was left empty.
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// A `--stop` value could not be split into name and date.
    #[error("Invalid stop '{0}': expected NAME@YYYY-MM-DD")]
    InvalidStop(String),

    /// A date value is not a calendar date.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// More stops were supplied than a poster holds.
    #[error("A poster holds exactly 3 stops, got {0}")]
    TooManyStops(usize),

    /// Malformed `data:` URI.
    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    /// Reference file is not an image.
    #[error("Unsupported reference image '{0}': expected an image file")]
    UnsupportedImageType(String),

    /// Passcode did not match.
    #[error("Incorrect passcode")]
    AccessDenied,

    /// Template editor operation attempted before unlocking.
    #[error("Template editor is locked. Enter the passcode first.")]
    EditorLocked,

    /// Prompt text cannot be changed in the current lifecycle state.
    #[error("Prompt cannot be edited while {0}")]
    PromptNotEditable(LifecycleState),

    /// A generation request is already outstanding.
    #[error("A poster is already being generated")]
    GenerationInProgress,

    /// User-facing generation failure.
    #[error("{0}")]
    GenerationFailed(&'static str),

    /// Image API returned a non-success status.
    #[error("Image API error ({status}): {details}")]
    Api { status: u16, details: String },

    /// Transport-level HTTP failure.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Image API answered without an inline image.
    #[error("No image generated")]
    NoImageGenerated,

    /// System clipboard unavailable or rejected the write.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// Interactive prompt failed.
    #[error("Failed to read {what}: {details}")]
    Interaction { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit states.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::MissingField(_)
            | AppError::InvalidStop(_)
            | AppError::InvalidDate { .. }
            | AppError::TooManyStops(_)
            | AppError::InvalidDataUri(_)
            | AppError::UnsupportedImageType(_)
            | AppError::TomlParseError(_)
            | AppError::TomlSerializeError(_) => io::ErrorKind::InvalidInput,
            AppError::AccessDenied | AppError::EditorLocked => io::ErrorKind::PermissionDenied,
            AppError::PromptNotEditable(_) | AppError::GenerationInProgress => {
                io::ErrorKind::ResourceBusy
            }
            AppError::GenerationFailed(_)
            | AppError::Api { .. }
            | AppError::Http(_)
            | AppError::NoImageGenerated
            | AppError::ClipboardError(_)
            | AppError::Interaction { .. } => io::ErrorKind::Other,
        }
    }
}
