//! Error types for the storefront

use thiserror::Error;

/// Failures talking to the backend or the webhook endpoint
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("API error: {0}")]
    ApiError(String),
}

/// Contact and quote forms rejected before dispatch.
///
/// Messages are shown verbatim under the form, so they are written in Spanish.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("El nombre es obligatorio")]
    MissingName,

    #[error("'{0}' no es un email válido")]
    InvalidEmail(String),

    #[error("El mensaje es obligatorio")]
    MissingMessage,

    #[error("La cotización necesita al menos un producto")]
    EmptyQuote,
}

/// Runtime configuration overrides that could not be applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown log level '{0}'")]
    InvalidLogLevel(String),

    #[error("Setting '{0}' must not be empty")]
    EmptyValue(&'static str),

    #[error("Could not decode window config: {0}")]
    Decode(String),
}

/// Result type for backend calls
pub type ClientResult<T> = Result<T, ClientError>;
