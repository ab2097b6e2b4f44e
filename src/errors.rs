use thiserror::Error;

/// Ecraspay specific Result type. Every fallible operation in this crate
/// returns one of these.
pub type Result<T> = std::result::Result<T, EcraspayError>;

/// Errors surfaced by the Ecraspay client.
///
/// Validation errors are raised before any network traffic; everything else
/// maps to a distinct stage of the request/response path so callers can
/// branch on the failure mode.
#[derive(Error, Debug)]
pub enum EcraspayError {
    /// Request payload could not be converted to JSON.
    #[error("Failed to serialize request payload: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Network-level failure: DNS, connection refused, timeout.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The gateway answered with status >= 400. `body` is the raw response
    /// text, preserved unparsed for diagnostics.
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    /// The gateway answered with a success status but the body is not a
    /// JSON object.
    #[error("Failed to parse response body as JSON: {0}")]
    ResponseParse(#[source] serde_json::Error),

    /// A required caller-supplied field is missing or invalid.
    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Client configuration error (bad base URL, missing API key, ...).
    #[error("Config error: {0}")]
    Config(String),
}

impl EcraspayError {
    /// Create a validation error for a named request field.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Status code of an [`EcraspayError::Api`] rejection, if that is what
    /// this error is.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
