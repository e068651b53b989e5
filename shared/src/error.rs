use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use lambda_http::http::StatusCode;
use thiserror::Error;

/// Fault raised by an external capability (Comprehend, Polly, DynamoDB).
#[derive(Debug, Error)]
#[error("{0}")]
pub struct CapabilityError(pub String);

impl CapabilityError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

// All AWS SDK crates share the smithy SdkError, so this covers every client
impl<E, R> From<SdkError<E, R>> for CapabilityError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    fn from(error: SdkError<E, R>) -> Self {
        CapabilityError(DisplayErrorContext(error).to_string())
    }
}

/// Everything that can end an invocation early.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("{0}")]
    Validation(&'static str),

    #[error(transparent)]
    Capability(#[from] CapabilityError),

    #[error("Failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Panicked(String),
}

impl ActionError {
    pub fn status(&self) -> StatusCode {
        match self {
            ActionError::Validation(_) => StatusCode::BAD_REQUEST,
            ActionError::Capability(_)
            | ActionError::Serialization(_)
            | ActionError::Panicked(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Startup-time configuration failure. Never reaches a caller.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingEnv(&'static str),
}
