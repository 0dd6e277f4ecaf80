/*!
 * Error types for the yakugo application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when talking to the translation gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The gateway could not be reached or refused the session
    #[error("Gateway unavailable: {0}")]
    Unavailable(String),

    /// Error when making a request to the gateway fails
    #[error("Gateway request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing a gateway response fails
    #[error("Failed to parse gateway response: {0}")]
    ParseError(String),

    /// Error returned by the gateway itself
    #[error("Gateway responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the gateway
        message: String,
    },
}

impl GatewayError {
    /// Whether a retry against the gateway can reasonably succeed.
    /// Client errors (4xx) are permanent; everything else is transient.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ApiError { status_code, .. } => *status_code >= 500,
            Self::Unavailable(_) => false,
            _ => true,
        }
    }
}

/// Errors that can occur while translating a single piece of text
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the gateway
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// The wrapped text exceeds the gateway's length limit
    #[error("Text too long for translation: {length} chars (limit {max})")]
    TextTooLong {
        /// Character count of the wrapped text
        length: usize,
        /// Configured maximum
        max: usize,
    },

    /// The gateway returned an empty string after context stripping
    #[error("Gateway returned an empty translation")]
    EmptyResult,
}
