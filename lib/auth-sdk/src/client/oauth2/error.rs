//! OAuth2-specific error types.

use std::fmt;

use oauth2::basic::BasicErrorResponse;
use oauth2::{HttpClientError, RequestTokenError};

/// Errors that can occur while acquiring an OAuth2 token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OAuth2Error {
    /// Token endpoint URL is invalid.
    InvalidTokenEndpoint {
        /// The invalid URL that was provided.
        url: String,
        /// Description of why the URL is invalid.
        reason: String,
    },

    /// The token endpoint answered with an OAuth2 error response.
    TokenAcquisitionFailed {
        /// Description of the failure.
        reason: String,
    },

    /// Invalid OAuth2 response from the token endpoint.
    InvalidTokenResponse {
        /// Description of what was invalid.
        reason: String,
    },

    /// Network error during token request.
    NetworkError {
        /// Description of the network error.
        reason: String,
    },
}

impl std::error::Error for OAuth2Error {}

impl fmt::Display for OAuth2Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTokenEndpoint { url, reason } => {
                write!(f, "Invalid token endpoint URL '{url}': {reason}")
            }
            Self::TokenAcquisitionFailed { reason } => {
                write!(f, "Token acquisition failed: {reason}")
            }
            Self::InvalidTokenResponse { reason } => {
                write!(f, "Invalid OAuth2 token response: {reason}")
            }
            Self::NetworkError { reason } => {
                write!(f, "Network error during OAuth2 request: {reason}")
            }
        }
    }
}

impl From<RequestTokenError<HttpClientError<reqwest::Error>, BasicErrorResponse>> for OAuth2Error {
    fn from(error: RequestTokenError<HttpClientError<reqwest::Error>, BasicErrorResponse>) -> Self {
        match error {
            RequestTokenError::ServerResponse(response) => Self::TokenAcquisitionFailed {
                reason: response.to_string(),
            },
            RequestTokenError::Request(err) => Self::NetworkError {
                reason: error_chain(&err),
            },
            RequestTokenError::Parse(err, _body) => Self::InvalidTokenResponse {
                reason: err.to_string(),
            },
            RequestTokenError::Other(reason) => Self::TokenAcquisitionFailed { reason },
        }
    }
}

/// Joins an error and its sources, `reqwest` keeps the useful part (e.g. "connection refused") in the chain.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
