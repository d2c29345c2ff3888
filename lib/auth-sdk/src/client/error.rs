use reqwest::StatusCode;

use super::oauth2::OAuth2Error;

/// Errors that can occur when using the [`ApiClient`](crate::ApiClient).
///
/// Authentication failures, API failures and decoding failures each get their
/// own variant; everything else comes from building or sending the request.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum ApiClientError {
    /// The token exchange failed.
    ///
    /// Occurs on network failures towards the token endpoint, rejected
    /// credentials, or an unparseable token response.
    #[display("Authentication failed: {_0}")]
    Auth(OAuth2Error),

    /// The API answered with a status code of 400 or above.
    #[display("API Error: {body}")]
    #[from(skip)]
    Api {
        /// The response status code.
        status: StatusCode,
        /// The raw response body.
        body: String,
    },

    /// A successful response could not be decoded as JSON.
    #[display("Failed to decode JSON response from '{url}': {error}")]
    #[from(skip)]
    Decode {
        /// The request URL.
        url: String,
        /// The underlying JSON parsing error.
        #[error(source)]
        error: serde_json::Error,
        /// The response body that failed to parse.
        body: String,
    },

    /// HTTP client error from the underlying reqwest library.
    ///
    /// Occurs when network requests fail, timeouts occur, or connection issues arise,
    /// and when an HTTP client (including the token endpoint one) cannot be built.
    ReqwestError(reqwest::Error),

    /// URL parsing error when joining the base URL and the endpoint.
    UrlError(url::ParseError),

    /// Invalid HTTP header name.
    InvalidHeaderName(http::header::InvalidHeaderName),

    /// Invalid HTTP header value.
    ///
    /// Occurs when header values (or the bearer token) contain invalid characters.
    InvalidHeaderValue(http::header::InvalidHeaderValue),

    /// JSON serialization error for a request body.
    JsonValueError(serde_json::Error),

    /// Query string or form body serialization error.
    QuerySerializationError(serde_urlencoded::ser::Error),
}

impl ApiClientError {
    /// Returns the status code for [`ApiClientError::Api`].
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::ReqwestError(err) if err.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn should_display_api_error_with_body() {
        let error = ApiClientError::Api {
            status: StatusCode::NOT_FOUND,
            body: "not found".to_string(),
        };

        assert_snapshot!(error.to_string(), @"API Error: not found");
        assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn should_display_auth_error() {
        let error = ApiClientError::from(OAuth2Error::TokenAcquisitionFailed {
            reason: "invalid_client".to_string(),
        });

        assert_snapshot!(
            error.to_string(),
            @"Authentication failed: Token acquisition failed: invalid_client"
        );
        assert!(error.status().is_none());
    }

    #[test]
    fn should_expose_decode_source() {
        let parse_error = serde_json::from_str::<serde_json::Value>("nope").expect_err("invalid");
        let error = ApiClientError::Decode {
            url: "https://api.example.com/widgets".to_string(),
            error: parse_error,
            body: "nope".to_string(),
        };

        assert!(std::error::Error::source(&error).is_some());
        assert!(
            error
                .to_string()
                .starts_with("Failed to decode JSON response from 'https://api.example.com/widgets'")
        );
        assert!(!error.is_timeout());
    }

    #[test]
    fn should_keep_http_client_failures_out_of_auth() {
        let reqwest_error = reqwest::Client::new()
            .get("not a url")
            .build()
            .expect_err("invalid request url");

        let error = ApiClientError::from(reqwest_error);

        assert!(matches!(error, ApiClientError::ReqwestError(_)), "{error:?}");
        assert!(!error.to_string().starts_with("Authentication failed"));
    }
}
