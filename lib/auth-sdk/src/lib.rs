//! # Auth SDK
//!
//! A small JSON API client authenticated with the OAuth2 client-credentials grant.
//!
//! The [`ApiClient`] holds a client ID, a client secret and a base URL. On the
//! first call it exchanges the credentials for a bearer token (scope `api` by
//! default), caches it, and attaches it to every request until
//! [`ApiClient::authenticate`] is called again.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use auth_sdk::{ApiClient, CallHeaders, CallQuery};
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), auth_sdk::ApiClientError> {
//! let client = ApiClient::builder("client-id", "client-secret")
//!     .with_base_url("https://api.example.com")
//!     .build()?;
//!
//! let widgets = client
//!     .get(
//!         "widgets",
//!         Some(CallQuery::new().add_param("color", "blue")),
//!         Some(CallHeaders::new().add_header("X-Request-ID", "42")),
//!         Some(Duration::from_secs(10)),
//!     )
//!     .await?;
//!
//! let created = client
//!     .post("widgets", None, Some(json!({"name": "gizmo"})), None, None)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every call returns an [`ApiClientError`]:
//!
//! - [`ApiClientError::Auth`] when the token exchange fails
//! - [`ApiClientError::Api`] when the API answers with a status of 400 or above,
//!   carrying the status and the raw body
//! - [`ApiClientError::Decode`] when a successful response is not JSON
//!
//! Nothing is retried.
//!
//! ## Tokens
//!
//! Tokens are never renewed behind the caller's back, even once expired.
//! Inspect [`ApiClient::token`] and call [`ApiClient::authenticate`] to refresh.

mod client;

pub use self::client::oauth2;
pub use self::client::oauth2::{OAuth2Error, OAuth2Token, TokenAuthMethod};
pub use self::client::{
    ApiClient, ApiClientBuilder, ApiClientError, CallBody, CallHeaders, CallQuery, Credentials,
    DEFAULT_BASE_URL, DEFAULT_SCOPE, DEFAULT_TOKEN_URL, RequestOptions, SecureString,
};

// Re-export for `ApiClient::request`
pub use http::Method;
