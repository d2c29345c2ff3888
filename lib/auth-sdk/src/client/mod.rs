use std::time::Duration;

use http::Method;
use serde_json::Value;
use tracing::debug;

mod auth;
pub use self::auth::{Credentials, SecureString};

mod builder;
pub use self::builder::ApiClientBuilder;

mod call;

mod error;
pub use self::error::ApiClientError;

pub mod oauth2;
use self::oauth2::{OAuth2Config, OAuth2Token, TokenCache};

mod parameters;
pub use self::parameters::{CallBody, CallHeaders, CallQuery, RequestOptions};


/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.example.com";

/// Token endpoint used when none is configured.
pub const DEFAULT_TOKEN_URL: &str = "https://api.example.com/token";

/// Scope requested when none is configured.
pub const DEFAULT_SCOPE: &str = "api";

/// OAuth2-authenticated JSON API client.
///
/// The client holds fixed client credentials and a base URL. A bearer token is
/// acquired with the client-credentials grant on the first request and reused
/// for every following request until [`authenticate`](Self::authenticate) is
/// called again. Expired tokens are not renewed automatically.
///
/// # Example
///
/// ```rust,no_run
/// use auth_sdk::{ApiClient, CallQuery};
/// use serde_json::json;
///
/// # async fn example() -> Result<(), auth_sdk::ApiClientError> {
/// let client = ApiClient::new("client-id", "client-secret")?;
///
/// // The token is fetched here
/// let widgets = client
///     .get("widgets", Some(CallQuery::new().add_param("limit", 10)), None, None)
///     .await?;
///
/// // and reused here
/// let created = client
///     .post("widgets", None, Some(json!({"name": "gizmo"})), None, None)
///     .await?;
/// # Ok(())
/// # }
/// ```
///
/// # Thread Safety
///
/// Clones share the token cache. Concurrent calls on an empty cache wait for a
/// single token exchange instead of each starting their own.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    oauth2: OAuth2Config,
    token_cache: TokenCache,
}

// Create
impl ApiClient {
    /// Creates a client for the default base URL and token endpoint.
    ///
    /// No network activity happens here, and the credentials are not checked.
    ///
    /// # Errors
    ///
    /// Fails only if the HTTP clients cannot be created.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<SecureString>,
    ) -> Result<Self, ApiClientError> {
        Self::builder(client_id, client_secret).build()
    }

    /// Creates a builder to customize the base URL, token endpoint, scopes, etc.
    pub fn builder(
        client_id: impl Into<String>,
        client_secret: impl Into<SecureString>,
    ) -> ApiClientBuilder {
        ApiClientBuilder::new(client_id, client_secret)
    }

    /// Returns the base URL endpoints are joined onto.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the OAuth2 configuration.
    pub fn oauth2(&self) -> &OAuth2Config {
        &self.oauth2
    }
}

// Token
impl ApiClient {
    /// Runs a client-credentials exchange and caches the new token.
    ///
    /// Any previously cached token is overwritten on success. On failure the
    /// cache is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Auth`] if the exchange fails.
    pub async fn authenticate(&self) -> Result<OAuth2Token, ApiClientError> {
        let mut slot = self.token_cache.lock().await;
        let token = self.oauth2.acquire_token().await?;
        *slot = Some(token.clone());
        Ok(token)
    }

    /// Returns the cached token, if any.
    pub async fn token(&self) -> Option<OAuth2Token> {
        self.token_cache.get().await
    }

    /// Returns `true` once a token has been cached.
    pub async fn has_token(&self) -> bool {
        self.token_cache.get().await.is_some()
    }

    /// Returns the cached token, acquiring one first if the cache is empty.
    async fn cached_or_authenticate(&self) -> Result<OAuth2Token, ApiClientError> {
        let mut slot = self.token_cache.lock().await;
        if let Some(token) = slot.as_ref() {
            return Ok(token.clone());
        }

        debug!("no cached token, authenticating");
        let token = self.oauth2.acquire_token().await?;
        *slot = Some(token.clone());
        Ok(token)
    }
}

// Calls
impl ApiClient {
    /// Sends a request and decodes the JSON response.
    ///
    /// The URL is `{base_url}/{endpoint}`, with no normalization. The cached
    /// bearer token is attached, authenticating first if there is none yet.
    ///
    /// # Errors
    ///
    /// - [`ApiClientError::Auth`] if a needed token exchange fails
    /// - [`ApiClientError::Api`] if the response status is 400 or above
    /// - [`ApiClientError::Decode`] if the response body is not JSON
    /// - transport or request-building errors otherwise
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Value, ApiClientError> {
        let token = self.cached_or_authenticate().await?;
        let url = call::build_url(&self.base_url, endpoint)?;
        let request = call::build_request(method, url, options, &token)?;
        call::exchange(&self.client, request).await
    }

    /// Sends a `GET` request.
    ///
    /// The timeout, when given, bounds the whole request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn get(
        &self,
        endpoint: &str,
        params: Option<CallQuery>,
        headers: Option<CallHeaders>,
        timeout: Option<Duration>,
    ) -> Result<Value, ApiClientError> {
        let options = RequestOptions::new()
            .maybe_query(params)
            .maybe_headers(headers)
            .maybe_timeout(timeout);
        self.request(Method::GET, endpoint, options).await
    }

    /// Sends a `POST` request.
    ///
    /// `json` is sent as `application/json`. `data` is sent with its own
    /// content type, but only when `json` is absent: if both are given,
    /// `data` is dropped.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn post(
        &self,
        endpoint: &str,
        data: Option<CallBody>,
        json: Option<Value>,
        headers: Option<CallHeaders>,
        timeout: Option<Duration>,
    ) -> Result<Value, ApiClientError> {
        let options = RequestOptions::new()
            .maybe_body(data)
            .maybe_json(json)
            .maybe_headers(headers)
            .maybe_timeout(timeout);
        self.request(Method::POST, endpoint, options).await
    }
}
