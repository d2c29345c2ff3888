use url::Url;

use super::auth::{Credentials, SecureString};
use super::oauth2::{OAuth2Config, OAuth2Token, TokenAuthMethod, TokenCache, parse_token_url};
use super::{ApiClient, ApiClientError, DEFAULT_BASE_URL, DEFAULT_SCOPE, DEFAULT_TOKEN_URL};

/// Builder for creating `ApiClient` instances.
///
/// # Default Configuration
///
/// - **Base URL**: `https://api.example.com`
/// - **Token endpoint**: `https://api.example.com/token`
/// - **Scopes**: `api`
/// - **Token endpoint authentication**: HTTP Basic
/// - **HTTP client**: a default `reqwest::Client`
/// - **Token**: none, acquired on the first request
///
/// # Example
///
/// ```rust
/// use auth_sdk::ApiClient;
///
/// # fn example() -> Result<(), auth_sdk::ApiClientError> {
/// let client = ApiClient::builder("client-id", "client-secret")
///     .with_base_url("https://api.acme.test/v2")
///     .with_token_url("https://auth.acme.test/token")?
///     .build()?;
///
/// assert_eq!(client.base_url(), "https://api.acme.test/v2");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClientBuilder {
    credentials: Credentials,
    client: Option<reqwest::Client>,
    base_url: String,
    token_url: Option<Url>,
    scopes: Vec<String>,
    auth_method: TokenAuthMethod,
    token: Option<OAuth2Token>,
}

impl ApiClientBuilder {
    pub(super) fn new(client_id: impl Into<String>, client_secret: impl Into<SecureString>) -> Self {
        Self {
            credentials: Credentials::new(client_id, client_secret),
            client: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            token_url: None,
            scopes: vec![DEFAULT_SCOPE.to_string()],
            auth_method: TokenAuthMethod::default(),
            token: None,
        }
    }

    /// Builds the final `ApiClient` instance.
    ///
    /// No network activity happens here.
    ///
    /// # Errors
    ///
    /// This method can fail if an HTTP client cannot be created.
    pub fn build(self) -> Result<ApiClient, ApiClientError> {
        let Self {
            credentials,
            client,
            base_url,
            token_url,
            scopes,
            auth_method,
            token,
        } = self;

        let client = match client {
            Some(client) => client,
            None => reqwest::Client::builder().build()?,
        };
        let token_url = match token_url {
            Some(url) => url,
            None => parse_token_url(DEFAULT_TOKEN_URL)?,
        };
        let oauth2 = OAuth2Config::new(credentials, token_url, scopes, auth_method)?;
        let token_cache = token.map(TokenCache::with_token).unwrap_or_default();

        Ok(ApiClient {
            client,
            base_url,
            oauth2,
            token_cache,
        })
    }

    /// Sets the base URL that endpoints are joined onto.
    ///
    /// The value is kept as is: endpoints are appended after a `/`, so a base
    /// URL ending with `/` produces a doubled slash.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the OAuth2 token endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn with_token_url(mut self, token_url: impl AsRef<str>) -> Result<Self, ApiClientError> {
        self.token_url = Some(parse_token_url(token_url.as_ref())?);
        Ok(self)
    }

    /// Requests a single scope instead of the default `api`.
    #[must_use]
    pub fn with_scope(self, scope: impl Into<String>) -> Self {
        self.with_scopes([scope])
    }

    /// Requests these scopes instead of the default `api`.
    #[must_use]
    pub fn with_scopes(mut self, scopes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets how the client credentials are sent to the token endpoint.
    #[must_use]
    pub fn with_auth_method(mut self, auth_method: TokenAuthMethod) -> Self {
        self.auth_method = auth_method;
        self
    }

    /// Uses this HTTP client for API calls.
    ///
    /// The token endpoint always goes through a dedicated client that does
    /// not follow redirects.
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Starts with a pre-acquired token: no exchange happens until
    /// [`ApiClient::authenticate`] is called explicitly.
    #[must_use]
    pub fn with_token(mut self, token: OAuth2Token) -> Self {
        self.token = Some(token);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::oauth2::OAuth2Error;

    #[test]
    fn should_use_defaults() {
        let builder = ApiClientBuilder::new("id", "secret");

        assert_eq!(builder.base_url, "https://api.example.com");
        assert!(builder.token_url.is_none());
        assert_eq!(builder.scopes, ["api"]);
        assert_eq!(builder.auth_method, TokenAuthMethod::BasicAuth);
        assert!(builder.client.is_none());
        assert!(builder.token.is_none());
    }

    #[test]
    fn should_keep_base_url_verbatim() {
        let builder = ApiClientBuilder::new("id", "secret").with_base_url("https://h.test/api/");
        assert_eq!(builder.base_url, "https://h.test/api/");
    }

    #[test]
    fn should_replace_scopes() {
        let builder = ApiClientBuilder::new("id", "secret").with_scopes(["read", "write"]);
        assert_eq!(builder.scopes, ["read", "write"]);

        let builder = builder.with_scope("admin");
        assert_eq!(builder.scopes, ["admin"]);
    }

    #[test]
    fn should_reject_invalid_token_url() {
        let err = ApiClientBuilder::new("id", "secret")
            .with_token_url("not a url")
            .expect_err("invalid url");

        assert!(matches!(
            err,
            ApiClientError::Auth(OAuth2Error::InvalidTokenEndpoint { .. })
        ));
    }

    #[tokio::test]
    async fn should_build_with_pre_acquired_token() {
        let client = ApiClientBuilder::new("id", "secret")
            .with_token(OAuth2Token::new("pre-acquired"))
            .build()
            .expect("should build");

        let token = client.token().await.expect("token present");
        assert_eq!(token.access_token(), "pre-acquired");
    }

    #[tokio::test]
    async fn should_build_without_token() {
        let client = ApiClientBuilder::new("id", "secret")
            .build()
            .expect("should build");

        assert!(!client.has_token().await);
        assert_eq!(
            client.oauth2.token_url().as_str(),
            "https://api.example.com/token"
        );
    }
}
