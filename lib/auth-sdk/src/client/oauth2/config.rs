//! OAuth2 client-credentials configuration.

use std::fmt;

use oauth2::{AuthType, ClientId, ClientSecret, Scope, TokenUrl};
use url::Url;

use super::error::OAuth2Error;
use crate::client::auth::Credentials;

/// How the client credentials are presented to the token endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenAuthMethod {
    /// HTTP Basic authentication header (`client_secret_basic`).
    #[default]
    BasicAuth,
    /// `client_id` and `client_secret` in the form body (`client_secret_post`).
    RequestBody,
}

impl From<TokenAuthMethod> for AuthType {
    fn from(method: TokenAuthMethod) -> Self {
        match method {
            TokenAuthMethod::BasicAuth => Self::BasicAuth,
            TokenAuthMethod::RequestBody => Self::RequestBody,
        }
    }
}

/// Everything needed to run a client-credentials grant.
#[derive(Clone)]
pub struct OAuth2Config {
    pub(crate) credentials: Credentials,
    pub(crate) token_url: Url,
    pub(crate) scopes: Vec<String>,
    pub(crate) auth_method: TokenAuthMethod,
    /// Dedicated HTTP client for the token endpoint, redirects disabled.
    pub(crate) http_client: reqwest::Client,
}

impl OAuth2Config {
    pub(crate) fn new(
        credentials: Credentials,
        token_url: Url,
        scopes: Vec<String>,
        auth_method: TokenAuthMethod,
    ) -> Result<Self, reqwest::Error> {
        // Following redirects from the token endpoint would leak credentials (SSRF).
        let http_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            credentials,
            token_url,
            scopes,
            auth_method,
            http_client,
        })
    }

    /// Returns the token endpoint.
    pub fn token_url(&self) -> &Url {
        &self.token_url
    }

    /// Returns the requested scopes.
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// Returns the client ID.
    pub fn client_id(&self) -> &str {
        &self.credentials.client_id
    }

    pub(crate) fn oauth2_client_id(&self) -> ClientId {
        ClientId::new(self.credentials.client_id.clone())
    }

    pub(crate) fn oauth2_client_secret(&self) -> ClientSecret {
        ClientSecret::new(self.credentials.client_secret.as_str().to_string())
    }

    pub(crate) fn oauth2_token_url(&self) -> TokenUrl {
        TokenUrl::from_url(self.token_url.clone())
    }

    pub(crate) fn oauth2_scopes(&self) -> Vec<Scope> {
        self.scopes.iter().map(|s| Scope::new(s.clone())).collect()
    }
}

impl fmt::Debug for OAuth2Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuth2Config")
            .field("credentials", &self.credentials)
            .field("token_url", &self.token_url)
            .field("scopes", &self.scopes)
            .field("auth_method", &self.auth_method)
            .finish_non_exhaustive()
    }
}

/// Parses a token endpoint URL.
pub(crate) fn parse_token_url(token_url: &str) -> Result<Url, OAuth2Error> {
    Url::parse(token_url).map_err(|err| OAuth2Error::InvalidTokenEndpoint {
        url: token_url.to_string(),
        reason: err.to_string(),
    })
}
