//! OAuth2 token types and caching.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, MutexGuard};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::client::auth::SecureString;

/// Token type used when the authorization server does not say otherwise.
const DEFAULT_TOKEN_TYPE: &str = "bearer";

/// An OAuth2 access token as returned by the token endpoint.
///
/// The client treats it as an opaque record: expiry metadata is kept for
/// callers that want to decide when to re-authenticate, but a cached token
/// is never dropped automatically.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct OAuth2Token {
    /// The access token value.
    access_token: SecureString,
    /// The token type (usually `bearer`).
    #[zeroize(skip)]
    token_type: String,
    /// Lifetime announced by the server.
    #[zeroize(skip)]
    expires_in: Option<Duration>,
    /// When the token expires (if known).
    #[zeroize(skip)]
    expires_at: Option<Instant>,
    /// Scopes granted by the server.
    #[zeroize(skip)]
    scopes: Vec<String>,
    /// Optional refresh token.
    refresh_token: Option<String>,
}

impl OAuth2Token {
    /// Creates a new bearer token without expiry metadata.
    pub fn new(access_token: impl Into<SecureString>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: DEFAULT_TOKEN_TYPE.to_string(),
            expires_in: None,
            expires_at: None,
            scopes: Vec::new(),
            refresh_token: None,
        }
    }

    /// Creates a new bearer token with an expiration time.
    pub fn with_expiry(access_token: impl Into<SecureString>, expires_in: Duration) -> Self {
        let mut token = Self::new(access_token);
        token.expires_in = Some(expires_in);
        token.expires_at = Some(Instant::now() + expires_in);
        token
    }

    /// Sets the token type.
    #[must_use]
    pub fn with_token_type(mut self, token_type: impl Into<String>) -> Self {
        self.token_type = token_type.into();
        self
    }

    /// Sets the granted scopes.
    #[must_use]
    pub fn with_scopes(mut self, scopes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the refresh token.
    #[must_use]
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// Returns the access token value.
    pub fn access_token(&self) -> &str {
        self.access_token.as_str()
    }

    /// Returns the token type.
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Returns the scopes granted by the server, empty if it did not report any.
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// Returns the lifetime announced by the server.
    pub fn expires_in(&self) -> Option<Duration> {
        self.expires_in
    }

    /// Returns the refresh token if available.
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// Checks if the token is expired.
    ///
    /// Returns `false` if the token has no expiration time.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Instant::now() >= exp)
    }

    /// Returns the time until expiration, if known.
    pub fn time_until_expiry(&self) -> Option<Duration> {
        self.expires_at.and_then(|exp| {
            let now = Instant::now();
            if now >= exp { None } else { Some(exp - now) }
        })
    }
}

impl fmt::Debug for OAuth2Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuth2Token")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scopes", &self.scopes)
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Shared slot for the current token.
///
/// Holding the guard returned by [`TokenCache::lock`] across a token exchange
/// makes concurrent callers wait for that exchange instead of starting their own.
#[derive(Debug, Clone, Default)]
pub(crate) struct TokenCache {
    inner: Arc<Mutex<Option<OAuth2Token>>>,
}

impl TokenCache {
    /// Creates a token cache with an initial token.
    pub(crate) fn with_token(token: OAuth2Token) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(token))),
        }
    }

    /// Returns the cached token, expired or not.
    pub(crate) async fn get(&self) -> Option<OAuth2Token> {
        self.inner.lock().await.clone()
    }

    /// Locks the slot for a check-then-fetch sequence.
    pub(crate) async fn lock(&self) -> MutexGuard<'_, Option<OAuth2Token>> {
        self.inner.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_token() {
        let token = OAuth2Token::new("access-token-123");
        assert_eq!(token.access_token(), "access-token-123");
        assert_eq!(token.token_type(), "bearer");
        assert!(token.scopes().is_empty());
        assert!(token.refresh_token().is_none());
        assert!(!token.is_expired());
    }

    #[test]
    fn should_create_token_with_expiry() {
        let token = OAuth2Token::with_expiry("token", Duration::from_secs(3600));
        assert!(!token.is_expired());
        assert_eq!(token.expires_in(), Some(Duration::from_secs(3600)));
        assert!(token.time_until_expiry().is_some());
    }

    #[test]
    fn should_detect_expired_token() {
        let token = OAuth2Token::with_expiry("token", Duration::ZERO);
        assert!(token.is_expired());
        assert!(token.time_until_expiry().is_none());
    }

    #[test]
    fn should_keep_server_metadata() {
        let token = OAuth2Token::new("access")
            .with_token_type("mac")
            .with_scopes(["api", "read"])
            .with_refresh_token("refresh");

        assert_eq!(token.token_type(), "mac");
        assert_eq!(token.scopes(), ["api", "read"]);
        assert_eq!(token.refresh_token(), Some("refresh"));
    }

    #[test]
    fn should_redact_debug_output() {
        let token = OAuth2Token::new("secret-token").with_refresh_token("secret-refresh");
        let debug_str = format!("{token:?}");
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains("secret-token"));
        assert!(!debug_str.contains("secret-refresh"));
    }

    #[test]
    fn should_mask_access_token_display() {
        let token = OAuth2Token::new("access-token-0123456789");
        assert_eq!(token.access_token, SecureString::from("access-token-0123456789"));
        assert_eq!(token.access_token.to_string(), "acce...6789");
    }

    #[test]
    fn should_clear_access_token_on_zeroize() {
        let mut token = OAuth2Token::new("secret-token");
        token.zeroize();
        assert_eq!(token.access_token(), "");
    }

    #[tokio::test]
    async fn should_start_empty() {
        let cache = TokenCache::default();
        assert!(cache.get().await.is_none());
    }

    #[tokio::test]
    async fn should_store_through_lock() {
        let cache = TokenCache::default();
        *cache.lock().await = Some(OAuth2Token::new("cached-token"));

        let cached = cache.get().await.expect("Token should be cached");
        assert_eq!(cached.access_token(), "cached-token");
    }

    #[tokio::test]
    async fn should_keep_expired_token() {
        let cache = TokenCache::with_token(OAuth2Token::with_expiry("expired", Duration::ZERO));

        let cached = cache.get().await.expect("Expired token is still cached");
        assert!(cached.is_expired());
    }

    #[tokio::test]
    async fn should_share_slot_between_clones() {
        let cache = TokenCache::default();
        let clone = cache.clone();
        *clone.lock().await = Some(OAuth2Token::new("shared"));

        let cached = cache.get().await.expect("Token should be shared");
        assert_eq!(cached.access_token(), "shared");
    }
}
