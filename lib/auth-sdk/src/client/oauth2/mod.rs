//! OAuth2 client-credentials support.
//!
//! Tokens are acquired with the `oauth2` crate against the configured token
//! endpoint and cached on the [`ApiClient`](crate::ApiClient) until the next
//! explicit [`authenticate`](crate::ApiClient::authenticate) call.
//!
//! # Example
//!
//! ```rust,no_run
//! use auth_sdk::{ApiClient, TokenAuthMethod};
//!
//! # async fn example() -> Result<(), auth_sdk::ApiClientError> {
//! let client = ApiClient::builder("client-id", "client-secret")
//!     .with_token_url("https://auth.example.com/oauth/token")?
//!     .with_scopes(["read:widgets", "write:widgets"])
//!     .with_auth_method(TokenAuthMethod::RequestBody)
//!     .build()?;
//!
//! let token = client.authenticate().await?;
//! assert!(!token.is_expired());
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod provider;
mod token;

pub use self::config::{OAuth2Config, TokenAuthMethod};
pub(crate) use self::config::parse_token_url;
pub use self::error::OAuth2Error;
pub use self::token::OAuth2Token;
pub(crate) use self::token::TokenCache;
