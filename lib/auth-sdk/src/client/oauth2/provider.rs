//! Client-credentials token acquisition.

use oauth2::basic::{BasicClient, BasicTokenResponse, BasicTokenType};
use oauth2::TokenResponse;
use tracing::{debug, info};

use super::config::OAuth2Config;
use super::error::OAuth2Error;
use super::token::OAuth2Token;

impl OAuth2Config {
    /// Runs one client-credentials exchange against the token endpoint.
    ///
    /// Nothing is cached here, the caller decides where the token goes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Network request fails
    /// - Token endpoint returns an error
    /// - Response cannot be parsed
    pub async fn acquire_token(&self) -> Result<OAuth2Token, OAuth2Error> {
        let client = BasicClient::new(self.oauth2_client_id())
            .set_client_secret(self.oauth2_client_secret())
            .set_auth_type(self.auth_method.into())
            .set_token_uri(self.oauth2_token_url());

        let request = client
            .exchange_client_credentials()
            .add_scopes(self.oauth2_scopes());

        debug!(token_url = %self.token_url, scopes = ?self.scopes, "requesting token...");
        let response = request.request_async(&self.http_client).await?;

        let token = Self::convert_token_response(&response);
        info!(
            token_type = token.token_type(),
            expires_in = ?token.expires_in(),
            "...token acquired"
        );

        Ok(token)
    }

    /// Converts an oauth2 token response to our token type.
    fn convert_token_response(response: &BasicTokenResponse) -> OAuth2Token {
        let access_token = response.access_token().secret().clone();
        let mut token = match response.expires_in() {
            Some(duration) => OAuth2Token::with_expiry(access_token, duration),
            None => OAuth2Token::new(access_token),
        };

        token = token.with_token_type(match response.token_type() {
            BasicTokenType::Bearer => "bearer".to_string(),
            BasicTokenType::Mac => "mac".to_string(),
            BasicTokenType::Extension(other) => other.clone(),
        });

        if let Some(scopes) = response.scopes() {
            token = token.with_scopes(scopes.iter().map(|scope| scope.to_string()));
        }

        if let Some(refresh_token) = response.refresh_token() {
            token = token.with_refresh_token(refresh_token.secret().clone());
        }

        token
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn parse_response(json: &str) -> BasicTokenResponse {
        serde_json::from_str(json).expect("valid token response")
    }

    #[test]
    fn should_convert_full_token_response() {
        let response = parse_response(
            r#"{
                "access_token": "abc",
                "token_type": "bearer",
                "expires_in": 3600,
                "scope": "api read",
                "refresh_token": "def"
            }"#,
        );

        let token = OAuth2Config::convert_token_response(&response);

        assert_eq!(token.access_token(), "abc");
        assert_eq!(token.token_type(), "bearer");
        assert_eq!(token.expires_in(), Some(Duration::from_secs(3600)));
        assert_eq!(token.scopes(), ["api", "read"]);
        assert_eq!(token.refresh_token(), Some("def"));
    }

    #[test]
    fn should_convert_minimal_token_response() {
        let response = parse_response(r#"{"access_token": "abc", "token_type": "Bearer"}"#);

        let token = OAuth2Config::convert_token_response(&response);

        assert_eq!(token.access_token(), "abc");
        assert!(token.expires_in().is_none());
        assert!(token.scopes().is_empty());
        assert!(!token.is_expired());
    }
}
