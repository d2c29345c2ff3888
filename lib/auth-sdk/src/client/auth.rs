use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secure wrapper for sensitive string data that automatically zeroes memory on drop.
///
/// The value never shows up in `Debug` output, and `Display` only prints a mask.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecureString(String);

impl SecureString {
    /// Creates a new secure string from the provided value.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner string value.
    ///
    /// # Security Note
    /// The returned reference should not be stored for extended periods
    /// to minimize exposure time of sensitive data.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks if the secure string equals the given string slice.
    pub fn equals_str(&self, other: &str) -> bool {
        self.0 == other
    }

    /// Masks sensitive data for display/logging purposes.
    fn mask_sensitive(value: &str) -> String {
        let chars = value.chars().collect::<Vec<_>>();
        if chars.len() <= 8 {
            return "***".to_string();
        }
        let head = chars.iter().take(4).collect::<String>();
        let tail = chars.iter().skip(chars.len() - 4).collect::<String>();
        format!("{head}...{tail}")
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureString")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::mask_sensitive(&self.0))
    }
}

impl From<String> for SecureString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecureString {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

/// OAuth2 client credentials, fixed once the client is built.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub(crate) client_id: String,
    pub(crate) client_secret: SecureString,
}

impl Credentials {
    /// Creates credentials. The values are not checked.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<SecureString>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Returns the client ID.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the client secret.
    pub fn client_secret(&self) -> &SecureString {
        &self.client_secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_redact_secure_string_debug() {
        let secret = SecureString::from("my-secret-password");
        let debug_str = format!("{secret:?}");
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains("my-secret-password"));
    }

    #[test]
    fn should_mask_secure_string_display() {
        assert_eq!(SecureString::from("short").to_string(), "***");
        assert_eq!(
            SecureString::from("verylongsecret123").to_string(),
            "very...t123"
        );
    }

    #[test]
    fn should_compare_secure_string() {
        let secret = SecureString::from("abc".to_string());
        assert!(secret.equals_str("abc"));
        assert!(!secret.equals_str("abd"));
        assert_eq!(secret.as_str(), "abc");
    }

    #[test]
    fn should_keep_credentials_verbatim() {
        let credentials = Credentials::new("", " spaced secret ");
        assert_eq!(credentials.client_id(), "");
        assert!(credentials.client_secret().equals_str(" spaced secret "));
    }

    #[test]
    fn should_redact_credentials_debug() {
        let credentials = Credentials::new("client-id", "super-secret");
        let debug_str = format!("{credentials:?}");
        assert!(debug_str.contains("client-id"));
        assert!(!debug_str.contains("super-secret"));
    }
}
