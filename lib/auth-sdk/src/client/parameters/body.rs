use headers::ContentType;
use serde::Serialize;

use crate::client::ApiClientError;

/// A raw request body with its content type.
///
/// This is the `data` side of [`ApiClient::post`](crate::ApiClient::post):
/// anything that is not the plain JSON payload, such as form-encoded fields,
/// text or bytes.
#[derive(Clone, PartialEq, derive_more::Debug)]
pub struct CallBody {
    pub(in crate::client) content_type: ContentType,
    #[debug(ignore)]
    pub(in crate::client) data: Vec<u8>,
}

impl CallBody {
    /// Creates a JSON body from a serializable type.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized.
    pub fn json<T>(t: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        let data = serde_json::to_vec(t)?;
        Ok(Self::raw(data, ContentType::json()))
    }

    /// Creates an `application/x-www-form-urlencoded` body.
    ///
    /// # Example
    ///
    /// ```rust
    /// use auth_sdk::CallBody;
    ///
    /// let body = CallBody::form(&[("name", "gizmo"), ("size", "xl")])?;
    /// assert_eq!(body.data(), b"name=gizmo&size=xl");
    /// # Ok::<(), auth_sdk::ApiClientError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be form-encoded.
    pub fn form<T>(t: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        let data = serde_urlencoded::to_string(t)?.into_bytes();
        Ok(Self::raw(data, ContentType::form_url_encoded()))
    }

    /// Creates a raw body with custom content type.
    pub fn raw(data: Vec<u8>, content_type: ContentType) -> Self {
        Self { content_type, data }
    }

    /// Creates a text body with text/plain content type.
    pub fn text(text: &str) -> Self {
        Self::raw(text.as_bytes().to_vec(), ContentType::text())
    }

    /// Returns the content type.
    pub fn content_type(&self) -> &ContentType {
        &self.content_type
    }

    /// Returns the encoded bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_json_body() {
        let body = CallBody::json(&serde_json::json!({"name": "gizmo"})).expect("serializable");
        assert_eq!(body.content_type(), &ContentType::json());
        assert_eq!(body.data(), br#"{"name":"gizmo"}"#);
    }

    #[test]
    fn should_create_text_body() {
        let body = CallBody::text("hello");
        assert_eq!(body.content_type(), &ContentType::text());
        assert_eq!(body.data(), b"hello");
    }

    #[test]
    fn should_create_raw_body() {
        let body = CallBody::raw(vec![0xFF, 0xFE], ContentType::octet_stream());
        assert_eq!(body.content_type(), &ContentType::octet_stream());
        assert_eq!(body.data(), [0xFF, 0xFE]);
    }

    #[test]
    fn should_not_dump_bytes_in_debug() {
        let body = CallBody::text("secret payload");
        let debug_str = format!("{body:?}");
        assert!(debug_str.contains("CallBody"));
        assert!(!debug_str.contains("secret payload"));
    }
}
