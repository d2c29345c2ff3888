use http::header::{HeaderMap, HeaderName, HeaderValue};

use crate::client::ApiClientError;

/// Custom HTTP headers for an API call.
///
/// Names and values are validated when the request is built, so an invalid
/// header surfaces as an error from the call rather than from this builder.
///
/// # Example
///
/// ```rust
/// use auth_sdk::CallHeaders;
///
/// let headers = CallHeaders::new()
///     .add_header("X-Request-ID", "abc-123-def")
///     .add_header("Accept-Language", "fr");
/// assert_eq!(headers.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallHeaders {
    headers: Vec<(String, String)>,
}

impl CallHeaders {
    /// Creates a new empty `CallHeaders` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header, later values for the same name are appended.
    #[must_use]
    pub fn add_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Returns the number of headers.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Returns `true` when no header was added.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Converts to an HTTP header map.
    ///
    /// # Errors
    ///
    /// Returns an error if a name or a value is not a valid HTTP header.
    pub fn to_header_map(&self) -> Result<HeaderMap, ApiClientError> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            map.append(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }
        Ok(map)
    }
}

impl<K, V> FromIterator<(K, V)> for CallHeaders
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |headers, (name, value)| {
                headers.add_header(name, value)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_header_map() {
        let headers = CallHeaders::new()
            .add_header("X-Trace", "1")
            .add_header("x-trace", "2")
            .add_header("Accept", "application/json");

        let map = headers.to_header_map().expect("valid headers");

        let traces = map.get_all("x-trace").iter().collect::<Vec<_>>();
        assert_eq!(traces, ["1", "2"]);
        assert_eq!(map.get("accept").expect("accept"), "application/json");
    }

    #[test]
    fn should_reject_invalid_header_name() {
        let headers = CallHeaders::new().add_header("bad header", "value");
        let err = headers.to_header_map().expect_err("invalid name");
        assert!(matches!(err, ApiClientError::InvalidHeaderName(_)));
    }

    #[test]
    fn should_reject_invalid_header_value() {
        let headers = CallHeaders::new().add_header("X-Bad", "line\nbreak");
        let err = headers.to_header_map().expect_err("invalid value");
        assert!(matches!(err, ApiClientError::InvalidHeaderValue(_)));
    }

    #[test]
    fn should_collect_from_pairs() {
        let headers = [("X-One", "1"), ("X-Two", "2")]
            .into_iter()
            .collect::<CallHeaders>();
        assert_eq!(headers.len(), 2);
        assert!(!headers.is_empty());
    }
}
