use serde::Serialize;

use crate::client::ApiClientError;

/// Query parameters for an API call, kept in insertion order.
///
/// Repeated names are allowed and sent as repeated pairs (`tag=a&tag=b`).
///
/// # Example
///
/// ```rust
/// use auth_sdk::CallQuery;
///
/// let query = CallQuery::new()
///     .add_param("page", 2)
///     .add_param("tag", "blue")
///     .add_param("tag", "red");
/// assert_eq!(query.to_query_string()?, "page=2&tag=blue&tag=red");
/// # Ok::<(), auth_sdk::ApiClientError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CallQuery {
    params: Vec<(String, String)>,
}

impl CallQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a query parameter.
    #[must_use]
    pub fn add_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((name.into(), value.to_string()));
        self
    }

    /// Returns `true` when no parameter was added.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Encodes the parameters as an `application/x-www-form-urlencoded` query string.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters cannot be encoded.
    pub fn to_query_string(&self) -> Result<String, ApiClientError> {
        let query = serde_urlencoded::to_string(&self.params)?;
        Ok(query)
    }
}

impl<K, V> FromIterator<(K, V)> for CallQuery
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |query, (name, value)| query.add_param(name, value))
    }
}
