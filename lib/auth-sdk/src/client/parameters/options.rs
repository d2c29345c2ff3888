use std::time::Duration;

use serde_json::Value;

use super::{CallBody, CallHeaders, CallQuery};

/// Everything a call carries besides its method and endpoint.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
///
/// use auth_sdk::{CallHeaders, CallQuery, RequestOptions};
/// use serde_json::json;
///
/// let options = RequestOptions::new()
///     .with_json(json!({"name": "gizmo"}))
///     .with_query(CallQuery::new().add_param("dry_run", true))
///     .with_headers(CallHeaders::new().add_header("X-Request-ID", "42"))
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub(in crate::client) json: Option<Value>,
    pub(in crate::client) body: Option<CallBody>,
    pub(in crate::client) query: Option<CallQuery>,
    pub(in crate::client) headers: Option<CallHeaders>,
    pub(in crate::client) timeout: Option<Duration>,
}

impl RequestOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the JSON body. Takes precedence over [`with_body`](Self::with_body).
    #[must_use]
    pub fn with_json(mut self, json: Value) -> Self {
        self.json = Some(json);
        self
    }

    /// Sets a raw body, sent with its own content type.
    #[must_use]
    pub fn with_body(mut self, body: CallBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets the query parameters.
    #[must_use]
    pub fn with_query(mut self, query: CallQuery) -> Self {
        self.query = Some(query);
        self
    }

    /// Sets custom headers.
    #[must_use]
    pub fn with_headers(mut self, headers: CallHeaders) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Sets the timeout applied to the whole request.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(in crate::client) fn maybe_json(mut self, json: Option<Value>) -> Self {
        self.json = json;
        self
    }

    pub(in crate::client) fn maybe_body(mut self, body: Option<CallBody>) -> Self {
        self.body = body;
        self
    }

    pub(in crate::client) fn maybe_query(mut self, query: Option<CallQuery>) -> Self {
        self.query = query;
        self
    }

    pub(in crate::client) fn maybe_headers(mut self, headers: Option<CallHeaders>) -> Self {
        self.headers = headers;
        self
    }

    pub(in crate::client) fn maybe_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
