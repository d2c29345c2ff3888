use headers::{ContentType, HeaderMapExt};
use http::header::{AUTHORIZATION, HeaderValue};
use http::Method;
use reqwest::{Body, Request};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::oauth2::OAuth2Token;
use super::{ApiClientError, RequestOptions};

/// Joins the base URL and the endpoint with a single `/`, as is.
pub(super) fn build_url(base_url: &str, endpoint: &str) -> Result<Url, ApiClientError> {
    let url = format!("{base_url}/{endpoint}").parse::<Url>()?;
    Ok(url)
}

pub(super) fn build_request(
    method: Method,
    mut url: Url,
    options: RequestOptions,
    token: &OAuth2Token,
) -> Result<Request, ApiClientError> {
    let RequestOptions {
        json,
        body,
        query,
        headers,
        timeout,
    } = options;

    // Parameters are appended after any query already in the endpoint
    if let Some(query) = query.filter(|query| !query.is_empty()) {
        let query_string = query.to_query_string()?;
        let merged = match url.query() {
            Some(existing) if !existing.is_empty() => format!("{existing}&{query_string}"),
            _ => query_string,
        };
        url.set_query(Some(&merged));
    }

    let mut request = Request::new(method, url);
    *request.timeout_mut() = timeout;

    let req_headers = request.headers_mut();

    // Custom headers first, the bearer token wins over a caller-provided Authorization
    if let Some(headers) = headers {
        req_headers.extend(headers.to_header_map()?);
    }

    let mut authorization = HeaderValue::from_str(&format!("Bearer {}", token.access_token()))?;
    authorization.set_sensitive(true);
    req_headers.insert(AUTHORIZATION, authorization);

    let payload = match (json, body) {
        (Some(json), body) => {
            if body.is_some() {
                warn!("both a JSON and a raw body were given, the raw body is dropped");
            }
            Some((ContentType::json(), serde_json::to_vec(&json)?))
        }
        (None, Some(body)) => Some((body.content_type, body.data)),
        (None, None) => None,
    };

    if let Some((content_type, data)) = payload {
        req_headers.typed_insert(content_type);
        *request.body_mut() = Some(Body::from(data));
    }

    Ok(request)
}

pub(super) async fn exchange(
    client: &reqwest::Client,
    request: Request,
) -> Result<Value, ApiClientError> {
    let url = request.url().to_string();

    debug!(?request, "sending...");
    let response = client.execute(request).await?;
    debug!(?response, "...receiving");

    let status = response.status();
    let body = response.text().await?;

    if status.as_u16() >= 400 {
        return Err(ApiClientError::Api { status, body });
    }

    serde_json::from_str(&body).map_err(|error| ApiClientError::Decode { url, error, body })
}
