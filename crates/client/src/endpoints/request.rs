//! Authenticated HTTP verbs against the Sumologic API.
//!
//! Every request is sent exactly once. A failure is classified and returned
//! to the caller immediately; there is no retry and no caching.
//!
//! # Invariants
//! - `GET` maps HTTP 404 to `Ok(None)`; every other verb maps it to
//!   [`ClientError::NotFound`].
//! - `PUT` sends the resource's current `ETag` as `If-Match` when the API
//!   provides one.
//! - Credentials are never logged.

use reqwest::header::{ACCEPT, CONTENT_TYPE, ETAG, IF_MATCH};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::Serialize;
use tracing::debug;

use crate::auth::AccessCredentials;
use crate::error::{ClientError, Result};
use crate::models::ApiErrorResponse;

const APPLICATION_JSON: &str = "application/json";

/// Response body plus the entity tag the API attached to it, if any.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub body: Vec<u8>,
    pub etag: Option<String>,
}

/// Join a relative API path onto the base URL with exactly one `/`.
pub fn resolve_url(base_url: &str, path: &str) -> Result<Url> {
    let joined = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", joined, e)))
}

/// Issue a GET.
///
/// Returns `Ok(None)` when the API answers 404.
pub async fn get(
    http: &Client,
    base_url: &str,
    credentials: &AccessCredentials,
    path: &str,
    query: &[(&str, String)],
) -> Result<Option<RawResponse>> {
    let url = resolve_url(base_url, path)?;
    let mut builder = http.get(url).header(ACCEPT, APPLICATION_JSON);
    if !query.is_empty() {
        builder = builder.query(query);
    }

    let response = send(credentials.apply(builder), "GET", path).await?;
    if response.status().as_u16() == 404 {
        debug!(path, "Resource not found, treating as absent");
        return Ok(None);
    }
    let response = check_status(response).await?;

    let etag = response
        .headers()
        .get(ETAG)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let body = response.bytes().await?.to_vec();
    Ok(Some(RawResponse { body, etag }))
}

/// Issue a POST with a JSON body.
pub async fn post<T: Serialize + ?Sized>(
    http: &Client,
    base_url: &str,
    credentials: &AccessCredentials,
    path: &str,
    body: &T,
) -> Result<Vec<u8>> {
    let url = resolve_url(base_url, path)?;
    let builder = http
        .post(url)
        .header(ACCEPT, APPLICATION_JSON)
        .header(CONTENT_TYPE, APPLICATION_JSON)
        .body(encode(body)?);

    let response = send(credentials.apply(builder), "POST", path).await?;
    let response = check_status(response).await?;
    Ok(response.bytes().await?.to_vec())
}

/// Issue a PUT with a JSON body.
///
/// The current `ETag` of `path` is fetched first and sent as `If-Match`.
/// If that lookup finds nothing the update fails with
/// [`ClientError::NotFound`] without sending the PUT.
pub async fn put<T: Serialize + ?Sized>(
    http: &Client,
    base_url: &str,
    credentials: &AccessCredentials,
    path: &str,
    body: &T,
) -> Result<Vec<u8>> {
    let current = get(http, base_url, credentials, path, &[])
        .await?
        .ok_or_else(|| ClientError::NotFound(path.to_string()))?;

    let url = resolve_url(base_url, path)?;
    let mut builder = http
        .put(url)
        .header(ACCEPT, APPLICATION_JSON)
        .header(CONTENT_TYPE, APPLICATION_JSON)
        .body(encode(body)?);
    if let Some(etag) = current.etag {
        builder = builder.header(IF_MATCH, etag);
    }

    let response = send(credentials.apply(builder), "PUT", path).await?;
    let response = check_status(response).await?;
    Ok(response.bytes().await?.to_vec())
}

/// Issue a DELETE. Any non-success status, 404 included, is an error.
pub async fn delete(
    http: &Client,
    base_url: &str,
    credentials: &AccessCredentials,
    path: &str,
) -> Result<()> {
    let url = resolve_url(base_url, path)?;
    let builder = http.delete(url).header(ACCEPT, APPLICATION_JSON);

    let response = send(credentials.apply(builder), "DELETE", path).await?;
    check_status(response).await?;
    Ok(())
}

fn encode<T: Serialize + ?Sized>(body: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(body).map_err(|e| ClientError::Serialization(e.to_string()))
}

async fn send(builder: RequestBuilder, method: &str, path: &str) -> Result<Response> {
    let response = builder.send().await?;
    debug!(
        method,
        path,
        status = response.status().as_u16(),
        "Sumologic API call"
    );
    Ok(response)
}

/// Pass success responses through; turn anything else into a classified error.
async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let parsed = serde_json::from_str::<ApiErrorResponse>(&body).ok();
    let code = parsed.as_ref().and_then(|p| p.code());
    let message = parsed.and_then(|p| p.message()).unwrap_or(body);

    Err(match status {
        401 => ClientError::Unauthorized(message),
        403 => ClientError::Forbidden(message),
        404 => ClientError::NotFound(format!("{}: {}", url, message)),
        _ => ClientError::ApiError {
            status,
            url,
            message,
            code,
        },
    })
}
