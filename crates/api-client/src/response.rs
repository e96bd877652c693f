//! Uniform wrapper around a completed HTTP exchange or transport failure
//!
//! Every resource operation resolves to an [`ApiResponse`], whether the
//! API answered with 2xx, answered with an error status, or the
//! transport failed before any response arrived. Callers inspect
//! [`ApiResponse::is_success`] / [`ApiResponse::is_error`] instead of
//! matching on a result type.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

/// Outcome of a single API request
///
/// Exactly one of the two stored outcomes holds: either a status was
/// received (possibly with an empty body) or a transport error is
/// present. Immutable after construction.
#[derive(Debug)]
pub struct ApiResponse {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: Vec<u8>,
    error: Option<reqwest::Error>,
}

impl ApiResponse {
    /// Wrap a received HTTP response, buffering its body.
    ///
    /// A body-read failure keeps the status and headers and leaves the
    /// body empty; [`Self::json`] then yields the empty mapping.
    pub(crate) async fn from_http(response: reqwest::Response) -> Self {
        let status = response.status();
        let headers = response.headers().clone();
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                warn!(status = status.as_u16(), error = %e, "Failed to read response body");
                Vec::new()
            }
        };

        Self {
            status: Some(status),
            headers,
            body,
            error: None,
        }
    }

    /// Wrap a transport failure that occurred before any response arrived.
    pub(crate) fn from_transport_error(error: reqwest::Error) -> Self {
        Self {
            status: None,
            headers: HeaderMap::new(),
            body: Vec::new(),
            error: Some(error),
        }
    }

    /// HTTP status code, if a response was received
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.status.map(|s| s.as_u16())
    }

    /// Response headers (empty when the transport failed)
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Transport error, if the request never produced a response
    #[must_use]
    pub fn error(&self) -> Option<&reqwest::Error> {
        self.error.as_ref()
    }

    /// True iff a response was received with a status in [200, 300)
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_some_and(|s| s.is_success())
    }

    /// True iff the request did not succeed
    ///
    /// An error-status response and a transport failure both report
    /// `is_error() == true`.
    #[must_use]
    pub fn is_error(&self) -> bool {
        !self.is_success() || self.error.is_some()
    }

    /// Raw body bytes (empty when the transport failed or the body
    /// could not be read)
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Decode the body as a JSON object
    ///
    /// Never fails: an empty body, malformed JSON, or a non-object
    /// top-level value all yield the empty mapping. The body is
    /// buffered at construction, so repeated calls re-decode the same
    /// bytes.
    #[must_use]
    pub fn json(&self) -> Map<String, Value> {
        match self.json_value() {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    /// Decode the body as an arbitrary JSON value
    ///
    /// Yields an empty JSON object for an empty or malformed body.
    #[must_use]
    pub fn json_value(&self) -> Value {
        if self.body.is_empty() {
            return Value::Object(Map::new());
        }

        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to decode response body as JSON");
            Value::Object(Map::new())
        })
    }

    /// Decode the body into a typed value, if it matches
    #[must_use]
    pub fn json_as<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_slice(&self.body).ok()
    }
}
