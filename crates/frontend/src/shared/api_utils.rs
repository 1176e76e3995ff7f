//! Request gateway for frontend-backend communication
//!
//! Every server call of the panels goes through [`Gateway::request`]. It sends
//! JSON with session cookies and folds every failure (transport error, error
//! status, unreadable payload) into a single [`ApiError`] carrying the message
//! the user will see.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use web_sys::RequestCredentials;

/// Message used when an error response carries no text at all
pub const GENERIC_FAILURE: &str = "Request failed";
/// Message used when a success response is not valid JSON
pub const INVALID_RESPONSE: &str = "Invalid server response";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// One HTTP exchange. The browser implementation is [`FetchTransport`].
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `fetch` with `Content-Type: application/json` and same-origin cookies
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        }
        .header("Content-Type", "application/json")
        .credentials(RequestCredentials::Include);

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::new(format!("Failed to build request: {}", e)))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Network error: {}", e)))?;

        let status = response.status();
        if status == 204 {
            return Ok(HttpResponse {
                status,
                body: String::new(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::new(format!("Failed to read response: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}

/// Marker returned for `204 No Content`
pub fn success_marker() -> Value {
    json!({ "status": "success" })
}

/// Normalize a raw response into JSON or an error message.
///
/// - 204: success marker, the body is ignored
/// - error status: `error` or `message` field of a JSON body, else the raw
///   text with surrounding whitespace removed (servers append a newline),
///   else [`GENERIC_FAILURE`]
/// - success: parsed JSON, `{}` for an empty body, else [`INVALID_RESPONSE`];
///   a whitespace-only body is not empty
pub fn interpret_response(status: u16, body: &str) -> Result<Value, ApiError> {
    if status == 204 {
        return Ok(success_marker());
    }

    if !(200..300).contains(&status) {
        return Err(ApiError::new(error_message(body)));
    }

    if body.is_empty() {
        return Ok(json!({}));
    }

    serde_json::from_str(body).map_err(|_| ApiError::new(INVALID_RESPONSE))
}

fn error_message(body: &str) -> String {
    let text = body.trim();
    if text.is_empty() {
        return GENERIC_FAILURE.to_string();
    }

    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(text) {
        for key in ["error", "message"] {
            if let Some(Value::String(message)) = map.get(key) {
                if !message.is_empty() {
                    return message.clone();
                }
            }
        }
    }

    text.to_string()
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url(&config.api.base, "/api/booking-items");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Percent-encode one path segment (ids, dates)
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[derive(Debug, Clone, Default)]
pub struct Gateway<T: HttpTransport = FetchTransport> {
    transport: T,
    base: String,
}

impl<T: HttpTransport> Gateway<T> {
    pub fn new(transport: T, base: impl Into<String>) -> Self {
        Self {
            transport,
            base: base.into(),
        }
    }

    /// Perform one exchange and normalize the outcome.
    pub async fn request(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let body = body
            .map(|value| serde_json::to_string(&value))
            .transpose()
            .map_err(|e| ApiError::new(format!("Failed to serialize request: {}", e)))?;

        let request = HttpRequest {
            method,
            url: api_url(&self.base, path),
            body,
        };

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("{} {} failed: {}", method.as_str(), path, e);
                return Err(e);
            }
        };
        log::debug!("{} {} -> {}", method.as_str(), path, response.status);

        interpret_response(response.status, &response.body).map_err(|e| {
            log::warn!("{} {} -> {}: {}", method.as_str(), path, response.status, e);
            e
        })
    }

    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.request(path, Method::Get, None).await
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        self.request(path, Method::Post, Some(to_json(body)?)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.request(path, Method::Delete, None).await
    }

    /// GET and decode into a typed record
    pub async fn get_as<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let value = self.get(path).await?;
        decode(value)
    }
}

pub fn to_json<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::new(format!("Failed to serialize request: {}", e)))
}

pub fn decode<R: DeserializeOwned>(value: Value) -> Result<R, ApiError> {
    serde_json::from_value(value).map_err(|e| {
        log::warn!("Unexpected response shape: {}", e);
        ApiError::new(INVALID_RESPONSE)
    })
}
