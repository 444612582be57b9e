//! Stateless HTTP request builder and response parser for the Bot API.
//!
//! # Design
//! `BotClient` holds the API URL and the bot token and carries no mutable
//! state between calls. `build_request` turns any `Request` produced by a
//! builder in `methods` into an `HttpRequest`; `parse_response` decodes the
//! `{ok, result, ...}` envelope of the matching `HttpResponse` into the typed
//! result. The caller executes the HTTP round-trip in between, keeping the
//! core deterministic and free of I/O dependencies.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{decode_value, ApiError, DecodeError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::request::Request;
use crate::types::ApiResponse;

/// Address of the public Bot API server.
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Synchronous, stateless client for the Bot API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Clone)]
pub struct BotClient {
    api_url: String,
    token: String,
}

impl BotClient {
    pub fn new(token: &str) -> Self {
        Self::with_api_url(DEFAULT_API_URL, token)
    }

    /// Target a self-hosted Bot API server instead of the public one.
    pub fn with_api_url(api_url: &str, token: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Full URL of a remote method, token included.
    pub fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{method}", self.api_url, self.token)
    }

    /// Describe `request` as a JSON POST to its method URL.
    ///
    /// Upload placeholders stay in the body as `{}`; a transport that supports
    /// uploads must re-encode such requests as `multipart/form-data`.
    pub fn build_request(&self, request: &Request) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(&request.body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        tracing::debug!(method = request.method, params = request.body.len(), "built request");
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.method_url(request.method),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Decode the envelope of `response` and return its `result` as `T`.
    pub fn parse_response<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        let envelope: ApiResponse<Value> = match serde_json::from_str(&response.body) {
            Ok(envelope) => envelope,
            Err(_) if !response.is_success() => {
                return Err(ApiError::Http {
                    status: response.status,
                    body: response.body,
                });
            }
            Err(e) => return Err(ApiError::Deserialization(e.into())),
        };

        if !envelope.ok {
            let code = envelope.error_code.unwrap_or(i32::from(response.status));
            let description = envelope.description.unwrap_or_default();
            tracing::debug!(code, %description, "API reported an error");
            return Err(ApiError::Api {
                code,
                description,
                parameters: envelope.parameters,
            });
        }

        let result = envelope
            .result
            .ok_or_else(|| DecodeError::MissingField("result".to_string()))?;
        Ok(decode_value(result)?)
    }
}

impl fmt::Debug for BotClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotClient")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .finish()
    }
}
