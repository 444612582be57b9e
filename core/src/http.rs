//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! `BotClient` turns a `Request` into an `HttpRequest` and decodes an
//! `HttpResponse` without ever touching the network. The caller (host) runs
//! the round-trip with whatever HTTP stack it already has. All fields are
//! owned so values can be moved across threads or queued freely.

/// HTTP method for a request. The Bot API accepts GET and POST; this crate
/// always emits POST so parameters travel in the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `BotClient::build_request`. The caller executes it and returns the
/// corresponding `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed to
/// `BotClient::parse_response`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
