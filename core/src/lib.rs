//! Request builders and wire model types for the Telegram Bot API.
//!
//! # Overview
//! Every remote method has a builder in `methods` that packages its typed
//! parameters into a `Request { method, body }`. Every object the API sends
//! or receives has a serde type in `types` whose JSON keys are the exact wire
//! names. Nothing here touches the network: `BotClient` turns a `Request`
//! into a plain-data `HttpRequest` and decodes the `HttpResponse` the caller
//! got back (host-does-IO pattern).
//!
//! # Design
//! - Builders are pure functions and cannot fail. Absent optional parameters
//!   never reach the body.
//! - Fields that hold one of several shapes without a discriminator are
//!   `one_of!` unions, decoded by trying each candidate in a documented order.
//! - Types use owned `String` / `Vec` fields so values can be queued or moved
//!   across threads freely.
//! - DTOs are defined independently from the mock server; integration tests
//!   catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod methods;
mod one_of;
pub mod request;
pub mod types;

pub use client::{BotClient, DEFAULT_API_URL};
pub use error::{decode, decode_value, ApiError, DecodeError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use request::Request;
