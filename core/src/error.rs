//! Error types for decoding wire models and interpreting API responses.
//!
//! # Design
//! Request builders cannot fail, so every error in this crate comes from the
//! decode side. `DecodeError` names the three ways a wire value can be
//! rejected: a union with no matching candidate, a missing required field, or
//! a value of the wrong JSON type. `ApiError` wraps it together with the
//! failures reported by the remote server, which the transport hands back as
//! an `HttpResponse`.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::one_of::NO_CANDIDATE_PREFIX;
use crate::types::ResponseParameters;

/// Why a JSON value could not be decoded into a wire model type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Every candidate shape of a union was tried and none decoded.
    #[error("no candidate of {union} matched")]
    NoCandidate { union: String },

    /// A required field was absent.
    #[error("missing required field `{0}`")]
    MissingField(String),

    /// A field was present with the wrong JSON type or value.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// The input was not well-formed JSON.
    #[error("malformed JSON: {0}")]
    Syntax(String),
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        let message = err.to_string();
        if let Some(rest) = message.strip_prefix(NO_CANDIDATE_PREFIX) {
            let union = rest.split(" matched").next().unwrap_or(rest);
            return DecodeError::NoCandidate { union: union.to_string() };
        }
        if let Some(rest) = message.strip_prefix("missing field `") {
            let field = rest.split('`').next().unwrap_or(rest);
            return DecodeError::MissingField(field.to_string());
        }
        if err.is_data() {
            DecodeError::TypeMismatch(message)
        } else {
            DecodeError::Syntax(message)
        }
    }
}

/// Decode a wire model from raw JSON text.
pub fn decode<T: DeserializeOwned>(json: &str) -> Result<T, DecodeError> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a wire model from an already-parsed JSON value.
pub fn decode_value<T: DeserializeOwned>(value: Value) -> Result<T, DecodeError> {
    Ok(serde_json::from_value(value)?)
}

/// Errors returned by `BotClient` when building requests or parsing responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with `"ok": false`.
    #[error("API error {code}: {description}")]
    Api {
        code: i32,
        description: String,
        parameters: Option<ResponseParameters>,
    },

    /// The server returned a non-2xx status without a parsable envelope.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be decoded into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[from] DecodeError),

    /// The request body could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Seconds to wait before retrying, when the server asked for a pause.
    pub fn retry_after(&self) -> Option<u32> {
        match self {
            ApiError::Api { parameters: Some(p), .. } => p.retry_after,
            _ => None,
        }
    }

    /// The supergroup a group chat has been migrated to, if reported.
    pub fn migrate_to_chat_id(&self) -> Option<i64> {
        match self {
            ApiError::Api { parameters: Some(p), .. } => p.migrate_to_chat_id,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChatId, ReplyMarkup, User};

    #[test]
    fn missing_field_is_classified() {
        let err = decode::<User>(r#"{"id": 1, "is_bot": false}"#).unwrap_err();
        assert_eq!(err, DecodeError::MissingField("first_name".to_string()));
    }

    #[test]
    fn wrong_type_is_classified() {
        let err = decode::<User>(r#"{"id": "one", "is_bot": false, "first_name": "A"}"#).unwrap_err();
        assert!(matches!(err, DecodeError::TypeMismatch(_)), "{err:?}");
    }

    #[test]
    fn union_failure_is_a_single_error() {
        let err = decode::<ReplyMarkup>(r#"{"selective": true}"#).unwrap_err();
        assert_eq!(err, DecodeError::NoCandidate { union: "ReplyMarkup".to_string() });

        let err = decode_value::<ChatId>(serde_json::json!(true)).unwrap_err();
        assert_eq!(err, DecodeError::NoCandidate { union: "ChatId".to_string() });
    }

    #[test]
    fn malformed_json_is_syntax() {
        let err = decode::<User>("{not json").unwrap_err();
        assert!(matches!(err, DecodeError::Syntax(_)));
    }

    #[test]
    fn retry_after_reads_parameters() {
        let err = ApiError::Api {
            code: 429,
            description: "Too Many Requests: retry after 5".to_string(),
            parameters: Some(ResponseParameters { migrate_to_chat_id: None, retry_after: Some(5) }),
        };
        assert_eq!(err.retry_after(), Some(5));
        assert_eq!(err.migrate_to_chat_id(), None);
        assert_eq!(err.to_string(), "API error 429: Too Many Requests: retry after 5");
    }
}
