//! One builder per Bot API method.
//!
//! # Design
//! Every builder is a plain function named after the remote method. Required
//! parameters are positional; optional parameters are fields of a per-method
//! options struct whose `Default` leaves everything absent. The result is a
//! `Request` whose body holds exactly the parameters that are present.
//! Builders perform no validation and no I/O, so they cannot fail.

use serde::Serialize;

use crate::types::{ChatId, ReplyMarkup};

mod bot;
mod chat;
mod editing;
mod files;
mod games;
mod inline;
mod passport;
mod payments;
mod sending;
mod stickers;
mod updates;

pub use bot::*;
pub use chat::*;
pub use editing::*;
pub use files::*;
pub use games::*;
pub use inline::*;
pub use passport::*;
pub use payments::*;
pub use sending::*;
pub use stickers::*;
pub use updates::*;

/// Delivery parameters shared by the `send*` methods.
///
/// Flattened into each method's options struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendOptions {
    /// Deliver silently.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    /// Protect the sent message from forwarding and saving.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    /// Send even if the message to reply to is not found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_sending_without_reply: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendOptions {
    pub fn reply_to(message_id: i64) -> Self {
        Self {
            reply_to_message_id: Some(message_id),
            ..Self::default()
        }
    }
}

/// The message an edit applies to: either a chat message or an inline message.
///
/// Flattened into the options of the editing methods, so a default target
/// sends neither and leaves the choice to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<ChatId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
}

impl EditTarget {
    pub fn chat(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: Some(chat_id.into()),
            message_id: Some(message_id),
            inline_message_id: None,
        }
    }

    pub fn inline(inline_message_id: impl Into<String>) -> Self {
        Self {
            chat_id: None,
            message_id: None,
            inline_message_id: Some(inline_message_id.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_send_options_encode_as_empty_object() {
        assert_eq!(serde_json::to_value(SendOptions::default()).unwrap(), json!({}));
    }

    #[test]
    fn edit_target_encodes_only_the_chosen_form() {
        assert_eq!(
            serde_json::to_value(EditTarget::chat(5, 7)).unwrap(),
            json!({"chat_id": 5, "message_id": 7})
        );
        assert_eq!(
            serde_json::to_value(EditTarget::inline("abc")).unwrap(),
            json!({"inline_message_id": "abc"})
        );
    }
}
