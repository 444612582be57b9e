//! Editing and deleting sent messages.
//!
//! The edit methods return the edited `Message`, or `true` when the target is
//! an inline message.

use serde::Serialize;

use super::EditTarget;
use crate::request::Request;
use crate::types::{ChatId, InlineKeyboardMarkup, InputMedia, MessageEntity, ParseMode};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditMessageTextOptions {
    #[serde(flatten)]
    pub target: EditTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

pub fn edit_message_text(text: impl Into<String>, options: EditMessageTextOptions) -> Request {
    Request::new("editMessageText").with("text", text.into()).with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditMessageCaptionOptions {
    #[serde(flatten)]
    pub target: EditTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

pub fn edit_message_caption(options: EditMessageCaptionOptions) -> Request {
    Request::new("editMessageCaption").with_options(options)
}

/// Target and markup shared by `edit_message_media` and `edit_message_reply_markup`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditMessageMarkupOptions {
    #[serde(flatten)]
    pub target: EditTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

/// Replace the media of an animation, audio, document, photo or video message.
pub fn edit_message_media(media: impl Into<InputMedia>, options: EditMessageMarkupOptions) -> Request {
    Request::new("editMessageMedia").with("media", media.into()).with_options(options)
}

pub fn edit_message_reply_markup(options: EditMessageMarkupOptions) -> Request {
    Request::new("editMessageReplyMarkup").with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StopPollOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

/// Returns the stopped `Poll`.
pub fn stop_poll(chat_id: impl Into<ChatId>, message_id: i64, options: StopPollOptions) -> Request {
    Request::new("stopPoll")
        .with("chat_id", chat_id.into())
        .with("message_id", message_id)
        .with_options(options)
}

/// Delete a message less than 48 hours old.
pub fn delete_message(chat_id: impl Into<ChatId>, message_id: i64) -> Request {
    Request::new("deleteMessage")
        .with("chat_id", chat_id.into())
        .with("message_id", message_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{InlineKeyboardButton, InputMediaVideo};
    use serde_json::json;

    fn keyboard() -> InlineKeyboardMarkup {
        InlineKeyboardMarkup::default().row(vec![InlineKeyboardButton::callback("OK", "ok")])
    }

    #[test]
    fn edit_text_in_chat_and_inline() {
        let req = edit_message_text("new", EditMessageTextOptions { target: EditTarget::chat(1, 2), ..Default::default() });
        assert_eq!(req.keys(), vec!["chat_id", "message_id", "text"]);

        let req = edit_message_text(
            "new",
            EditMessageTextOptions {
                target: EditTarget::inline("inl-1"),
                parse_mode: Some(ParseMode::Html),
                entities: Some(Vec::new()),
                disable_web_page_preview: Some(true),
                reply_markup: Some(keyboard()),
            },
        );
        assert_eq!(
            req.keys(),
            vec!["disable_web_page_preview", "entities", "inline_message_id", "parse_mode", "reply_markup", "text"]
        );
        assert_eq!(
            req.get("reply_markup"),
            Some(&json!({"inline_keyboard": [[{"text": "OK", "callback_data": "ok"}]]}))
        );
    }

    #[test]
    fn caption_media_and_markup() {
        assert!(edit_message_caption(Default::default()).body.is_empty());
        let req = edit_message_caption(EditMessageCaptionOptions {
            target: EditTarget::chat(1, 2),
            caption: Some("c".to_string()),
            parse_mode: Some(ParseMode::Markdown),
            caption_entities: Some(Vec::new()),
            reply_markup: Some(keyboard()),
        });
        assert_eq!(
            req.keys(),
            vec!["caption", "caption_entities", "chat_id", "message_id", "parse_mode", "reply_markup"]
        );

        let req = edit_message_media(InputMediaVideo::new("vid"), EditMessageMarkupOptions::default());
        assert_eq!(req.get("media"), Some(&json!({"type": "video", "media": "vid"})));

        let req = edit_message_reply_markup(EditMessageMarkupOptions {
            target: EditTarget::chat("@channel", 3),
            reply_markup: Some(keyboard()),
        });
        assert_eq!(req.keys(), vec!["chat_id", "message_id", "reply_markup"]);
    }

    #[test]
    fn stop_poll_and_delete() {
        assert_eq!(stop_poll(1, 2, Default::default()).keys(), vec!["chat_id", "message_id"]);
        assert_eq!(
            stop_poll(1, 2, StopPollOptions { reply_markup: Some(keyboard()) }).keys(),
            vec!["chat_id", "message_id", "reply_markup"]
        );
        let req = delete_message(1, 2);
        assert_eq!(req.method, "deleteMessage");
        assert_eq!(req.keys(), vec!["chat_id", "message_id"]);
    }
}
