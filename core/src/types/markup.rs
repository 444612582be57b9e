use serde::{Deserialize, Serialize};

use super::{CallbackGame, Message, PollType, User};
use crate::one_of::one_of;

one_of! {
    /// Additional interface options sent with a message.
    ///
    /// Decode order: `InlineKeyboard`, `ReplyKeyboard`, `ReplyKeyboardRemove`,
    /// `ForceReply`.
    #[derive(Eq)]
    pub enum ReplyMarkup {
        InlineKeyboard(InlineKeyboardMarkup),
        ReplyKeyboard(ReplyKeyboardMarkup),
        ReplyKeyboardRemove(ReplyKeyboardRemove),
        ForceReply(ForceReply),
    }
}

/// A custom keyboard with reply options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_keyboard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time_keyboard: Option<bool>,
    /// 1-64 characters shown in the input field while the keyboard is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_field_placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

impl ReplyKeyboardMarkup {
    pub fn new(keyboard: Vec<Vec<KeyboardButton>>) -> Self {
        Self {
            keyboard,
            resize_keyboard: None,
            one_time_keyboard: None,
            input_field_placeholder: None,
            selective: None,
        }
    }
}

/// One button of a reply keyboard. At most one optional field may be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardButton {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_contact: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_location: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_poll: Option<KeyboardButtonPollType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_app: Option<WebAppInfo>,
}

impl KeyboardButton {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            request_contact: None,
            request_location: None,
            request_poll: None,
            web_app: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardButtonPollType {
    /// `None` allows any poll type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PollType>,
}

/// Asks clients to remove the custom keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyKeyboardRemove {
    /// Always `true` on the wire.
    pub remove_keyboard: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

impl Default for ReplyKeyboardRemove {
    fn default() -> Self {
        Self {
            remove_keyboard: true,
            selective: None,
        }
    }
}

/// An inline keyboard that appears right next to the message it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    pub fn new(inline_keyboard: Vec<Vec<InlineKeyboardButton>>) -> Self {
        Self { inline_keyboard }
    }

    /// Append a row of buttons.
    pub fn row(mut self, buttons: Vec<InlineKeyboardButton>) -> Self {
        self.inline_keyboard.push(buttons);
        self
    }
}

/// One button of an inline keyboard. Exactly one optional field must be set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// 1-64 bytes sent back in the callback query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_app: Option<WebAppInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_url: Option<LoginUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_inline_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_inline_query_current_chat: Option<String>,
    /// Must be the first button of the first row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_game: Option<CallbackGame>,
    /// Must be the first button of the first row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay: Option<bool>,
}

impl InlineKeyboardButton {
    fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
            callback_data: None,
            web_app: None,
            login_url: None,
            switch_inline_query: None,
            switch_inline_query_current_chat: None,
            callback_game: None,
            pay: None,
        }
    }

    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            callback_data: Some(data.into()),
            ..Self::text_only(text)
        }
    }

    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::text_only(text)
        }
    }

    pub fn web_app(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            web_app: Some(WebAppInfo { url: url.into() }),
            ..Self::text_only(text)
        }
    }

    pub fn switch_inline_query(text: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            switch_inline_query: Some(query.into()),
            ..Self::text_only(text)
        }
    }

    pub fn pay(text: impl Into<String>) -> Self {
        Self {
            pay: Some(true),
            ..Self::text_only(text)
        }
    }
}

/// Parameters of an inline button used to automatically authorize a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginUrl {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_write_access: Option<bool>,
}

/// Asks clients to show a reply interface to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceReply {
    /// Always `true` on the wire.
    pub force_reply: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_field_placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

impl Default for ForceReply {
    fn default() -> Self {
        Self {
            force_reply: true,
            input_field_placeholder: None,
            selective: None,
        }
    }
}

/// A Web App to launch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAppInfo {
    pub url: String,
}

/// An incoming callback query from an inline keyboard button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    /// Absent when the message is too old.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
    pub chat_instance: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_short_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_order_is_documented() {
        assert_eq!(
            ReplyMarkup::CANDIDATES,
            &["InlineKeyboard", "ReplyKeyboard", "ReplyKeyboardRemove", "ForceReply"]
        );
    }

    #[test]
    fn remove_keyboard_decodes_as_removal() {
        let markup: ReplyMarkup = serde_json::from_value(json!({"remove_keyboard": true})).unwrap();
        assert_eq!(markup, ReplyMarkup::ReplyKeyboardRemove(ReplyKeyboardRemove::default()));
    }

    #[test]
    fn force_reply_decodes_as_force_reply() {
        let markup: ReplyMarkup = serde_json::from_value(json!({"force_reply": true, "selective": true})).unwrap();
        assert!(matches!(markup, ReplyMarkup::ForceReply(ForceReply { selective: Some(true), .. })));
    }

    #[test]
    fn inline_keyboard_never_falls_through() {
        // Also carries keys of later candidates; the earliest one must win.
        let markup: ReplyMarkup = serde_json::from_value(json!({
            "inline_keyboard": [[{"text": "Go", "callback_data": "go"}]],
            "keyboard": [[{"text": "x"}]],
            "remove_keyboard": true
        }))
        .unwrap();
        match markup {
            ReplyMarkup::InlineKeyboard(keyboard) => {
                assert_eq!(keyboard.inline_keyboard[0][0], InlineKeyboardButton::callback("Go", "go"));
            }
            other => panic!("expected inline keyboard, got {other:?}"),
        }
    }

    #[test]
    fn reply_keyboard_precedes_removal() {
        let markup: ReplyMarkup = serde_json::from_value(json!({
            "keyboard": [[{"text": "Yes"}, {"text": "No"}]],
            "remove_keyboard": true
        }))
        .unwrap();
        assert!(matches!(markup, ReplyMarkup::ReplyKeyboard(_)));
    }

    #[test]
    fn button_helpers_set_one_field() {
        let encoded = serde_json::to_value(InlineKeyboardButton::url("Docs", "https://example.com")).unwrap();
        assert_eq!(encoded, json!({"text": "Docs", "url": "https://example.com"}));
    }

    #[test]
    fn markup_round_trips() {
        let markup = ReplyMarkup::from(
            InlineKeyboardMarkup::default()
                .row(vec![InlineKeyboardButton::callback("A", "a"), InlineKeyboardButton::pay("Pay")])
                .row(vec![InlineKeyboardButton::web_app("App", "https://app.example")]),
        );
        let encoded = serde_json::to_string(&markup).unwrap();
        assert_eq!(serde_json::from_str::<ReplyMarkup>(&encoded).unwrap(), markup);
    }
}
