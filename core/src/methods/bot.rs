use serde::Serialize;

use crate::request::Request;
use crate::types::{BotCommand, BotCommandScope, ChatAdministratorRights, MenuButton};

/// Returns the bot's own `User`.
pub fn get_me() -> Request {
    Request::new("getMe")
}

/// Log out from the cloud Bot API server before moving to a local one.
pub fn log_out() -> Request {
    Request::new("logOut")
}

/// Close the bot instance before moving it from one local server to another.
pub fn close() -> Request {
    Request::new("close")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnswerCallbackQueryOptions {
    /// Notification text, 0-200 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Show an alert instead of a notification at the top of the chat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_alert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<u32>,
}

pub fn answer_callback_query(callback_query_id: impl Into<String>, options: AnswerCallbackQueryOptions) -> Request {
    Request::new("answerCallbackQuery")
        .with("callback_query_id", callback_query_id.into())
        .with_options(options)
}

/// Scope and language shared by the `*MyCommands` methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MyCommandsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<BotCommandScope>,
    /// Two-letter ISO 639-1 code; empty or absent means all users in the scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

pub fn set_my_commands(commands: Vec<BotCommand>, options: MyCommandsOptions) -> Request {
    Request::new("setMyCommands").with("commands", commands).with_options(options)
}

pub fn delete_my_commands(options: MyCommandsOptions) -> Request {
    Request::new("deleteMyCommands").with_options(options)
}

/// Returns `Vec<BotCommand>`.
pub fn get_my_commands(options: MyCommandsOptions) -> Request {
    Request::new("getMyCommands").with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetChatMenuButtonOptions {
    /// Private chat to change; absent changes the default button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_button: Option<MenuButton>,
}

pub fn set_chat_menu_button(options: SetChatMenuButtonOptions) -> Request {
    Request::new("setChatMenuButton").with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetChatMenuButtonOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,
}

/// Returns `MenuButton`.
pub fn get_chat_menu_button(options: GetChatMenuButtonOptions) -> Request {
    Request::new("getChatMenuButton").with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetMyDefaultAdministratorRightsOptions {
    /// Absent clears the default rights.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rights: Option<ChatAdministratorRights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_channels: Option<bool>,
}

pub fn set_my_default_administrator_rights(options: SetMyDefaultAdministratorRightsOptions) -> Request {
    Request::new("setMyDefaultAdministratorRights").with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetMyDefaultAdministratorRightsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_channels: Option<bool>,
}

/// Returns `ChatAdministratorRights`.
pub fn get_my_default_administrator_rights(options: GetMyDefaultAdministratorRightsOptions) -> Request {
    Request::new("getMyDefaultAdministratorRights").with_options(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parameterless_methods() {
        for (req, method) in [(get_me(), "getMe"), (log_out(), "logOut"), (close(), "close")] {
            assert_eq!(req.method, method);
            assert!(req.body.is_empty());
        }
    }

    #[test]
    fn answer_callback_query_keys() {
        let req = answer_callback_query("cb-1", AnswerCallbackQueryOptions::default());
        assert_eq!(req.keys(), vec!["callback_query_id"]);

        let req = answer_callback_query(
            "cb-1",
            AnswerCallbackQueryOptions {
                text: Some("Done".to_string()),
                show_alert: Some(true),
                url: Some("t.me/bot?start=x".to_string()),
                cache_time: Some(60),
            },
        );
        assert_eq!(req.keys(), vec!["cache_time", "callback_query_id", "show_alert", "text", "url"]);
    }

    #[test]
    fn set_my_commands_encodes_scope_with_its_type() {
        let req = set_my_commands(
            vec![BotCommand::new("start", "Start the bot")],
            MyCommandsOptions {
                scope: Some(BotCommandScope::chat(-100)),
                language_code: Some("en".to_string()),
            },
        );
        assert_eq!(req.keys(), vec!["commands", "language_code", "scope"]);
        assert_eq!(req.get("scope"), Some(&json!({"type": "chat", "chat_id": -100})));
        assert_eq!(
            req.get("commands"),
            Some(&json!([{"command": "start", "description": "Start the bot"}]))
        );
    }

    #[test]
    fn menu_button_and_rights() {
        let req = set_chat_menu_button(SetChatMenuButtonOptions {
            chat_id: Some(7),
            menu_button: Some(MenuButton::web_app("Open", "https://example.com/app")),
        });
        assert_eq!(req.keys(), vec!["chat_id", "menu_button"]);
        assert_eq!(get_chat_menu_button(Default::default()).keys(), Vec::<&str>::new());

        let req = set_my_default_administrator_rights(SetMyDefaultAdministratorRightsOptions {
            rights: Some(ChatAdministratorRights::default()),
            for_channels: Some(true),
        });
        assert_eq!(req.keys(), vec!["for_channels", "rights"]);
        let req = get_my_default_administrator_rights(GetMyDefaultAdministratorRightsOptions { for_channels: Some(false) });
        assert_eq!(req.get("for_channels"), Some(&json!(false)));
    }
}
