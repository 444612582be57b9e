use serde::{Deserialize, Serialize};

use super::{tag, ChatId, UpdateKind, WebAppInfo};
use crate::one_of::one_of;

/// A bot command shown in the client's command menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommand {
    /// 1-32 characters: lowercase letters, digits and underscores.
    pub command: String,
    pub description: String,
}

impl BotCommand {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
        }
    }
}

one_of! {
    /// Which users a list of bot commands applies to.
    ///
    /// Decode order: `Default`, `AllPrivateChats`, `AllGroupChats`,
    /// `AllChatAdministrators`, `Chat`, `ChatAdministrators`, `ChatMember`.
    #[derive(Eq)]
    pub enum BotCommandScope {
        Default(BotCommandScopeDefault),
        AllPrivateChats(BotCommandScopeAllPrivateChats),
        AllGroupChats(BotCommandScopeAllGroupChats),
        AllChatAdministrators(BotCommandScopeAllChatAdministrators),
        Chat(BotCommandScopeChat),
        ChatAdministrators(BotCommandScopeChatAdministrators),
        ChatMember(BotCommandScopeChatMember),
    }
}

impl BotCommandScope {
    pub fn chat(chat_id: impl Into<ChatId>) -> Self {
        BotCommandScope::Chat(BotCommandScopeChat {
            kind: tag::ScopeChat,
            chat_id: chat_id.into(),
        })
    }

    pub fn chat_member(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        BotCommandScope::ChatMember(BotCommandScopeChatMember {
            kind: tag::ScopeChatMember,
            chat_id: chat_id.into(),
            user_id,
        })
    }
}

impl Default for BotCommandScope {
    fn default() -> Self {
        BotCommandScope::Default(BotCommandScopeDefault::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommandScopeDefault {
    #[serde(rename = "type")]
    pub kind: tag::ScopeDefault,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommandScopeAllPrivateChats {
    #[serde(rename = "type")]
    pub kind: tag::AllPrivateChats,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommandScopeAllGroupChats {
    #[serde(rename = "type")]
    pub kind: tag::AllGroupChats,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommandScopeAllChatAdministrators {
    #[serde(rename = "type")]
    pub kind: tag::AllChatAdministrators,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommandScopeChat {
    #[serde(rename = "type")]
    pub kind: tag::ScopeChat,
    pub chat_id: ChatId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommandScopeChatAdministrators {
    #[serde(rename = "type")]
    pub kind: tag::ChatAdministrators,
    pub chat_id: ChatId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommandScopeChatMember {
    #[serde(rename = "type")]
    pub kind: tag::ScopeChatMember,
    pub chat_id: ChatId,
    pub user_id: i64,
}

one_of! {
    /// Behavior of the bot's menu button in a private chat.
    ///
    /// Decode order: `Commands`, `WebApp`, `Default`.
    #[derive(Eq)]
    pub enum MenuButton {
        Commands(MenuButtonCommands),
        WebApp(MenuButtonWebApp),
        Default(MenuButtonDefault),
    }
}

impl MenuButton {
    pub fn web_app(text: impl Into<String>, url: impl Into<String>) -> Self {
        MenuButton::WebApp(MenuButtonWebApp {
            kind: tag::WebApp,
            text: text.into(),
            web_app: WebAppInfo { url: url.into() },
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuButtonCommands {
    #[serde(rename = "type")]
    pub kind: tag::Commands,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuButtonWebApp {
    #[serde(rename = "type")]
    pub kind: tag::WebApp,
    pub text: String,
    pub web_app: WebAppInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuButtonDefault {
    #[serde(rename = "type")]
    pub kind: tag::MenuDefault,
}

/// Current status of a webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookInfo {
    /// Empty when no webhook is set.
    pub url: String,
    pub has_custom_certificate: bool,
    pub pending_update_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_synchronization_error_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<UpdateKind>>,
}
