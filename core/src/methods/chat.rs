//! Chat administration: members, permissions, invite links and chat settings.

use serde::Serialize;

use crate::request::Request;
use crate::types::{ChatId, ChatPermissions, InputFile};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BanChatMemberOptions {
    /// Unix time the ban ends; absent or out of range bans forever.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoke_messages: Option<bool>,
}

pub fn ban_chat_member(chat_id: impl Into<ChatId>, user_id: i64, options: BanChatMemberOptions) -> Request {
    Request::new("banChatMember")
        .with("chat_id", chat_id.into())
        .with("user_id", user_id)
        .with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnbanChatMemberOptions {
    /// Do nothing if the user is not banned; otherwise an unban also removes a member.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_if_banned: Option<bool>,
}

pub fn unban_chat_member(chat_id: impl Into<ChatId>, user_id: i64, options: UnbanChatMemberOptions) -> Request {
    Request::new("unbanChatMember")
        .with("chat_id", chat_id.into())
        .with("user_id", user_id)
        .with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RestrictChatMemberOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until_date: Option<i64>,
}

pub fn restrict_chat_member(
    chat_id: impl Into<ChatId>,
    user_id: i64,
    permissions: ChatPermissions,
    options: RestrictChatMemberOptions,
) -> Request {
    Request::new("restrictChatMember")
        .with("chat_id", chat_id.into())
        .with("user_id", user_id)
        .with("permissions", permissions)
        .with_options(options)
}

/// Rights to grant; leaving every field absent demotes the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PromoteChatMemberOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_anonymous: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_chat: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_post_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_edit_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_delete_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_video_chats: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_restrict_members: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_promote_members: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_change_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_invite_users: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_pin_messages: Option<bool>,
}

pub fn promote_chat_member(chat_id: impl Into<ChatId>, user_id: i64, options: PromoteChatMemberOptions) -> Request {
    Request::new("promoteChatMember")
        .with("chat_id", chat_id.into())
        .with("user_id", user_id)
        .with_options(options)
}

pub fn set_chat_administrator_custom_title(
    chat_id: impl Into<ChatId>,
    user_id: i64,
    custom_title: impl Into<String>,
) -> Request {
    Request::new("setChatAdministratorCustomTitle")
        .with("chat_id", chat_id.into())
        .with("user_id", user_id)
        .with("custom_title", custom_title.into())
}

/// Ban a channel chat from posting on behalf of itself in a supergroup or channel.
pub fn ban_chat_sender_chat(chat_id: impl Into<ChatId>, sender_chat_id: i64) -> Request {
    Request::new("banChatSenderChat")
        .with("chat_id", chat_id.into())
        .with("sender_chat_id", sender_chat_id)
}

pub fn unban_chat_sender_chat(chat_id: impl Into<ChatId>, sender_chat_id: i64) -> Request {
    Request::new("unbanChatSenderChat")
        .with("chat_id", chat_id.into())
        .with("sender_chat_id", sender_chat_id)
}

pub fn set_chat_permissions(chat_id: impl Into<ChatId>, permissions: ChatPermissions) -> Request {
    Request::new("setChatPermissions")
        .with("chat_id", chat_id.into())
        .with("permissions", permissions)
}

/// Generate a new primary invite link, revoking the previous one. Returns the link as a string.
pub fn export_chat_invite_link(chat_id: impl Into<ChatId>) -> Request {
    Request::new("exportChatInviteLink").with("chat_id", chat_id.into())
}

/// Settings shared by `create_chat_invite_link` and `edit_chat_invite_link`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChatInviteLinkOptions {
    /// 0-32 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_date: Option<i64>,
    /// 1-99999; not together with `creates_join_request`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creates_join_request: Option<bool>,
}

/// Returns `ChatInviteLink`.
pub fn create_chat_invite_link(chat_id: impl Into<ChatId>, options: ChatInviteLinkOptions) -> Request {
    Request::new("createChatInviteLink")
        .with("chat_id", chat_id.into())
        .with_options(options)
}

/// Returns `ChatInviteLink`.
pub fn edit_chat_invite_link(
    chat_id: impl Into<ChatId>,
    invite_link: impl Into<String>,
    options: ChatInviteLinkOptions,
) -> Request {
    Request::new("editChatInviteLink")
        .with("chat_id", chat_id.into())
        .with("invite_link", invite_link.into())
        .with_options(options)
}

/// Returns the revoked `ChatInviteLink`.
pub fn revoke_chat_invite_link(chat_id: impl Into<ChatId>, invite_link: impl Into<String>) -> Request {
    Request::new("revokeChatInviteLink")
        .with("chat_id", chat_id.into())
        .with("invite_link", invite_link.into())
}

pub fn approve_chat_join_request(chat_id: impl Into<ChatId>, user_id: i64) -> Request {
    Request::new("approveChatJoinRequest")
        .with("chat_id", chat_id.into())
        .with("user_id", user_id)
}

pub fn decline_chat_join_request(chat_id: impl Into<ChatId>, user_id: i64) -> Request {
    Request::new("declineChatJoinRequest")
        .with("chat_id", chat_id.into())
        .with("user_id", user_id)
}

/// Photos can only be uploaded, so the transport must send this as multipart.
pub fn set_chat_photo(chat_id: impl Into<ChatId>, photo: InputFile) -> Request {
    Request::new("setChatPhoto")
        .with("chat_id", chat_id.into())
        .with("photo", photo)
}

pub fn delete_chat_photo(chat_id: impl Into<ChatId>) -> Request {
    Request::new("deleteChatPhoto").with("chat_id", chat_id.into())
}

/// New title, 1-255 characters.
pub fn set_chat_title(chat_id: impl Into<ChatId>, title: impl Into<String>) -> Request {
    Request::new("setChatTitle")
        .with("chat_id", chat_id.into())
        .with("title", title.into())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetChatDescriptionOptions {
    /// 0-255 characters; absent clears the description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub fn set_chat_description(chat_id: impl Into<ChatId>, options: SetChatDescriptionOptions) -> Request {
    Request::new("setChatDescription")
        .with("chat_id", chat_id.into())
        .with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PinChatMessageOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
}

pub fn pin_chat_message(chat_id: impl Into<ChatId>, message_id: i64, options: PinChatMessageOptions) -> Request {
    Request::new("pinChatMessage")
        .with("chat_id", chat_id.into())
        .with("message_id", message_id)
        .with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnpinChatMessageOptions {
    /// Absent unpins the most recent pinned message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<i64>,
}

pub fn unpin_chat_message(chat_id: impl Into<ChatId>, options: UnpinChatMessageOptions) -> Request {
    Request::new("unpinChatMessage")
        .with("chat_id", chat_id.into())
        .with_options(options)
}

pub fn unpin_all_chat_messages(chat_id: impl Into<ChatId>) -> Request {
    Request::new("unpinAllChatMessages").with("chat_id", chat_id.into())
}

pub fn leave_chat(chat_id: impl Into<ChatId>) -> Request {
    Request::new("leaveChat").with("chat_id", chat_id.into())
}

/// Returns `Chat` with the fields only `getChat` fills in.
pub fn get_chat(chat_id: impl Into<ChatId>) -> Request {
    Request::new("getChat").with("chat_id", chat_id.into())
}

/// Returns `Vec<ChatMember>` without other bots.
pub fn get_chat_administrators(chat_id: impl Into<ChatId>) -> Request {
    Request::new("getChatAdministrators").with("chat_id", chat_id.into())
}

/// Returns the member count as an integer.
pub fn get_chat_member_count(chat_id: impl Into<ChatId>) -> Request {
    Request::new("getChatMemberCount").with("chat_id", chat_id.into())
}

/// Returns `ChatMember`.
pub fn get_chat_member(chat_id: impl Into<ChatId>, user_id: i64) -> Request {
    Request::new("getChatMember")
        .with("chat_id", chat_id.into())
        .with("user_id", user_id)
}

pub fn set_chat_sticker_set(chat_id: impl Into<ChatId>, sticker_set_name: impl Into<String>) -> Request {
    Request::new("setChatStickerSet")
        .with("chat_id", chat_id.into())
        .with("sticker_set_name", sticker_set_name.into())
}

pub fn delete_chat_sticker_set(chat_id: impl Into<ChatId>) -> Request {
    Request::new("deleteChatStickerSet").with("chat_id", chat_id.into())
}
