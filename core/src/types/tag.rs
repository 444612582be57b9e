//! Fixed `type`, `status` and `source` values of the Bot API's variant objects.
//!
//! Each tag encodes as its string and refuses any other string on decode,
//! which is what lets a union tell e.g. `InputMediaPhoto` from
//! `InputMediaVideo` when both would otherwise accept the same fields.

use crate::one_of::wire_tag;

// `type` of input media and inline query results.
wire_tag! {
    Article = "article";
    Photo = "photo";
    Gif = "gif";
    Mpeg4Gif = "mpeg4_gif";
    Video = "video";
    Animation = "animation";
    Audio = "audio";
    Voice = "voice";
    Document = "document";
    Location = "location";
    Venue = "venue";
    Contact = "contact";
    Game = "game";
    Sticker = "sticker";
}

// `status` of chat members.
wire_tag! {
    Creator = "creator";
    Administrator = "administrator";
    Member = "member";
    Restricted = "restricted";
    Left = "left";
    Kicked = "kicked";
}

// `type` of bot command scopes.
wire_tag! {
    ScopeDefault = "default";
    AllPrivateChats = "all_private_chats";
    AllGroupChats = "all_group_chats";
    AllChatAdministrators = "all_chat_administrators";
    ScopeChat = "chat";
    ChatAdministrators = "chat_administrators";
    ScopeChatMember = "chat_member";
}

// `type` of menu buttons.
wire_tag! {
    Commands = "commands";
    WebApp = "web_app";
    MenuDefault = "default";
}

// `source` of passport element errors.
wire_tag! {
    Data = "data";
    FrontSide = "front_side";
    ReverseSide = "reverse_side";
    Selfie = "selfie";
    SourceFile = "file";
    SourceFiles = "files";
    TranslationFile = "translation_file";
    TranslationFiles = "translation_files";
    Unspecified = "unspecified";
}
