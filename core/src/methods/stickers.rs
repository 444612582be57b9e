use serde::Serialize;

use super::SendOptions;
use crate::request::Request;
use crate::types::{ChatId, InputFile, InputFileOrString, MaskPosition};

/// Send a .WEBP, animated .TGS or video .WEBM sticker.
pub fn send_sticker(chat_id: impl Into<ChatId>, sticker: impl Into<InputFileOrString>, options: SendOptions) -> Request {
    Request::new("sendSticker")
        .with("chat_id", chat_id.into())
        .with("sticker", sticker.into())
        .with_options(options)
}

/// Returns `StickerSet`.
pub fn get_sticker_set(name: impl Into<String>) -> Request {
    Request::new("getStickerSet").with("name", name.into())
}

/// Upload a .PNG for later use in `create_new_sticker_set` and `add_sticker_to_set`. Returns `File`.
pub fn upload_sticker_file(user_id: i64, png_sticker: InputFile) -> Request {
    Request::new("uploadStickerFile")
        .with("user_id", user_id)
        .with("png_sticker", png_sticker)
}

/// Sticker files of a new sticker: exactly one of the three must be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StickerFiles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub png_sticker: Option<InputFileOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tgs_sticker: Option<InputFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webm_sticker: Option<InputFile>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateNewStickerSetOptions {
    #[serde(flatten)]
    pub files: StickerFiles,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_masks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_position: Option<MaskPosition>,
}

/// `name` must end in `_by_<bot_username>`.
pub fn create_new_sticker_set(
    user_id: i64,
    name: impl Into<String>,
    title: impl Into<String>,
    emojis: impl Into<String>,
    options: CreateNewStickerSetOptions,
) -> Request {
    Request::new("createNewStickerSet")
        .with("user_id", user_id)
        .with("name", name.into())
        .with("title", title.into())
        .with("emojis", emojis.into())
        .with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddStickerToSetOptions {
    #[serde(flatten)]
    pub files: StickerFiles,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_position: Option<MaskPosition>,
}

pub fn add_sticker_to_set(
    user_id: i64,
    name: impl Into<String>,
    emojis: impl Into<String>,
    options: AddStickerToSetOptions,
) -> Request {
    Request::new("addStickerToSet")
        .with("user_id", user_id)
        .with("name", name.into())
        .with("emojis", emojis.into())
        .with_options(options)
}

/// Move a sticker (by `file_id`) to a zero-based position in its set.
pub fn set_sticker_position_in_set(sticker: impl Into<String>, position: u32) -> Request {
    Request::new("setStickerPositionInSet")
        .with("sticker", sticker.into())
        .with("position", position)
}

pub fn delete_sticker_from_set(sticker: impl Into<String>) -> Request {
    Request::new("deleteStickerFromSet").with("sticker", sticker.into())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetStickerSetThumbOptions {
    /// Absent drops the thumbnail and the first sticker is used instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<InputFileOrString>,
}

pub fn set_sticker_set_thumb(name: impl Into<String>, user_id: i64, options: SetStickerSetThumbOptions) -> Request {
    Request::new("setStickerSetThumb")
        .with("name", name.into())
        .with("user_id", user_id)
        .with_options(options)
}
