//! `send*` methods and the other ways of posting content to a chat.
//!
//! Every builder here returns a `Request` whose result is the sent `Message`,
//! except `send_media_group` (`Vec<Message>`), `copy_message` (`MessageId`) and
//! `send_chat_action` (`bool`).

use serde::Serialize;

use super::{EditTarget, SendOptions};
use crate::request::Request;
use crate::types::{
    ChatAction, ChatId, DiceEmoji, InlineKeyboardMarkup, InputFileOrString, InputMedia, MessageEntity, ParseMode,
    PollType,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendMessageOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    /// Used instead of `parse_mode` when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,
    #[serde(flatten)]
    pub send: SendOptions,
}

/// Send a text message of 1-4096 characters.
pub fn send_message(chat_id: impl Into<ChatId>, text: impl Into<String>, options: SendMessageOptions) -> Request {
    Request::new("sendMessage")
        .with("chat_id", chat_id.into())
        .with("text", text.into())
        .with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ForwardMessageOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,
}

pub fn forward_message(
    chat_id: impl Into<ChatId>,
    from_chat_id: impl Into<ChatId>,
    message_id: i64,
    options: ForwardMessageOptions,
) -> Request {
    Request::new("forwardMessage")
        .with("chat_id", chat_id.into())
        .with("from_chat_id", from_chat_id.into())
        .with("message_id", message_id)
        .with_options(options)
}

/// Caption fields shared by the media `send*` methods and `copy_message`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CaptionOptions {
    /// 0-1024 characters after entity parsing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CopyMessageOptions {
    /// Replaces the original caption; absent keeps it.
    #[serde(flatten)]
    pub caption: CaptionOptions,
    #[serde(flatten)]
    pub send: SendOptions,
}

/// Copy a message without a link to the original. Returns `MessageId`.
pub fn copy_message(
    chat_id: impl Into<ChatId>,
    from_chat_id: impl Into<ChatId>,
    message_id: i64,
    options: CopyMessageOptions,
) -> Request {
    Request::new("copyMessage")
        .with("chat_id", chat_id.into())
        .with("from_chat_id", from_chat_id.into())
        .with("message_id", message_id)
        .with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendPhotoOptions {
    #[serde(flatten)]
    pub caption: CaptionOptions,
    #[serde(flatten)]
    pub send: SendOptions,
}

pub fn send_photo(chat_id: impl Into<ChatId>, photo: impl Into<InputFileOrString>, options: SendPhotoOptions) -> Request {
    Request::new("sendPhoto")
        .with("chat_id", chat_id.into())
        .with("photo", photo.into())
        .with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendAudioOptions {
    #[serde(flatten)]
    pub caption: CaptionOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<InputFileOrString>,
    #[serde(flatten)]
    pub send: SendOptions,
}

/// Send an .MP3 or .M4A file to be shown in the music player.
pub fn send_audio(chat_id: impl Into<ChatId>, audio: impl Into<InputFileOrString>, options: SendAudioOptions) -> Request {
    Request::new("sendAudio")
        .with("chat_id", chat_id.into())
        .with("audio", audio.into())
        .with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendDocumentOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<InputFileOrString>,
    #[serde(flatten)]
    pub caption: CaptionOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_content_type_detection: Option<bool>,
    #[serde(flatten)]
    pub send: SendOptions,
}

pub fn send_document(
    chat_id: impl Into<ChatId>,
    document: impl Into<InputFileOrString>,
    options: SendDocumentOptions,
) -> Request {
    Request::new("sendDocument")
        .with("chat_id", chat_id.into())
        .with("document", document.into())
        .with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendVideoOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<InputFileOrString>,
    #[serde(flatten)]
    pub caption: CaptionOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_streaming: Option<bool>,
    #[serde(flatten)]
    pub send: SendOptions,
}

pub fn send_video(chat_id: impl Into<ChatId>, video: impl Into<InputFileOrString>, options: SendVideoOptions) -> Request {
    Request::new("sendVideo")
        .with("chat_id", chat_id.into())
        .with("video", video.into())
        .with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendAnimationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<InputFileOrString>,
    #[serde(flatten)]
    pub caption: CaptionOptions,
    #[serde(flatten)]
    pub send: SendOptions,
}

/// Send a GIF or an H.264/MPEG-4 AVC video without sound.
pub fn send_animation(
    chat_id: impl Into<ChatId>,
    animation: impl Into<InputFileOrString>,
    options: SendAnimationOptions,
) -> Request {
    Request::new("sendAnimation")
        .with("chat_id", chat_id.into())
        .with("animation", animation.into())
        .with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendVoiceOptions {
    #[serde(flatten)]
    pub caption: CaptionOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(flatten)]
    pub send: SendOptions,
}

/// Send an .OGG file encoded with OPUS to be shown as a playable voice message.
pub fn send_voice(chat_id: impl Into<ChatId>, voice: impl Into<InputFileOrString>, options: SendVoiceOptions) -> Request {
    Request::new("sendVoice")
        .with("chat_id", chat_id.into())
        .with("voice", voice.into())
        .with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendVideoNoteOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Video width and height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<InputFileOrString>,
    #[serde(flatten)]
    pub send: SendOptions,
}

pub fn send_video_note(
    chat_id: impl Into<ChatId>,
    video_note: impl Into<InputFileOrString>,
    options: SendVideoNoteOptions,
) -> Request {
    Request::new("sendVideoNote")
        .with("chat_id", chat_id.into())
        .with("video_note", video_note.into())
        .with_options(options)
}

/// `sendMediaGroup` takes every delivery option except `reply_markup`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SendMediaGroupOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_sending_without_reply: Option<bool>,
}

/// Send 2-10 photos, videos, documents or audios as an album.
pub fn send_media_group(chat_id: impl Into<ChatId>, media: Vec<InputMedia>, options: SendMediaGroupOptions) -> Request {
    Request::new("sendMediaGroup")
        .with("chat_id", chat_id.into())
        .with("media", media)
        .with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendLocationOptions {
    /// Radius of uncertainty in meters, 0-1500.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f64>,
    /// Seconds the location is updated for, 60-86400.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximity_alert_radius: Option<u32>,
    #[serde(flatten)]
    pub send: SendOptions,
}

pub fn send_location(chat_id: impl Into<ChatId>, latitude: f64, longitude: f64, options: SendLocationOptions) -> Request {
    Request::new("sendLocation")
        .with("chat_id", chat_id.into())
        .with("latitude", latitude)
        .with("longitude", longitude)
        .with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EditMessageLiveLocationOptions {
    #[serde(flatten)]
    pub target: EditTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximity_alert_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

/// Move a live location. Returns the edited `Message`, or `true` for inline messages.
pub fn edit_message_live_location(latitude: f64, longitude: f64, options: EditMessageLiveLocationOptions) -> Request {
    Request::new("editMessageLiveLocation")
        .with("latitude", latitude)
        .with("longitude", longitude)
        .with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StopMessageLiveLocationOptions {
    #[serde(flatten)]
    pub target: EditTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

pub fn stop_message_live_location(options: StopMessageLiveLocationOptions) -> Request {
    Request::new("stopMessageLiveLocation").with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendVenueOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foursquare_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foursquare_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_place_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_place_type: Option<String>,
    #[serde(flatten)]
    pub send: SendOptions,
}

pub fn send_venue(
    chat_id: impl Into<ChatId>,
    latitude: f64,
    longitude: f64,
    title: impl Into<String>,
    address: impl Into<String>,
    options: SendVenueOptions,
) -> Request {
    Request::new("sendVenue")
        .with("chat_id", chat_id.into())
        .with("latitude", latitude)
        .with("longitude", longitude)
        .with("title", title.into())
        .with("address", address.into())
        .with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendContactOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// vCard data, 0-2048 bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcard: Option<String>,
    #[serde(flatten)]
    pub send: SendOptions,
}

pub fn send_contact(
    chat_id: impl Into<ChatId>,
    phone_number: impl Into<String>,
    first_name: impl Into<String>,
    options: SendContactOptions,
) -> Request {
    Request::new("sendContact")
        .with("chat_id", chat_id.into())
        .with("phone_number", phone_number.into())
        .with("first_name", first_name.into())
        .with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendPollOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_anonymous: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PollType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allows_multiple_answers: Option<bool>,
    /// Required for quizzes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_option_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation_parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation_entities: Option<Vec<MessageEntity>>,
    /// Seconds the poll stays open, 5-600. Not together with `close_date`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,
    #[serde(flatten)]
    pub send: SendOptions,
}

/// Send a native poll with 2-10 answer options.
pub fn send_poll(
    chat_id: impl Into<ChatId>,
    question: impl Into<String>,
    options: Vec<String>,
    poll_options: SendPollOptions,
) -> Request {
    Request::new("sendPoll")
        .with("chat_id", chat_id.into())
        .with("question", question.into())
        .with("options", options)
        .with_options(poll_options)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendDiceOptions {
    /// Server default is the die.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<DiceEmoji>,
    #[serde(flatten)]
    pub send: SendOptions,
}

pub fn send_dice(chat_id: impl Into<ChatId>, options: SendDiceOptions) -> Request {
    Request::new("sendDice").with("chat_id", chat_id.into()).with_options(options)
}

/// Show a status such as "typing…" for up to 5 seconds.
pub fn send_chat_action(chat_id: impl Into<ChatId>, action: ChatAction) -> Request {
    Request::new("sendChatAction")
        .with("chat_id", chat_id.into())
        .with("action", action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{InputFile, InputMediaPhoto, MessageEntityType, ReplyKeyboardRemove, ReplyMarkup};
    use serde_json::json;

    fn full_send_options() -> SendOptions {
        SendOptions {
            disable_notification: Some(true),
            protect_content: Some(true),
            reply_to_message_id: Some(10),
            allow_sending_without_reply: Some(true),
            reply_markup: Some(ReplyMarkup::from(ReplyKeyboardRemove::default())),
        }
    }

    const SEND_KEYS: [&str; 5] = [
        "allow_sending_without_reply",
        "disable_notification",
        "protect_content",
        "reply_markup",
        "reply_to_message_id",
    ];

    fn with_send_keys(keys: &[&'static str]) -> Vec<&'static str> {
        let mut all: Vec<&str> = keys.iter().chain(SEND_KEYS.iter()).copied().collect();
        all.sort_unstable();
        all
    }

    #[test]
    fn send_message_with_required_only() {
        let req = send_message(12345, "hi", Default::default());
        assert_eq!(req.method, "sendMessage");
        assert_eq!(serde_json::Value::Object(req.body), json!({"chat_id": 12345, "text": "hi"}));
    }

    #[test]
    fn send_message_with_every_option() {
        let req = send_message(
            "@channel",
            "*hi*",
            SendMessageOptions {
                parse_mode: Some(ParseMode::MarkdownV2),
                entities: Some(vec![MessageEntity::new(MessageEntityType::Bold, 0, 2)]),
                disable_web_page_preview: Some(true),
                send: full_send_options(),
            },
        );
        assert_eq!(
            req.keys(),
            with_send_keys(&["chat_id", "disable_web_page_preview", "entities", "parse_mode", "text"])
        );
        assert_eq!(req.get("chat_id"), Some(&json!("@channel")));
        assert_eq!(req.get("parse_mode"), Some(&json!("MarkdownV2")));
        assert_eq!(req.get("reply_markup"), Some(&json!({"remove_keyboard": true})));
    }

    #[test]
    fn forward_and_copy() {
        let req = forward_message(1, 2, 3, ForwardMessageOptions::default());
        assert_eq!(req.keys(), vec!["chat_id", "from_chat_id", "message_id"]);
        let req = forward_message(
            1,
            2,
            3,
            ForwardMessageOptions { disable_notification: Some(true), protect_content: Some(false) },
        );
        assert_eq!(
            req.keys(),
            vec!["chat_id", "disable_notification", "from_chat_id", "message_id", "protect_content"]
        );

        let req = copy_message(1, 2, 3, CopyMessageOptions::default());
        assert_eq!(req.method, "copyMessage");
        assert_eq!(req.keys(), vec!["chat_id", "from_chat_id", "message_id"]);
        let req = copy_message(
            1,
            2,
            3,
            CopyMessageOptions {
                caption: CaptionOptions {
                    caption: Some("new".to_string()),
                    parse_mode: Some(ParseMode::Html),
                    caption_entities: Some(Vec::new()),
                },
                send: full_send_options(),
            },
        );
        assert_eq!(
            req.keys(),
            with_send_keys(&["caption", "caption_entities", "chat_id", "from_chat_id", "message_id", "parse_mode"])
        );
    }

    #[test]
    fn media_sends_encode_file_or_string() {
        let req = send_photo(1, "AgACAgIAAxkBAAIB", SendPhotoOptions::default());
        assert_eq!(req.keys(), vec!["chat_id", "photo"]);
        assert_eq!(req.get("photo"), Some(&json!("AgACAgIAAxkBAAIB")));

        let req = send_document(1, InputFile {}, SendDocumentOptions::default());
        assert_eq!(req.get("document"), Some(&json!({})));

        let req = send_audio(
            1,
            "https://example.com/a.mp3",
            SendAudioOptions {
                caption: CaptionOptions { caption: Some("song".to_string()), ..Default::default() },
                duration: Some(180),
                performer: Some("Band".to_string()),
                title: Some("Song".to_string()),
                thumb: Some(InputFile {}.into()),
                send: SendOptions::default(),
            },
        );
        assert_eq!(req.keys(), vec!["audio", "caption", "chat_id", "duration", "performer", "thumb", "title"]);
    }

    #[test]
    fn video_animation_voice_and_note() {
        let req = send_video(
            1,
            "vid",
            SendVideoOptions {
                duration: Some(10),
                width: Some(640),
                height: Some(480),
                thumb: Some("thumb".into()),
                caption: CaptionOptions::default(),
                supports_streaming: Some(true),
                send: SendOptions::default(),
            },
        );
        assert_eq!(
            req.keys(),
            vec!["chat_id", "duration", "height", "supports_streaming", "thumb", "video", "width"]
        );

        assert_eq!(send_animation(1, "gif", Default::default()).keys(), vec!["animation", "chat_id"]);
        assert_eq!(send_voice(1, "ogg", Default::default()).keys(), vec!["chat_id", "voice"]);

        let req = send_video_note(
            1,
            "note",
            SendVideoNoteOptions { duration: Some(5), length: Some(240), thumb: None, send: SendOptions::default() },
        );
        assert_eq!(req.keys(), vec!["chat_id", "duration", "length", "video_note"]);
    }

    #[test]
    fn media_group_encodes_typed_media() {
        let media = vec![
            InputMedia::from(InputMediaPhoto::new("photo-1")),
            InputMedia::from(InputMediaPhoto::new("photo-2")),
        ];
        let req = send_media_group(
            -100,
            media,
            SendMediaGroupOptions { reply_to_message_id: Some(4), ..Default::default() },
        );
        assert_eq!(req.keys(), vec!["chat_id", "media", "reply_to_message_id"]);
        assert_eq!(
            req.get("media"),
            Some(&json!([{"type": "photo", "media": "photo-1"}, {"type": "photo", "media": "photo-2"}]))
        );
    }

    #[test]
    fn locations_and_venues() {
        let req = send_location(1, 52.5, 13.4, SendLocationOptions::default());
        assert_eq!(req.keys(), vec!["chat_id", "latitude", "longitude"]);
        let req = send_location(
            1,
            52.5,
            13.4,
            SendLocationOptions {
                horizontal_accuracy: Some(15.0),
                live_period: Some(60),
                heading: Some(90),
                proximity_alert_radius: Some(100),
                send: SendOptions::default(),
            },
        );
        assert_eq!(
            req.keys(),
            vec!["chat_id", "heading", "horizontal_accuracy", "latitude", "live_period", "longitude", "proximity_alert_radius"]
        );

        let req = edit_message_live_location(
            52.6,
            13.5,
            EditMessageLiveLocationOptions { target: EditTarget::chat(1, 9), ..Default::default() },
        );
        assert_eq!(req.keys(), vec!["chat_id", "latitude", "longitude", "message_id"]);

        let req = stop_message_live_location(StopMessageLiveLocationOptions {
            target: EditTarget::inline("inl"),
            reply_markup: None,
        });
        assert_eq!(req.keys(), vec!["inline_message_id"]);

        let req = send_venue(1, 52.5, 13.4, "Office", "Main st. 1", SendVenueOptions::default());
        assert_eq!(req.keys(), vec!["address", "chat_id", "latitude", "longitude", "title"]);
    }

    #[test]
    fn contacts_polls_and_dice() {
        let req = send_contact(1, "+100", "Ann", SendContactOptions::default());
        assert_eq!(req.keys(), vec!["chat_id", "first_name", "phone_number"]);

        let req = send_poll(
            1,
            "Which?",
            vec!["a".to_string(), "b".to_string()],
            SendPollOptions { kind: Some(PollType::Quiz), correct_option_id: Some(1), ..Default::default() },
        );
        assert_eq!(req.keys(), vec!["chat_id", "correct_option_id", "options", "question", "type"]);
        assert_eq!(req.get("type"), Some(&json!("quiz")));

        let req = send_dice(1, SendDiceOptions { emoji: Some(DiceEmoji::Darts), send: SendOptions::default() });
        assert_eq!(req.get("emoji"), Some(&json!("🎯")));
        assert_eq!(send_dice(1, Default::default()).keys(), vec!["chat_id"]);
    }

    #[test]
    fn chat_action_is_snake_case() {
        let req = send_chat_action(1, ChatAction::UploadPhoto);
        assert_eq!(req.get("action"), Some(&json!("upload_photo")));
    }
}
