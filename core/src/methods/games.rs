use serde::Serialize;

use crate::request::Request;
use crate::types::InlineKeyboardMarkup;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SendGameOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_sending_without_reply: Option<bool>,
    /// The first button must launch the game; absent adds a default "Play" button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

/// Games can only be sent to chats identified by number.
pub fn send_game(chat_id: i64, game_short_name: impl Into<String>, options: SendGameOptions) -> Request {
    Request::new("sendGame")
        .with("chat_id", chat_id)
        .with("game_short_name", game_short_name.into())
        .with_options(options)
}

/// The game message a score applies to: a chat message or an inline message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
}

impl GameTarget {
    pub fn chat(chat_id: i64, message_id: i64) -> Self {
        Self {
            chat_id: Some(chat_id),
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

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetGameScoreOptions {
    /// Allow the score to decrease.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_edit_message: Option<bool>,
    #[serde(flatten)]
    pub target: GameTarget,
}

/// Returns the edited `Message`, or `true` for inline messages.
pub fn set_game_score(user_id: i64, score: u64, options: SetGameScoreOptions) -> Request {
    Request::new("setGameScore")
        .with("user_id", user_id)
        .with("score", score)
        .with_options(options)
}

/// Returns `Vec<GameHighScore>` for the user and a few neighbors.
pub fn get_game_high_scores(user_id: i64, target: GameTarget) -> Request {
    Request::new("getGameHighScores")
        .with("user_id", user_id)
        .with_options(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_game_keys() {
        assert_eq!(send_game(1, "tetris", Default::default()).keys(), vec!["chat_id", "game_short_name"]);
        let req = send_game(
            1,
            "tetris",
            SendGameOptions {
                disable_notification: Some(true),
                protect_content: Some(true),
                reply_to_message_id: Some(2),
                allow_sending_without_reply: Some(true),
                reply_markup: Some(InlineKeyboardMarkup::default()),
            },
        );
        assert_eq!(req.body.len(), 7);
    }

    #[test]
    fn scores_target_chat_or_inline_message() {
        let req = set_game_score(
            5,
            100,
            SetGameScoreOptions { force: Some(true), disable_edit_message: Some(false), target: GameTarget::chat(1, 2) },
        );
        assert_eq!(
            req.keys(),
            vec!["chat_id", "disable_edit_message", "force", "message_id", "score", "user_id"]
        );
        let req = get_game_high_scores(5, GameTarget::inline("inl"));
        assert_eq!(req.keys(), vec!["inline_message_id", "user_id"]);
        assert_eq!(get_game_high_scores(5, GameTarget::default()).keys(), vec!["user_id"]);
    }
}
