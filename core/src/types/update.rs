use serde::{Deserialize, Serialize};

use super::{
    CallbackQuery, ChatJoinRequest, ChatMemberUpdated, ChosenInlineResult, InlineQuery, Message, Poll, PollAnswer,
    PreCheckoutQuery, ShippingQuery,
};

/// An incoming update. At most one of the optional fields is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_post: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_channel_post: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_query: Option<InlineQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chosen_inline_result: Option<ChosenInlineResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_query: Option<CallbackQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_query: Option<ShippingQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_checkout_query: Option<PreCheckoutQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll: Option<Poll>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll_answer: Option<PollAnswer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_chat_member: Option<ChatMemberUpdated>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_member: Option<ChatMemberUpdated>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_join_request: Option<ChatJoinRequest>,
}

impl Update {
    /// Which payload this update carries, or `None` for a kind this crate
    /// does not know about yet.
    pub fn kind(&self) -> Option<UpdateKind> {
        let kind = if self.message.is_some() {
            UpdateKind::Message
        } else if self.edited_message.is_some() {
            UpdateKind::EditedMessage
        } else if self.channel_post.is_some() {
            UpdateKind::ChannelPost
        } else if self.edited_channel_post.is_some() {
            UpdateKind::EditedChannelPost
        } else if self.inline_query.is_some() {
            UpdateKind::InlineQuery
        } else if self.chosen_inline_result.is_some() {
            UpdateKind::ChosenInlineResult
        } else if self.callback_query.is_some() {
            UpdateKind::CallbackQuery
        } else if self.shipping_query.is_some() {
            UpdateKind::ShippingQuery
        } else if self.pre_checkout_query.is_some() {
            UpdateKind::PreCheckoutQuery
        } else if self.poll.is_some() {
            UpdateKind::Poll
        } else if self.poll_answer.is_some() {
            UpdateKind::PollAnswer
        } else if self.my_chat_member.is_some() {
            UpdateKind::MyChatMember
        } else if self.chat_member.is_some() {
            UpdateKind::ChatMember
        } else if self.chat_join_request.is_some() {
            UpdateKind::ChatJoinRequest
        } else {
            return None;
        };
        Some(kind)
    }

    /// Offset to pass to `getUpdates` to confirm this update.
    pub fn next_offset(&self) -> i64 {
        self.update_id + 1
    }
}

/// Update kinds, as listed in `allowed_updates`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateKind {
    Message,
    EditedMessage,
    ChannelPost,
    EditedChannelPost,
    InlineQuery,
    ChosenInlineResult,
    CallbackQuery,
    ShippingQuery,
    PreCheckoutQuery,
    Poll,
    PollAnswer,
    MyChatMember,
    ChatMember,
    ChatJoinRequest,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_reports_present_payload() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 10,
            "callback_query": {
                "id": "cb",
                "from": {"id": 1, "is_bot": false, "first_name": "A"},
                "chat_instance": "ci",
                "data": "yes"
            }
        }))
        .unwrap();
        assert_eq!(update.kind(), Some(UpdateKind::CallbackQuery));
        assert_eq!(update.next_offset(), 11);
    }

    #[test]
    fn unknown_payload_is_ignored() {
        let update: Update = serde_json::from_value(json!({"update_id": 3, "message_reaction": {}})).unwrap();
        assert_eq!(update.kind(), None);
    }

    #[test]
    fn update_kind_wire_names() {
        assert_eq!(
            serde_json::to_value([UpdateKind::MyChatMember, UpdateKind::ChatJoinRequest]).unwrap(),
            json!(["my_chat_member", "chat_join_request"])
        );
    }

    #[test]
    fn non_message_update_round_trips() {
        let wire = json!({
            "update_id": 77,
            "pre_checkout_query": {
                "id": "pcq",
                "from": {"id": 3, "is_bot": false, "first_name": "Bo"},
                "currency": "EUR",
                "total_amount": 500,
                "invoice_payload": "p"
            }
        });
        let update: Update = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(update.kind(), Some(UpdateKind::PreCheckoutQuery));
        assert!(update.message.is_none());
        assert_eq!(serde_json::to_value(&update).unwrap(), wire);
        assert_eq!(serde_json::from_value::<Update>(serde_json::to_value(&update).unwrap()).unwrap(), update);
    }
}
