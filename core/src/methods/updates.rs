use serde::Serialize;

use crate::request::Request;
use crate::types::{InputFile, UpdateKind};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetUpdatesOptions {
    /// Identifier of the first update to return; see `Update::next_offset`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// 1-100, server default 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Long polling timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<UpdateKind>>,
}

/// Receive incoming updates using long polling. Returns `Vec<Update>`.
pub fn get_updates(options: GetUpdatesOptions) -> Request {
    Request::new("getUpdates").with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetWebhookOptions {
    /// Public key certificate, uploaded by the transport.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<InputFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// 1-100, server default 40.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<UpdateKind>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_pending_updates: Option<bool>,
    /// Sent back in the `X-Telegram-Bot-Api-Secret-Token` header of every webhook call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_token: Option<String>,
}

/// Specify a URL to receive updates via an outgoing webhook. An empty `url`
/// removes the webhook.
pub fn set_webhook(url: impl Into<String>, options: SetWebhookOptions) -> Request {
    Request::new("setWebhook").with("url", url.into()).with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeleteWebhookOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_pending_updates: Option<bool>,
}

pub fn delete_webhook(options: DeleteWebhookOptions) -> Request {
    Request::new("deleteWebhook").with_options(options)
}

/// Returns `WebhookInfo`.
pub fn get_webhook_info() -> Request {
    Request::new("getWebhookInfo")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_updates_without_options_has_empty_body() {
        let req = get_updates(GetUpdatesOptions::default());
        assert_eq!(req.method, "getUpdates");
        assert!(req.body.is_empty());
    }

    #[test]
    fn get_updates_with_every_option() {
        let req = get_updates(GetUpdatesOptions {
            offset: Some(101),
            limit: Some(50),
            timeout: Some(30),
            allowed_updates: Some(vec![UpdateKind::Message, UpdateKind::CallbackQuery]),
        });
        assert_eq!(req.keys(), vec!["allowed_updates", "limit", "offset", "timeout"]);
        assert_eq!(req.get("allowed_updates"), Some(&json!(["message", "callback_query"])));
    }

    #[test]
    fn set_webhook_required_and_all_options() {
        let req = set_webhook("https://example.com/hook", SetWebhookOptions::default());
        assert_eq!(req.keys(), vec!["url"]);

        let req = set_webhook(
            "https://example.com/hook",
            SetWebhookOptions {
                certificate: Some(InputFile {}),
                ip_address: Some("203.0.113.7".to_string()),
                max_connections: Some(10),
                allowed_updates: Some(vec![UpdateKind::Message]),
                drop_pending_updates: Some(true),
                secret_token: Some("s3cret".to_string()),
            },
        );
        assert_eq!(
            req.keys(),
            vec![
                "allowed_updates",
                "certificate",
                "drop_pending_updates",
                "ip_address",
                "max_connections",
                "secret_token",
                "url"
            ]
        );
        assert_eq!(req.get("certificate"), Some(&json!({})));
    }

    #[test]
    fn webhook_management_methods() {
        assert_eq!(get_webhook_info().method, "getWebhookInfo");
        let req = delete_webhook(DeleteWebhookOptions { drop_pending_updates: Some(true) });
        assert_eq!(req.method, "deleteWebhook");
        assert_eq!(req.get("drop_pending_updates"), Some(&json!(true)));
    }
}
