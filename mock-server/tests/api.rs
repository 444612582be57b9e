use std::sync::Arc;

use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_bot_api::{app, app_with_state, BotState, Message, User, WebhookInfo, BOT_USER_ID, DEFAULT_TOKEN};
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn call(method: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(format!("/bot{DEFAULT_TOKEN}/{method}"))
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

/// Unwrap a successful envelope into its result.
async fn result<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    assert_eq!(response.status(), StatusCode::OK);
    let envelope: Value = body_json(response).await;
    assert_eq!(envelope["ok"], true, "{envelope}");
    serde_json::from_value(envelope["result"].clone()).unwrap()
}

// --- envelope & routing ---

#[tokio::test]
async fn get_me_returns_bot_user() {
    let resp = app().oneshot(call("getMe", "")).await.unwrap();
    let me: User = result(resp).await;
    assert_eq!(me.id, BOT_USER_ID);
    assert!(me.is_bot);
}

#[tokio::test]
async fn wrong_token_returns_401() {
    let req = Request::builder()
        .method("POST")
        .uri("/bot999:nope/getMe")
        .body(String::new())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = body_json(resp).await;
    assert_eq!(body, json!({"ok": false, "error_code": 401, "description": "Unauthorized"}));
}

#[tokio::test]
async fn unknown_method_returns_404() {
    let resp = app().oneshot(call("launchRocket", "{}")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = body_json(resp).await;
    assert_eq!(body["description"], "Not Found");
}

#[tokio::test]
async fn malformed_body_returns_400() {
    let resp = app().oneshot(call("sendMessage", "{not json")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert_eq!(body["ok"], false);
    assert_eq!(body["error_code"], 400);
}

// --- sendMessage ---

#[tokio::test]
async fn send_message_missing_text_returns_400() {
    let resp = app().oneshot(call("sendMessage", r#"{"chat_id":42}"#)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert_eq!(body["description"], "Bad Request: text is required");
}

#[tokio::test]
async fn send_message_empty_text_returns_400() {
    let resp = app()
        .oneshot(call("sendMessage", r#"{"chat_id":42,"text":""}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert_eq!(body["description"], "Bad Request: message text is empty");
}

#[tokio::test]
async fn send_message_to_channel_username() {
    let resp = app()
        .oneshot(call("sendMessage", r#"{"chat_id":"@news","text":"hello"}"#))
        .await
        .unwrap();
    let message: Message = result(resp).await;
    assert_eq!(message.chat.kind, "channel");
    assert_eq!(message.chat.username.as_deref(), Some("news"));
    assert_eq!(message.text.as_deref(), Some("hello"));
}

#[tokio::test]
async fn reply_to_missing_message_returns_400() {
    let resp = app()
        .oneshot(call("sendMessage", r#"{"chat_id":42,"text":"re","reply_to_message_id":99}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app()
        .oneshot(call(
            "sendMessage",
            r#"{"chat_id":42,"text":"re","reply_to_message_id":99,"allow_sending_without_reply":true}"#,
        ))
        .await
        .unwrap();
    let message: Message = result(resp).await;
    assert!(message.reply_to_message.is_none());
}

// --- getUpdates ---

#[tokio::test]
async fn get_updates_delivers_queued_updates() {
    let db = Arc::new(RwLock::new(BotState::new(DEFAULT_TOKEN)));
    db.write().await.push_update("message", json!({"message_id": 1, "date": 0, "chat": {"id": 5, "type": "private"}, "text": "hi"}));

    let resp = app_with_state(db.clone()).oneshot(call("getUpdates", "{}")).await.unwrap();
    let updates: Vec<Value> = result(resp).await;
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0]["update_id"], 1);
    assert_eq!(updates[0]["message"]["text"], "hi");

    let resp = app_with_state(db).oneshot(call("getUpdates", r#"{"offset":2}"#)).await.unwrap();
    let updates: Vec<Value> = result(resp).await;
    assert!(updates.is_empty());
}

// --- full lifecycle ---

#[tokio::test]
async fn message_and_webhook_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // send
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(call("sendMessage", r#"{"chat_id":-100,"text":"first"}"#))
        .await
        .unwrap();
    let sent: Message = result(resp).await;
    assert_eq!(sent.chat.kind, "supergroup");
    let id = sent.message_id;

    // edit
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(call(
            "editMessageText",
            &json!({"chat_id": -100, "message_id": id, "text": "second"}).to_string(),
        ))
        .await
        .unwrap();
    let edited: Message = result(resp).await;
    assert_eq!(edited.text.as_deref(), Some("second"));
    assert!(edited.edit_date.is_some());

    // edit with identical text
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(call(
            "editMessageText",
            &json!({"chat_id": -100, "message_id": id, "text": "second"}).to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // delete, then delete again
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(call("deleteMessage", &json!({"chat_id": -100, "message_id": id}).to_string()))
        .await
        .unwrap();
    let deleted: bool = result(resp).await;
    assert!(deleted);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(call("deleteMessage", &json!({"chat_id": -100, "message_id": id}).to_string()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // webhook set
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(call("setWebhook", r#"{"url":"https://example.com/hook","max_connections":10}"#))
        .await
        .unwrap();
    let set: bool = result(resp).await;
    assert!(set);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(call("getWebhookInfo", ""))
        .await
        .unwrap();
    let info: WebhookInfo = result(resp).await;
    assert_eq!(info.url, "https://example.com/hook");
    assert_eq!(info.max_connections, Some(10));

    // polling conflicts with the webhook
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(call("getUpdates", "{}"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // webhook removed
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(call("deleteWebhook", "{}"))
        .await
        .unwrap();
    let removed: bool = result(resp).await;
    assert!(removed);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(call("getWebhookInfo", ""))
        .await
        .unwrap();
    let info: WebhookInfo = result(resp).await;
    assert!(info.url.is_empty());
}

#[tokio::test]
async fn commands_are_kept_per_scope() {
    use tower::Service;

    let mut app = app().into_service();
    let commands = json!([{"command": "start", "description": "Start"}]);
    let scoped = json!({"type": "all_private_chats"});

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(call("setMyCommands", &json!({"commands": commands, "scope": scoped}).to_string()))
        .await
        .unwrap();
    let set: bool = result(resp).await;
    assert!(set);

    // default scope is still empty
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(call("getMyCommands", "{}"))
        .await
        .unwrap();
    let listed: Vec<Value> = result(resp).await;
    assert!(listed.is_empty());

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(call("getMyCommands", &json!({"scope": scoped}).to_string()))
        .await
        .unwrap();
    let listed: Value = result(resp).await;
    assert_eq!(listed, commands);
}

#[tokio::test]
async fn export_invite_link_is_unique() {
    let first: String = result(app().oneshot(call("exportChatInviteLink", r#"{"chat_id":-5}"#)).await.unwrap()).await;
    let second: String = result(app().oneshot(call("exportChatInviteLink", r#"{"chat_id":-5}"#)).await.unwrap()).await;
    assert!(first.starts_with("https://t.me/+"));
    assert_ne!(first, second);
}
