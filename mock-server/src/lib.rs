//! In-memory emulation of a subset of the Bot API for integration tests.
//!
//! Every method is served at `POST /bot<token>/<method>` with a JSON object
//! body and answers with the API's `{ok, result}` / `{ok: false, error_code,
//! description}` envelope. Messages, queued updates, commands and the webhook
//! live in one `BotState` behind a `RwLock`.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Token accepted by `app()`.
pub const DEFAULT_TOKEN: &str = "123456:TEST-TOKEN";

/// Identifier of the bot's own user.
pub const BOT_USER_ID: i64 = 123456;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    pub date: i64,
    pub chat: Chat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message: Option<Box<Message>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookInfo {
    pub url: String,
    pub has_custom_certificate: bool,
    pub pending_update_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<String>>,
}

/// Everything the mock remembers between calls.
#[derive(Debug)]
pub struct BotState {
    token: String,
    me: User,
    next_message_id: i64,
    next_update_id: i64,
    updates: Vec<Value>,
    messages: HashMap<(i64, i64), Message>,
    commands: HashMap<String, Value>,
    webhook: WebhookInfo,
}

impl BotState {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            me: User {
                id: BOT_USER_ID,
                is_bot: true,
                first_name: "Mock Bot".to_string(),
                username: Some("mock_bot".to_string()),
            },
            next_message_id: 1,
            next_update_id: 1,
            updates: Vec::new(),
            messages: HashMap::new(),
            commands: HashMap::new(),
            webhook: WebhookInfo::default(),
        }
    }

    /// Queue an update for `getUpdates`. `kind` is the update field name
    /// (`message`, `callback_query`, ...). Returns the assigned `update_id`.
    pub fn push_update(&mut self, kind: &str, payload: Value) -> i64 {
        let update_id = self.next_update_id;
        self.next_update_id += 1;
        let mut update = Map::new();
        update.insert("update_id".to_string(), json!(update_id));
        update.insert(kind.to_string(), payload);
        self.updates.push(Value::Object(update));
        update_id
    }

    fn next_message_id(&mut self) -> i64 {
        let id = self.next_message_id;
        self.next_message_id += 1;
        id
    }
}

pub type Db = Arc<RwLock<BotState>>;

pub fn app() -> Router {
    app_with_state(Arc::new(RwLock::new(BotState::new(DEFAULT_TOKEN))))
}

pub fn app_with_state(db: Db) -> Router {
    Router::new()
        .route("/{bot}/{method}", post(call_method))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_state(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_state(db)).await
}

/// A failed call, rendered as the API's error envelope.
#[derive(Debug, PartialEq)]
pub struct Failure {
    pub code: u16,
    pub description: String,
}

impl Failure {
    fn bad_request(detail: &str) -> Self {
        Self {
            code: 400,
            description: format!("Bad Request: {detail}"),
        }
    }

    fn unauthorized() -> Self {
        Self {
            code: 401,
            description: "Unauthorized".to_string(),
        }
    }

    fn not_found() -> Self {
        Self {
            code: 404,
            description: "Not Found".to_string(),
        }
    }

    fn conflict(detail: &str) -> Self {
        Self {
            code: 409,
            description: format!("Conflict: {detail}"),
        }
    }
}

fn envelope(outcome: Result<Value, Failure>) -> (StatusCode, Json<Value>) {
    match outcome {
        Ok(result) => (StatusCode::OK, Json(json!({"ok": true, "result": result}))),
        Err(failure) => {
            let status = StatusCode::from_u16(failure.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let body = json!({
                "ok": false,
                "error_code": failure.code,
                "description": failure.description,
            });
            (status, Json(body))
        }
    }
}

async fn call_method(
    State(db): State<Db>,
    Path((bot, method)): Path<(String, String)>,
    body: String,
) -> (StatusCode, Json<Value>) {
    let outcome = dispatch(&db, &bot, &method, &body).await;
    match &outcome {
        Ok(_) => tracing::info!(%method, "method call succeeded"),
        Err(failure) => tracing::warn!(%method, code = failure.code, description = %failure.description, "method call failed"),
    }
    envelope(outcome)
}

async fn dispatch(db: &Db, bot: &str, method: &str, body: &str) -> Result<Value, Failure> {
    let token = bot.strip_prefix("bot").ok_or_else(Failure::not_found)?;
    if token != db.read().await.token {
        return Err(Failure::unauthorized());
    }
    let params = Params::parse(body)?;
    let mut state = db.write().await;
    match method {
        "getMe" => to_value(&state.me),
        "sendMessage" => send_message(&mut state, &params),
        "editMessageText" => edit_message_text(&mut state, &params),
        "deleteMessage" => delete_message(&mut state, &params),
        "getUpdates" => get_updates(&mut state, &params),
        "setWebhook" => set_webhook(&mut state, &params),
        "deleteWebhook" => delete_webhook(&mut state, &params),
        "getWebhookInfo" => get_webhook_info(&state),
        "setMyCommands" => set_my_commands(&mut state, &params),
        "getMyCommands" => Ok(state.commands.get(&commands_key(&params)).cloned().unwrap_or_else(|| json!([]))),
        "deleteMyCommands" => {
            state.commands.remove(&commands_key(&params));
            Ok(json!(true))
        }
        "sendChatAction" => {
            params.chat()?;
            params.str("action")?;
            Ok(json!(true))
        }
        "answerCallbackQuery" => {
            params.str("callback_query_id")?;
            Ok(json!(true))
        }
        "exportChatInviteLink" => {
            params.chat()?;
            Ok(json!(format!("https://t.me/+{}", Uuid::new_v4().simple())))
        }
        "getChat" => to_value(&params.chat()?),
        _ => Err(Failure::not_found()),
    }
}

fn to_value<T: Serialize>(value: &T) -> Result<Value, Failure> {
    serde_json::to_value(value).map_err(|e| Failure::bad_request(&e.to_string()))
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}

/// Parameters of one call, parsed from the JSON body.
struct Params(Map<String, Value>);

impl Params {
    fn parse(body: &str) -> Result<Self, Failure> {
        if body.trim().is_empty() {
            return Ok(Self(Map::new()));
        }
        serde_json::from_str(body)
            .map(Self)
            .map_err(|_| Failure::bad_request("request body must be a JSON object"))
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn i64(&self, key: &str) -> Result<i64, Failure> {
        self.opt_i64(key)?
            .ok_or_else(|| Failure::bad_request(&format!("{key} is required")))
    }

    fn opt_i64(&self, key: &str) -> Result<Option<i64>, Failure> {
        match self.get(key) {
            None => Ok(None),
            Some(v) => v
                .as_i64()
                .map(Some)
                .ok_or_else(|| Failure::bad_request(&format!("{key} must be an integer"))),
        }
    }

    fn str(&self, key: &str) -> Result<&str, Failure> {
        match self.get(key) {
            None => Err(Failure::bad_request(&format!("{key} is required"))),
            Some(v) => v
                .as_str()
                .ok_or_else(|| Failure::bad_request(&format!("{key} must be a string"))),
        }
    }

    /// Resolve `chat_id`: positive ids are private chats, negative ids are
    /// supergroups and `@name` is a public channel.
    fn chat(&self) -> Result<Chat, Failure> {
        match self.get("chat_id") {
            None => Err(Failure::bad_request("chat_id is required")),
            Some(Value::Number(n)) => match n.as_i64() {
                Some(0) | None => Err(Failure::bad_request("chat not found")),
                Some(id) if id > 0 => Ok(Chat {
                    id,
                    kind: "private".to_string(),
                    title: None,
                    username: None,
                    first_name: Some(format!("User {id}")),
                }),
                Some(id) => Ok(Chat {
                    id,
                    kind: "supergroup".to_string(),
                    title: Some(format!("Group {}", id.unsigned_abs())),
                    username: None,
                    first_name: None,
                }),
            },
            Some(Value::String(handle)) => match handle.strip_prefix('@') {
                Some(name) if !name.is_empty() => Ok(Chat {
                    id: -1_001_000_000_000,
                    kind: "channel".to_string(),
                    title: Some(name.to_string()),
                    username: Some(name.to_string()),
                    first_name: None,
                }),
                _ => Err(Failure::bad_request("chat not found")),
            },
            Some(_) => Err(Failure::bad_request("chat_id must be an integer or a string")),
        }
    }
}

fn send_message(state: &mut BotState, params: &Params) -> Result<Value, Failure> {
    let chat = params.chat()?;
    let text = params.str("text")?;
    if text.is_empty() {
        return Err(Failure::bad_request("message text is empty"));
    }
    let reply_to_message = match params.opt_i64("reply_to_message_id")? {
        None => None,
        Some(id) => match state.messages.get(&(chat.id, id)) {
            Some(original) => Some(Box::new(Message {
                reply_to_message: None,
                ..original.clone()
            })),
            None if params.get("allow_sending_without_reply") == Some(&json!(true)) => None,
            None => return Err(Failure::bad_request("message to reply not found")),
        },
    };

    let message = Message {
        message_id: state.next_message_id(),
        from: Some(state.me.clone()),
        date: unix_now(),
        chat,
        edit_date: None,
        text: Some(text.to_string()),
        reply_to_message,
        reply_markup: params.get("reply_markup").filter(|m| m.get("inline_keyboard").is_some()).cloned(),
    };
    state.messages.insert((message.chat.id, message.message_id), message.clone());
    to_value(&message)
}

fn edit_message_text(state: &mut BotState, params: &Params) -> Result<Value, Failure> {
    let text = params.str("text")?.to_string();
    if params.get("inline_message_id").is_some() {
        return Ok(json!(true));
    }
    let chat = params.chat()?;
    let message_id = params.i64("message_id")?;
    let message = state
        .messages
        .get_mut(&(chat.id, message_id))
        .ok_or_else(|| Failure::bad_request("message to edit not found"))?;
    if message.text.as_deref() == Some(text.as_str()) {
        return Err(Failure::bad_request("message is not modified"));
    }
    message.text = Some(text);
    message.edit_date = Some(unix_now());
    if let Some(markup) = params.get("reply_markup") {
        message.reply_markup = Some(markup.clone());
    }
    to_value(&*message)
}

fn delete_message(state: &mut BotState, params: &Params) -> Result<Value, Failure> {
    let chat = params.chat()?;
    let message_id = params.i64("message_id")?;
    state
        .messages
        .remove(&(chat.id, message_id))
        .map(|_| json!(true))
        .ok_or_else(|| Failure::bad_request("message to delete not found"))
}

fn get_updates(state: &mut BotState, params: &Params) -> Result<Value, Failure> {
    if !state.webhook.url.is_empty() {
        return Err(Failure::conflict(
            "can't use getUpdates method while webhook is active; use deleteWebhook to delete the webhook first",
        ));
    }
    if let Some(offset) = params.opt_i64("offset")? {
        state.updates.retain(|u| u["update_id"].as_i64().unwrap_or_default() >= offset);
    }
    let limit = params.opt_i64("limit")?.unwrap_or(100).clamp(1, 100) as usize;
    let allowed: Option<Vec<String>> = params
        .get("allowed_updates")
        .and_then(|v| serde_json::from_value(v.clone()).ok());
    let batch: Vec<Value> = state
        .updates
        .iter()
        .filter(|u| match &allowed {
            Some(kinds) if !kinds.is_empty() => kinds.iter().any(|k| u.get(k).is_some()),
            _ => true,
        })
        .take(limit)
        .cloned()
        .collect();
    Ok(Value::Array(batch))
}

fn set_webhook(state: &mut BotState, params: &Params) -> Result<Value, Failure> {
    let url = params.str("url")?.to_string();
    if !url.is_empty() && !url.starts_with("https://") {
        return Err(Failure::bad_request("bad webhook: HTTPS url must be provided for webhook"));
    }
    let max_connections = params
        .opt_i64("max_connections")?
        .map(|n| u32::try_from(n).map_err(|_| Failure::bad_request("bad webhook: invalid max_connections")))
        .transpose()?;
    if params.get("drop_pending_updates") == Some(&json!(true)) {
        state.updates.clear();
    }
    state.webhook = WebhookInfo {
        url,
        has_custom_certificate: params.get("certificate").is_some(),
        pending_update_count: 0,
        max_connections,
        allowed_updates: params
            .get("allowed_updates")
            .and_then(|v| serde_json::from_value(v.clone()).ok()),
    };
    Ok(json!(true))
}

fn delete_webhook(state: &mut BotState, params: &Params) -> Result<Value, Failure> {
    if params.get("drop_pending_updates") == Some(&json!(true)) {
        state.updates.clear();
    }
    state.webhook = WebhookInfo::default();
    Ok(json!(true))
}

fn get_webhook_info(state: &BotState) -> Result<Value, Failure> {
    let info = WebhookInfo {
        pending_update_count: state.updates.len() as u32,
        ..state.webhook.clone()
    };
    to_value(&info)
}

fn commands_key(params: &Params) -> String {
    let scope = params.get("scope").cloned().unwrap_or_else(|| json!({"type": "default"}));
    let language = params.get("language_code").and_then(Value::as_str).unwrap_or_default();
    format!("{scope}|{language}")
}

fn set_my_commands(state: &mut BotState, params: &Params) -> Result<Value, Failure> {
    let commands = params
        .get("commands")
        .filter(|c| c.is_array())
        .cloned()
        .ok_or_else(|| Failure::bad_request("commands is required"))?;
    state.commands.insert(commands_key(params), commands);
    Ok(json!(true))
}
