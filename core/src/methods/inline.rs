use serde::Serialize;

use crate::request::Request;
use crate::types::InlineQueryResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnswerInlineQueryOptions {
    /// Seconds the result may be cached on the server, default 300.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_personal: Option<bool>,
    /// Passed back as `InlineQuery::offset` when the user scrolls; empty means no more results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_pm_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_pm_parameter: Option<String>,
}

/// Answer an inline query with at most 50 results.
pub fn answer_inline_query(
    inline_query_id: impl Into<String>,
    results: Vec<InlineQueryResult>,
    options: AnswerInlineQueryOptions,
) -> Request {
    Request::new("answerInlineQuery")
        .with("inline_query_id", inline_query_id.into())
        .with("results", results)
        .with_options(options)
}

/// Set the result of a Web App interaction. Returns `SentWebAppMessage`.
pub fn answer_web_app_query(web_app_query_id: impl Into<String>, result: impl Into<InlineQueryResult>) -> Request {
    Request::new("answerWebAppQuery")
        .with("web_app_query_id", web_app_query_id.into())
        .with("result", result.into())
}
