use serde::{Deserialize, Serialize};

/// Envelope wrapping every Bot API response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ResponseParameters>,
}

/// Why a request was unsuccessful, when the server can say more than a code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// The group has been migrated to a supergroup with this identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    /// Seconds left to wait before the request can be repeated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_envelope_has_no_result() {
        let response: ApiResponse<bool> = serde_json::from_value(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        }))
        .unwrap();
        assert!(!response.ok);
        assert!(response.result.is_none());
        assert_eq!(response.error_code, Some(400));
    }

    #[test]
    fn success_envelope_round_trips() {
        let response = ApiResponse {
            ok: true,
            result: Some(vec![1, 2]),
            description: None,
            error_code: None,
            parameters: None,
        };
        let encoded = serde_json::to_value(&response).unwrap();
        assert_eq!(encoded, json!({"ok": true, "result": [1, 2]}));
        assert_eq!(serde_json::from_value::<ApiResponse<Vec<i32>>>(encoded).unwrap(), response);
    }
}
