//! Response Envelope
//!
//! Every API response is `{"data": T}` or `{"error": {"code", "message"}}`.
//! Only a 2xx status carrying the data variant counts as success.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

pub fn is_success(status: u16) -> bool {
    (200..=299).contains(&status)
}

fn parse_error_body(value: &Value) -> Option<ApiErrorBody> {
    value
        .get("error")
        .and_then(|error| serde_json::from_value(error.clone()).ok())
}

/// Turn a raw status and body into the envelope's payload or a classified error
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if body.trim().is_empty() {
        if status == 401 {
            return Err(ApiError::Unauthorized {
                message: "unauthorized".to_string(),
            });
        }
        return Err(ApiError::EmptyResponse);
    }

    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) if is_success(status) => return Err(ApiError::Decode(e.to_string())),
        // Proxies answer errors with HTML; the status is what matters then
        Err(_) => {
            return Err(ApiError::Http {
                status,
                code: None,
                message: None,
            })
        }
    };

    let error_body = parse_error_body(&value);

    if status == 401 {
        return Err(ApiError::Unauthorized {
            message: error_body
                .map(|e| e.message)
                .unwrap_or_else(|| "unauthorized".to_string()),
        });
    }

    if !is_success(status) {
        return Err(ApiError::Http {
            status,
            code: error_body.as_ref().map(|e| e.code.clone()),
            message: error_body.map(|e| e.message),
        });
    }

    if let Some(error) = error_body {
        return Err(ApiError::Envelope {
            code: error.code,
            message: error.message,
        });
    }

    match value.get("data") {
        Some(data) => T::deserialize(data).map_err(|e| ApiError::Decode(e.to_string())),
        None => Err(ApiError::Decode("response has neither data nor error".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Task, TaskList};

    #[test]
    fn test_data_on_success() {
        let body = r#"{"data": {"tasks": [{"id": "tsk_1", "name": "読書", "is_archived": false}]}}"#;
        let list: TaskList = decode_envelope(200, body).unwrap();
        assert_eq!(list.tasks.len(), 1);
        assert_eq!(list.tasks[0].name, "読書");

        let created: Task = decode_envelope(201, r#"{"data": {"id": "tsk_2", "name": "筋トレ"}}"#).unwrap();
        assert_eq!(created.id, "tsk_2");
    }

    #[test]
    fn test_error_envelope_on_failure_status() {
        let body = r#"{"error": {"code": "NOT_FOUND", "message": "タスクが見つかりません"}}"#;
        let err = decode_envelope::<Task>(404, body).unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 404,
                code: Some("NOT_FOUND".to_string()),
                message: Some("タスクが見つかりません".to_string()),
            }
        );
    }

    #[test]
    fn test_error_envelope_with_success_status() {
        let body = r#"{"error": {"code": "CONFLICT", "message": "conflict"}}"#;
        let err = decode_envelope::<Task>(200, body).unwrap_err();
        assert_eq!(err.code(), Some("CONFLICT"));
    }

    #[test]
    fn test_data_with_failure_status_is_rejected() {
        let body = r#"{"data": {"id": "tsk_2", "name": "筋トレ"}}"#;
        let err = decode_envelope::<Task>(500, body).unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(decode_envelope::<Task>(200, "").unwrap_err(), ApiError::EmptyResponse);
        assert_eq!(decode_envelope::<Task>(500, "  ").unwrap_err(), ApiError::EmptyResponse);
    }

    #[test]
    fn test_unauthorized() {
        let body = r#"{"error": {"code": "UNAUTHORIZED", "message": "token expired"}}"#;
        let err = decode_envelope::<Task>(401, body).unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message("fallback"), "token expired");
    }

    #[test]
    fn test_malformed_bodies() {
        assert!(matches!(decode_envelope::<Task>(200, "<html>"), Err(ApiError::Decode(_))));
        assert!(matches!(decode_envelope::<Task>(502, "<html>"), Err(ApiError::Http { status: 502, .. })));
        assert!(matches!(decode_envelope::<Task>(200, r#"{"data": {"id": 3}}"#), Err(ApiError::Decode(_))));
        assert!(matches!(decode_envelope::<Task>(200, "{}"), Err(ApiError::Decode(_))));
    }
}
