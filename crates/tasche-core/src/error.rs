//! Error Types
//!
//! API failures and client-side wizard rejections.

use thiserror::Error;

use crate::wizard::WizardStep;

pub const GENERIC_FETCH_MESSAGE: &str = "データの取得に失敗しました。";
pub const GENERIC_SAVE_MESSAGE: &str = "保存に失敗しました。";
pub const EMPTY_RESPONSE_CODE: &str = "EMPTY_RESPONSE";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// Recognized hook point for a future credential refresh
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("request failed with status {status}")]
    Http {
        status: u16,
        code: Option<String>,
        message: Option<String>,
    },

    /// A success status that carried the error envelope
    #[error("{code}: {message}")]
    Envelope { code: String, message: String },

    #[error("empty response")]
    EmptyResponse,

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            ApiError::Http { code, .. } => code.as_deref(),
            ApiError::Envelope { code, .. } => Some(code),
            ApiError::EmptyResponse => Some(EMPTY_RESPONSE_CODE),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Inline message for the user; the server's message wins when it sent one
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http { message: Some(message), .. }
            | ApiError::Envelope { message, .. }
            | ApiError::Unauthorized { message } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("ユニット時間を選択してください。")]
    MissingUnitDuration,

    #[error("タスクを1つ以上選択してください。")]
    EmptySelection,

    #[error("already at the last step")]
    LastStep(WizardStep),

    #[error("a save is already in progress")]
    SaveInProgress,
}
