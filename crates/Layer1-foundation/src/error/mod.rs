//! Error types for navgate
//!
//! 설정 로드/해석 단계의 에러를 중앙에서 관리.
//! 네비게이션 거부(Rejection)는 런타임 결과이므로 core 레이어에서 별도로 정의한다.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// navgate 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid registry entry '{path_key}': {reason}")]
    InvalidRegistry { path_key: String, reason: String },

    // ========================================================================
    // 스키마 관련
    // ========================================================================
    #[error("Unknown schema: {0}")]
    UnknownSchema(String),

    #[error("Invalid schema '{id}': {message}")]
    InvalidSchema { id: String, message: String },

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // 기타
    // ========================================================================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// 운영자에게 그대로 보여줄 수 있는 에러인지 확인
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::Config(_)
                | Error::InvalidRegistry { .. }
                | Error::UnknownSchema(_)
                | Error::InvalidSchema { .. }
        )
    }

    /// 레지스트리 에러 생성 헬퍼
    pub fn invalid_registry(path_key: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidRegistry {
            path_key: path_key.into(),
            reason: reason.into(),
        }
    }

    /// 스키마 에러 생성 헬퍼
    pub fn invalid_schema(id: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidSchema {
            id: id.into(),
            message: message.into(),
        }
    }
}

// ============================================================================
// From 구현 (추가 변환)
// ============================================================================

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Internal(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Internal(s.to_string())
    }
}
