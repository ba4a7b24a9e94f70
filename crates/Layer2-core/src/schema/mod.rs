//! # Schema Validation
//!
//! 복합 필드 값의 구조를 검증하는 계약.
//!
//! 게이트는 [`SchemaValidator`] 계약에만 의존하며, 구현은 두 가지를 제공한다.
//!
//! - [`JsonSchema`]: JSON Schema 문서 기반 (레지스트리 설정 파일에서 로드)
//! - [`TypedSchema`]: Rust 타입(`serde::Deserialize`) 기반, 알 수 없는 필드를 제거해 값을 좁힌다
//!
//! 검증기는 통과 시 수락된 값을, 실패 시 값 내부 경로 + 메시지로 구성된
//! [`SchemaIssue`] 목록 전체를 돌려준다 (첫 오류에서 멈추지 않음).

mod catalog;
mod json_schema;
mod typed;

pub use catalog::SchemaCatalog;
pub use json_schema::JsonSchema;
pub use typed::TypedSchema;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// SchemaIssue
// ============================================================================

/// 검증 실패 하나
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaIssue {
    /// 값 내부 경로 (`$` = 값 자체, `$/id`, `$/items/0` ...)
    pub path: String,

    /// 사람이 읽는 메시지
    pub message: String,
}

impl SchemaIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// 값 루트에 대한 이슈
    pub fn at_root(message: impl Into<String>) -> Self {
        Self::new("$", message)
    }
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

// ============================================================================
// SchemaValidator
// ============================================================================

/// 스키마 검증기 계약
pub trait SchemaValidator: Send + Sync {
    /// 카탈로그 식별자
    fn id(&self) -> &str;

    /// 값 검증
    ///
    /// 성공 시 수락된(좁혀진) 값, 실패 시 모든 이슈
    fn validate(&self, value: &Value) -> Result<Value, Vec<SchemaIssue>>;
}

// ============================================================================
// SchemaRef
// ============================================================================

/// 공유 가능한 검증기 핸들
#[derive(Clone)]
pub struct SchemaRef(Arc<dyn SchemaValidator>);

impl SchemaRef {
    pub fn new(validator: impl SchemaValidator + 'static) -> Self {
        Self(Arc::new(validator))
    }

    pub fn from_arc(validator: Arc<dyn SchemaValidator>) -> Self {
        Self(validator)
    }

    pub fn id(&self) -> &str {
        self.0.id()
    }

    pub fn validate(&self, value: &Value) -> Result<Value, Vec<SchemaIssue>> {
        self.0.validate(value)
    }
}

impl fmt::Debug for SchemaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SchemaRef").field(&self.id()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display() {
        let issue = SchemaIssue::new("$/id", "123 is not of type \"string\"");
        assert_eq!(issue.to_string(), "$/id: 123 is not of type \"string\"");
        assert_eq!(SchemaIssue::at_root("bad").path, "$");
    }
}
