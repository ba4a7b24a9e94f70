//! Rejection - 네비게이션 거부 사유
//!
//! 모든 거부는 종결적이고 재시도 대상이 아니다. 호출자 프로그래밍 오류 또는
//! 권한 사실을 나타낸다.

use crate::registry::UnknownPathKey;
use crate::schema::SchemaIssue;
use navgate_foundation::{PermissionDenied, PermissionMatch};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 필드 하나의 검증 실패
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFailure {
    /// 필드 이름
    pub field: String,

    /// 기대 타입 표기 (`string`, `schema:UserSchema`)
    pub expected: String,

    /// 값 내부 이슈들
    pub issues: Vec<SchemaIssue>,
}

impl FieldFailure {
    pub fn new(field: impl Into<String>, expected: impl Into<String>, issues: Vec<SchemaIssue>) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            issues,
        }
    }
}

impl std::fmt::Display for FieldFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (expected {})", self.field, self.expected)?;
        for issue in &self.issues {
            write!(f, "; {}", issue)?;
        }
        Ok(())
    }
}

/// 네비게이션 거부
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("unknown path key '{0}'")]
    UnknownPathKey(String),

    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("invalid field(s): {}", join_field_names(.0))]
    InvalidFields(Vec<FieldFailure>),

    #[error(
        "insufficient permissions: requires {mode} of [{}], has [{}]",
        .required.join(", "),
        .actual.join(", ")
    )]
    InsufficientPermissions {
        required: Vec<String>,
        actual: Vec<String>,
        mode: PermissionMatch,
    },
}

fn join_field_names(failures: &[FieldFailure]) -> String {
    failures
        .iter()
        .map(|f| f.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Rejection {
    /// 거부 종류 (로그/감사 분류용)
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownPathKey(_) => "unknown_path_key",
            Self::MissingFields(_) => "missing_fields",
            Self::InvalidFields(_) => "invalid_fields",
            Self::InsufficientPermissions { .. } => "insufficient_permissions",
        }
    }

    /// 최종 사용자에게 보여줄 짧은 문장
    pub fn user_message(&self) -> String {
        match self {
            Self::UnknownPathKey(_) => "This page is not available.".to_string(),
            Self::MissingFields(fields) => {
                format!("Some information is missing: {}.", fields.join(", "))
            }
            Self::InvalidFields(failures) => {
                format!("Some information is not valid: {}.", join_field_names(failures))
            }
            Self::InsufficientPermissions { .. } => {
                "You do not have permission to open this page.".to_string()
            }
        }
    }

    /// 거부는 재시도로 해결되지 않는다
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// 실패한 필드 이름들 (MissingFields / InvalidFields)
    pub fn field_names(&self) -> Vec<&str> {
        match self {
            Self::MissingFields(fields) => fields.iter().map(String::as_str).collect(),
            Self::InvalidFields(failures) => failures.iter().map(|f| f.field.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

impl From<UnknownPathKey> for Rejection {
    fn from(err: UnknownPathKey) -> Self {
        Self::UnknownPathKey(err.0)
    }
}

impl From<PermissionDenied> for Rejection {
    fn from(err: PermissionDenied) -> Self {
        Self::InsufficientPermissions {
            required: err.required,
            actual: err.actual,
            mode: err.mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_kind() {
        let rejection = Rejection::MissingFields(vec!["user".into(), "orderId".into()]);
        assert_eq!(rejection.kind(), "missing_fields");
        assert_eq!(rejection.to_string(), "missing required field(s): user, orderId");
        assert_eq!(rejection.field_names(), vec!["user", "orderId"]);
        assert!(!rejection.is_retryable());
    }

    #[test]
    fn test_invalid_fields_message() {
        let rejection = Rejection::InvalidFields(vec![FieldFailure::new(
            "user",
            "schema:UserSchema",
            vec![SchemaIssue::new("$/id", "123 is not of type \"string\"")],
        )]);

        assert_eq!(rejection.to_string(), "invalid field(s): user");
        assert_eq!(rejection.user_message(), "Some information is not valid: user.");
    }

    #[test]
    fn test_from_permission_denied() {
        let denied = PermissionDenied {
            required: vec!["view-x".into()],
            actual: vec!["view-y".into()],
            mode: PermissionMatch::Any,
        };
        let rejection = Rejection::from(denied);

        assert_eq!(rejection.kind(), "insufficient_permissions");
        assert_eq!(
            rejection.to_string(),
            "insufficient permissions: requires any of [view-x], has [view-y]"
        );
    }

    #[test]
    fn test_from_unknown_path_key() {
        let rejection = Rejection::from(UnknownPathKey("nowhere".into()));
        assert_eq!(rejection, Rejection::UnknownPathKey("nowhere".into()));
    }
}
