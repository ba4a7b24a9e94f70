//! Audit Log Types - 네비게이션 시도 감사 기록 타입
//!
//! 모든 네비게이션 시도(성공/거부)의 진단 기록을 위한 타입들입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Audit Entry ID
// ============================================================================

/// 감사 로그 엔트리 ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuditId(pub String);

impl AuditId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for AuditId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AuditId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Audit Outcome
// ============================================================================

/// 네비게이션 시도 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOutcome {
    /// 검증 통과, 상태 저장 및 라우팅 완료
    Committed,
    /// 거부됨
    Rejected,
}

impl AuditOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Committed => "committed",
            Self::Rejected => "rejected",
        }
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed)
    }
}

// ============================================================================
// Audit Entry
// ============================================================================

/// 감사 로그 엔트리
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// 고유 ID
    pub id: AuditId,

    /// 발생 시간
    pub timestamp: DateTime<Utc>,

    /// 요청된 경로 키
    pub path_key: String,

    /// 해석된 경로 (키 조회 성공 시)
    pub path: Option<String>,

    /// 시도를 시작한 페이지 식별자
    pub origin: Option<String>,

    /// 결과
    pub outcome: AuditOutcome,

    /// 거부 종류 (예: "missing_fields")
    pub reason_kind: Option<String>,

    /// 거부 사유 (사람이 읽는 문장)
    pub reason: Option<String>,

    /// 소요 시간 (마이크로초)
    pub elapsed_us: u64,
}

impl AuditEntry {
    /// 성공 엔트리 생성
    pub fn committed(path_key: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(path_key, AuditOutcome::Committed).with_path(path)
    }

    /// 거부 엔트리 생성
    pub fn rejected(
        path_key: impl Into<String>,
        reason_kind: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        let mut entry = Self::new(path_key, AuditOutcome::Rejected);
        entry.reason_kind = Some(reason_kind.into());
        entry.reason = Some(reason.into());
        entry
    }

    fn new(path_key: impl Into<String>, outcome: AuditOutcome) -> Self {
        Self {
            id: AuditId::new(),
            timestamp: Utc::now(),
            path_key: path_key.into(),
            path: None,
            origin: None,
            outcome,
            reason_kind: None,
            reason: None,
            elapsed_us: 0,
        }
    }

    /// 경로 설정
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// 출발 페이지 설정
    pub fn with_origin(mut self, origin: Option<&str>) -> Self {
        self.origin = origin.map(str::to_string);
        self
    }

    /// 소요 시간 설정
    pub fn with_elapsed(mut self, elapsed: std::time::Duration) -> Self {
        self.elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        self
    }
}

// ============================================================================
// Audit Query
// ============================================================================

/// 감사 로그 조회 쿼리
#[derive(Debug, Clone, Default)]
pub struct AuditQuery {
    pub path_key: Option<String>,
    pub outcome: Option<AuditOutcome>,
    pub reason_kind: Option<String>,
    pub origin: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    /// 최대 결과 수
    pub limit: Option<usize>,
}

impl AuditQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path_key(mut self, path_key: impl Into<String>) -> Self {
        self.path_key = Some(path_key.into());
        self
    }

    pub fn with_outcome(mut self, outcome: AuditOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn with_reason_kind(mut self, kind: impl Into<String>) -> Self {
        self.reason_kind = Some(kind.into());
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_time_range(mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// 엔트리가 쿼리와 매칭되는지 확인
    pub fn matches(&self, entry: &AuditEntry) -> bool {
        if let Some(ref path_key) = self.path_key {
            if &entry.path_key != path_key {
                return false;
            }
        }

        if let Some(outcome) = self.outcome {
            if entry.outcome != outcome {
                return false;
            }
        }

        if let Some(ref kind) = self.reason_kind {
            if entry.reason_kind.as_ref() != Some(kind) {
                return false;
            }
        }

        if let Some(ref origin) = self.origin {
            if entry.origin.as_ref() != Some(origin) {
                return false;
            }
        }

        if let Some(ref from) = self.from {
            if entry.timestamp < *from {
                return false;
            }
        }

        if let Some(ref to) = self.to {
            if entry.timestamp > *to {
                return false;
            }
        }

        true
    }
}

// ============================================================================
// Audit Statistics
// ============================================================================

/// 감사 로그 통계
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditStatistics {
    /// 총 엔트리 수
    pub total_entries: u64,

    pub committed: u64,

    pub rejected: u64,

    /// 거부 종류별 카운트
    pub by_reason_kind: HashMap<String, u64>,

    /// 경로 키별 카운트
    pub by_path_key: HashMap<String, u64>,

    /// 평균 소요 시간 (마이크로초)
    pub avg_elapsed_us: f64,

    /// 기간
    pub period_start: Option<DateTime<Utc>>,
    pub period_end: Option<DateTime<Utc>>,
}

// ============================================================================
// 테스트
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_entry() {
        let entry = AuditEntry::rejected("path1", "missing_fields", "missing required field(s): user")
            .with_origin(Some("checkout-page"));

        assert_eq!(entry.outcome, AuditOutcome::Rejected);
        assert_eq!(entry.reason_kind.as_deref(), Some("missing_fields"));
        assert_eq!(entry.origin.as_deref(), Some("checkout-page"));
        assert!(entry.path.is_none());
    }

    #[test]
    fn test_audit_query() {
        let entry = AuditEntry::committed("path1", "/orders")
            .with_elapsed(std::time::Duration::from_micros(420));

        assert_eq!(entry.elapsed_us, 420);
        assert!(AuditQuery::new().with_path_key("path1").matches(&entry));
        assert!(AuditQuery::new()
            .with_outcome(AuditOutcome::Committed)
            .matches(&entry));
        assert!(!AuditQuery::new()
            .with_outcome(AuditOutcome::Rejected)
            .matches(&entry));
        assert!(!AuditQuery::new().with_origin("home").matches(&entry));
    }
}
