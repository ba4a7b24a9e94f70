//! # navgate-foundation
//!
//! Foundation layer for navgate:
//! - Error: 설정/레지스트리 로드 에러
//! - Config: 게이트 동작 설정 (GateSettings)
//! - Permission: 권한 집합, 매칭 방식, 경로별 권한 테이블
//! - Audit: 네비게이션 시도 감사 기록
//! - Storage: JsonStore (글로벌/프로젝트 JSON 문서)

pub mod audit;
pub mod config;
pub mod error;
pub mod permission;
pub mod storage;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{GateSettings, GateSettingsOverlay, PermissionSourceKind, GATE_SETTINGS_FILE};

// ============================================================================
// Permission (권한)
// ============================================================================
pub use permission::{
    PermissionChecker, PermissionDenied, PermissionMatch, PermissionSet, PermissionTable,
    PERMISSIONS_FILE,
};

// ============================================================================
// Audit (감사 로깅)
// ============================================================================
pub use audit::{
    AuditEntry, AuditId, AuditOutcome, AuditQuery, AuditStatistics, AuditTrail,
    DEFAULT_AUDIT_CAPACITY,
};

// ============================================================================
// Storage (저장소)
// ============================================================================
pub use storage::JsonStore;
