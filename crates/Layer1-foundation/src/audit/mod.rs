//! Audit System - 네비게이션 감사 로깅
//!
//! 모든 네비게이션 시도의 진단 기록(사유, 경로 키, 시각, 출발 페이지)을 남깁니다.
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      AuditTrail                              │
//! │  ┌─────────────────────────────────────────────────────┐    │
//! │  │  record(entry) ──► VecDeque (최근 N개)               │    │
//! │  └─────────────────────────────────────────────────────┘    │
//! │         ▲                                                   │
//! │         │                                                   │
//! │  ┌──────────────┐                                           │
//! │  │NavigationGate│ (attempt 마다 1건)                         │
//! │  └──────────────┘                                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 사용법
//!
//! ```ignore
//! use navgate_foundation::audit::{AuditTrail, AuditEntry, AuditQuery, AuditOutcome};
//!
//! let trail = AuditTrail::new(1000);
//! trail.record(AuditEntry::rejected("path1", "missing_fields", "missing required field(s): user"));
//!
//! let stats = trail.statistics();
//! println!("Rejected: {}", stats.rejected);
//! ```

pub mod trail;
pub mod types;

// Re-exports
pub use trail::{AuditTrail, DEFAULT_AUDIT_CAPACITY};
pub use types::{AuditEntry, AuditId, AuditOutcome, AuditQuery, AuditStatistics};
