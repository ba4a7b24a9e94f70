//! navgate-core: Core Runtime for navgate
//!
//! Layer2 - 네비게이션 게이트 구현 레이어
//!
//! # 주요 모듈
//!
//! - `registry`: 경로 키 → 필드/권한 요구사항 (불변 스냅샷 + 원자적 교체)
//! - `schema`: 복합 필드 스키마 검증기 (JSON Schema, serde 타입)
//! - `permission`: 호출자 권한 소스
//! - `state`: 게이트를 통과한 페이로드 공유 상태
//! - `router`: 네비게이션 실행
//! - `gate`: lookup → presence → shape → permission → commit
//!
//! # 사용 예시
//!
//! ```ignore
//! use navgate_core::{NavigationGate, NavigationPayload, NavigationState, HistoryRouter};
//!
//! let loaded = RegistryDocument::load("navigation.json")?.resolve()?;
//! let gate = NavigationGate::new(
//!     Arc::new(RegistryHandle::new(loaded.registry)),
//!     Arc::new(PathPermissionSource::new(loaded.permissions)),
//!     Arc::new(NavigationState::new()),
//!     Arc::new(HistoryRouter::new()),
//! );
//!
//! let payload = NavigationPayload::new().with_required("orderId", json!("456"));
//! match gate.attempt("orders", payload) {
//!     Ok(receipt) => println!("moved to {}", receipt.path),
//!     Err(rejection) => println!("{}", rejection.user_message()),
//! }
//! ```

// Core modules
pub mod gate;
pub mod payload;
pub mod permission;
pub mod registry;
pub mod rejection;
pub mod router;
pub mod schema;
pub mod state;

// Re-exports: Gate
pub use gate::{NavigationGate, NavigationReceipt};
pub use payload::NavigationPayload;
pub use rejection::{FieldFailure, Rejection};

// Re-exports: Registry
pub use registry::{
    FieldDescriptor, FieldKind, FieldSpec, FieldSpecKind, LoadedRegistry, PathEntry,
    PathEntryBuilder, PathRegistry, PathSpec, PrimitiveKind, RegistryDocument, RegistryHandle,
    SnapshotInfo, UnknownPathKey, DEFAULT_MAX_HISTORY, REGISTRY_FILE,
};

// Re-exports: Schema
pub use schema::{JsonSchema, SchemaCatalog, SchemaIssue, SchemaRef, SchemaValidator, TypedSchema};

// Re-exports: Permission / State / Router
pub use permission::{
    permission_source_for, PathPermissionSource, PayloadPermissionSource, PermissionSource,
};
pub use router::{HistoryRouter, Router};
pub use state::{NavigationState, PayloadStore};

// Re-exports from foundation
pub use navgate_foundation::{
    AuditEntry, AuditOutcome, AuditQuery, AuditTrail, Error, GateSettings, PermissionMatch,
    PermissionSet, PermissionTable, Result,
};
