//! # Path Registry
//!
//! 경로 키 -> 경로 문자열, 필수/선택 필드, 요구 권한의 정적 매핑.
//!
//! ## 설계 원칙
//!
//! 1. **Immutable Snapshot**: 로드 후 항목은 변경되지 않음
//! 2. **Atomic Swap**: 갱신은 새 스냅샷을 만들어 핸들에서 교체
//! 3. **Load-time Resolution**: 필드 kind/스키마 ID는 로드 시점에 해석, 설정 오류는 여기서 실패
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     RegistryHandle                           │
//! │  RwLock<Arc<PathRegistry>> ──► current()                     │
//! │  history (최근 N개) ──────────► rollback()                    │
//! │                          │                                   │
//! │  ┌───────────────────────▼───────────────────────────────┐  │
//! │  │ PathRegistry (불변)                                    │  │
//! │  │   "path1" -> PathEntry { path, required, optional,     │  │
//! │  │                          required_permissions }        │  │
//! │  └───────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 사용 예시
//!
//! ```ignore
//! use navgate_core::registry::{RegistryDocument, RegistryHandle};
//!
//! let loaded = RegistryDocument::load("navigation.json")?.resolve()?;
//! let handle = RegistryHandle::new(loaded.registry);
//!
//! // 런타임 교체
//! let next = RegistryDocument::load("navigation.json")?.resolve()?;
//! handle.swap(next.registry);
//! ```

mod entry;
mod field;
mod handle;
mod loader;
mod snapshot;

pub use entry::{PathEntry, PathEntryBuilder, PathSpec};
pub use field::{FieldDescriptor, FieldKind, FieldSpec, FieldSpecKind, PrimitiveKind};
pub use handle::{RegistryHandle, DEFAULT_MAX_HISTORY};
pub use loader::{LoadedRegistry, RegistryDocument, REGISTRY_FILE};
pub use snapshot::{PathRegistry, SnapshotInfo, UnknownPathKey};
