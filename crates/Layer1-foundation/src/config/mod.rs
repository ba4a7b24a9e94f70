//! Config - 설정 관리
//!
//! - `gate.rs` - GateSettings 게이트 동작 설정

mod gate;

pub use gate::{GateSettings, GateSettingsOverlay, PermissionSourceKind, GATE_SETTINGS_FILE};
