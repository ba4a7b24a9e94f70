//! Gate Settings - 네비게이션 게이트 동작 설정
//!
//! 관측 예산, 감사 로그 용량, 권한 소스 선택 등을 관리한다.

use crate::permission::PermissionMatch;
use crate::storage::JsonStore;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 설정 파일명
pub const GATE_SETTINGS_FILE: &str = "gate.json";

/// 권한 목록을 어디서 가져올지
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionSourceKind {
    /// 목적지 경로 기준 권한 테이블 (신뢰 가능)
    #[default]
    Path,

    /// 페이로드 내부 필드 (`<field>.permissions`, 호출자가 제어)
    Payload,
}

/// 네비게이션 게이트 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateSettings {
    /// 버전 (마이그레이션용)
    #[serde(default = "default_version")]
    pub version: u32,

    /// 검증+권한 확인 소프트 예산 (밀리초). 초과 시 경고만 남김
    #[serde(default = "default_soft_budget_ms")]
    pub soft_budget_ms: u64,

    /// 감사 로그 활성화
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// 감사 로그 최대 보관 개수
    #[serde(default = "default_audit_capacity")]
    pub audit_capacity: usize,

    /// 권한 소스
    #[serde(default)]
    pub permission_source: PermissionSourceKind,

    /// 페이로드 권한 소스가 읽을 필드 이름
    #[serde(default = "default_payload_permission_field")]
    pub payload_permission_field: String,

    /// 엔트리에 매칭 방식이 없을 때 사용할 기본값
    #[serde(default)]
    pub default_permission_match: PermissionMatch,
}

impl Default for GateSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            soft_budget_ms: default_soft_budget_ms(),
            audit_enabled: true,
            audit_capacity: default_audit_capacity(),
            permission_source: PermissionSourceKind::default(),
            payload_permission_field: default_payload_permission_field(),
            default_permission_match: PermissionMatch::default(),
        }
    }
}

/// 설정 파일 한 계층 - 파일에 실제로 적힌 항목만 `Some`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateSettingsOverlay {
    pub version: Option<u32>,
    pub soft_budget_ms: Option<u64>,
    pub audit_enabled: Option<bool>,
    pub audit_capacity: Option<usize>,
    pub permission_source: Option<PermissionSourceKind>,
    pub payload_permission_field: Option<String>,
    pub default_permission_match: Option<PermissionMatch>,
}

impl GateSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn soft_budget(&self) -> Duration {
        Duration::from_millis(self.soft_budget_ms)
    }

    // ========================================================================
    // Load / Save
    // ========================================================================

    /// 글로벌 → 프로젝트 순서로 병합 로드
    pub fn load() -> Result<Self> {
        Self::load_layered(&JsonStore::layered())
    }

    /// 주어진 계층 순서대로 병합 (뒤 계층의 파일에 적힌 항목이 우선)
    pub fn load_layered(stores: &[JsonStore]) -> Result<Self> {
        let mut settings = Self::new();
        for store in stores {
            if let Some(overlay) = store.load_optional::<GateSettingsOverlay>(GATE_SETTINGS_FILE)? {
                settings.merge(overlay);
            }
        }
        Ok(settings)
    }

    /// 특정 저장소에서 로드
    pub fn load_from(store: &JsonStore) -> Result<Self> {
        Self::load_layered(std::slice::from_ref(store))
    }

    pub fn save_to(&self, store: &JsonStore) -> Result<()> {
        store.save(GATE_SETTINGS_FILE, self)
    }

    /// 오버레이에 적힌 항목만 덮어쓴다
    pub fn merge(&mut self, overlay: GateSettingsOverlay) {
        if let Some(version) = overlay.version {
            self.version = version;
        }
        if let Some(ms) = overlay.soft_budget_ms {
            self.soft_budget_ms = ms;
        }
        if let Some(enabled) = overlay.audit_enabled {
            self.audit_enabled = enabled;
        }
        if let Some(capacity) = overlay.audit_capacity {
            self.audit_capacity = capacity;
        }
        if let Some(kind) = overlay.permission_source {
            self.permission_source = kind;
        }
        if let Some(field) = overlay.payload_permission_field {
            self.payload_permission_field = field;
        }
        if let Some(mode) = overlay.default_permission_match {
            self.default_permission_match = mode;
        }
    }

    // ========================================================================
    // Builder
    // ========================================================================

    pub fn soft_budget_ms(mut self, ms: u64) -> Self {
        self.soft_budget_ms = ms;
        self
    }

    pub fn audit_capacity(mut self, capacity: usize) -> Self {
        self.audit_capacity = capacity;
        self
    }

    pub fn audit_enabled(mut self, enabled: bool) -> Self {
        self.audit_enabled = enabled;
        self
    }

    pub fn permission_source(mut self, kind: PermissionSourceKind) -> Self {
        self.permission_source = kind;
        self
    }

    pub fn payload_permission_field(mut self, field: impl Into<String>) -> Self {
        self.payload_permission_field = field.into();
        self
    }

    pub fn default_permission_match(mut self, mode: PermissionMatch) -> Self {
        self.default_permission_match = mode;
        self
    }
}

fn default_version() -> u32 {
    1
}

fn default_soft_budget_ms() -> u64 {
    10
}

fn default_audit_capacity() -> usize {
    1000
}

fn default_payload_permission_field() -> String {
    "user".to_string()
}

fn default_true() -> bool {
    true
}
