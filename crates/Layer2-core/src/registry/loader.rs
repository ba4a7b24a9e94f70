//! Registry Loader - 설정 문서 -> 레지스트리 스냅샷
//!
//! `navigation.json` 한 파일에 스키마, 경로 정의, 경로별 권한을 담는다.
//!
//! ```json
//! {
//!   "schemas": { "UserSchema": { "type": "object", "required": ["id", "name"] } },
//!   "paths": {
//!     "path1": {
//!       "path": "/orders",
//!       "required": [
//!         { "name": "user", "kind": "complex", "schema": "UserSchema" },
//!         { "name": "orderId", "kind": "string" }
//!       ],
//!       "requiredPermissions": ["view-x"]
//!     }
//!   },
//!   "permissionsByPath": { "/orders": ["view-x"] }
//! }
//! ```

use super::entry::PathSpec;
use super::snapshot::PathRegistry;
use crate::schema::SchemaCatalog;
use navgate_foundation::{Error, JsonStore, PermissionTable, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// 설정 파일명
pub const REGISTRY_FILE: &str = "navigation.json";

/// 레지스트리 설정 문서
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryDocument {
    /// 스키마 ID -> JSON Schema
    #[serde(default)]
    pub schemas: BTreeMap<String, Value>,

    /// 경로 키 -> 경로 정의
    #[serde(default)]
    pub paths: BTreeMap<String, PathSpec>,

    /// 목적지 경로 -> 권한 목록
    #[serde(default)]
    pub permissions_by_path: PermissionTable,
}

/// 해석 완료된 레지스트리 구성
#[derive(Debug, Clone)]
pub struct LoadedRegistry {
    pub registry: PathRegistry,
    pub permissions: PermissionTable,
    pub schemas: SchemaCatalog,
}

impl RegistryDocument {
    /// 파일에서 로드
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json_str(&content)
    }

    /// 저장소에서 로드
    pub fn load_from(store: &JsonStore) -> Result<Self> {
        store.load(REGISTRY_FILE)
    }

    pub fn save_to(&self, store: &JsonStore) -> Result<()> {
        store.save(REGISTRY_FILE, self)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// 스키마 컴파일 및 모든 경로 해석
    pub fn resolve(self) -> Result<LoadedRegistry> {
        self.resolve_with(SchemaCatalog::new())
    }

    /// 미리 등록된 스키마(예: [`TypedSchema`](crate::schema::TypedSchema))와 함께 해석
    ///
    /// 문서의 스키마가 같은 ID의 기존 스키마를 교체한다.
    pub fn resolve_with(self, mut catalog: SchemaCatalog) -> Result<LoadedRegistry> {
        for (id, schema) in &self.schemas {
            catalog.register_json(id, schema)?;
        }

        let entries = self
            .paths
            .iter()
            .map(|(key, spec)| spec.resolve(key, &catalog))
            .collect::<Result<Vec<_>>>()?;

        let registry = PathRegistry::from_entries(entries)?;

        info!(
            paths = registry.len(),
            schemas = catalog.len(),
            permission_paths = self.permissions_by_path.len(),
            "Navigation registry resolved"
        );

        Ok(LoadedRegistry {
            registry,
            permissions: self.permissions_by_path,
            schemas: catalog,
        })
    }
}
