//! Permission Source - 호출자 권한 집합을 어디서 가져올지
//!
//! 게이트는 경로에 요구 권한이 선언된 경우에만 소스를 호출한다.
//!
//! - [`PathPermissionSource`]: 목적지 경로 기준 권한 테이블 (서버/설정 측, 신뢰 가능)
//! - [`PayloadPermissionSource`]: 페이로드 복합 필드의 `permissions` 배열 (호출자가 제어)

use crate::payload::NavigationPayload;
use crate::registry::PathEntry;
use navgate_foundation::{GateSettings, PermissionSet, PermissionSourceKind, PermissionTable};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// 권한 소스 계약
pub trait PermissionSource: Send + Sync {
    /// 소스 이름 (로그용)
    fn name(&self) -> &str;

    /// 이번 네비게이션 시도에 적용할 권한 집합
    fn permissions(&self, entry: &PathEntry, payload: &NavigationPayload) -> PermissionSet;
}

// ============================================================================
// PathPermissionSource
// ============================================================================

/// 목적지 경로 기준 권한 조회
#[derive(Debug, Clone, Default)]
pub struct PathPermissionSource {
    table: PermissionTable,
}

impl PathPermissionSource {
    pub fn new(table: PermissionTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &PermissionTable {
        &self.table
    }
}

impl PermissionSource for PathPermissionSource {
    fn name(&self) -> &str {
        "path"
    }

    fn permissions(&self, entry: &PathEntry, _payload: &NavigationPayload) -> PermissionSet {
        self.table.permissions_for(entry.path())
    }
}

// ============================================================================
// PayloadPermissionSource
// ============================================================================

/// 페이로드 필드에서 권한 추출
///
/// `payload.required[field].permissions: [string]`. 필드가 없거나 형태가 다르면
/// 빈 집합. 값은 호출 페이지가 만든 것이므로 신뢰 경계 밖이다.
#[derive(Debug, Clone)]
pub struct PayloadPermissionSource {
    field: String,
}

impl PayloadPermissionSource {
    pub fn new(field: impl Into<String>) -> Self {
        Self { field: field.into() }
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

impl PermissionSource for PayloadPermissionSource {
    fn name(&self) -> &str {
        "payload"
    }

    fn permissions(&self, entry: &PathEntry, payload: &NavigationPayload) -> PermissionSet {
        let Some(Value::Array(items)) = payload
            .required_value(&self.field)
            .and_then(|record| record.get("permissions"))
        else {
            debug!(
                path_key = entry.key(),
                field = %self.field,
                "Payload carries no permission list"
            );
            return PermissionSet::new();
        };

        debug!(
            path_key = entry.key(),
            field = %self.field,
            "Using caller-supplied permissions"
        );
        items.iter().filter_map(Value::as_str).collect()
    }
}

/// 설정에 맞는 권한 소스 생성
pub fn permission_source_for(
    settings: &GateSettings,
    table: PermissionTable,
) -> Arc<dyn PermissionSource> {
    match settings.permission_source {
        PermissionSourceKind::Path => Arc::new(PathPermissionSource::new(table)),
        PermissionSourceKind::Payload => {
            Arc::new(PayloadPermissionSource::new(&settings.payload_permission_field))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::FieldDescriptor;
    use serde_json::json;

    fn entry() -> PathEntry {
        PathEntry::builder("admin", "/admin")
            .required(FieldDescriptor::string("id"))
            .permissions(["view-x"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_path_source() {
        let source = PathPermissionSource::new(PermissionTable::new().with_path("/admin", ["view-x"]));
        let permissions = source.permissions(&entry(), &NavigationPayload::new());
        assert!(permissions.contains("view-x"));
    }

    #[test]
    fn test_payload_source() {
        let source = PayloadPermissionSource::new("user");
        let payload = NavigationPayload::new().with_required(
            "user",
            json!({ "id": "1", "permissions": ["view-x", 3, "edit-x"] }),
        );

        let permissions = source.permissions(&entry(), &payload);
        assert_eq!(permissions.to_vec(), vec!["edit-x".to_string(), "view-x".to_string()]);
    }

    #[test]
    fn test_payload_source_missing_list() {
        let source = PayloadPermissionSource::new("user");
        let payload = NavigationPayload::new().with_required("user", json!({ "permissions": "view-x" }));
        assert!(source.permissions(&entry(), &payload).is_empty());
        assert!(source.permissions(&entry(), &NavigationPayload::new()).is_empty());
    }

    #[test]
    fn test_factory_follows_settings() {
        let settings = GateSettings::new().permission_source(PermissionSourceKind::Payload);
        assert_eq!(permission_source_for(&settings, PermissionTable::new()).name(), "payload");
        assert_eq!(
            permission_source_for(&GateSettings::new(), PermissionTable::new()).name(),
            "path"
        );
    }
}
