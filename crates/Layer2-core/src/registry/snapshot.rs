//! Path Registry - 불변 레지스트리 스냅샷
//!
//! 프로세스 시작 시 정적 설정으로 한 번 만들어지고, 이후 읽기 전용.
//! 갱신은 새 스냅샷을 만들어 [`RegistryHandle`](super::RegistryHandle)로 교체한다.

use super::entry::PathEntry;
use chrono::{DateTime, Utc};
use navgate_foundation::{Error, Result};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// 레지스트리에 없는 경로 키
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown path key '{0}'")]
pub struct UnknownPathKey(pub String);

// ============================================================================
// PathRegistry
// ============================================================================

/// 레지스트리 스냅샷
#[derive(Debug, Clone)]
pub struct PathRegistry {
    /// 스냅샷 ID
    id: String,

    /// 스냅샷 생성 시간
    created_at: DateTime<Utc>,

    /// 스냅샷 설명 (옵션)
    description: Option<String>,

    entries: HashMap<String, Arc<PathEntry>>,
}

impl PathRegistry {
    /// 빈 레지스트리
    pub fn empty() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            description: None,
            entries: HashMap::new(),
        }
    }

    /// 항목 목록으로 생성
    ///
    /// # Errors
    ///
    /// 같은 경로 키가 두 번 나오면 설정 에러
    pub fn from_entries(entries: impl IntoIterator<Item = PathEntry>) -> Result<Self> {
        let mut registry = Self::empty();
        for entry in entries {
            let key = entry.key().to_string();
            if registry.entries.contains_key(&key) {
                return Err(Error::invalid_registry(key, "duplicate path key"));
            }
            registry.entries.insert(key, Arc::new(entry));
        }
        Ok(registry)
    }

    /// ID 지정
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// 설명 추가
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// 경로 키 조회
    pub fn lookup(&self, key: &str) -> std::result::Result<Arc<PathEntry>, UnknownPathKey> {
        self.get(key).ok_or_else(|| UnknownPathKey(key.to_string()))
    }

    pub fn get(&self, key: &str) -> Option<Arc<PathEntry>> {
        self.entries.get(key).map(Arc::clone)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// 정렬된 경로 키 목록
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn entries(&self) -> impl Iterator<Item = &Arc<PathEntry>> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// 스냅샷 정보
    pub fn info(&self) -> SnapshotInfo {
        SnapshotInfo {
            id: self.id.clone(),
            created_at: self.created_at,
            description: self.description.clone(),
            entry_count: self.entries.len(),
        }
    }
}

impl Default for PathRegistry {
    fn default() -> Self {
        Self::empty()
    }
}

/// 스냅샷 정보 (메타데이터만)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotInfo {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub description: Option<String>,
    pub entry_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::FieldDescriptor;

    fn entry(key: &str, path: &str) -> PathEntry {
        PathEntry::builder(key, path)
            .required(FieldDescriptor::string("orderId"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_lookup() {
        let registry = PathRegistry::from_entries([entry("path1", "/orders")])
            .unwrap()
            .with_id("v1")
            .with_description("initial");

        assert_eq!(registry.lookup("path1").unwrap().path(), "/orders");
        assert_eq!(
            registry.lookup("path2").unwrap_err(),
            UnknownPathKey("path2".into())
        );

        let info = registry.info();
        assert_eq!(info.id, "v1");
        assert_eq!(info.description.as_deref(), Some("initial"));
        assert_eq!(info.entry_count, 1);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let result = PathRegistry::from_entries([entry("path1", "/a"), entry("path1", "/b")]);
        assert!(matches!(result, Err(Error::InvalidRegistry { .. })));
    }

    #[test]
    fn test_keys_sorted() {
        let registry =
            PathRegistry::from_entries([entry("b", "/b"), entry("a", "/a")]).unwrap();
        assert_eq!(registry.keys(), vec!["a".to_string(), "b".to_string()]);
    }
}
