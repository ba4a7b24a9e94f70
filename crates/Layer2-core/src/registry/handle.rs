//! Registry Handle - 원자적으로 교체 가능한 레지스트리 참조
//!
//! 스냅샷 자체는 불변이고, 핸들이 가리키는 스냅샷만 바뀐다.
//! 진행 중인 `attempt`는 시작 시 잡은 스냅샷으로 끝까지 판단한다.

use super::snapshot::{PathRegistry, SnapshotInfo};
use parking_lot::{Mutex, RwLock};
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{info, warn};

/// 롤백용 기본 보관 스냅샷 수
pub const DEFAULT_MAX_HISTORY: usize = 10;

/// 교체 가능한 레지스트리 핸들
pub struct RegistryHandle {
    current: RwLock<Arc<PathRegistry>>,

    /// 이전 스냅샷들 (오래된 것 앞)
    history: Mutex<VecDeque<Arc<PathRegistry>>>,

    max_history: usize,
}

impl RegistryHandle {
    pub fn new(registry: PathRegistry) -> Self {
        Self {
            current: RwLock::new(Arc::new(registry)),
            history: Mutex::new(VecDeque::new()),
            max_history: DEFAULT_MAX_HISTORY,
        }
    }

    /// 최대 보관 스냅샷 수 설정
    pub fn with_max_history(mut self, max: usize) -> Self {
        self.max_history = max;
        self
    }

    /// 현재 스냅샷
    pub fn current(&self) -> Arc<PathRegistry> {
        self.current.read().clone()
    }

    /// 새 스냅샷으로 교체, 이전 스냅샷 반환
    pub fn swap(&self, registry: PathRegistry) -> Arc<PathRegistry> {
        let next = Arc::new(registry);
        let previous = {
            let mut current = self.current.write();
            std::mem::replace(&mut *current, Arc::clone(&next))
        };

        if self.max_history > 0 {
            let mut history = self.history.lock();
            if history.len() >= self.max_history {
                history.pop_front();
            }
            history.push_back(Arc::clone(&previous));
        }

        info!(
            from = previous.id(),
            to = next.id(),
            entries = next.len(),
            "Registry snapshot swapped"
        );

        previous
    }

    /// 직전 스냅샷으로 롤백
    ///
    /// 보관된 스냅샷이 없으면 `None`
    pub fn rollback(&self) -> Option<SnapshotInfo> {
        let Some(previous) = self.history.lock().pop_back() else {
            warn!("Registry rollback requested with empty history");
            return None;
        };

        let info = previous.info();
        let replaced = {
            let mut current = self.current.write();
            std::mem::replace(&mut *current, previous)
        };

        info!(from = replaced.id(), to = %info.id, "Registry rolled back");
        Some(info)
    }

    /// 보관된 스냅샷 정보 (오래된 순)
    pub fn history(&self) -> Vec<SnapshotInfo> {
        self.history.lock().iter().map(|r| r.info()).collect()
    }
}

impl From<PathRegistry> for RegistryHandle {
    fn from(registry: PathRegistry) -> Self {
        Self::new(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{FieldDescriptor, PathEntry};

    fn registry(id: &str, keys: &[&str]) -> PathRegistry {
        let entries = keys.iter().map(|k| {
            PathEntry::builder(*k, format!("/{}", k))
                .required(FieldDescriptor::string("id"))
                .build()
                .unwrap()
        });
        PathRegistry::from_entries(entries).unwrap().with_id(id)
    }

    #[test]
    fn test_swap_keeps_old_snapshot_intact() {
        let handle = RegistryHandle::new(registry("v1", &["a"]));
        let held = handle.current();

        let previous = handle.swap(registry("v2", &["a", "b"]));

        assert_eq!(previous.id(), "v1");
        assert_eq!(held.len(), 1);
        assert_eq!(handle.current().id(), "v2");
        assert!(handle.current().contains("b"));
    }

    #[test]
    fn test_rollback() {
        let handle = RegistryHandle::new(registry("v1", &["a"]));
        handle.swap(registry("v2", &["b"]));

        let restored = handle.rollback().unwrap();
        assert_eq!(restored.id, "v1");
        assert_eq!(handle.current().id(), "v1");
        assert!(handle.rollback().is_none());
    }

    #[test]
    fn test_history_bounded() {
        let handle = RegistryHandle::new(registry("v0", &[])).with_max_history(2);
        for i in 1..=4 {
            handle.swap(registry(&format!("v{}", i), &[]));
        }

        let ids: Vec<String> = handle.history().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["v2".to_string(), "v3".to_string()]);
    }
}
