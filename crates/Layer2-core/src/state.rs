//! Shared State - 게이트를 통과한 페이로드 보관소
//!
//! 목적지 경로를 키로 하는 단일 upsert. 마지막 쓰기가 이긴다.
//! 게이트만 `set`을 호출하고, 목적지 페이지는 `get`만 호출한다.

use crate::payload::NavigationPayload;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// 공유 상태 계약
pub trait PayloadStore: Send + Sync {
    fn set(&self, key: &str, payload: Arc<NavigationPayload>);

    fn get(&self, key: &str) -> Option<Arc<NavigationPayload>>;

    /// 목적지 페이지가 읽은 후 정리할 때 사용
    fn remove(&self, key: &str) -> Option<Arc<NavigationPayload>>;
}

/// 프로세스 내 공유 상태
#[derive(Debug, Default)]
pub struct NavigationState {
    payloads: RwLock<HashMap<String, Arc<NavigationPayload>>>,
    writes: AtomicU64,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&self) {
        self.payloads.write().clear();
    }

    pub fn len(&self) -> usize {
        self.payloads.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.read().is_empty()
    }

    /// 누적 `set` 호출 수
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }
}

impl PayloadStore for NavigationState {
    fn set(&self, key: &str, payload: Arc<NavigationPayload>) {
        self.payloads.write().insert(key.to_string(), payload);
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    fn get(&self, key: &str) -> Option<Arc<NavigationPayload>> {
        self.payloads.read().get(key).cloned()
    }

    fn remove(&self, key: &str) -> Option<Arc<NavigationPayload>> {
        self.payloads.write().remove(key)
    }
}
