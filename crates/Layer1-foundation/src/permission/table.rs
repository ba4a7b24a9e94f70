//! 경로별 권한 테이블
//!
//! 목적지 경로 -> 권한 목록의 정적 매핑. JSON으로 저장/로드한다.

use super::types::PermissionSet;
use crate::storage::JsonStore;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 설정 파일명
pub const PERMISSIONS_FILE: &str = "permissions.json";

/// 경로별 권한 테이블
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionTable {
    by_path: HashMap<String, PermissionSet>,
}

impl PermissionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 경로에 권한 집합 지정 (builder)
    pub fn with_path(mut self, path: impl Into<String>, permissions: impl Into<PermissionSet>) -> Self {
        self.by_path.insert(path.into(), permissions.into());
        self
    }

    /// 경로에 권한 집합 지정
    pub fn insert(&mut self, path: impl Into<String>, permissions: impl Into<PermissionSet>) {
        self.by_path.insert(path.into(), permissions.into());
    }

    /// 경로의 권한 조회 (없으면 빈 집합)
    pub fn permissions_for(&self, path: &str) -> PermissionSet {
        self.by_path.get(path).cloned().unwrap_or_default()
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    // ========================================================================
    // Load / Save
    // ========================================================================

    /// 글로벌 + 프로젝트 병합 로드 (프로젝트 우선)
    pub fn load() -> Result<Self> {
        Self::load_layered(&JsonStore::layered())
    }

    /// 주어진 계층 순서대로 병합 (뒤 계층이 경로 단위로 우선)
    pub fn load_layered(stores: &[JsonStore]) -> Result<Self> {
        let mut table = Self::new();
        for store in stores {
            if let Some(layer) = store.load_optional::<Self>(PERMISSIONS_FILE)? {
                table.merge(layer);
            }
        }
        Ok(table)
    }

    /// 특정 저장소에서 로드
    pub fn load_from(store: &JsonStore) -> Result<Self> {
        Ok(store.load_optional(PERMISSIONS_FILE)?.unwrap_or_default())
    }

    pub fn save_to(&self, store: &JsonStore) -> Result<()> {
        store.save(PERMISSIONS_FILE, self)
    }

    /// 다른 테이블과 병합 (other가 경로 단위로 우선)
    pub fn merge(&mut self, other: PermissionTable) {
        self.by_path.extend(other.by_path);
    }
}
