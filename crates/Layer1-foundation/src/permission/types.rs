//! 권한 타입 정의
//!
//! 권한은 단순 문자열(capability)이며, 집합 단위로 비교한다.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 요구 권한 목록과 실제 권한 집합의 매칭 방식
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionMatch {
    /// 요구 권한 중 하나 이상 보유 (OR)
    #[default]
    Any,

    /// 요구 권한 모두 보유 (AND)
    All,
}

impl PermissionMatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::All => "all",
        }
    }
}

impl std::fmt::Display for PermissionMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 권한 집합
///
/// 정렬된 집합이라 로그/에러 메시지 출력 순서가 항상 같다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<String>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, permission: impl Into<String>) -> bool {
        self.0.insert(permission.into())
    }

    pub fn contains(&self, permission: &str) -> bool {
        self.0.contains(permission)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// 정렬된 Vec으로 변환 (에러 리포트용)
    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for PermissionSet {
    fn from(items: [S; N]) -> Self {
        items.into_iter().collect()
    }
}

impl From<Vec<String>> for PermissionSet {
    fn from(items: Vec<String>) -> Self {
        items.into_iter().collect()
    }
}
