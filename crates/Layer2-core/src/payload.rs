//! Navigation Payload - 페이지 간 전달 데이터
//!
//! 호출 페이지가 네비게이션 직전에 만들고, 게이트 통과 후에는 공유 상태로
//! 소유권이 넘어간다 (`Arc`로만 읽힘).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 네비게이션 페이로드
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationPayload {
    /// 필수 슬롯
    #[serde(default)]
    pub required: Map<String, Value>,

    /// 선택 슬롯
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<Map<String, Value>>,
}

impl NavigationPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// 필수 슬롯 값 추가 (builder)
    pub fn with_required(mut self, name: impl Into<String>, value: Value) -> Self {
        self.required.insert(name.into(), value);
        self
    }

    /// 선택 슬롯 값 추가 (builder)
    pub fn with_optional(mut self, name: impl Into<String>, value: Value) -> Self {
        self.optional
            .get_or_insert_with(Map::new)
            .insert(name.into(), value);
        self
    }

    pub fn required_value(&self, name: &str) -> Option<&Value> {
        self.required.get(name)
    }

    pub fn optional_value(&self, name: &str) -> Option<&Value> {
        self.optional.as_ref().and_then(|m| m.get(name))
    }

    pub fn has_required(&self, name: &str) -> bool {
        self.required.contains_key(name)
    }
}
