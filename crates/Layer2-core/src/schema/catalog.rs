//! Schema Catalog - 스키마 ID -> 검증기

use super::{JsonSchema, SchemaRef, SchemaValidator};
use navgate_foundation::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

/// 스키마 카탈로그
///
/// 레지스트리 로드 시 복합 필드의 스키마 ID를 검증기로 해석하는 데 사용된다.
#[derive(Debug, Clone, Default)]
pub struct SchemaCatalog {
    schemas: HashMap<String, SchemaRef>,
}

impl SchemaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 검증기 등록 (같은 ID가 있으면 교체)
    pub fn register(&mut self, validator: impl SchemaValidator + 'static) -> &mut Self {
        let schema = SchemaRef::new(validator);
        let id = schema.id().to_string();
        if self.schemas.insert(id.clone(), schema).is_some() {
            warn!(schema = %id, "Schema replaced in catalog");
        } else {
            debug!(schema = %id, "Schema registered");
        }
        self
    }

    /// builder 형태 등록
    pub fn with(mut self, validator: impl SchemaValidator + 'static) -> Self {
        self.register(validator);
        self
    }

    /// JSON Schema 문서 컴파일 후 등록
    pub fn register_json(&mut self, id: impl Into<String>, schema: &Value) -> Result<&mut Self> {
        let compiled = JsonSchema::compile(id, schema)?;
        Ok(self.register(compiled))
    }

    pub fn get(&self, id: &str) -> Option<SchemaRef> {
        self.schemas.get(id).cloned()
    }

    /// ID 해석 (없으면 설정 에러)
    pub fn resolve(&self, id: &str) -> Result<SchemaRef> {
        self.get(id).ok_or_else(|| Error::UnknownSchema(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.schemas.contains_key(id)
    }

    /// 정렬된 ID 목록
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.schemas.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
