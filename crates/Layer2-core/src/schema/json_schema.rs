//! JSON Schema 기반 검증기

use super::{SchemaIssue, SchemaValidator};
use navgate_foundation::{Error, Result};
use serde_json::Value;

/// JSON Schema 문서로 컴파일된 검증기
///
/// 스키마는 로드 시 한 번만 컴파일한다. 잘못된 스키마 문서는 설정 에러.
pub struct JsonSchema {
    id: String,
    validator: jsonschema::Validator,
}

impl JsonSchema {
    /// 스키마 컴파일
    ///
    /// # Errors
    ///
    /// 스키마 문서가 유효한 JSON Schema가 아니면 [`Error::InvalidSchema`]
    pub fn compile(id: impl Into<String>, schema: &Value) -> Result<Self> {
        let id = id.into();
        let validator = jsonschema::options()
            .build(schema)
            .map_err(|e| Error::invalid_schema(&id, e.to_string()))?;

        Ok(Self { id, validator })
    }
}

impl SchemaValidator for JsonSchema {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self, value: &Value) -> std::result::Result<Value, Vec<SchemaIssue>> {
        let issues: Vec<SchemaIssue> = self
            .validator
            .iter_errors(value)
            .map(|error| {
                let path = error.instance_path.to_string();
                SchemaIssue::new(format!("${path}"), error.to_string())
            })
            .collect();

        if issues.is_empty() {
            Ok(value.clone())
        } else {
            Err(issues)
        }
    }
}

impl std::fmt::Debug for JsonSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonSchema").field("id", &self.id).finish()
    }
}
