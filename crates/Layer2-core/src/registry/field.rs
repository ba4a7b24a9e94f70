//! Field Descriptor - 페이로드 슬롯 정의
//!
//! 설정 파일의 문자열 kind는 로드 시점에 [`FieldKind`]로 해석된다.
//! 복합(Complex) 필드는 타입 수준에서 항상 검증기를 가진다.

use crate::schema::{SchemaCatalog, SchemaIssue, SchemaRef};
use navgate_foundation::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// PrimitiveKind
// ============================================================================

/// 원시 타입 (강제 변환 없음)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    String,
    Number,
    Boolean,
}

impl PrimitiveKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }

    /// 값의 런타임 타입이 정확히 일치하는지 확인
    ///
    /// `"123"`은 number가 아니다.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
        }
    }
}

/// 에러 메시지용 JSON 타입 이름
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// FieldKind
// ============================================================================

/// 필드 종류
#[derive(Debug, Clone)]
pub enum FieldKind {
    Primitive(PrimitiveKind),
    Complex(SchemaRef),
}

impl FieldKind {
    /// 에러 리포트용 기대 타입 표기 (`string`, `schema:UserSchema`)
    pub fn label(&self) -> String {
        match self {
            Self::Primitive(kind) => kind.as_str().to_string(),
            Self::Complex(schema) => format!("schema:{}", schema.id()),
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Self::Complex(_))
    }
}

// ============================================================================
// FieldDescriptor
// ============================================================================

/// 해석된 필드 정의
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Primitive(PrimitiveKind::String))
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Primitive(PrimitiveKind::Number))
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Primitive(PrimitiveKind::Boolean))
    }

    pub fn complex(name: impl Into<String>, schema: SchemaRef) -> Self {
        Self::new(name, FieldKind::Complex(schema))
    }

    /// 값 검증
    ///
    /// 원시 타입은 정확한 일치만 허용하고, 복합 타입은 스키마 검증기에 전부 위임한다.
    pub fn validate(&self, value: &Value) -> std::result::Result<Value, Vec<SchemaIssue>> {
        match &self.kind {
            FieldKind::Primitive(kind) => {
                if kind.matches(value) {
                    Ok(value.clone())
                } else {
                    Err(vec![SchemaIssue::at_root(format!(
                        "expected {}, got {}",
                        kind.as_str(),
                        json_type_name(value)
                    ))])
                }
            }
            FieldKind::Complex(schema) => schema.validate(value),
        }
    }
}

// ============================================================================
// FieldSpec - 설정 파일 표현
// ============================================================================

/// 설정 파일의 kind 문자열
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSpecKind {
    String,
    Number,
    Boolean,
    Complex,
}

/// 설정 파일의 필드 정의
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldSpecKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}

impl FieldSpec {
    /// 카탈로그로 스키마를 해석해 [`FieldDescriptor`] 생성
    ///
    /// # Errors
    ///
    /// - 스키마 없는 complex 필드
    /// - 스키마가 붙은 원시 필드
    /// - 카탈로그에 없는 스키마 ID
    pub fn resolve(&self, path_key: &str, catalog: &SchemaCatalog) -> Result<FieldDescriptor> {
        let primitive = match self.kind {
            FieldSpecKind::String => Some(PrimitiveKind::String),
            FieldSpecKind::Number => Some(PrimitiveKind::Number),
            FieldSpecKind::Boolean => Some(PrimitiveKind::Boolean),
            FieldSpecKind::Complex => None,
        };

        match (primitive, &self.schema) {
            (Some(kind), None) => Ok(FieldDescriptor::new(&self.name, FieldKind::Primitive(kind))),
            (Some(kind), Some(schema)) => Err(Error::invalid_registry(
                path_key,
                format!(
                    "field '{}' is {} but declares schema '{}'",
                    self.name,
                    kind.as_str(),
                    schema
                ),
            )),
            (None, None) => Err(Error::invalid_registry(
                path_key,
                format!("complex field '{}' has no schema", self.name),
            )),
            (None, Some(schema)) => {
                let schema = catalog.resolve(schema).map_err(|_| {
                    Error::invalid_registry(
                        path_key,
                        format!("field '{}' references unknown schema '{}'", self.name, schema),
                    )
                })?;
                Ok(FieldDescriptor::complex(&self.name, schema))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primitive_no_coercion() {
        assert!(PrimitiveKind::Number.matches(&json!(456)));
        assert!(PrimitiveKind::Number.matches(&json!(4.5)));
        assert!(!PrimitiveKind::Number.matches(&json!("456")));
        assert!(!PrimitiveKind::Boolean.matches(&json!("true")));
        assert!(!PrimitiveKind::String.matches(&json!(null)));
    }

    #[test]
    fn test_primitive_issue_message() {
        let issues = FieldDescriptor::string("orderId")
            .validate(&json!(456))
            .unwrap_err();
        assert_eq!(issues, vec![SchemaIssue::at_root("expected string, got number")]);
    }

    #[test]
    fn test_spec_resolution() {
        let mut catalog = SchemaCatalog::new();
        catalog
            .register_json("UserSchema", &json!({ "type": "object" }))
            .unwrap();

        let spec: FieldSpec =
            serde_json::from_value(json!({ "name": "user", "kind": "complex", "schema": "UserSchema" }))
                .unwrap();
        let descriptor = spec.resolve("path1", &catalog).unwrap();
        assert_eq!(descriptor.kind.label(), "schema:UserSchema");

        let spec: FieldSpec = serde_json::from_value(json!({ "name": "orderId", "kind": "string" })).unwrap();
        assert_eq!(spec.resolve("path1", &catalog).unwrap().kind.label(), "string");
    }

    #[test]
    fn test_complex_without_schema_is_config_error() {
        let spec = FieldSpec {
            name: "user".into(),
            kind: FieldSpecKind::Complex,
            schema: None,
        };
        let err = spec.resolve("path1", &SchemaCatalog::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidRegistry { ref path_key, .. } if path_key == "path1"));
    }

    #[test]
    fn test_unknown_schema_is_config_error() {
        let spec = FieldSpec {
            name: "property".into(),
            kind: FieldSpecKind::Complex,
            schema: Some("CollateralSchema".into()),
        };
        assert!(spec.resolve("collateral", &SchemaCatalog::new()).is_err());
    }

    #[test]
    fn test_primitive_with_schema_is_config_error() {
        let spec = FieldSpec {
            name: "orderId".into(),
            kind: FieldSpecKind::String,
            schema: Some("UserSchema".into()),
        };
        assert!(spec.resolve("path1", &SchemaCatalog::new()).is_err());
    }
}
