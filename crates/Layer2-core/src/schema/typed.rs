//! Rust 타입 기반 검증기
//!
//! `serde::Deserialize` 구현을 스키마로 사용한다. 통과한 값은 타입으로
//! 역직렬화 후 다시 직렬화되므로, 선언되지 않은 필드는 제거된다.

use super::{SchemaIssue, SchemaValidator};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::marker::PhantomData;

/// 타입 `T`의 형태를 요구하는 검증기
pub struct TypedSchema<T> {
    id: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> TypedSchema<T>
where
    T: DeserializeOwned + Serialize,
{
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            _marker: PhantomData,
        }
    }

    /// 검증 후 타입 값으로 반환
    pub fn parse(&self, value: &Value) -> Result<T, Vec<SchemaIssue>> {
        T::deserialize(value).map_err(|e| vec![SchemaIssue::at_root(e.to_string())])
    }
}

impl<T> SchemaValidator for TypedSchema<T>
where
    T: DeserializeOwned + Serialize,
{
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self, value: &Value) -> Result<Value, Vec<SchemaIssue>> {
        let typed = self.parse(value)?;
        serde_json::to_value(typed).map_err(|e| vec![SchemaIssue::at_root(e.to_string())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize)]
    struct User {
        id: String,
        name: String,
    }

    #[test]
    fn test_narrows_unknown_fields() {
        let schema = TypedSchema::<User>::new("UserSchema");
        let accepted = schema
            .validate(&json!({ "id": "123", "name": "John", "debug": true }))
            .unwrap();

        assert_eq!(accepted, json!({ "id": "123", "name": "John" }));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let schema = TypedSchema::<User>::new("UserSchema");
        let issues = schema.validate(&json!({ "id": 123, "name": "John" })).unwrap_err();

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "$");
        assert!(issues[0].message.contains("invalid type"));
    }
}
