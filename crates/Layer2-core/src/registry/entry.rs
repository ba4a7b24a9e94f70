//! Path Entry - 경로 키 하나에 대한 검증 요구사항

use super::field::{FieldDescriptor, FieldSpec};
use crate::schema::SchemaCatalog;
use navgate_foundation::{Error, PermissionMatch, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// PathEntry
// ============================================================================

/// 레지스트리 항목
///
/// 생성 후 변경되지 않는다. 변경이 필요하면 새 레지스트리 스냅샷을 만든다.
#[derive(Debug, Clone)]
pub struct PathEntry {
    key: String,
    path: String,
    required: Vec<FieldDescriptor>,
    optional: Vec<FieldDescriptor>,
    required_permissions: Vec<String>,
    permission_match: Option<PermissionMatch>,
}

impl PathEntry {
    pub fn builder(key: impl Into<String>, path: impl Into<String>) -> PathEntryBuilder {
        PathEntryBuilder {
            key: key.into(),
            path: path.into(),
            required: Vec::new(),
            optional: Vec::new(),
            required_permissions: Vec::new(),
            permission_match: None,
        }
    }

    /// 경로 키
    pub fn key(&self) -> &str {
        &self.key
    }

    /// 해석된 라우트 경로
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn required(&self) -> &[FieldDescriptor] {
        &self.required
    }

    pub fn optional(&self) -> &[FieldDescriptor] {
        &self.optional
    }

    /// 요구 권한 (비어 있으면 권한 확인 생략)
    pub fn required_permissions(&self) -> &[String] {
        &self.required_permissions
    }

    pub fn requires_permissions(&self) -> bool {
        !self.required_permissions.is_empty()
    }

    /// 엔트리에 지정된 매칭 방식 (없으면 게이트 기본값 사용)
    pub fn permission_match(&self) -> Option<PermissionMatch> {
        self.permission_match
    }

    pub fn optional_field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.optional.iter().find(|f| f.name == name)
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.required.iter().chain(self.optional.iter()).any(|f| f.name == name)
    }
}

// ============================================================================
// PathEntryBuilder
// ============================================================================

/// PathEntry 빌더 - `build()`에서 불변식 검사
pub struct PathEntryBuilder {
    key: String,
    path: String,
    required: Vec<FieldDescriptor>,
    optional: Vec<FieldDescriptor>,
    required_permissions: Vec<String>,
    permission_match: Option<PermissionMatch>,
}

impl PathEntryBuilder {
    pub fn required(mut self, field: FieldDescriptor) -> Self {
        self.required.push(field);
        self
    }

    pub fn optional(mut self, field: FieldDescriptor) -> Self {
        self.optional.push(field);
        self
    }

    pub fn permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_permissions = permissions.into_iter().map(Into::into).collect();
        self
    }

    pub fn permission_match(mut self, mode: PermissionMatch) -> Self {
        self.permission_match = Some(mode);
        self
    }

    /// # Errors
    ///
    /// - 빈 경로 키/경로
    /// - required 또는 optional 내 중복 이름
    /// - required와 optional에 같은 이름
    pub fn build(self) -> Result<PathEntry> {
        if self.key.trim().is_empty() {
            return Err(Error::invalid_registry(&self.key, "path key is empty"));
        }
        if self.path.trim().is_empty() {
            return Err(Error::invalid_registry(&self.key, "path is empty"));
        }

        let mut seen = HashSet::new();
        for field in &self.required {
            if !seen.insert(field.name.as_str()) {
                return Err(Error::invalid_registry(
                    &self.key,
                    format!("duplicate required field '{}'", field.name),
                ));
            }
        }

        let mut seen_optional = HashSet::new();
        for field in &self.optional {
            if seen.contains(field.name.as_str()) {
                return Err(Error::invalid_registry(
                    &self.key,
                    format!("field '{}' is both required and optional", field.name),
                ));
            }
            if !seen_optional.insert(field.name.as_str()) {
                return Err(Error::invalid_registry(
                    &self.key,
                    format!("duplicate optional field '{}'", field.name),
                ));
            }
        }

        Ok(PathEntry {
            key: self.key,
            path: self.path,
            required: self.required,
            optional: self.optional,
            required_permissions: self.required_permissions,
            permission_match: self.permission_match,
        })
    }
}

// ============================================================================
// PathSpec - 설정 파일 표현
// ============================================================================

/// 설정 파일의 경로 정의
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathSpec {
    pub path: String,

    #[serde(default)]
    pub required: Vec<FieldSpec>,

    #[serde(default)]
    pub optional: Vec<FieldSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_permissions: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission_match: Option<PermissionMatch>,
}

impl PathSpec {
    /// 스키마를 해석해 [`PathEntry`] 생성
    pub fn resolve(&self, key: &str, catalog: &SchemaCatalog) -> Result<PathEntry> {
        let mut builder = PathEntry::builder(key, &self.path);

        for spec in &self.required {
            builder = builder.required(spec.resolve(key, catalog)?);
        }
        for spec in &self.optional {
            builder = builder.optional(spec.resolve(key, catalog)?);
        }
        if let Some(ref permissions) = self.required_permissions {
            builder = builder.permissions(permissions.iter().cloned());
        }
        if let Some(mode) = self.permission_match {
            builder = builder.permission_match(mode);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let entry = PathEntry::builder("path1", "/orders")
            .required(FieldDescriptor::string("orderId"))
            .optional(FieldDescriptor::boolean("expedite"))
            .permissions(["view-x"])
            .build()
            .unwrap();

        assert_eq!(entry.key(), "path1");
        assert_eq!(entry.path(), "/orders");
        assert!(entry.requires_permissions());
        assert!(entry.is_declared("expedite"));
        assert!(!entry.is_declared("other"));
        assert!(entry.permission_match().is_none());
    }

    #[test]
    fn test_duplicate_required_rejected() {
        let result = PathEntry::builder("path1", "/orders")
            .required(FieldDescriptor::string("orderId"))
            .required(FieldDescriptor::number("orderId"))
            .build();

        assert!(matches!(result, Err(Error::InvalidRegistry { .. })));
    }

    #[test]
    fn test_required_optional_overlap_rejected() {
        let result = PathEntry::builder("path1", "/orders")
            .required(FieldDescriptor::string("orderId"))
            .optional(FieldDescriptor::string("orderId"))
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_empty_path_rejected() {
        assert!(PathEntry::builder("path1", " ").build().is_err());
        assert!(PathEntry::builder("", "/orders").build().is_err());
    }

    #[test]
    fn test_path_spec_resolution() {
        let spec: PathSpec = serde_json::from_value(json!({
            "path": "/orders",
            "required": [{ "name": "orderId", "kind": "string" }],
            "requiredPermissions": ["view-x"],
            "permissionMatch": "all"
        }))
        .unwrap();

        let entry = spec.resolve("path1", &SchemaCatalog::new()).unwrap();
        assert_eq!(entry.required().len(), 1);
        assert!(entry.optional().is_empty());
        assert_eq!(entry.required_permissions(), &["view-x".to_string()]);
        assert_eq!(entry.permission_match(), Some(PermissionMatch::All));
    }
}
