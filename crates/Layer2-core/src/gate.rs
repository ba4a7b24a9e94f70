//! Navigation Gate - 네비게이션 허용 여부를 결정하는 유일한 권한자
//!
//! 한 번의 `attempt`는 다섯 단계를 순서대로 통과한다.
//!
//! ```text
//! lookup ──▶ presence ──▶ shape ──▶ permission ──▶ commit
//!   │            │          │           │             │
//!   ▼            ▼          ▼           ▼             ▼
//! Unknown     Missing    Invalid   Insufficient   state.set + router.go_to
//! PathKey     Fields     Fields    Permissions
//! ```
//!
//! 각 단계는 다음 단계의 엄격한 전제 조건이다. 거부 경로에서는 공유 상태 쓰기와
//! 라우터 호출이 일어나지 않는다.

use crate::payload::NavigationPayload;
use crate::permission::PermissionSource;
use crate::registry::{FieldDescriptor, PathEntry, PathRegistry, RegistryHandle};
use crate::rejection::{FieldFailure, Rejection};
use crate::router::Router;
use crate::schema::SchemaIssue;
use crate::state::PayloadStore;
use navgate_foundation::{AuditEntry, AuditTrail, GateSettings, PermissionChecker};
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

// ============================================================================
// NavigationReceipt
// ============================================================================

/// 성공한 네비게이션 결과
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationReceipt {
    pub path_key: String,

    /// 이동한 경로 (공유 상태 키)
    pub path: String,

    /// 게이트 전체 소요 시간
    pub elapsed: Duration,

    /// 검증에 실패해 버려진 선택 필드들
    pub optional_warnings: Vec<FieldFailure>,
}

/// 검증을 통과해 커밋만 남은 시도
struct Accepted {
    entry: Arc<PathEntry>,
    payload: NavigationPayload,
    optional_warnings: Vec<FieldFailure>,
}

// ============================================================================
// NavigationGate
// ============================================================================

/// 네비게이션 게이트
///
/// 모든 협력자는 주입된다. 게이트 자체는 시도 사이에 상태를 갖지 않는다
/// (감사 로그 제외).
pub struct NavigationGate {
    registry: Arc<RegistryHandle>,
    permissions: Arc<dyn PermissionSource>,
    state: Arc<dyn PayloadStore>,
    router: Arc<dyn Router>,
    audit: Option<Arc<AuditTrail>>,
    settings: GateSettings,
}

impl NavigationGate {
    pub fn new(
        registry: Arc<RegistryHandle>,
        permissions: Arc<dyn PermissionSource>,
        state: Arc<dyn PayloadStore>,
        router: Arc<dyn Router>,
    ) -> Self {
        let settings = GateSettings::default();
        Self {
            registry,
            permissions,
            state,
            router,
            audit: audit_for(&settings),
            settings,
        }
    }

    /// 설정 적용 (감사 로그도 설정에 맞게 다시 만든다)
    pub fn with_settings(mut self, settings: GateSettings) -> Self {
        self.audit = audit_for(&settings);
        self.settings = settings;
        self
    }

    /// 외부에서 공유하는 감사 로그 사용
    pub fn with_audit(mut self, audit: Arc<AuditTrail>) -> Self {
        self.audit = Some(audit);
        self
    }

    pub fn without_audit(mut self) -> Self {
        self.audit = None;
        self
    }

    pub fn settings(&self) -> &GateSettings {
        &self.settings
    }

    pub fn registry(&self) -> &Arc<RegistryHandle> {
        &self.registry
    }

    pub fn audit(&self) -> Option<&Arc<AuditTrail>> {
        self.audit.as_ref()
    }

    /// 네비게이션 시도
    pub fn attempt(
        &self,
        path_key: &str,
        payload: NavigationPayload,
    ) -> Result<NavigationReceipt, Rejection> {
        self.attempt_from(None, path_key, payload)
    }

    /// 호출 페이지 식별자를 포함한 네비게이션 시도
    ///
    /// `origin`은 로그와 감사 기록에만 쓰이고 판정에는 영향이 없다.
    pub fn attempt_from(
        &self,
        origin: Option<&str>,
        path_key: &str,
        payload: NavigationPayload,
    ) -> Result<NavigationReceipt, Rejection> {
        let started = Instant::now();

        // 시도 하나는 하나의 스냅샷만 본다
        let registry = self.registry.current();

        let evaluated = self.evaluate(&registry, path_key, payload);

        // 예산은 검증+권한 확인 구간만 잰다 (커밋 제외)
        let checked = started.elapsed();
        if checked > self.settings.soft_budget() {
            warn!(
                path_key,
                elapsed_ms = checked.as_secs_f64() * 1000.0,
                budget_ms = self.settings.soft_budget_ms,
                "Navigation gate exceeded soft budget"
            );
        }

        let result = evaluated.map(|accepted| {
            let path = accepted.entry.path().to_string();
            self.state.set(&path, Arc::new(accepted.payload));
            self.router.go_to(&path);
            (path, accepted.optional_warnings)
        });
        let elapsed = started.elapsed();

        match result {
            Ok((path, optional_warnings)) => {
                info!(
                    path_key,
                    path = %path,
                    origin = origin.unwrap_or("-"),
                    outcome = "committed",
                    elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                    "Navigation committed"
                );
                self.record(
                    AuditEntry::committed(path_key, &path)
                        .with_origin(origin)
                        .with_elapsed(elapsed),
                );

                Ok(NavigationReceipt {
                    path_key: path_key.to_string(),
                    path,
                    elapsed,
                    optional_warnings,
                })
            }
            Err(rejection) => {
                warn!(
                    path_key,
                    origin = origin.unwrap_or("-"),
                    outcome = "rejected",
                    reason = rejection.kind(),
                    elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                    "Navigation rejected: {}",
                    rejection
                );

                let mut entry = AuditEntry::rejected(path_key, rejection.kind(), rejection.to_string())
                    .with_origin(origin)
                    .with_elapsed(elapsed);
                if let Some(found) = registry.get(path_key) {
                    entry = entry.with_path(found.path());
                }
                self.record(entry);

                Err(rejection)
            }
        }
    }

    /// lookup → presence → shape → permission
    fn evaluate(
        &self,
        registry: &PathRegistry,
        path_key: &str,
        payload: NavigationPayload,
    ) -> Result<Accepted, Rejection> {
        let entry = registry.lookup(path_key)?;

        let missing: Vec<String> = entry
            .required()
            .iter()
            .filter(|field| !payload.has_required(&field.name))
            .map(|field| field.name.clone())
            .collect();
        if !missing.is_empty() {
            return Err(Rejection::MissingFields(missing));
        }

        let NavigationPayload { required, optional } = payload;
        let required = self.validate_required(&entry, required)?;

        if entry.requires_permissions() {
            let mode = entry
                .permission_match()
                .unwrap_or(self.settings.default_permission_match);
            let actual = self.permissions.permissions(
                &entry,
                &NavigationPayload {
                    required: required.clone(),
                    optional: None,
                },
            );
            debug!(
                path_key,
                source = self.permissions.name(),
                mode = %mode,
                "Checking permissions"
            );
            PermissionChecker::new(mode).ensure(&actual, entry.required_permissions())?;
        }

        let (optional, optional_warnings) = match optional {
            Some(values) => {
                let (accepted, warnings) = validate_optional(&entry, values);
                (Some(accepted), warnings)
            }
            None => (None, Vec::new()),
        };

        Ok(Accepted {
            entry,
            payload: NavigationPayload { required, optional },
            optional_warnings,
        })
    }

    /// 필수 필드 형태 검증 - 실패를 모두 모은다
    fn validate_required(
        &self,
        entry: &PathEntry,
        mut values: Map<String, Value>,
    ) -> Result<Map<String, Value>, Rejection> {
        let mut failures = Vec::new();

        for field in entry.required() {
            let Some(value) = values.get_mut(&field.name) else {
                continue;
            };
            match field.validate(value) {
                Ok(narrowed) => *value = narrowed,
                Err(issues) => failures.push(failure(field, issues)),
            }
        }

        if !failures.is_empty() {
            return Err(Rejection::InvalidFields(failures));
        }

        for name in values.keys().filter(|name| !entry.is_declared(name)) {
            debug!(path_key = entry.key(), field = %name, "Passing through undeclared field");
        }

        Ok(values)
    }

    fn record(&self, entry: AuditEntry) {
        if let Some(audit) = &self.audit {
            audit.record(entry);
        }
    }
}

impl std::fmt::Debug for NavigationGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationGate")
            .field("registry", &self.registry.current().info())
            .field("permissions", &self.permissions.name())
            .field("audit", &self.audit.is_some())
            .field("settings", &self.settings)
            .finish()
    }
}

/// 선택 필드 검증 - 실패는 경고로만 남기고 해당 값은 버린다
fn validate_optional(
    entry: &PathEntry,
    values: Map<String, Value>,
) -> (Map<String, Value>, Vec<FieldFailure>) {
    let mut accepted = Map::new();
    let mut warnings = Vec::new();

    for (name, value) in values {
        let Some(field) = entry.optional_field(&name) else {
            debug!(path_key = entry.key(), field = %name, "Passing through undeclared optional field");
            accepted.insert(name, value);
            continue;
        };

        match field.validate(&value) {
            Ok(narrowed) => {
                accepted.insert(name, narrowed);
            }
            Err(issues) => {
                let warning = failure(field, issues);
                warn!(
                    path_key = entry.key(),
                    field = %warning.field,
                    "Dropping invalid optional field: {}",
                    warning
                );
                warnings.push(warning);
            }
        }
    }

    (accepted, warnings)
}

fn failure(field: &FieldDescriptor, issues: Vec<SchemaIssue>) -> FieldFailure {
    FieldFailure::new(&field.name, field.kind.label(), issues)
}

fn audit_for(settings: &GateSettings) -> Option<Arc<AuditTrail>> {
    settings
        .audit_enabled
        .then(|| Arc::new(AuditTrail::new(settings.audit_capacity)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::PathPermissionSource;
    use crate::router::HistoryRouter;
    use crate::state::NavigationState;
    use navgate_foundation::{AuditOutcome, PermissionTable};
    use serde_json::json;

    struct Fixture {
        gate: NavigationGate,
        state: Arc<NavigationState>,
        router: Arc<HistoryRouter>,
    }

    fn fixture() -> Fixture {
        let registry = PathRegistry::from_entries([
            PathEntry::builder("orders", "/orders")
                .required(FieldDescriptor::string("orderId"))
                .required(FieldDescriptor::number("quantity"))
                .optional(FieldDescriptor::boolean("express"))
                .build()
                .unwrap(),
            PathEntry::builder("admin", "/admin")
                .required(FieldDescriptor::string("id"))
                .permissions(["view-x"])
                .build()
                .unwrap(),
        ])
        .unwrap();

        let state = Arc::new(NavigationState::new());
        let router = Arc::new(HistoryRouter::new());
        let gate = NavigationGate::new(
            Arc::new(RegistryHandle::new(registry)),
            Arc::new(PathPermissionSource::new(
                PermissionTable::new().with_path("/admin", ["view-y"]),
            )),
            state.clone(),
            router.clone(),
        );

        Fixture { gate, state, router }
    }

    #[test]
    fn test_commit_writes_state_and_routes() {
        let f = fixture();
        let receipt = f
            .gate
            .attempt(
                "orders",
                NavigationPayload::new()
                    .with_required("orderId", json!("456"))
                    .with_required("quantity", json!(2)),
            )
            .unwrap();

        assert_eq!(receipt.path, "/orders");
        assert!(receipt.optional_warnings.is_empty());
        assert!(f.state.get("/orders").is_some());
        assert_eq!(f.router.current().as_deref(), Some("/orders"));
    }

    #[test]
    fn test_no_coercion_of_numeric_strings() {
        let f = fixture();
        let err = f
            .gate
            .attempt(
                "orders",
                NavigationPayload::new()
                    .with_required("orderId", json!("456"))
                    .with_required("quantity", json!("2")),
            )
            .unwrap_err();

        assert_eq!(err.field_names(), vec!["quantity"]);
        assert_eq!(f.state.write_count(), 0);
    }

    #[test]
    fn test_invalid_optional_is_dropped() {
        let f = fixture();
        let receipt = f
            .gate
            .attempt(
                "orders",
                NavigationPayload::new()
                    .with_required("orderId", json!("456"))
                    .with_required("quantity", json!(1))
                    .with_optional("express", json!("yes"))
                    .with_optional("note", json!("leave at door")),
            )
            .unwrap();

        assert_eq!(receipt.optional_warnings.len(), 1);
        assert_eq!(receipt.optional_warnings[0].field, "express");

        let stored = f.state.get("/orders").unwrap();
        assert!(stored.optional_value("express").is_none());
        assert_eq!(stored.optional_value("note"), Some(&json!("leave at door")));
    }

    #[test]
    fn test_rejection_is_audited() {
        let f = fixture();
        let err = f
            .gate
            .attempt_from(
                Some("home"),
                "admin",
                NavigationPayload::new().with_required("id", json!("1")),
            )
            .unwrap_err();
        assert_eq!(err.kind(), "insufficient_permissions");

        let latest = f.gate.audit().unwrap().latest().unwrap();
        assert_eq!(latest.outcome, AuditOutcome::Rejected);
        assert_eq!(latest.origin.as_deref(), Some("home"));
        assert_eq!(latest.path.as_deref(), Some("/admin"));
        assert_eq!(latest.reason_kind.as_deref(), Some("insufficient_permissions"));
    }

    #[test]
    fn test_audit_disabled_by_settings() {
        let f = fixture();
        let gate = f.gate.with_settings(GateSettings::new().audit_enabled(false));
        assert!(gate.audit().is_none());
    }
}
