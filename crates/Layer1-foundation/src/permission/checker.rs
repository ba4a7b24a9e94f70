//! 권한 검사기
//!
//! 실제 권한 집합이 요구 권한 목록을 만족하는지 판정한다.
//! 실제 권한을 어디서 가져오는지는 호출자 몫.

use super::types::{PermissionMatch, PermissionSet};
use thiserror::Error;

/// 요구 권한 불충족 - [`PermissionChecker::ensure`]가 반환
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("insufficient permissions: requires {mode} of [{}], has [{}]", .required.join(", "), .actual.join(", "))]
pub struct PermissionDenied {
    pub required: Vec<String>,
    pub actual: Vec<String>,
    pub mode: PermissionMatch,
}

/// 권한 포함 여부 검사
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionChecker {
    mode: PermissionMatch,
}

impl PermissionChecker {
    pub fn new(mode: PermissionMatch) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> PermissionMatch {
        self.mode
    }

    /// `actual`이 `required`를 만족하는지 검사
    ///
    /// `required`가 비어 있으면 항상 통과.
    pub fn check(&self, actual: &PermissionSet, required: &[String]) -> bool {
        if required.is_empty() {
            return true;
        }

        match self.mode {
            PermissionMatch::Any => required.iter().any(|p| actual.contains(p)),
            PermissionMatch::All => required.iter().all(|p| actual.contains(p)),
        }
    }

    /// [`check`](Self::check)의 에러 반환 버전
    pub fn ensure(
        &self,
        actual: &PermissionSet,
        required: &[String],
    ) -> Result<(), PermissionDenied> {
        if self.check(actual, required) {
            Ok(())
        } else {
            Err(PermissionDenied {
                required: required.to_vec(),
                actual: actual.to_vec(),
                mode: self.mode,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_required_always_satisfied() {
        let checker = PermissionChecker::new(PermissionMatch::All);
        assert!(checker.check(&PermissionSet::new(), &[]));
    }

    #[test]
    fn test_any_mode() {
        let checker = PermissionChecker::new(PermissionMatch::Any);
        let req = required(&["view-x", "admin"]);

        assert!(checker.check(&["view-x"].into(), &req));
        assert!(!checker.check(&["view-y"].into(), &req));
    }

    #[test]
    fn test_all_mode() {
        let checker = PermissionChecker::new(PermissionMatch::All);
        let req = required(&["view-x", "admin"]);

        assert!(!checker.check(&["view-x"].into(), &req));
        assert!(checker.check(&["view-x", "admin", "extra"].into(), &req));
    }

    #[test]
    fn test_ensure_reports_both_lists() {
        let checker = PermissionChecker::default();
        let err = checker
            .ensure(&["view-y"].into(), &required(&["view-x"]))
            .unwrap_err();

        assert_eq!(err.required, vec!["view-x".to_string()]);
        assert_eq!(err.actual, vec!["view-y".to_string()]);
        assert_eq!(
            err.to_string(),
            "insufficient permissions: requires any of [view-x], has [view-y]"
        );
    }
}
