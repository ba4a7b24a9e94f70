//! Audit Trail - 네비게이션 감사 로그 기록 및 조회
//!
//! 프로세스 메모리에 최근 N개의 엔트리를 보관한다. 용량 초과 시 가장 오래된 것부터 제거.

use super::types::{AuditEntry, AuditOutcome, AuditQuery, AuditStatistics};
use parking_lot::Mutex;
use std::collections::VecDeque;
use tracing::debug;

/// 기본 보관 개수
pub const DEFAULT_AUDIT_CAPACITY: usize = 1000;

/// 감사 로그
///
/// ## 사용법
///
/// ```ignore
/// use navgate_foundation::audit::{AuditTrail, AuditEntry, AuditQuery, AuditOutcome};
///
/// let trail = AuditTrail::new(100);
/// trail.record(AuditEntry::committed("path1", "/orders"));
///
/// let rejected = trail.query(&AuditQuery::new().with_outcome(AuditOutcome::Rejected));
/// ```
pub struct AuditTrail {
    entries: Mutex<VecDeque<AuditEntry>>,
    capacity: usize,
}

impl AuditTrail {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity.min(DEFAULT_AUDIT_CAPACITY))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 엔트리 기록
    pub fn record(&self, entry: AuditEntry) {
        debug!(
            id = %entry.id,
            path_key = %entry.path_key,
            outcome = entry.outcome.as_str(),
            "Audit entry recorded"
        );

        let mut entries = self.entries.lock();
        if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// 모든 엔트리 (오래된 순)
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries.lock().iter().cloned().collect()
    }

    /// 가장 최근 엔트리
    pub fn latest(&self) -> Option<AuditEntry> {
        self.entries.lock().back().cloned()
    }

    /// 조회 (최신 순)
    pub fn query(&self, query: &AuditQuery) -> Vec<AuditEntry> {
        let entries = self.entries.lock();
        let matched = entries.iter().rev().filter(|e| query.matches(e)).cloned();

        match query.limit {
            Some(limit) => matched.take(limit).collect(),
            None => matched.collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// 통계
    pub fn statistics(&self) -> AuditStatistics {
        let entries = self.entries.lock();
        let mut stats = AuditStatistics {
            total_entries: entries.len() as u64,
            period_start: entries.front().map(|e| e.timestamp),
            period_end: entries.back().map(|e| e.timestamp),
            ..Default::default()
        };

        let mut elapsed_total: u128 = 0;
        for entry in entries.iter() {
            match entry.outcome {
                AuditOutcome::Committed => stats.committed += 1,
                AuditOutcome::Rejected => stats.rejected += 1,
            }
            if let Some(ref kind) = entry.reason_kind {
                *stats.by_reason_kind.entry(kind.clone()).or_insert(0) += 1;
            }
            *stats.by_path_key.entry(entry.path_key.clone()).or_insert(0) += 1;
            elapsed_total += u128::from(entry.elapsed_us);
        }

        if !entries.is_empty() {
            stats.avg_elapsed_us = elapsed_total as f64 / entries.len() as f64;
        }

        stats
    }
}

impl Default for AuditTrail {
    fn default() -> Self {
        Self::new(DEFAULT_AUDIT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_evicts_oldest() {
        let trail = AuditTrail::new(2);
        trail.record(AuditEntry::committed("a", "/a"));
        trail.record(AuditEntry::committed("b", "/b"));
        trail.record(AuditEntry::committed("c", "/c"));

        let keys: Vec<_> = trail.entries().into_iter().map(|e| e.path_key).collect();
        assert_eq!(keys, vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_query_newest_first_with_limit() {
        let trail = AuditTrail::default();
        trail.record(AuditEntry::rejected("a", "unknown_path_key", "no entry"));
        trail.record(AuditEntry::committed("b", "/b"));
        trail.record(AuditEntry::rejected("c", "missing_fields", "user"));

        let rejected = trail.query(
            &AuditQuery::new()
                .with_outcome(AuditOutcome::Rejected)
                .with_limit(1),
        );
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].path_key, "c");
    }

    #[test]
    fn test_statistics() {
        let trail = AuditTrail::default();
        trail.record(
            AuditEntry::committed("a", "/a").with_elapsed(std::time::Duration::from_micros(100)),
        );
        trail.record(
            AuditEntry::rejected("a", "missing_fields", "user")
                .with_elapsed(std::time::Duration::from_micros(300)),
        );

        let stats = trail.statistics();
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.committed, 1);
        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.by_reason_kind.get("missing_fields"), Some(&1));
        assert_eq!(stats.by_path_key.get("a"), Some(&2));
        assert!((stats.avg_elapsed_us - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clear() {
        let trail = AuditTrail::new(10);
        trail.record(AuditEntry::committed("a", "/a"));
        trail.clear();
        assert!(trail.is_empty());
        assert!(trail.latest().is_none());
    }
}
