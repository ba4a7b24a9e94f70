//! Router - 네비게이션 실행
//!
//! 게이트 입장에서는 fire-and-forget.

use parking_lot::Mutex;
use tracing::debug;

/// 라우터 계약
pub trait Router: Send + Sync {
    fn go_to(&self, path: &str);
}

impl<F> Router for F
where
    F: Fn(&str) + Send + Sync,
{
    fn go_to(&self, path: &str) {
        self(path)
    }
}

/// 방문 기록을 유지하는 라우터
#[derive(Debug, Default)]
pub struct HistoryRouter {
    inner: Mutex<HistoryInner>,
}

#[derive(Debug, Default)]
struct HistoryInner {
    stack: Vec<String>,
    visits: usize,
}

impl HistoryRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 경로
    pub fn current(&self) -> Option<String> {
        self.inner.lock().stack.last().cloned()
    }

    /// 방문 스택 (오래된 순)
    pub fn history(&self) -> Vec<String> {
        self.inner.lock().stack.clone()
    }

    /// 뒤로 가기, 새 현재 경로 반환
    pub fn back(&self) -> Option<String> {
        let mut inner = self.inner.lock();
        inner.stack.pop();
        inner.stack.last().cloned()
    }

    /// 누적 `go_to` 호출 수 (`back`으로 줄지 않음)
    pub fn visits(&self) -> usize {
        self.inner.lock().visits
    }
}

impl Router for HistoryRouter {
    fn go_to(&self, path: &str) {
        debug!(path, "Navigating");
        let mut inner = self.inner.lock();
        inner.stack.push(path.to_string());
        inner.visits += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_history() {
        let router = HistoryRouter::new();
        router.go_to("/home");
        router.go_to("/orders");

        assert_eq!(router.current().as_deref(), Some("/orders"));
        assert_eq!(router.back().as_deref(), Some("/home"));
        assert_eq!(router.history(), vec!["/home".to_string()]);
        assert_eq!(router.visits(), 2);
    }

    #[test]
    fn test_closure_router() {
        let calls = AtomicUsize::new(0);
        let router = |_: &str| {
            calls.fetch_add(1, Ordering::SeqCst);
        };
        router.go_to("/orders");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
