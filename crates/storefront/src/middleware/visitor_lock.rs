//! Per-visitor request serialization.
//!
//! A visitor's `StoreState` is read from the session, reduced, and written
//! back by the session layer after the handler returns. Two overlapping
//! requests on one session would both start from the same snapshot, so this
//! middleware holds a per-session lock around the session layer and the
//! handler together.
//!
//! Requests without a session cookie are not serialized: each one gets its
//! own fresh session.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::COOKIE},
    middleware::Next,
    response::Response,
};
use moka::future::Cache;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tower_sessions::cookie::Cookie;

use super::session::SESSION_COOKIE_NAME;
use crate::state::AppState;

/// Locks unused for this long are dropped.
const LOCK_IDLE_SECONDS: u64 = 60 * 60;

/// One async mutex per session id.
#[derive(Clone)]
pub struct VisitorLocks {
    locks: Cache<String, Arc<Mutex<()>>>,
}

impl Default for VisitorLocks {
    fn default() -> Self {
        Self::new()
    }
}

impl VisitorLocks {
    #[must_use]
    pub fn new() -> Self {
        let locks = Cache::builder()
            .time_to_idle(Duration::from_secs(LOCK_IDLE_SECONDS))
            .build();
        Self { locks }
    }

    /// Wait for exclusive access to the given session.
    pub async fn acquire(&self, session_id: &str) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .get_with(session_id.to_string(), async { Arc::new(Mutex::new(())) })
            .await;
        lock.lock_owned().await
    }
}

/// Serialize requests that carry the same session cookie.
///
/// Must sit outside the session layer so the lock also covers the session
/// save.
pub async fn visitor_lock_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(session_id) = session_cookie(request.headers()) else {
        return next.run(request).await;
    };

    let _guard = state.visitor_locks().acquire(&session_id).await;
    next.run(request).await
}

fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_session_cookie_found_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; demo_store_session=abc123; x=1"),
        );
        assert_eq!(session_cookie(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_session_cookie_absent() {
        let mut headers = HeaderMap::new();
        assert_eq!(session_cookie(&headers), None);

        headers.insert(COOKIE, HeaderValue::from_static("theme=dark"));
        assert_eq!(session_cookie(&headers), None);
    }

    #[tokio::test]
    async fn test_same_session_waits() {
        let locks = VisitorLocks::new();
        let guard = locks.acquire("a").await;

        let blocked = tokio::time::timeout(Duration::from_millis(50), locks.acquire("a")).await;
        assert!(blocked.is_err());

        drop(guard);
        let reacquired = tokio::time::timeout(Duration::from_millis(50), locks.acquire("a")).await;
        assert!(reacquired.is_ok());
    }

    #[tokio::test]
    async fn test_other_sessions_proceed() {
        let locks = VisitorLocks::new();
        let _guard = locks.acquire("a").await;

        let other = tokio::time::timeout(Duration::from_millis(50), locks.acquire("b")).await;
        assert!(other.is_ok());
    }
}
