use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::{ConnectInfo, State};
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::warn;

const WINDOW: Duration = Duration::from_secs(1);
const PRUNE_ABOVE: usize = 4096;

#[derive(Debug)]
struct WindowState {
    start: Instant,
    count: u32,
}

/// Fixed one-second window per client.
///
/// Clients are told apart by peer address. `X-Forwarded-For` is honoured only
/// when `trust_forwarded_for` is set.
#[derive(Clone, Debug)]
pub struct RateLimiter {
    rps: u32,
    trust_forwarded_for: bool,
    windows: Arc<Mutex<HashMap<String, WindowState>>>,
}

impl RateLimiter {
    fn new(rps: u32, trust_forwarded_for: bool) -> Self {
        Self {
            rps: rps.max(1),
            trust_forwarded_for,
            windows: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn client_key(&self, req: &Request<Body>) -> String {
        if self.trust_forwarded_for {
            let forwarded = req
                .headers()
                .get("x-forwarded-for")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.split(',').next())
                .map(str::trim)
                .filter(|v| !v.is_empty());
            if let Some(client) = forwarded {
                return client.to_string();
            }
        }
        req.extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_else(|| "anonymous".to_string())
    }

    fn allow(&self, client: &str) -> bool {
        let mut windows = self
            .windows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let now = Instant::now();

        if windows.len() > PRUNE_ABOVE {
            windows.retain(|_, w| now.duration_since(w.start) < WINDOW);
        }

        let window = windows.entry(client.to_string()).or_insert(WindowState {
            start: now,
            count: 0,
        });
        if now.duration_since(window.start) >= WINDOW {
            window.start = now;
            window.count = 0;
        }
        if window.count < self.rps {
            window.count += 1;
            true
        } else {
            false
        }
    }
}

pub async fn rps_middleware(
    State(state): State<RateLimiter>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let client = state.client_key(&req);
    if !state.allow(&client) {
        warn!(%client, path = %req.uri().path(), "rate limit exceeded");
        return (StatusCode::TOO_MANY_REQUESTS, "rate_limit_exceeded").into_response();
    }
    next.run(req).await
}

pub fn new_rps_state(rps: u32, trust_forwarded_for: bool) -> RateLimiter {
    RateLimiter::new(rps, trust_forwarded_for)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_each_client_separately() {
        let limiter = new_rps_state(2, false);
        assert!(limiter.allow("10.0.0.1"));
        assert!(limiter.allow("10.0.0.1"));
        assert!(!limiter.allow("10.0.0.1"));
        assert!(limiter.allow("10.0.0.2"));
    }

    fn request_from(peer: &str, forwarded_for: Option<&str>) -> Request<Body> {
        let mut builder = Request::get("/api/public/vacancies");
        if let Some(value) = forwarded_for {
            builder = builder.header("x-forwarded-for", value);
        }
        let mut req = builder.body(Body::empty()).unwrap();
        let addr: SocketAddr = peer.parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        req
    }

    #[test]
    fn forwarded_header_is_ignored_unless_trusted() {
        let limiter = new_rps_state(1, false);
        let first = request_from("203.0.113.7:5000", Some("10.0.0.1"));
        let rotated = request_from("203.0.113.7:5001", Some("10.0.0.2"));
        assert_eq!(limiter.client_key(&first), "203.0.113.7");
        assert!(limiter.allow(&limiter.client_key(&first)));
        assert!(!limiter.allow(&limiter.client_key(&rotated)));

        let behind_proxy = new_rps_state(1, true);
        assert_eq!(behind_proxy.client_key(&first), "10.0.0.1");
        assert_eq!(behind_proxy.client_key(&rotated), "10.0.0.2");
        assert_eq!(
            behind_proxy.client_key(&request_from("203.0.113.7:5000", None)),
            "203.0.113.7"
        );
    }
}
