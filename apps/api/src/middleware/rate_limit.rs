//! Per-IP fixed-window rate limiting backed by Redis.
//!
//! Two scopes: general routes get 100 requests/minute, AI-backed routes
//! (LLM calls are expensive) get 10/minute. The window is INCR + EXPIRE on
//! first hit; Redis being unreachable fails open with a warning so the API
//! stays up without its limiter.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use redis::AsyncCommands;
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;

const WINDOW_SECS: i64 = 60;
const GENERAL_LIMIT: i64 = 100;
const AI_LIMIT: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RouteScope {
    General,
    Ai,
}

impl RouteScope {
    fn as_str(self) -> &'static str {
        match self {
            RouteScope::General => "general",
            RouteScope::Ai => "ai",
        }
    }
}

enum Decision {
    Allow,
    Reject { retry_after: u64 },
}

pub async fn rate_limit(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let scope = classify_route(request.uri().path());
    let ip = client_ip(request.headers(), peer);

    match check_window(&state.redis, scope, &ip).await {
        Ok(Decision::Allow) => Ok(next.run(request).await),
        Ok(Decision::Reject { retry_after }) => {
            warn!(%ip, scope = scope.as_str(), "rate limit exceeded");
            Err(AppError::RateLimited { retry_after })
        }
        Err(e) => {
            warn!("Rate limiter unavailable ({e}), allowing request");
            Ok(next.run(request).await)
        }
    }
}

async fn check_window(
    client: &redis::Client,
    scope: RouteScope,
    ip: &str,
) -> redis::RedisResult<Decision> {
    let mut conn = client.get_multiplexed_async_connection().await?;
    let key = window_key(scope, ip);

    let count: i64 = conn.incr(&key, 1).await?;
    if count == 1 {
        let _: () = conn.expire(&key, WINDOW_SECS).await?;
    }

    if count > limit_for(scope) {
        let ttl: i64 = conn.ttl(&key).await?;
        return Ok(Decision::Reject {
            retry_after: ttl.max(1) as u64,
        });
    }

    Ok(Decision::Allow)
}

/// LLM-backed route prefixes share the tighter AI budget.
fn classify_route(path: &str) -> RouteScope {
    if path.starts_with("/api/v1/ai") || path.starts_with("/api/v1/ats") {
        RouteScope::Ai
    } else {
        RouteScope::General
    }
}

fn limit_for(scope: RouteScope) -> i64 {
    match scope {
        RouteScope::General => GENERAL_LIMIT,
        RouteScope::Ai => AI_LIMIT,
    }
}

fn window_key(scope: RouteScope, ip: &str) -> String {
    format!("ratelimit:{}:{}", scope.as_str(), ip)
}

/// First X-Forwarded-For entry when present (the API sits behind a proxy in
/// production), otherwise the socket peer.
fn client_ip(headers: &HeaderMap, peer: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty())
        .unwrap_or_else(|| peer.ip().to_string())
}
