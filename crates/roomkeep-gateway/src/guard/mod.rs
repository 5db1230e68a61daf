//! Route guard middleware.
//!
//! Runs ahead of every handler: resolves the optional session from the bearer
//! token, asks the policy engine whether the role may reach the path, and
//! either forwards the request (with the `Session` in request extensions) or
//! answers 401/403.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use roomkeep_core::error::RoomkeepError;
use roomkeep_core::rbac::{can_access_route, Session};

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::session::{bearer_token, SessionStore};

/// Outcome of guarding one request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// No valid session and the path is not public.
    Unauthenticated,
    /// Session present but its role may not reach the path.
    Forbidden,
}

impl GuardDecision {
    pub fn as_str(self) -> &'static str {
        match self {
            GuardDecision::Allow => "allow",
            GuardDecision::Unauthenticated => "unauthenticated",
            GuardDecision::Forbidden => "forbidden",
        }
    }
}

pub fn decide(session: Option<&Session>, path: &str) -> GuardDecision {
    if can_access_route(session.map(|s| s.role), path) {
        GuardDecision::Allow
    } else if session.is_none() {
        GuardDecision::Unauthenticated
    } else {
        GuardDecision::Forbidden
    }
}

pub async fn route_guard(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    let session = bearer_token(req.headers()).and_then(|t| state.sessions().resolve(t).ok());

    let decision = decide(session.as_ref(), &path);
    state.metrics().guard_decisions.inc(&[("decision", decision.as_str())]);

    match decision {
        GuardDecision::Allow => {
            if let Some(s) = session {
                req.extensions_mut().insert(s);
            }
            next.run(req).await
        }
        GuardDecision::Unauthenticated => {
            tracing::info!(%path, "protected route without session");
            ApiError(RoomkeepError::Unauthenticated).into_response()
        }
        GuardDecision::Forbidden => {
            let (user, role) = session
                .as_ref()
                .map(|s| (s.user_id.as_str(), s.role.as_str()))
                .unwrap_or_default();
            tracing::warn!(%path, user, role, "route denied");
            ApiError(RoomkeepError::Forbidden(format!("{path} not allowed"))).into_response()
        }
    }
}
