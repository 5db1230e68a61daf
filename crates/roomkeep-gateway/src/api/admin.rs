use axum::{
    extract::{Path, State},
    Extension, Json,
};
use roomkeep_core::rbac::{Role, Session};
use serde::Deserialize;

use crate::app_state::AppState;
use crate::error::ApiResult;
use crate::services::{self, RoleChange};
use crate::session::SessionStore;

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<Session>> {
    Json(state.sessions().users())
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoleRequest {
    pub role: Role,
}

pub async fn set_role(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(user_id): Path<String>,
    Json(req): Json<RoleRequest>,
) -> ApiResult<Json<RoleChange>> {
    Ok(Json(services::change_user_role(&state, &session, &user_id, req.role)?))
}
