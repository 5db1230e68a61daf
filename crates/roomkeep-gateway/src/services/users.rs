use roomkeep_core::error::{Result, RoomkeepError};
use roomkeep_core::rbac::{can_manage_role, ensure_permission, Permission, Role, Session};
use serde::Serialize;

use crate::app_state::AppState;
use crate::session::SessionStore;

#[derive(Debug, Clone, Serialize)]
pub struct RoleChange {
    pub user_id: String,
    pub previous: Role,
    pub role: Role,
}

/// Change another user's role.
///
/// The actor needs `users:update` and must outrank both the user's current
/// role and the role being assigned. Self-management is never possible since
/// no role outranks itself.
pub fn change_user_role(
    state: &AppState,
    actor: &Session,
    user_id: &str,
    role: Role,
) -> Result<RoleChange> {
    let result = apply_role_change(state, actor, user_id, role);
    let outcome = match &result {
        Ok(_) => "applied",
        Err(RoomkeepError::NotFound(_)) => "unknown_user",
        Err(_) => "denied",
    };
    state.metrics().role_changes.inc(&[("outcome", outcome)]);
    result
}

fn apply_role_change(
    state: &AppState,
    actor: &Session,
    user_id: &str,
    role: Role,
) -> Result<RoleChange> {
    ensure_permission(actor.role, Permission::UsersUpdate)?;

    let previous = state
        .sessions()
        .role_of(user_id)
        .ok_or_else(|| RoomkeepError::NotFound(format!("user {user_id}")))?;

    if !can_manage_role(actor.role, previous) || !can_manage_role(actor.role, role) {
        tracing::warn!(
            actor = %actor.user_id,
            actor_role = %actor.role,
            user_id,
            %previous,
            requested = %role,
            "role change denied by hierarchy"
        );
        return Err(RoomkeepError::Forbidden(format!(
            "{} cannot move {user_id} from {previous} to {role}",
            actor.role
        )));
    }

    let changed = state.sessions().set_role_for_user(user_id, role);
    tracing::info!(actor = %actor.user_id, user_id, %previous, %role, changed, "role changed");

    Ok(RoleChange { user_id: user_id.to_string(), previous, role })
}
