//! Typed policy decisions.
//!
//! None of the decision functions fail: absent data resolves to the
//! least-privileged answer. The `ensure_*` helpers turn a negative decision
//! into `RoomkeepError::Forbidden` for handlers that propagate with `?`.

use crate::error::{Result, RoomkeepError};

use super::permission::Permission;
use super::role::Role;
use super::routes;

/// True iff `permission` is in the role's fixed permission set.
pub fn has_permission(role: Role, permission: Permission) -> bool {
    role.permissions().contains(&permission)
}

/// True iff at least one permission is held. Empty input is `false`.
pub fn has_any_permission(role: Role, permissions: &[Permission]) -> bool {
    permissions.iter().any(|p| has_permission(role, *p))
}

/// True iff every permission is held. Empty input is `true` (vacuous).
pub fn has_all_permissions(role: Role, permissions: &[Permission]) -> bool {
    permissions.iter().all(|p| has_permission(role, *p))
}

/// Route authorization for an optional role.
///
/// The first matching protected route decides. Without a match the path is
/// allowed only if it is public; a missing role reaches public paths only.
pub fn can_access_route(role: Option<Role>, path: &str) -> bool {
    match routes::find_protected(path) {
        Some(route) => {
            let Some(role) = role else {
                return false;
            };
            if !route.allowed_roles.contains(&role) {
                return false;
            }
            route.required_permissions.is_empty()
                || has_all_permissions(role, route.required_permissions)
        }
        None => routes::is_public(path),
    }
}

/// Static hierarchy level; 0 when there is no role.
pub fn role_hierarchy_level(role: Option<Role>) -> u8 {
    role.map_or(0, Role::level)
}

/// Strictly-greater hierarchy check. A role never manages a peer or itself.
pub fn can_manage_role(acting: Role, target: Role) -> bool {
    acting.level() > target.level()
}

pub fn redirect_path(role: Role) -> &'static str {
    role.redirect_path()
}

pub fn ensure_permission(role: Role, permission: Permission) -> Result<()> {
    if has_permission(role, permission) {
        return Ok(());
    }
    tracing::debug!(%role, %permission, "permission denied");
    Err(RoomkeepError::Forbidden(format!("{role} lacks {permission}")))
}

pub fn ensure_role(role: Role, allowed: &[Role]) -> Result<()> {
    if allowed.contains(&role) {
        return Ok(());
    }
    tracing::debug!(%role, "role not allowed");
    Err(RoomkeepError::Forbidden(format!("role {role} not allowed")))
}
