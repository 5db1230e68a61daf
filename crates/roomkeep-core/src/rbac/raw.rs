//! Fail-closed decisions over unparsed role/permission strings.
//!
//! Session data arriving from cookies or external stores is plain text; an
//! unrecognized role or permission token is treated as holding nothing.

use super::permission::Permission;
use super::policy;
use super::role::Role;

pub fn has_permission(role: &str, permission: &str) -> bool {
    match (Role::parse(role), Permission::parse(permission)) {
        (Some(r), Some(p)) => policy::has_permission(r, p),
        _ => false,
    }
}

/// 0 for an unknown role.
pub fn role_hierarchy_level(role: &str) -> u8 {
    policy::role_hierarchy_level(Role::parse(role))
}

pub fn can_manage_role(acting: &str, target: &str) -> bool {
    match (Role::parse(acting), Role::parse(target)) {
        (Some(a), Some(t)) => policy::can_manage_role(a, t),
        _ => false,
    }
}

/// An unknown role string is treated like no session: public paths only.
pub fn can_access_route(role: Option<&str>, path: &str) -> bool {
    policy::can_access_route(role.and_then(Role::parse), path)
}
