//! Route tables.
//!
//! `PROTECTED_ROUTES` is matched first-match-wins, so more specific prefixes
//! must be declared before the prefixes that contain them.

use super::permission::Permission;
use super::role::Role;

/// A URL prefix requiring specific roles/permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtectedRoute {
    pub path_prefix: &'static str,
    pub allowed_roles: &'static [Role],
    pub required_permissions: &'static [Permission],
}

impl ProtectedRoute {
    pub fn matches(&self, path: &str) -> bool {
        prefix_matches(self.path_prefix, path)
    }
}

const ALL_ROLES: &[Role] = &[Role::Admin, Role::Support, Role::User];
const STAFF: &[Role] = &[Role::Admin, Role::Support];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

pub const PROTECTED_ROUTES: &[ProtectedRoute] = &[
    ProtectedRoute {
        path_prefix: "/admin/users",
        allowed_roles: ADMIN_ONLY,
        required_permissions: &[Permission::UsersRead, Permission::UsersUpdate],
    },
    ProtectedRoute {
        path_prefix: "/admin/settings",
        allowed_roles: ADMIN_ONLY,
        required_permissions: &[Permission::SettingsManage],
    },
    ProtectedRoute {
        path_prefix: "/admin",
        allowed_roles: ADMIN_ONLY,
        required_permissions: &[Permission::DashboardAdmin],
    },
    ProtectedRoute {
        path_prefix: "/support",
        allowed_roles: STAFF,
        required_permissions: &[Permission::DashboardSupport],
    },
    ProtectedRoute {
        path_prefix: "/dashboard",
        allowed_roles: ALL_ROLES,
        required_permissions: &[],
    },
    ProtectedRoute {
        path_prefix: "/session",
        allowed_roles: ALL_ROLES,
        required_permissions: &[],
    },
    ProtectedRoute {
        path_prefix: "/rooms",
        allowed_roles: ALL_ROLES,
        required_permissions: &[Permission::RoomsRead],
    },
    ProtectedRoute {
        path_prefix: "/meters",
        allowed_roles: STAFF,
        required_permissions: &[Permission::MetersRead],
    },
    ProtectedRoute {
        path_prefix: "/bookings",
        allowed_roles: ALL_ROLES,
        required_permissions: &[Permission::BookingsRead],
    },
    ProtectedRoute {
        path_prefix: "/tenants",
        allowed_roles: STAFF,
        required_permissions: &[Permission::TenantsRead],
    },
    ProtectedRoute {
        path_prefix: "/shop/manage",
        allowed_roles: ADMIN_ONLY,
        required_permissions: &[Permission::ShopManage],
    },
    ProtectedRoute {
        path_prefix: "/shop",
        allowed_roles: ALL_ROLES,
        required_permissions: &[Permission::ShopRead],
    },
    ProtectedRoute {
        path_prefix: "/billing",
        allowed_roles: ALL_ROLES,
        required_permissions: &[Permission::BillingRead],
    },
    ProtectedRoute {
        path_prefix: "/profile",
        allowed_roles: ALL_ROLES,
        required_permissions: &[Permission::ProfileRead],
    },
];

/// Paths reachable without a session. `/` matches only itself.
pub const PUBLIC_ROUTES: &[&str] = &["/", "/about", "/contact", "/login", "/register", "/healthz"];

/// First protected route covering `path`, if any.
pub fn find_protected(path: &str) -> Option<&'static ProtectedRoute> {
    PROTECTED_ROUTES.iter().find(|r| r.matches(path))
}

pub fn is_public(path: &str) -> bool {
    PUBLIC_ROUTES.iter().any(|p| prefix_matches(p, path))
}

/// Segment-aware prefix match: `/admin` covers `/admin` and `/admin/x`
/// but not `/administrator`.
fn prefix_matches(prefix: &str, path: &str) -> bool {
    if prefix == "/" {
        return path == "/";
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
