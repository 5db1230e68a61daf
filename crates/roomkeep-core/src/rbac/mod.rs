//! Role-based access policy.
//!
//! Static role/permission tables plus the decision functions that answer
//! "may this role do X / reach this path / manage that role". Everything here
//! is computed from constants; callers pass the role explicitly.
//!
//! - `role` / `permission`: the closed vocabularies
//! - `routes`: protected and public route tables
//! - `policy`: typed decision functions and guard helpers
//! - `raw`: fail-closed wrappers for unparsed session strings

pub mod permission;
pub mod policy;
pub mod raw;
pub mod role;
pub mod routes;
pub mod session;

pub use permission::Permission;
pub use policy::{
    can_access_route, can_manage_role, ensure_permission, ensure_role, has_all_permissions,
    has_any_permission, has_permission, redirect_path, role_hierarchy_level,
};
pub use role::Role;
pub use routes::{ProtectedRoute, PROTECTED_ROUTES, PUBLIC_ROUTES};
pub use session::Session;
