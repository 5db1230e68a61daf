use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RoomkeepError;

use super::permission::Permission;

/// Coarse identity category driving access decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Support,
    User,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Support, Role::User];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Support => "support",
            Role::User => "user",
        }
    }

    /// Parse a lowercase role token. Unknown tokens yield `None`.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "admin" => Some(Role::Admin),
            "support" => Some(Role::Support),
            "user" => Some(Role::User),
            _ => None,
        }
    }

    /// Hierarchy level; higher means strictly more privileges.
    pub fn level(self) -> u8 {
        match self {
            Role::Admin => 3,
            Role::Support => 2,
            Role::User => 1,
        }
    }

    /// Post-login landing page. Not a security decision.
    pub fn redirect_path(self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Support => "/support",
            Role::User => "/dashboard",
        }
    }

    /// The fixed permission set granted to this role.
    pub fn permissions(self) -> &'static [Permission] {
        match self {
            Role::Admin => &Permission::ALL,
            Role::Support => SUPPORT_PERMISSIONS,
            Role::User => USER_PERMISSIONS,
        }
    }
}

const SUPPORT_PERMISSIONS: &[Permission] = &[
    Permission::UsersRead,
    Permission::DashboardSupport,
    Permission::RoomsRead,
    Permission::RoomsUpdate,
    Permission::BookingsRead,
    Permission::BookingsCreate,
    Permission::BookingsUpdate,
    Permission::TenantsRead,
    Permission::TenantsCreate,
    Permission::TenantsUpdate,
    Permission::MetersRead,
    Permission::MetersRecord,
    Permission::BillingRead,
    Permission::BillingGenerate,
    Permission::ShopRead,
    Permission::ShopSell,
    Permission::ProfileRead,
    Permission::ProfileUpdate,
];

const USER_PERMISSIONS: &[Permission] = &[
    Permission::DashboardUser,
    Permission::RoomsRead,
    Permission::BookingsRead,
    Permission::BookingsCreate,
    Permission::BillingRead,
    Permission::ShopRead,
    Permission::ProfileRead,
    Permission::ProfileUpdate,
];

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoomkeepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| RoomkeepError::BadRequest(format!("unknown role: {s}")))
    }
}
