use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::RoomkeepError;

/// Fine-grained `resource:verb` capability token.
///
/// The set is closed and fixed at compile time; the wire form is the token
/// string returned by [`Permission::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    UsersRead,
    UsersCreate,
    UsersUpdate,
    UsersDelete,
    DashboardAdmin,
    DashboardSupport,
    DashboardUser,
    RoomsRead,
    RoomsCreate,
    RoomsUpdate,
    RoomsDelete,
    BookingsRead,
    BookingsCreate,
    BookingsUpdate,
    BookingsDelete,
    TenantsRead,
    TenantsCreate,
    TenantsUpdate,
    TenantsDelete,
    MetersRead,
    MetersRecord,
    BillingRead,
    BillingGenerate,
    ShopRead,
    ShopSell,
    ShopManage,
    ProfileRead,
    ProfileUpdate,
    SettingsManage,
}

impl Permission {
    pub const ALL: [Permission; 29] = [
        Permission::UsersRead,
        Permission::UsersCreate,
        Permission::UsersUpdate,
        Permission::UsersDelete,
        Permission::DashboardAdmin,
        Permission::DashboardSupport,
        Permission::DashboardUser,
        Permission::RoomsRead,
        Permission::RoomsCreate,
        Permission::RoomsUpdate,
        Permission::RoomsDelete,
        Permission::BookingsRead,
        Permission::BookingsCreate,
        Permission::BookingsUpdate,
        Permission::BookingsDelete,
        Permission::TenantsRead,
        Permission::TenantsCreate,
        Permission::TenantsUpdate,
        Permission::TenantsDelete,
        Permission::MetersRead,
        Permission::MetersRecord,
        Permission::BillingRead,
        Permission::BillingGenerate,
        Permission::ShopRead,
        Permission::ShopSell,
        Permission::ShopManage,
        Permission::ProfileRead,
        Permission::ProfileUpdate,
        Permission::SettingsManage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Permission::UsersRead => "users:read",
            Permission::UsersCreate => "users:create",
            Permission::UsersUpdate => "users:update",
            Permission::UsersDelete => "users:delete",
            Permission::DashboardAdmin => "dashboard:admin",
            Permission::DashboardSupport => "dashboard:support",
            Permission::DashboardUser => "dashboard:user",
            Permission::RoomsRead => "rooms:read",
            Permission::RoomsCreate => "rooms:create",
            Permission::RoomsUpdate => "rooms:update",
            Permission::RoomsDelete => "rooms:delete",
            Permission::BookingsRead => "bookings:read",
            Permission::BookingsCreate => "bookings:create",
            Permission::BookingsUpdate => "bookings:update",
            Permission::BookingsDelete => "bookings:delete",
            Permission::TenantsRead => "tenants:read",
            Permission::TenantsCreate => "tenants:create",
            Permission::TenantsUpdate => "tenants:update",
            Permission::TenantsDelete => "tenants:delete",
            Permission::MetersRead => "meters:read",
            Permission::MetersRecord => "meters:record",
            Permission::BillingRead => "billing:read",
            Permission::BillingGenerate => "billing:generate",
            Permission::ShopRead => "shop:read",
            Permission::ShopSell => "shop:sell",
            Permission::ShopManage => "shop:manage",
            Permission::ProfileRead => "profile:read",
            Permission::ProfileUpdate => "profile:update",
            Permission::SettingsManage => "settings:manage",
        }
    }

    /// Parse a `resource:verb` token. Unknown tokens yield `None`.
    pub fn parse(s: &str) -> Option<Permission> {
        Permission::ALL.iter().copied().find(|p| p.as_str() == s)
    }

    /// The resource half of the token (`rooms` for `rooms:update`).
    pub fn resource(self) -> &'static str {
        self.as_str().split_once(':').map_or("", |(res, _)| res)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = RoomkeepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::parse(s)
            .ok_or_else(|| RoomkeepError::BadRequest(format!("unknown permission: {s}")))
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Permission::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown permission: {s}")))
    }
}
