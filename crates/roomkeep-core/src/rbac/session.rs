use serde::{Deserialize, Serialize};

use super::permission::Permission;
use super::role::Role;

/// Identity resolved per request by the session provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub role: Role,
}

impl Session {
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self { user_id: user_id.into(), role }
    }

    /// Permissions implied by the role.
    pub fn permissions(&self) -> &'static [Permission] {
        self.role.permissions()
    }
}
