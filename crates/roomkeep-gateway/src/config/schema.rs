use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;

use roomkeep_core::billing::{BillingPolicy, DEFAULT_LATE_FEE_PER_DAY};
use roomkeep_core::error::{Result, RoomkeepError};
use roomkeep_core::rbac::Role;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub billing: BillingSection,

    #[serde(default)]
    pub sessions: Vec<SessionSeed>,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(RoomkeepError::UnsupportedVersion);
        }

        self.gateway.validate()?;
        self.billing.validate()?;

        let mut seen = HashSet::new();
        let mut user_roles: HashMap<&str, Role> = HashMap::new();
        for s in &self.sessions {
            if s.token.trim().is_empty() {
                return Err(RoomkeepError::BadRequest("sessions[].token must not be empty".into()));
            }
            if s.user_id.trim().is_empty() {
                return Err(RoomkeepError::BadRequest(
                    "sessions[].user_id must not be empty".into(),
                ));
            }
            if !seen.insert(s.token.as_str()) {
                return Err(RoomkeepError::BadRequest(format!(
                    "duplicate session token for user {}",
                    s.user_id
                )));
            }
            match user_roles.get(s.user_id.as_str()) {
                Some(role) if *role != s.role => {
                    return Err(RoomkeepError::BadRequest(format!(
                        "user {} is seeded with conflicting roles {role} and {}",
                        s.user_id, s.role
                    )));
                }
                Some(_) => {}
                None => {
                    user_roles.insert(s.user_id.as_str(), s.role);
                }
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            RoomkeepError::BadRequest(format!(
                "gateway.listen must be a valid socket address: {}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BillingSection {
    #[serde(default = "default_late_fee_per_day")]
    pub late_fee_per_day: f64,
}

impl Default for BillingSection {
    fn default() -> Self {
        Self { late_fee_per_day: default_late_fee_per_day() }
    }
}

impl BillingSection {
    pub fn validate(&self) -> Result<()> {
        if !self.late_fee_per_day.is_finite() || self.late_fee_per_day < 0.0 {
            return Err(RoomkeepError::BadRequest(
                "billing.late_fee_per_day must be a non-negative number".into(),
            ));
        }
        Ok(())
    }

    pub fn policy(&self) -> BillingPolicy {
        BillingPolicy { late_fee_per_day: self.late_fee_per_day }
    }
}

fn default_late_fee_per_day() -> f64 {
    DEFAULT_LATE_FEE_PER_DAY
}

/// Bootstrap session token (dev and seed users).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionSeed {
    pub token: String,
    pub user_id: String,
    pub role: Role,
}
