use std::collections::BTreeMap;

use dashmap::DashMap;
use roomkeep_core::error::{Result, RoomkeepError};
use roomkeep_core::rbac::{Role, Session};

use crate::config::SessionSeed;

pub trait SessionStore: Send + Sync {
    /// Unknown tokens fail with `Unauthenticated`.
    fn resolve(&self, token: &str) -> Result<Session>;
    fn insert(&self, token: String, session: Session);
    fn role_of(&self, user_id: &str) -> Option<Role>;
    /// Re-role every live session of a user. Returns how many changed.
    fn set_role_for_user(&self, user_id: &str, role: Role) -> usize;
    /// Distinct users with a live session, ordered by user id.
    fn users(&self) -> Vec<Session>;
}

#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<String, Session>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seeds(seeds: &[SessionSeed]) -> Self {
        let this = Self::new();
        for s in seeds {
            this.insert(s.token.clone(), Session::new(s.user_id.clone(), s.role));
        }
        this
    }
}

impl SessionStore for InMemorySessionStore {
    fn resolve(&self, token: &str) -> Result<Session> {
        self.sessions
            .get(token)
            .map(|s| s.value().clone())
            .ok_or(RoomkeepError::Unauthenticated)
    }

    /// A user keeps one role across sessions: a new session for a known
    /// user takes that user's current role.
    fn insert(&self, token: String, mut session: Session) {
        if let Some(role) = self.role_of(&session.user_id) {
            if role != session.role {
                tracing::warn!(
                    user_id = %session.user_id,
                    requested = %session.role,
                    %role,
                    "session role aligned with existing user role"
                );
                session.role = role;
            }
        }
        self.sessions.insert(token, session);
    }

    /// Highest role across the user's sessions, so a mixed set never
    /// understates who the user is.
    fn role_of(&self, user_id: &str) -> Option<Role> {
        self.sessions
            .iter()
            .filter(|e| e.value().user_id == user_id)
            .map(|e| e.value().role)
            .max_by_key(|r| r.level())
    }

    fn set_role_for_user(&self, user_id: &str, role: Role) -> usize {
        let mut changed = 0;
        for mut e in self.sessions.iter_mut() {
            if e.value().user_id == user_id {
                e.value_mut().role = role;
                changed += 1;
            }
        }
        changed
    }

    fn users(&self) -> Vec<Session> {
        let mut by_user = BTreeMap::new();
        for e in self.sessions.iter() {
            let s = e.value();
            by_user
                .entry(s.user_id.clone())
                .and_modify(|r: &mut Role| {
                    if s.role.level() > r.level() {
                        *r = s.role;
                    }
                })
                .or_insert(s.role);
        }
        by_user.into_iter().map(|(user_id, role)| Session { user_id, role }).collect()
    }
}
