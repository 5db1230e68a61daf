use axum::{Extension, Json};
use roomkeep_core::rbac::{Permission, Role, Session};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WhoAmI {
    pub user_id: String,
    pub role: Role,
    pub level: u8,
    pub redirect: &'static str,
    pub permissions: &'static [Permission],
}

pub async fn whoami(Extension(session): Extension<Session>) -> Json<WhoAmI> {
    Json(WhoAmI {
        level: session.role.level(),
        redirect: session.role.redirect_path(),
        permissions: session.permissions(),
        role: session.role,
        user_id: session.user_id,
    })
}
