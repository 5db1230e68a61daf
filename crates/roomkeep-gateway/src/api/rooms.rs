use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use roomkeep_core::billing::Room;
use roomkeep_core::error::{Result, RoomkeepError};
use roomkeep_core::rbac::{ensure_permission, Permission, Session};
use serde::Deserialize;

use crate::app_state::AppState;
use crate::error::ApiResult;
use crate::store::{RoomRecord, Store};

#[derive(Debug, Deserialize)]
pub struct RoomRequest {
    pub name: String,
    #[serde(flatten)]
    pub rates: Room,
}

impl RoomRequest {
    fn into_record(self) -> Result<RoomRecord> {
        if self.name.trim().is_empty() {
            return Err(RoomkeepError::BadRequest("room name must not be empty".into()));
        }
        let r = &self.rates;
        for (field, v) in [
            ("water_rate", r.water_rate),
            ("electric_rate", r.electric_rate),
            ("rate_daily", r.rate_daily),
            ("rate_monthly", r.rate_monthly),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(RoomkeepError::BadRequest(format!(
                    "{field} must be a non-negative number"
                )));
            }
        }
        Ok(RoomRecord { id: String::new(), name: self.name, rates: self.rates })
    }
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<RoomRecord>>> {
    Ok(Json(state.rooms().list().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<RoomRecord>> {
    Ok(Json(state.rooms().get(&id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(req): Json<RoomRequest>,
) -> ApiResult<(StatusCode, Json<RoomRecord>)> {
    ensure_permission(session.role, Permission::RoomsCreate)?;
    let room = state.rooms().create(req.into_record()?).await?;
    tracing::info!(room_id = %room.id, by = %session.user_id, "room created");
    Ok((StatusCode::CREATED, Json(room)))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
    Json(req): Json<RoomRequest>,
) -> ApiResult<Json<RoomRecord>> {
    ensure_permission(session.role, Permission::RoomsUpdate)?;
    let room = state.rooms().update(&id, req.into_record()?).await?;
    tracing::info!(room_id = %room.id, by = %session.user_id, "room updated");
    Ok(Json(room))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    ensure_permission(session.role, Permission::RoomsDelete)?;
    state.rooms().delete(&id).await?;
    tracing::info!(room_id = %id, by = %session.user_id, "room deleted");
    Ok(StatusCode::NO_CONTENT)
}
