use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::NaiveDate;
use roomkeep_core::billing::MeterReading;
use roomkeep_core::rbac::{ensure_permission, Permission, Session};
use serde::Deserialize;

use crate::app_state::AppState;
use crate::error::ApiResult;
use crate::services;
use crate::store::{ReadingRecord, Store};

#[derive(Debug, Deserialize)]
pub struct ReadingRequest {
    pub recorded_on: NaiveDate,
    #[serde(flatten)]
    pub reading: MeterReading,
}

pub async fn list(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> ApiResult<Json<Vec<ReadingRecord>>> {
    state.rooms().get(&room_id).await?;
    Ok(Json(services::readings_for_room(&state, &room_id).await?))
}

pub async fn record(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(room_id): Path<String>,
    Json(req): Json<ReadingRequest>,
) -> ApiResult<(StatusCode, Json<ReadingRecord>)> {
    ensure_permission(session.role, Permission::MetersRecord)?;
    let row = services::record_reading(&state, &room_id, req.recorded_on, req.reading).await?;
    tracing::info!(reading_id = %row.id, %room_id, by = %session.user_id, "meter reading recorded");
    Ok((StatusCode::CREATED, Json(row)))
}
