use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use roomkeep_core::billing::BookingType;
use roomkeep_core::error::RoomkeepError;
use roomkeep_core::rbac::{ensure_permission, Permission, Role, Session};
use serde::Deserialize;

use crate::app_state::AppState;
use crate::error::ApiResult;
use crate::services;
use crate::store::{BookingRecord, Store};

#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    pub room_id: String,
    pub booking_type: BookingType,
    #[serde(default)]
    pub rent_due_day: Option<u32>,
    /// Staff may book on behalf of a tenant; users always book for themselves.
    #[serde(default)]
    pub tenant_user_id: Option<String>,
}

/// Plain users only see their own bookings.
fn visible_to(session: &Session, booking: &BookingRecord) -> bool {
    session.role != Role::User || booking.tenant_user_id == session.user_id
}

pub async fn list(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> ApiResult<Json<Vec<BookingRecord>>> {
    let rows = state.bookings().list().await?;
    Ok(Json(rows.into_iter().filter(|b| visible_to(&session, b)).collect()))
}

pub async fn get(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> ApiResult<Json<BookingRecord>> {
    let booking = state.bookings().get(&id).await?;
    if !visible_to(&session, &booking) {
        return Err(RoomkeepError::NotFound(format!("booking {id}")).into());
    }
    Ok(Json(booking))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(req): Json<BookingRequest>,
) -> ApiResult<(StatusCode, Json<BookingRecord>)> {
    ensure_permission(session.role, Permission::BookingsCreate)?;

    services::validate_rent_due_day(req.rent_due_day)?;
    state.rooms().get(&req.room_id).await?;

    let tenant_user_id = match (session.role, req.tenant_user_id) {
        (Role::User, _) | (_, None) => session.user_id.clone(),
        (_, Some(other)) => other,
    };

    let booking = state
        .bookings()
        .create(BookingRecord {
            id: String::new(),
            room_id: req.room_id,
            tenant_user_id,
            booking_type: req.booking_type,
            rent_due_day: req.rent_due_day,
        })
        .await?;
    tracing::info!(
        booking_id = %booking.id,
        room_id = %booking.room_id,
        by = %session.user_id,
        "booking created"
    );
    Ok((StatusCode::CREATED, Json(booking)))
}
