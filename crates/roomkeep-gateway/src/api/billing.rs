use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::NaiveDate;
use roomkeep_core::billing::{calculate_bill_with, BillInput, BillSummary};
use roomkeep_core::rbac::{ensure_permission, Permission, Session};
use serde::Deserialize;

use crate::app_state::AppState;
use crate::error::ApiResult;
use crate::services::{self, BookingBill};

/// Ad-hoc bill from caller-supplied records.
pub async fn calculate(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(input): Json<BillInput>,
) -> ApiResult<Json<BillSummary>> {
    ensure_permission(session.role, Permission::BillingGenerate)?;
    services::validate_rent_due_day(input.rent_due_day)?;
    let summary = calculate_bill_with(&input, state.billing_policy());
    state
        .metrics()
        .bills_computed
        .inc(&[("booking_type", input.booking.booking_type.as_str())]);
    Ok(Json(summary))
}

#[derive(Debug, Deserialize)]
pub struct BookingBillRequest {
    pub billing_date: NaiveDate,
    #[serde(default)]
    pub rent_due_day: Option<u32>,
}

pub async fn for_booking(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(booking_id): Path<String>,
    Json(req): Json<BookingBillRequest>,
) -> ApiResult<Json<BookingBill>> {
    ensure_permission(session.role, Permission::BillingGenerate)?;
    let bill =
        services::bill_for_booking(&state, &booking_id, req.billing_date, req.rent_due_day).await?;
    Ok(Json(bill))
}
