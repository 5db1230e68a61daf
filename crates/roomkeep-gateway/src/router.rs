//! Axum router wiring.
//!
//! Every route, including unmatched paths, passes through the route guard.

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::{api, app_state::AppState, guard, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/session", get(api::session::whoami))
        .route("/rooms", get(api::rooms::list).post(api::rooms::create))
        .route(
            "/rooms/:id",
            get(api::rooms::get).put(api::rooms::update).delete(api::rooms::delete),
        )
        .route("/meters/:room_id", get(api::meters::list).post(api::meters::record))
        .route("/bookings", get(api::bookings::list).post(api::bookings::create))
        .route("/bookings/:id", get(api::bookings::get))
        .route("/billing/calculate", post(api::billing::calculate))
        .route("/billing/bookings/:id", post(api::billing::for_booking))
        .route("/admin/metrics", get(ops::metrics))
        .route("/admin/users", get(api::admin::list_users))
        .route("/admin/users/:user_id/role", put(api::admin::set_role))
        .layer(middleware::from_fn_with_state(state.clone(), guard::route_guard))
        .with_state(state)
}
