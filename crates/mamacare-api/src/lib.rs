//! mamacare-api
//!
//! HTTP surface of the MamaCare record API. The router is built here so the
//! binary and the integration tests share one definition.

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Weekly check-ins
        .route(
            "/api/weeks",
            get(routes::checkins::list_checkins).post(routes::checkins::create_checkin),
        )
        .route(
            "/api/weeks/summary/{pregnancy_id}",
            get(routes::checkins::weekly_summary),
        )
        .route(
            "/api/weeks/pregnancy/{pregnancy_id}",
            get(routes::checkins::list_checkins_for_pregnancy),
        )
        .route(
            "/api/weeks/week/{pregnancy_id}/{week_number}",
            get(routes::checkins::get_checkin_by_week),
        )
        .route(
            "/api/weeks/{id}",
            get(routes::checkins::get_checkin)
                .put(routes::checkins::update_checkin)
                .delete(routes::checkins::delete_checkin),
        )
        .route(
            "/api/weeks/{id}/assessment",
            get(routes::checkins::get_assessment),
        )
        // Parent records
        .route("/api/mothers", post(routes::mothers::create_mother))
        .route("/api/mothers/{id}", get(routes::mothers::get_mother))
        .route(
            "/api/mothers/{id}/pregnancies",
            get(routes::mothers::list_pregnancies),
        )
        .route(
            "/api/pregnancies",
            post(routes::pregnancies::create_pregnancy),
        )
        .route("/api/pregnancies/{id}", get(routes::pregnancies::get_pregnancy))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
