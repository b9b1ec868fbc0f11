//! HTTP handlers for the REST API.
//!
//! Each handler validates its input, reads the clock once, and delegates
//! to the service layer for the actual availability computation.

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use tracing::warn;

use super::dto::{LocationRequest, TestResponse};
use super::error::AppError;
use super::state::AppState;
use crate::api::BuildingResult;
use crate::services::pipeline::{self, CallerLocation};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /api/test
///
/// Liveness check.
pub async fn test_route() -> Json<TestResponse> {
    Json(TestResponse {
        message: "Test route is working!".to_string(),
    })
}

/// GET /api/open-classrooms
///
/// Runs the pipeline with no caller location: every distance stays at the
/// `0` sentinel and the list keeps feed order.
pub async fn get_open_classrooms(
    State(state): State<AppState>,
) -> HandlerResult<Vec<BuildingResult>> {
    run_pipeline(&state, None).await
}

/// POST /api/open-classrooms
///
/// Requires a JSON body with `lat` and `lng`. Validation failures are
/// reported before the upstream feed is contacted.
pub async fn post_open_classrooms(
    State(state): State<AppState>,
    body: Result<Json<LocationRequest>, JsonRejection>,
) -> HandlerResult<Vec<BuildingResult>> {
    let Ok(Json(location)) = body else {
        return Err(AppError::BadRequest("No data provided".to_string()));
    };
    let (Some(lat), Some(lng)) = (location.lat, location.lng) else {
        return Err(AppError::BadRequest(
            "Invalid location data. 'lat' and 'lng' are required.".to_string(),
        ));
    };

    run_pipeline(&state, Some(CallerLocation { lat, lng })).await
}

async fn run_pipeline(
    state: &AppState,
    caller: Option<CallerLocation>,
) -> HandlerResult<Vec<BuildingResult>> {
    // One "now" per request; everything downstream receives it as a value.
    let now = state.campus_now();
    let weekday = now.format("%A").to_string();

    let feed = state.feed.fetch().await.inspect_err(|e| {
        warn!(error = %e, "upstream feed fetch failed");
    })?;

    let buildings = pipeline::evaluate_campus(&feed, now.time(), &weekday, caller)?;
    Ok(Json(buildings))
}
