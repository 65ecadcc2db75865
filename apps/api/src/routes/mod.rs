pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::analytics::handlers as analytics;
use crate::campaign::handlers as campaign;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Campaign planning
        .route("/api/v1/campaigns", post(campaign::handle_submit_campaign))
        .route(
            "/api/v1/campaigns/results",
            get(campaign::handle_campaign_results),
        )
        .route("/api/v1/campaigns/parse", post(campaign::handle_parse_plan))
        // Analytics
        .route("/api/v1/analytics/preview", post(analytics::handle_preview))
        .route("/api/v1/roi/calculate", post(analytics::handle_roi_calculate))
        .fallback(not_found)
        .with_state(state)
}
