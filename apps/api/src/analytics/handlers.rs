use axum::{extract::State, Json};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analytics::roi::generate_predictions;
use crate::errors::AppError;
use crate::handoff::{put_json, HandoffKey};
use crate::models::form::CampaignForm;
use crate::models::predictions::AiPredictions;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    pub session_id: Uuid,
    pub predictions: AiPredictions,
}

#[derive(Debug, Serialize)]
pub struct RoiResponse {
    pub success: bool,
    pub data: AiPredictions,
}

/// POST /api/v1/analytics/preview
///
/// Stores the form and its predictions for a new session, ready for
/// `GET /api/v1/campaigns/results?session=..&preview=true`.
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(form): Json<CampaignForm>,
) -> Result<Json<PreviewResponse>, AppError> {
    let mut rng = StdRng::seed_from_u64(state.next_seed());
    let predictions = generate_predictions(&form, &mut rng)?;

    let session_id = Uuid::new_v4();
    let store = state.handoff.as_ref();
    put_json(store, session_id, HandoffKey::TempFormData, &form).await?;
    put_json(store, session_id, HandoffKey::PreviewAnalytics, &predictions).await?;
    info!("Stored preview analytics for session {session_id}");

    Ok(Json(PreviewResponse {
        session_id,
        predictions,
    }))
}

/// POST /api/v1/roi/calculate
pub async fn handle_roi_calculate(
    State(state): State<AppState>,
    Json(form): Json<CampaignForm>,
) -> Result<Json<RoiResponse>, AppError> {
    let mut rng = StdRng::seed_from_u64(state.next_seed());
    let data = generate_predictions(&form, &mut rng)?;
    Ok(Json(RoiResponse {
        success: true,
        data,
    }))
}
