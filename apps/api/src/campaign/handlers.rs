use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::campaign::assembler::{assemble_record, merge_narrative};
use crate::campaign::synthesizer::{customized_record, mock_record};
use crate::errors::AppError;
use crate::handoff::{put_json, HandoffKey};
use crate::models::campaign::CampaignRecord;
use crate::models::form::CampaignForm;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: Uuid,
}

/// `campaignData` payload written for a submitted form.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredForm<'a> {
    form_data: &'a CampaignForm,
}

/// POST /api/v1/campaigns
pub async fn handle_submit_campaign(
    State(state): State<AppState>,
    Json(form): Json<CampaignForm>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let session_id = Uuid::new_v4();
    put_json(
        state.handoff.as_ref(),
        session_id,
        HandoffKey::CampaignData,
        &StoredForm { form_data: &form },
    )
    .await?;
    info!("Stored campaign form for session {session_id}");
    Ok((StatusCode::CREATED, Json(SessionResponse { session_id })))
}

#[derive(Debug, Deserialize)]
pub struct ResultsQuery {
    pub session: Option<Uuid>,
    #[serde(default)]
    pub preview: bool,
}

/// GET /api/v1/campaigns/results?session=<uuid>&preview=<bool>
///
/// Always answers with a complete record; without a session it is the demo record.
pub async fn handle_campaign_results(
    State(state): State<AppState>,
    Query(params): Query<ResultsQuery>,
) -> Json<CampaignRecord> {
    let Some(session) = params.session else {
        info!("No session given, returning demo record");
        return Json(mock_record());
    };

    let assembled = assemble_record(
        state.handoff.as_ref(),
        state.generator.as_ref(),
        session,
        params.preview,
        state.next_seed(),
    )
    .await;
    Json(assembled.record)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseRequest {
    #[serde(alias = "routePlan")]
    pub narrative_text: String,
    pub form: Option<CampaignForm>,
}

/// POST /api/v1/campaigns/parse
pub async fn handle_parse_plan(
    Json(req): Json<ParseRequest>,
) -> Result<Json<CampaignRecord>, AppError> {
    if req.narrative_text.trim().is_empty() {
        return Err(AppError::Validation(
            "narrativeText must not be empty".to_string(),
        ));
    }
    let base = match &req.form {
        Some(form) => customized_record(form),
        None => mock_record(),
    };
    Ok(Json(merge_narrative(base, &req.narrative_text)))
}
