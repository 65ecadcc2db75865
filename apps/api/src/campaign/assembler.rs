//! Campaign Record Assembler: produces exactly one complete record per results request.
//!
//! Precedence, evaluated once:
//! 1. preview flag set and a `previewAnalytics` entry → realistic preview record
//! 2. `campaignData` carrying plan text → parsed text merged over the demo record
//! 3. `campaignData` carrying `formData` → generate plan text, then as (2) over the
//!    form's customized record; generation failure keeps the customized record
//! 4. `campaignData` carrying a structured record → applied over the demo record
//! 5. nothing usable → demo record
//!
//! Every entry read here is consumed. Unreadable or corrupt entries are logged and
//! treated as absent, so assembly itself cannot fail.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::campaign::extractor::{
    extract_locations, extract_route_segment, extract_timings, RouteSegment,
};
use crate::campaign::fields::parse_fields;
use crate::campaign::generator::PlanGenerator;
use crate::campaign::realistic::preview_record;
use crate::campaign::synthesizer::{customized_record, mock_record};
use crate::handoff::{HandoffKey, HandoffStore};
use crate::models::campaign::{CampaignRecord, RecordPatch};
use crate::models::form::CampaignForm;
use crate::models::predictions::AiPredictions;

/// Which precedence case produced the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    Preview,
    StoredNarrative,
    Generated,
    GenerationFallback,
    Structured,
    Demo,
}

#[derive(Debug, Clone)]
pub struct Assembled {
    pub record: CampaignRecord,
    pub source: RecordSource,
}

/// Shapes a `campaignData` entry can take.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredCampaign {
    Form(CampaignForm),
    Narrative(RecordPatch),
    Structured(RecordPatch),
}

impl StoredCampaign {
    /// Fails only when `raw` is not a JSON object or carries an unreadable `formData`.
    /// Record fields of the wrong shape are dropped one by one.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(raw)?;
        let Value::Object(mut fields) = value else {
            return Err(serde::de::Error::custom("campaign data is not a JSON object"));
        };
        if let Some(form) = fields.get("formData").filter(|f| !f.is_null()) {
            return Ok(StoredCampaign::Form(CampaignForm::deserialize(form)?));
        }

        let candidates: Vec<Value> = ["narrativeText", "routePlan"]
            .into_iter()
            .filter_map(|key| fields.remove(key))
            .collect();
        let text = candidates.into_iter().find_map(|v| match v {
            Value::String(text) if !text.trim().is_empty() => Some(text),
            _ => None,
        });
        let mut patch: RecordPatch = serde_json::from_value(Value::Object(fields))?;
        Ok(match text {
            Some(text) => {
                patch.narrative_text = Some(text);
                StoredCampaign::Narrative(patch)
            }
            None => StoredCampaign::Structured(patch),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Text merge
// ────────────────────────────────────────────────────────────────────────────

/// Runs the field parser and text extractor over `text`. Anything not found stays
/// `None`.
pub fn extract_patch(text: &str) -> RecordPatch {
    let fields = parse_fields(text);
    let [days_1_3, days_4_5, days_6_7] =
        RouteSegment::ALL.map(|segment| extract_route_segment(text, segment));

    RecordPatch {
        business_name: fields.business_name,
        location: fields.location,
        budget: fields.budget,
        target_audience: fields.target_audience,
        locations: extract_locations(text),
        timings: extract_timings(text),
        route_days_1_3: days_1_3,
        route_days_4_5: days_4_5,
        route_days_6_7: days_6_7,
        ..Default::default()
    }
}

/// Overlays everything extracted from `text` onto `base` and keeps the full text.
pub fn merge_narrative(base: CampaignRecord, text: &str) -> CampaignRecord {
    let mut record = base.patched(extract_patch(text));
    record.narrative_text = text.to_string();
    record
}

// ────────────────────────────────────────────────────────────────────────────
// Assembly
// ────────────────────────────────────────────────────────────────────────────

async fn take_entry(store: &dyn HandoffStore, session: Uuid, key: HandoffKey) -> Option<String> {
    match store.take(session, key).await {
        Ok(value) => value,
        Err(e) => {
            warn!(
                "Could not read {} for session {session}, treating as absent: {e}",
                key.as_str()
            );
            None
        }
    }
}

async fn assemble_preview(
    store: &dyn HandoffStore,
    session: Uuid,
    seed: u64,
) -> Option<CampaignRecord> {
    let raw = take_entry(store, session, HandoffKey::PreviewAnalytics).await?;
    let form_raw = take_entry(store, session, HandoffKey::TempFormData).await;

    let predictions: AiPredictions = match serde_json::from_str(&raw) {
        Ok(p) => p,
        Err(e) => {
            warn!("Discarding corrupt preview analytics for session {session}: {e}");
            return None;
        }
    };
    let form = form_raw
        .and_then(|raw| {
            serde_json::from_str::<CampaignForm>(&raw)
                .map_err(|e| {
                    warn!("Discarding corrupt preview form data for session {session}: {e}")
                })
                .ok()
        })
        .unwrap_or_default();

    let mut rng = StdRng::seed_from_u64(seed);
    Some(preview_record(&form, &predictions, &mut rng))
}

/// Builds the record for `session`. `seed` drives the preview variant's jitter.
pub async fn assemble_record(
    store: &dyn HandoffStore,
    generator: &dyn PlanGenerator,
    session: Uuid,
    preview: bool,
    seed: u64,
) -> Assembled {
    if preview {
        if let Some(record) = assemble_preview(store, session, seed).await {
            info!("Session {session}: built preview record from analytics payload");
            return Assembled {
                record,
                source: RecordSource::Preview,
            };
        }
    }

    let stored = take_entry(store, session, HandoffKey::CampaignData)
        .await
        .and_then(|raw| match StoredCampaign::parse(&raw) {
            Ok(stored) => Some(stored),
            Err(e) => {
                warn!("Discarding corrupt campaign data for session {session}: {e}");
                None
            }
        });

    let (record, source) = match stored {
        Some(StoredCampaign::Narrative(mut patch)) => {
            let text = patch.narrative_text.take().unwrap_or_default();
            let base = mock_record().patched(patch);
            (merge_narrative(base, &text), RecordSource::StoredNarrative)
        }
        Some(StoredCampaign::Form(form)) => {
            let base = customized_record(&form);
            match generator.generate(&form).await {
                Ok(text) => (merge_narrative(base, &text), RecordSource::Generated),
                Err(e) => {
                    warn!(
                        "Generation via {} failed for {session}, using synthesized data: {e}",
                        generator.backend()
                    );
                    (base, RecordSource::GenerationFallback)
                }
            }
        }
        Some(StoredCampaign::Structured(patch)) => {
            (mock_record().patched(patch), RecordSource::Structured)
        }
        None => (mock_record(), RecordSource::Demo),
    };

    info!("Session {session}: assembled record from {source:?}");
    Assembled { record, source }
}
