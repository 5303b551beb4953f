//! Campaign form commands

use crate::api::types::{Campaign, DraftCampaign, EngagementPrediction};
use crate::error::Result;
use crate::services::{PredictionService, SubmissionService};
use crate::state::AppState;

/// Apply one form edit and return the new draft
pub fn update_field(state: &AppState, field: &str, value: &str) -> Result<DraftCampaign> {
    tracing::debug!("Form edit: {} = {:?}", field, value);
    state.form.write().update(field, value)
}

/// Submit the current draft for creation and prediction.
///
/// Refused while a previous submission is still running, the same way the
/// submit button is disabled.
pub async fn submit_campaign(state: &AppState) -> Result<Campaign> {
    SubmissionService::try_submit_current(state).await
}

/// Predict engagement for the current draft without creating a campaign
pub async fn preview_engagement(state: &AppState) -> Result<EngagementPrediction> {
    let draft = state.draft();
    PredictionService::preview(state, &draft).await
}
