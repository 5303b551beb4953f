//! Submission Service
//!
//! Runs the create-with-prediction request and merges the result into the
//! session: the campaign goes to the head of the table, its rate becomes the
//! latest prediction, then the stats are refreshed.
//!
//! Only one submission is meant to be in flight. `submit` does not enforce
//! that; `try_submit_current` refuses while another one is running.

use crate::api::types::{Campaign, DraftCampaign};
use crate::error::{AppError, Result};
use crate::services::StatsService;
use crate::state::{AppState, LoadingGuard};
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

/// Message shown under the form when a submission fails
pub const SUBMISSION_FAILED_MESSAGE: &str = "Failed to create campaign";

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// Submit the current draft
    pub async fn submit_current(state: &AppState) -> Result<Campaign> {
        let draft = state.draft();
        Self::submit(state, draft).await
    }

    /// Submit the current draft unless a submission is already in flight
    pub async fn try_submit_current(state: &AppState) -> Result<Campaign> {
        let loading = state.try_begin_submission().ok_or_else(|| {
            AppError::Validation("A submission is already in progress".to_string())
        })?;
        let draft = state.draft();
        Self::run(state, draft, loading).await
    }

    /// Create a campaign with its prediction.
    ///
    /// On failure nothing but the error message changes and the caller gets
    /// [`AppError::SubmissionFailed`]. `loading` is cleared in every outcome.
    pub async fn submit(state: &AppState, draft: DraftCampaign) -> Result<Campaign> {
        let loading = state.begin_submission();
        Self::run(state, draft, loading).await
    }

    async fn run(
        state: &AppState,
        draft: DraftCampaign,
        _loading: LoadingGuard<'_>,
    ) -> Result<Campaign> {
        let attempt = Uuid::new_v4();
        let span = info_span!("submission", %attempt, platform = %draft.platform);

        async move {
            info!("SubmissionService::submit");

            let non_finite = draft.non_finite_fields();
            if !non_finite.is_empty() {
                let names: Vec<&str> = non_finite.iter().map(|f| f.name()).collect();
                warn!("Submitting non-numeric values for {:?}", names);
            }

            let campaign = match state.api.create_with_prediction(&draft).await {
                Ok(campaign) => campaign,
                Err(e) => {
                    if let AppError::Api {
                        detail: Some(detail),
                        ..
                    } = &e
                    {
                        debug!("Service error body: {}", detail);
                    }
                    error!("Campaign submission failed: {}", e);
                    state.set_error(AppError::SubmissionFailed.to_string());
                    return Err(AppError::SubmissionFailed);
                }
            };

            let count = state.campaigns.prepend(campaign.clone());
            state.set_latest_prediction(campaign.predicted_engagement_rate);

            info!(
                "Campaign {} created, predicted engagement {:.4} ({} in list)",
                campaign.id, campaign.predicted_engagement_rate, count
            );

            StatsService::refresh(state).await;

            Ok(campaign)
        }
        .instrument(span)
        .await
    }
}
