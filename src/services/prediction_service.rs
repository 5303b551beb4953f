//! Prediction Service
//!
//! What-if predictions and service health. Neither touches the campaign
//! table, the stats snapshot or the latest prediction.

use crate::api::types::{DraftCampaign, EngagementPrediction, HealthStatus};
use crate::error::Result;
use crate::state::AppState;
use tracing::{info, warn};

/// Prediction service for business logic
pub struct PredictionService;

impl PredictionService {
    /// Predict engagement for a draft without storing it
    pub async fn preview(state: &AppState, draft: &DraftCampaign) -> Result<EngagementPrediction> {
        info!("PredictionService::preview - {}", draft.platform);

        let prediction = state.api.predict_engagement(draft).await?;

        info!(
            "Preview engagement {:.4} (model {})",
            prediction.engagement_rate, prediction.model_version_str
        );
        Ok(prediction)
    }

    pub async fn health(state: &AppState) -> Result<HealthStatus> {
        let health = state.api.health().await?;
        if !health.is_ok() {
            warn!("Prediction service reports status '{}'", health.status);
        }
        Ok(health)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeCampaignApi;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_preview_leaves_session_untouched() {
        let api = Arc::new(FakeCampaignApi::new(0.018));
        let state = AppState::with_api(api.clone());

        let prediction = PredictionService::preview(&state, &state.draft()).await.unwrap();

        assert_eq!(prediction.engagement_rate, 0.018);
        assert!(state.campaigns.is_empty());
        assert!(state.stats_summary().is_none());
        assert_eq!(state.latest_prediction(), None);
        assert_eq!(api.calls(), vec!["predict_engagement"]);
    }

    #[tokio::test]
    async fn test_health() {
        let state = AppState::with_api(Arc::new(FakeCampaignApi::new(0.01)));
        let health = PredictionService::health(&state).await.unwrap();
        assert!(health.is_ok());
    }
}
