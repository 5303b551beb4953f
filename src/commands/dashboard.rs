//! Dashboard commands

use crate::api::types::HealthStatus;
use crate::error::{AppError, Result};
use crate::services::{LoadResult, LoaderService, PredictionService, LOAD_CAMPAIGNS_FAILED_MESSAGE};
use crate::state::AppState;
use crate::view::DashboardView;

/// Current dashboard snapshot
pub fn get_dashboard(state: &AppState) -> DashboardView {
    DashboardView::from_state(state)
}

/// Fetch the campaign list and stats again, as on page load.
///
/// Fails with [`AppError::LoadFailure`] when the campaign table could not be
/// loaded. A stats outage is not an error.
pub async fn reload(state: &AppState) -> Result<LoadResult> {
    let result = LoaderService::initial_load(state).await;
    tracing::info!("Dashboard loaded: {:?}", result);

    if result.campaigns.is_none() {
        return Err(AppError::LoadFailure(
            LOAD_CAMPAIGNS_FAILED_MESSAGE.to_string(),
        ));
    }
    Ok(result)
}

/// Check that the prediction service is reachable
pub async fn check_health(state: &AppState) -> Result<HealthStatus> {
    PredictionService::health(state).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeCampaignApi;
    use crate::commands::campaigns::submit_campaign;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_dashboard_after_submission() {
        let state = AppState::with_api(Arc::new(FakeCampaignApi::new(0.015)));
        reload(&state).await.unwrap();

        let before = get_dashboard(&state);
        assert!(before.loaded);
        assert_eq!(before.chart.as_ref().map(|c| c.len()), Some(0));

        submit_campaign(&state).await.unwrap();
        let view = get_dashboard(&state);

        assert_eq!(view.latest_prediction_display.as_deref(), Some("1.50%"));
        assert_eq!(view.campaigns.len(), 1);
        assert_eq!(view.campaigns[0].predicted_engagement_rate, "0.0150");
        let chart = view.chart.unwrap();
        assert_eq!(chart.labels, vec!["instagram"]);
        assert_eq!(chart.values, vec![0.015]);
    }

    #[tokio::test]
    async fn test_reload_reports_load_failure() {
        let api = Arc::new(FakeCampaignApi::new(0.015));
        *api.list_unreachable.lock() = true;
        let state = AppState::with_api(api);

        let err = reload(&state).await.unwrap_err();

        assert!(matches!(err, AppError::LoadFailure(_)));
        assert_eq!(
            crate::error::ErrorResponse::from(&err).code,
            "LOAD_FAILURE"
        );
        assert_eq!(
            get_dashboard(&state).error.as_deref(),
            Some(LOAD_CAMPAIGNS_FAILED_MESSAGE)
        );
    }
}
