//! Dashboard snapshot handed to the renderer

use crate::api::types::{serialize_number, Campaign, DraftCampaign, StatsSummary};
use crate::chart::{to_series, ChartSeries};
use crate::state::AppState;
use serde::Serialize;

/// Engagement rate as a percentage with two decimals, `0.015` -> `"1.50%"`
pub fn format_percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// Engagement rate as shown in the campaign table, four decimals
pub fn format_rate(rate: f64) -> String {
    format!("{:.4}", rate)
}

/// One line of the campaign table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignRow {
    pub id: i64,
    pub platform: String,
    pub country: String,
    pub product_category: String,
    #[serde(serialize_with = "serialize_number")]
    pub spend: f64,
    #[serde(serialize_with = "serialize_number")]
    pub impressions: f64,
    #[serde(serialize_with = "serialize_number")]
    pub clicks: f64,
    #[serde(serialize_with = "serialize_number")]
    pub conversions: f64,
    pub predicted_engagement_rate: String,
}

impl From<&Campaign> for CampaignRow {
    fn from(campaign: &Campaign) -> Self {
        Self {
            id: campaign.id,
            platform: campaign.details.platform.to_string(),
            country: campaign.details.country.clone(),
            product_category: campaign.details.product_category.clone(),
            spend: campaign.details.spend,
            impressions: campaign.details.impressions,
            clicks: campaign.details.clicks,
            conversions: campaign.details.conversions,
            predicted_engagement_rate: format_rate(campaign.predicted_engagement_rate),
        }
    }
}

/// Everything the dashboard renders, taken at one point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub draft: DraftCampaign,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
    pub latest_prediction: Option<f64>,
    pub latest_prediction_display: Option<String>,
    pub campaigns: Vec<CampaignRow>,
    pub stats: Option<StatsSummary>,
    /// `None` until a summary has been fetched
    pub chart: Option<ChartSeries>,
}

impl DashboardView {
    pub fn from_state(state: &AppState) -> Self {
        let status = state.status();
        let stats = state.stats_summary();
        let chart = to_series(stats.as_ref());

        Self {
            draft: state.draft(),
            loading: status.loading,
            loaded: status.loaded,
            error: status.error,
            latest_prediction: status.latest_prediction,
            latest_prediction_display: status.latest_prediction.map(format_percent),
            campaigns: state.campaigns.snapshot().iter().map(CampaignRow::from).collect(),
            stats,
            chart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeCampaignApi;
    use std::sync::Arc;

    #[test]
    fn test_formatting() {
        assert_eq!(format_percent(0.015), "1.50%");
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_rate(0.015), "0.0150");
        assert_eq!(format_rate(0.123456), "0.1235");
    }

    #[test]
    fn test_fresh_state_view() {
        let state = AppState::with_api(Arc::new(FakeCampaignApi::new(0.01)));
        let view = DashboardView::from_state(&state);

        assert_eq!(view.draft, DraftCampaign::default());
        assert!(!view.loaded);
        assert!(view.campaigns.is_empty());
        assert_eq!(view.latest_prediction_display, None);
        assert_eq!(view.chart, None);
    }

    #[test]
    fn test_row_formatting() {
        let campaign = Campaign {
            id: 9,
            details: DraftCampaign::default(),
            predicted_engagement_rate: 0.015,
        };
        let row = CampaignRow::from(&campaign);

        assert_eq!(row.platform, "instagram");
        assert_eq!(row.predicted_engagement_rate, "0.0150");

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["impressions"], serde_json::json!(80000));
    }
}
