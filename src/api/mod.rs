//! Prediction service boundary

pub mod types;
mod http;

#[cfg(test)]
pub(crate) mod fake;

pub use http::HttpCampaignApi;

use crate::error::Result;
use async_trait::async_trait;
use types::*;

/// Operations the dashboard needs from the prediction/statistics service
#[async_trait]
pub trait CampaignApi: Send + Sync {
    /// Most recent campaigns, newest first
    async fn list_campaigns(&self) -> Result<Vec<Campaign>>;

    /// Store a campaign and return it with its predicted engagement rate
    async fn create_with_prediction(&self, draft: &DraftCampaign) -> Result<Campaign>;

    /// Aggregate statistics across all stored campaigns
    async fn stats_summary(&self) -> Result<StatsSummary>;

    /// Predict engagement without storing anything
    async fn predict_engagement(&self, draft: &DraftCampaign) -> Result<EngagementPrediction>;

    async fn health(&self) -> Result<HealthStatus>;
}
