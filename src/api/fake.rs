//! In-memory service used by the service tests

use crate::api::types::*;
use crate::api::CampaignApi;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use parking_lot::Mutex;

/// Stores campaigns in memory and aggregates stats the way the service does
pub(crate) struct FakeCampaignApi {
    pub campaigns: Mutex<Vec<Campaign>>,
    pub prediction_rate: Mutex<f64>,
    /// Status returned by create-with-prediction instead of succeeding
    pub create_status: Mutex<Option<u16>>,
    pub create_unreachable: Mutex<bool>,
    pub list_unreachable: Mutex<bool>,
    pub stats_unreachable: Mutex<bool>,
    pub calls: Mutex<Vec<&'static str>>,
    /// Runs inside create-with-prediction, before it answers
    create_hook: Mutex<Option<Box<dyn Fn() + Send + Sync>>>,
}

impl FakeCampaignApi {
    pub fn new(prediction_rate: f64) -> Self {
        Self {
            campaigns: Mutex::new(Vec::new()),
            prediction_rate: Mutex::new(prediction_rate),
            create_status: Mutex::new(None),
            create_unreachable: Mutex::new(false),
            list_unreachable: Mutex::new(false),
            stats_unreachable: Mutex::new(false),
            calls: Mutex::new(Vec::new()),
            create_hook: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }

    pub fn on_create(&self, hook: impl Fn() + Send + Sync + 'static) {
        *self.create_hook.lock() = Some(Box::new(hook));
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().push(call);
    }

    /// What a gateway in front of a stopped backend answers
    fn unreachable() -> AppError {
        AppError::Api {
            status: 503,
            detail: None,
        }
    }
}

#[async_trait]
impl CampaignApi for FakeCampaignApi {
    async fn list_campaigns(&self) -> Result<Vec<Campaign>> {
        self.record("list_campaigns");
        if *self.list_unreachable.lock() {
            return Err(Self::unreachable());
        }
        let mut campaigns = self.campaigns.lock().clone();
        campaigns.reverse();
        Ok(campaigns)
    }

    async fn create_with_prediction(&self, draft: &DraftCampaign) -> Result<Campaign> {
        self.record("create_with_prediction");
        if let Some(hook) = self.create_hook.lock().as_ref() {
            hook();
        }
        if *self.create_unreachable.lock() {
            return Err(Self::unreachable());
        }
        if let Some(status) = *self.create_status.lock() {
            return Err(AppError::Api {
                status,
                detail: Some(serde_json::json!({"detail": "validation failed"})),
            });
        }

        let mut campaigns = self.campaigns.lock();
        let campaign = Campaign {
            id: campaigns.len() as i64 + 1,
            details: draft.clone(),
            predicted_engagement_rate: *self.prediction_rate.lock(),
        };
        campaigns.push(campaign.clone());
        Ok(campaign)
    }

    async fn stats_summary(&self) -> Result<StatsSummary> {
        self.record("stats_summary");
        if *self.stats_unreachable.lock() {
            return Err(Self::unreachable());
        }

        let campaigns = self.campaigns.lock();
        let mut total_spend = 0.0;
        let mut total_impressions = 0.0;
        let mut total_clicks = 0.0;
        let mut per_platform: Vec<(String, Vec<f64>)> = Vec::new();

        for campaign in campaigns.iter() {
            total_spend += campaign.details.spend;
            total_impressions += campaign.details.impressions;
            total_clicks += campaign.details.clicks;

            let name = campaign.details.platform.to_string();
            match per_platform.iter_mut().find(|(p, _)| *p == name) {
                Some((_, rates)) => rates.push(campaign.predicted_engagement_rate),
                None => per_platform.push((name, vec![campaign.predicted_engagement_rate])),
            }
        }

        Ok(StatsSummary {
            total_campaigns: campaigns.len() as u64,
            total_spend,
            avg_ctr: if total_impressions > 0.0 {
                total_clicks / total_impressions
            } else {
                0.0
            },
            platform_engagement: per_platform
                .into_iter()
                .map(|(name, rates)| (name, rates.iter().sum::<f64>() / rates.len() as f64))
                .collect(),
        })
    }

    async fn predict_engagement(&self, _draft: &DraftCampaign) -> Result<EngagementPrediction> {
        self.record("predict_engagement");
        Ok(EngagementPrediction {
            engagement_rate: *self.prediction_rate.lock(),
            model_version_str: "baseline_v1".to_string(),
        })
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.record("health");
        Ok(HealthStatus {
            status: "ok".to_string(),
            message: Some("AdVision AI backend is running".to_string()),
        })
    }
}
