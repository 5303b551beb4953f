//! reqwest-backed client for the prediction service

use crate::api::types::*;
use crate::api::CampaignApi;
use crate::config::ClientConfig;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// HTTP implementation of [`CampaignApi`]
pub struct HttpCampaignApi {
    client: Client,
    base_url: Url,
}

impl HttpCampaignApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            client,
            base_url: config.api_base.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Decode a success body, or turn the status into [`AppError::Api`].
    ///
    /// The error body is read best-effort; an unreadable body only loses the detail.
    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let url = response.url().clone();

        if !status.is_success() {
            let detail = match response.json::<serde_json::Value>().await {
                Ok(body) => Some(body),
                Err(e) => {
                    debug!("Unreadable error body from {}: {}", url, e);
                    None
                }
            };

            warn!("{} returned {}: {:?}", url, status, detail);

            return Err(AppError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl CampaignApi for HttpCampaignApi {
    async fn list_campaigns(&self) -> Result<Vec<Campaign>> {
        let response = self.client.get(self.endpoint("campaigns")?).send().await?;
        Self::read_json(response).await
    }

    async fn create_with_prediction(&self, draft: &DraftCampaign) -> Result<Campaign> {
        debug!("Create payload: {}", serde_json::to_string(draft)?);

        let response = self
            .client
            .post(self.endpoint("campaigns/create-with-prediction")?)
            .json(draft)
            .send()
            .await?;

        Self::read_json(response).await
    }

    async fn stats_summary(&self) -> Result<StatsSummary> {
        let response = self.client.get(self.endpoint("stats/summary")?).send().await?;
        Self::read_json(response).await
    }

    async fn predict_engagement(&self, draft: &DraftCampaign) -> Result<EngagementPrediction> {
        let response = self
            .client
            .post(self.endpoint("predict-engagement")?)
            .json(draft)
            .send()
            .await?;

        Self::read_json(response).await
    }

    async fn health(&self) -> Result<HealthStatus> {
        let response = self.client.get(self.endpoint("health")?).send().await?;
        Self::read_json(response).await
    }
}
