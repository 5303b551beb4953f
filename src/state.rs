//! Application state management
//!
//! Locks are only held for the duration of a read or a swap, never across an
//! `.await`.

use crate::api::types::{DraftCampaign, StatsSummary};
use crate::api::{CampaignApi, HttpCampaignApi};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::form::FormState;
use crate::store::CampaignStore;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

/// What the user sees around the form and table
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionStatus {
    /// A submission is in flight, the submit button should be disabled
    pub loading: bool,
    /// User-visible error message
    pub error: Option<String>,
    /// Engagement rate of the last successful submission
    pub latest_prediction: Option<f64>,
    /// Initial load has finished, successfully or not
    pub loaded: bool,
    pub loaded_at: Option<DateTime<Utc>>,
}

/// Last stats summary received
#[derive(Debug, Clone, Default)]
pub struct StatsSnapshot {
    pub summary: Option<StatsSummary>,
    pub refreshed_at: Option<DateTime<Utc>>,
}

/// Clears `loading` when dropped, whatever way the submission ends
pub struct LoadingGuard<'a> {
    status: &'a RwLock<SessionStatus>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.status.write().loading = false;
    }
}

/// Application state shared across all commands
pub struct AppState {
    /// Prediction/statistics service
    pub api: Arc<dyn CampaignApi>,

    /// Draft being edited
    pub form: RwLock<FormState>,

    /// Campaign table
    pub campaigns: CampaignStore,

    /// Summary shown above the chart
    pub stats: RwLock<StatsSnapshot>,

    pub status: RwLock<SessionStatus>,
}

impl AppState {
    /// Create new application state talking to the configured service
    pub fn new(config: &ClientConfig) -> Result<Self> {
        tracing::info!("Prediction service: {}", config.api_base);

        let api = Arc::new(HttpCampaignApi::new(config)?);
        Ok(Self::with_api(api))
    }

    pub fn with_api(api: Arc<dyn CampaignApi>) -> Self {
        Self {
            api,
            form: RwLock::new(FormState::default()),
            campaigns: CampaignStore::new(),
            stats: RwLock::new(StatsSnapshot::default()),
            status: RwLock::new(SessionStatus::default()),
        }
    }

    /// Current draft
    pub fn draft(&self) -> DraftCampaign {
        self.form.read().draft().clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.status.read().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.status.read().loading
    }

    pub fn latest_prediction(&self) -> Option<f64> {
        self.status.read().latest_prediction
    }

    /// Mark a submission as started: loading on, previous error cleared
    pub fn begin_submission(&self) -> LoadingGuard<'_> {
        {
            let mut status = self.status.write();
            status.loading = true;
            status.error = None;
        }
        LoadingGuard {
            status: &self.status,
        }
    }

    /// Like [`begin_submission`](Self::begin_submission), but `None` if one
    /// is already in flight. Check and set happen under one write lock.
    pub fn try_begin_submission(&self) -> Option<LoadingGuard<'_>> {
        {
            let mut status = self.status.write();
            if status.loading {
                return None;
            }
            status.loading = true;
            status.error = None;
        }
        Some(LoadingGuard {
            status: &self.status,
        })
    }

    pub fn clear_error(&self) {
        self.status.write().error = None;
    }

    pub fn set_error(&self, message: impl Into<String>) {
        self.status.write().error = Some(message.into());
    }

    pub fn set_latest_prediction(&self, rate: f64) {
        self.status.write().latest_prediction = Some(rate);
    }

    pub fn mark_loaded(&self) {
        let mut status = self.status.write();
        status.loaded = true;
        status.loaded_at = Some(Utc::now());
    }

    pub fn stats_summary(&self) -> Option<StatsSummary> {
        self.stats.read().summary.clone()
    }

    /// Replace the stats snapshot wholesale
    pub fn replace_stats(&self, summary: StatsSummary) {
        *self.stats.write() = StatsSnapshot {
            summary: Some(summary),
            refreshed_at: Some(Utc::now()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeCampaignApi;

    fn state() -> AppState {
        AppState::with_api(Arc::new(FakeCampaignApi::new(0.01)))
    }

    #[test]
    fn test_loading_guard_releases_on_drop() {
        let state = state();
        state.set_error("Failed to load campaigns");

        {
            let _guard = state.begin_submission();
            assert!(state.is_loading());
            assert_eq!(state.status().error, None);
        }

        assert!(!state.is_loading());
    }

    #[test]
    fn test_try_begin_refuses_second_submission() {
        let state = state();

        let first = state.try_begin_submission();
        assert!(first.is_some());
        assert!(state.try_begin_submission().is_none());

        drop(first);
        assert!(!state.is_loading());
        assert!(state.try_begin_submission().is_some());
    }

    #[test]
    fn test_replace_stats_is_wholesale() {
        let state = state();
        assert!(state.stats_summary().is_none());

        state.replace_stats(StatsSummary {
            total_campaigns: 4,
            platform_engagement: vec![("facebook", 0.03)].into_iter().collect(),
            ..StatsSummary::default()
        });
        state.replace_stats(StatsSummary {
            total_campaigns: 5,
            ..StatsSummary::default()
        });

        let summary = state.stats_summary().unwrap();
        assert_eq!(summary.total_campaigns, 5);
        assert!(summary.platform_engagement.is_empty());
        assert!(state.stats.read().refreshed_at.is_some());
    }
}
