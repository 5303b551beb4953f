//! Stats Service
//!
//! Keeps the local stats snapshot in step with the service. Failures are
//! logged and otherwise ignored: the previous snapshot stays in place and no
//! user-visible error is set.

use crate::api::types::StatsSummary;
use crate::error::Result;
use crate::state::AppState;
use tracing::{info, warn};

/// Stats service for business logic
pub struct StatsService;

impl StatsService {
    /// Fetch a fresh summary and make it the current snapshot.
    ///
    /// Returns the snapshot in effect afterwards.
    pub async fn refresh(state: &AppState) -> Option<StatsSummary> {
        info!("StatsService::refresh");

        let result = state.api.stats_summary().await;
        Self::apply(state, result)
    }

    /// Install a fetch result; shared with the initial load
    pub(crate) fn apply(state: &AppState, result: Result<StatsSummary>) -> Option<StatsSummary> {
        match result {
            Ok(summary) => {
                info!(
                    "Stats: {} campaigns, {} platforms",
                    summary.total_campaigns,
                    summary.platform_engagement.len()
                );
                state.replace_stats(summary.clone());
                Some(summary)
            }
            Err(e) => {
                warn!("Stats refresh failed, keeping previous snapshot: {}", e);
                state.stats_summary()
            }
        }
    }
}
