//! Loader Service
//!
//! Page-load fetch of the campaign list and the stats summary. The two
//! requests run concurrently; the session counts as loaded once both are done.

use crate::services::StatsService;
use crate::state::AppState;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Message shown when the campaign table cannot be loaded
pub const LOAD_CAMPAIGNS_FAILED_MESSAGE: &str = "Failed to load campaigns";

/// Result of the initial load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadResult {
    /// Number of campaigns loaded, `None` when the list fetch failed
    pub campaigns: Option<usize>,
    pub stats_available: bool,
}

/// Loader service for business logic
pub struct LoaderService;

impl LoaderService {
    /// Load campaigns and stats.
    ///
    /// Any previous error is cleared first. A campaign-list failure sets the
    /// visible error; a stats failure is silent.
    pub async fn initial_load(state: &AppState) -> LoadResult {
        info!("LoaderService::initial_load");

        // a load starts from a clean slate, like a fresh page
        state.clear_error();

        let (campaigns, stats) =
            tokio::join!(state.api.list_campaigns(), state.api.stats_summary());

        let campaigns = match campaigns {
            Ok(list) => Some(state.campaigns.replace_all(list)),
            Err(e) => {
                error!("Campaign list fetch failed: {}", e);
                state.set_error(LOAD_CAMPAIGNS_FAILED_MESSAGE);
                None
            }
        };

        let stats_available = StatsService::apply(state, stats).is_some();

        state.mark_loaded();
        info!(
            "Initial load complete: campaigns={:?}, stats={}",
            campaigns, stats_available
        );

        LoadResult {
            campaigns,
            stats_available,
        }
    }
}
