//! Services Layer
//!
//! Orchestration shared by the commands and the binary. Services own every
//! state transition of the session; the commands stay thin.
//!
//! # Architecture
//!
//! ```text
//! Frontend UI --> Commands --> Services --> CampaignApi --> prediction service
//!                                  │
//!                                  └──> AppState (form, campaigns, stats, status)
//! ```
//!
//! # Services
//!
//! - `SubmissionService` - Create a campaign with its prediction
//! - `StatsService` - Refresh the stats snapshot
//! - `LoaderService` - Initial campaign list and stats load
//! - `PredictionService` - What-if predictions, service health

pub mod submission_service;
pub mod stats_service;
pub mod loader_service;
pub mod prediction_service;

pub use submission_service::{SubmissionService, SUBMISSION_FAILED_MESSAGE};
pub use stats_service::StatsService;
pub use loader_service::{LoaderService, LoadResult, LOAD_CAMPAIGNS_FAILED_MESSAGE};
pub use prediction_service::PredictionService;
