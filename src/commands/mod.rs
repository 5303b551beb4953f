//! Frontend commands
//!
//! Entry points for the dashboard UI. Each one is a thin wrapper over the
//! services; errors serialize to `{code, message}` for display.

pub mod campaigns;
pub mod dashboard;

pub use campaigns::{preview_engagement, submit_campaign, update_field};
pub use dashboard::{check_health, get_dashboard, reload};
