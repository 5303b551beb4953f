//! AdVision Desktop - Campaign Explorer
//!
//! Client core of the campaign dashboard: describe a campaign, have the
//! prediction service store it and predict its engagement rate, and keep the
//! campaign table, stats summary and engagement chart in step.

pub mod api;
pub mod chart;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod services;
pub mod state;
pub mod store;
pub mod view;

use config::ClientConfig;
use state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging from `RUST_LOG`
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "advision_desktop_lib=debug,advision_desktop=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Run one headless dashboard session.
///
/// Loads the dashboard, applies `field=value` edits from `args` and submits
/// the draft if there were any, then prints the dashboard as JSON.
pub async fn run(args: Vec<String>) -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting AdVision Desktop...");

    let config = ClientConfig::from_env()?;
    let state = AppState::new(&config)?;

    if let Err(e) = commands::reload(&state).await {
        tracing::warn!("Dashboard load incomplete: {}", e);
    }

    let edits = args
        .iter()
        .map(|arg| {
            arg.split_once('=')
                .ok_or_else(|| anyhow::anyhow!("Expected field=value, got '{}'", arg))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    for (field, value) in &edits {
        commands::update_field(&state, field, value)?;
    }

    if !edits.is_empty() {
        // failures are already reflected in the dashboard error
        if let Err(e) = commands::submit_campaign(&state).await {
            tracing::info!("Submission not completed: {}", e);
        }
    }

    let view = commands::get_dashboard(&state);
    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}
