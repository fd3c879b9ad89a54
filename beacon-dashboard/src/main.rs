//! Beacon Dashboard
//!
//! Terminal dashboard client for a CI/CD backend: navigate between sections,
//! create pipelines and jobs, trigger runs, watch the activity log, and
//! manage persisted settings.

mod backend;
mod config;
mod controller;
mod keygen;
mod logs;
mod poller;
mod settings_store;
mod shell;
mod state;
mod views;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use beacon_client::BackendClient;
use beacon_core::domain::log::LogLevel;
use config::Config;
use controller::DashboardController;
use settings_store::SettingsStore;

#[derive(Parser)]
#[command(name = "beacon")]
#[command(about = "Beacon CI/CD Dashboard", long_about = None)]
struct Cli {
    /// Backend URL
    #[arg(
        long,
        env = "BEACON_BACKEND_URL",
        default_value = "http://localhost:8080"
    )]
    backend_url: String,

    /// Path of the persisted settings file
    #[arg(long, env = "BEACON_SETTINGS_PATH")]
    settings_path: Option<PathBuf>,

    /// Section to open at startup
    #[arg(long, env = "BEACON_START_SECTION", default_value = "dashboard")]
    section: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beacon=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let settings_path = cli
        .settings_path
        .unwrap_or_else(Config::default_settings_path);
    let config = Config::new(cli.backend_url, settings_path);
    config.validate()?;

    tracing::info!(backend = %config.backend_url, "Starting Beacon dashboard");

    let client = BackendClient::new(&config.backend_url);
    let store = SettingsStore::new(config.settings_path.clone());
    tracing::debug!(settings = %store.path().display(), "Using settings file");

    let controller = Arc::new(DashboardController::new(&config, client, store)?);
    controller.add_log("Dashboard started", LogLevel::Info);
    controller.navigate(&cli.section);

    let poller = poller::spawn(Arc::clone(&controller), config.poll_interval);

    let result = shell::run(Arc::clone(&controller)).await;

    // Explicit teardown: stop the polling task before exiting.
    poller.abort();

    result
}
