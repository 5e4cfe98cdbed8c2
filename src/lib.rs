pub mod alert;
pub mod config;
pub mod domain;
pub mod fetcher;
pub mod notifier;
pub mod scheduler;
pub mod status;
pub mod utils;
pub mod watcher;

use alert::AlertEngine;
use config::AppConfig;
use fetcher::PageFetcher;
use notifier::{ConsoleNotifier, NotifierHub, TelegramNotifier};
use scheduler::{cancel_pair, CancelHandle};
use status::StatusDetector;
use watcher::Watchtower;

use anyhow::Result;
use chrono::Utc;
use tracing::{error, info};

pub async fn run() -> Result<()> {
    let config = AppConfig::from_env()?;
    let mut app = build(config)?;

    let (handle, token) = cancel_pair();
    tokio::spawn(cancel_on_ctrl_c(handle));

    app.run(token).await
}

/// Wires the poller from a validated config. Makes no network calls.
pub fn build(config: AppConfig) -> Result<Watchtower> {
    info!("🏗️  Monitor started at {}", Utc::now().to_rfc3339());

    let telegram = TelegramNotifier::from_config(&config)?;
    info!("📱 Telegram alerts to chat {} via {}", config.chat_id, telegram.redacted_endpoint());
    let notifier = NotifierHub::new(ConsoleNotifier::new(), telegram);

    let detector = StatusDetector::new(&config.status_marker, &config.offline_marker);
    let alert_engine = AlertEngine::new(config.site_name.clone(), config.target_url.clone());
    let fetcher = PageFetcher::new()?;

    Ok(Watchtower::new(config, fetcher, detector, alert_engine, notifier))
}

async fn cancel_on_ctrl_c(handle: CancelHandle) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received, finishing current check...");
            handle.cancel();
        }
        Err(e) => {
            // Dropping the handle would stop the monitor, so hold it forever.
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
            drop(handle);
        }
    }
}
