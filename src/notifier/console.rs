use crate::domain::Alert;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }

    pub fn send(&self, alert: &Alert) {
        println!("🟢 {} - {}", alert.title, alert.message);
        info!("Alert written to console: {}", alert.title);
    }
}
