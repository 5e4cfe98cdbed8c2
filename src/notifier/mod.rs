mod console;
mod telegram;

pub use console::ConsoleNotifier;
pub use telegram::TelegramNotifier;

use crate::domain::Alert;
use tracing::warn;

pub struct NotifierHub {
    console: ConsoleNotifier,
    telegram: TelegramNotifier,
}

impl NotifierHub {
    pub fn new(console: ConsoleNotifier, telegram: TelegramNotifier) -> Self {
        Self { console, telegram }
    }

    /// Returns whether Telegram accepted the alert. Failures are logged, never retried.
    pub async fn send(&self, alert: &Alert) -> bool {
        self.console.send(alert);

        match self.telegram.send(alert).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Telegram notification failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConsoleNotifier, NotifierHub, TelegramNotifier};
    use crate::domain::Alert;
    use mockito::Server;

    #[tokio::test]
    async fn swallows_telegram_failure() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/bottoken/sendMessage")
            .with_status(500)
            .expect(1)
            .create_async()
            .await;

        let telegram = TelegramNotifier::new(&server.url(), "token", "1").unwrap();
        let hub = NotifierHub::new(ConsoleNotifier::new(), telegram);

        assert!(!hub.send(&Alert::new("t", "m")).await);
        mock.assert_async().await;
    }
}
