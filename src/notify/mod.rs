//! Push-notification delivery.

use async_trait::async_trait;
use reqwest::Client;

use crate::app::error::{HeraldError, Result};
use crate::config::Config;

/// Pushover messages endpoint.
const PUSHOVER_URL: &str = "https://api.pushover.net/1/messages.json";

/// Outbound push-notification channel.
#[async_trait]
pub trait Notifier {
    async fn send(&self, title: &str, message: &str) -> Result<()>;
}

/// Pushover-backed notifier. One POST per message, no retry; transport
/// failures and rejections surface as [`HeraldError::Notify`].
pub struct PushoverNotifier {
    client: Client,
    token: String,
    user: String,
}

impl PushoverNotifier {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            token: config.app_token.clone(),
            user: config.user_key.clone(),
        }
    }
}

#[async_trait]
impl Notifier for PushoverNotifier {
    async fn send(&self, title: &str, message: &str) -> Result<()> {
        let response = self
            .client
            .post(PUSHOVER_URL)
            .form(&[
                ("title", title),
                ("token", self.token.as_str()),
                ("user", self.user.as_str()),
                ("message", message),
            ])
            .send()
            .await
            .map_err(|e| HeraldError::Notify(format!("pushover request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(HeraldError::Notify(format!(
                "pushover rejected the message: HTTP {}",
                response.status()
            )));
        }

        tracing::debug!("notification delivered");
        Ok(())
    }
}
