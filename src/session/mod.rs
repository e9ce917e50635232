//! Authenticated site session.
//!
//! Owns the cookied HTTP client. Cookies are loaded from disk at
//! construction (an unreadable jar falls back to an empty one) and written
//! back only after a successful login, so a failed run never clobbers a
//! working session.

pub mod cookies;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest_cookie_store::CookieStoreMutex;
use url::Url;

use crate::app::error::{HeraldError, Result};
use crate::config::Config;

/// Marker present on the list page only when the session is authenticated.
pub const LIST_MARKER: &str = "Welcome to Your Reading List";

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/";
const LOGIN_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(2);

pub struct Session {
    client: Client,
    jar: Arc<CookieStoreMutex>,
    config: Config,
}

impl Session {
    pub fn new(config: &Config) -> Result<Self> {
        let jar = Arc::new(CookieStoreMutex::new(cookies::load(&config.cookies_path)));

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .user_agent(USER_AGENT)
            .cookie_provider(jar.clone())
            .build()?;

        Ok(Self {
            client,
            jar,
            config: config.clone(),
        })
    }

    /// Fetch a page within the session, propagating HTTP errors.
    pub async fn get_page(&self, url: Url) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    /// Check the session against the list page, logging in when the
    /// authenticated marker is absent. Returns `Ok(false)` when login
    /// itself is rejected.
    pub async fn ensure_authenticated(&self) -> Result<bool> {
        let body = self.get_page(self.config.list_url()).await?;
        if body.contains(LIST_MARKER) {
            tracing::debug!("existing session is still valid");
            return Ok(true);
        }

        tracing::info!("not logged in, attempting login");
        self.login().await
    }

    /// Log in with a bounded number of attempts, persisting cookies on
    /// success. Credentials go in the request body, not the query string.
    pub async fn login(&self) -> Result<bool> {
        let marker = format!("Welcome back, {}", self.config.username);

        for attempt in 1..=LOGIN_ATTEMPTS {
            let body = self
                .client
                .post(self.config.login_url())
                .form(&[
                    ("act", "login"),
                    ("username", self.config.username.as_str()),
                    ("password", self.config.password.as_str()),
                ])
                .send()
                .await?
                .text()
                .await?;

            if body.contains(&marker) {
                tracing::info!("login successful");
                self.save_cookies()?;
                return Ok(true);
            }

            if attempt < LOGIN_ATTEMPTS {
                tracing::warn!(
                    "login rejected, retrying ({} attempts left)",
                    LOGIN_ATTEMPTS - attempt
                );
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }

        tracing::warn!("login failed after {} attempts", LOGIN_ATTEMPTS);
        Ok(false)
    }

    fn save_cookies(&self) -> Result<()> {
        let store = self
            .jar
            .lock()
            .map_err(|_| HeraldError::Cookie("cookie jar lock poisoned".into()))?;
        cookies::save(&store, &self.config.cookies_path)?;
        tracing::debug!("cookies written to {}", self.config.cookies_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_config(cookies_path: PathBuf) -> Config {
        Config {
            username: "alice".into(),
            password: "hunter2".into(),
            app_token: "app-token".into(),
            user_key: "user-key".into(),
            device: "Test".into(),
            base_url: Url::parse("https://www.mangaupdates.com").unwrap(),
            cookies_path,
        }
    }

    #[test]
    fn test_session_builds_without_cookie_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path().join("missing.json"));
        assert!(Session::new(&config).is_ok());
    }

    #[test]
    fn test_session_builds_with_corrupt_cookie_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.json");
        std::fs::write(&path, b"\x00\x01 definitely not json").unwrap();

        let config = test_config(path);
        assert!(Session::new(&config).is_ok());
    }
}
