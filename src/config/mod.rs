//! Process configuration.
//!
//! Everything is read from the environment exactly once, in `main`, and
//! passed into the components by reference. Credentials are required;
//! the site base URL, cookie jar path, and notification title have
//! defaults and exist mostly so tests and local runs can redirect them.

use std::path::PathBuf;

use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://www.mangaupdates.com";
pub const DEFAULT_COOKIES_PATH: &str = "data/cookies.json";
pub const DEFAULT_DEVICE: &str = "Manga Updates";

#[derive(Debug, Clone)]
pub struct Config {
    /// Site account name, also matched against the login welcome banner.
    pub username: String,
    pub password: String,
    /// Pushover application token.
    pub app_token: String,
    /// Pushover user key.
    pub user_key: String,
    /// Title shown on the push notification.
    pub device: String,
    pub base_url: Url,
    pub cookies_path: PathBuf,
}

impl Config {
    /// Read configuration from the environment, failing fast with every
    /// missing required variable named at once.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut required = |name: &'static str| match lookup(name) {
            Some(value) if !value.is_empty() => value,
            _ => {
                missing.push(name);
                String::new()
            }
        };

        let username = required("MU_USERNAME");
        let password = required("MU_PASSWORD");
        let app_token = required("APP_TOKEN");
        let user_key = required("USER_KEY");

        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing.join(", ")));
        }

        let raw_base = lookup("MU_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_base).map_err(|source| ConfigError::InvalidBaseUrl {
            url: raw_base.clone(),
            source,
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::BaseUrlNotABase(raw_base));
        }

        Ok(Self {
            username,
            password,
            app_token,
            user_key,
            device: lookup("MU_DEVICE").unwrap_or_else(|| DEFAULT_DEVICE.to_string()),
            base_url,
            cookies_path: lookup("MU_COOKIES")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_COOKIES_PATH)),
        })
    }

    pub fn login_url(&self) -> Url {
        self.endpoint("login.html")
    }

    pub fn list_url(&self) -> Url {
        self.endpoint("mylist.html")
    }

    pub fn feed_url(&self) -> Url {
        self.endpoint("rss.php")
    }

    fn endpoint(&self, path: &str) -> Url {
        self.base_url
            .join(path)
            .expect("base URL accepts path segments")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {0}")]
    Missing(String),

    #[error("invalid MU_BASE_URL `{url}`: {source}")]
    InvalidBaseUrl { url: String, source: url::ParseError },

    #[error("MU_BASE_URL `{0}` cannot serve as a base URL")]
    BaseUrlNotABase(String),
}
