use std::time::Duration;

use reqwest::Client;

use crate::app::error::Result;
use crate::config::Config;
use crate::notify::PushoverNotifier;
use crate::session::Session;

pub struct AppContext {
    pub config: Config,
    pub session: Session,
    pub http: Client,
    pub notifier: PushoverNotifier,
}

impl AppContext {
    /// Wire the configuration into the components a run needs: the cookied
    /// site session, a plain client for the public surfaces, and the
    /// notifier. Nothing reads the environment past this point.
    pub fn new(config: Config) -> Result<Self> {
        let session = Session::new(&config)?;

        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .build()?;

        let notifier = PushoverNotifier::new(http.clone(), &config);

        Ok(Self {
            config,
            session,
            http,
            notifier,
        })
    }
}
