//! # Herald
//!
//! A single-shot MangaUpdates release checker with push notifications.
//!
//! Herald logs in to MangaUpdates with a persisted cookie session, scrapes
//! the personal reading list and the public release feed, intersects the two
//! by series link, and pushes a digest of new chapters through Pushover. It
//! is meant to run under an external scheduler (cron, CI) and exit.
//!
//! ## Architecture
//!
//! ```text
//! Session → List Scraper ┐
//!                        ├→ Reconciler → Notifier
//!           Feed Scraper ┘
//! ```
//!
//! - [`session`]: cookied HTTP client with persisted jar and login
//! - [`scrape`]: the two markup-coupled adapters (list HTML, release RSS)
//! - [`reconcile`]: list/feed intersection and digest rendering
//! - [`notify`]: Pushover delivery
//!
//! ## Quick Start
//!
//! ```bash
//! export MU_USERNAME=... MU_PASSWORD=... APP_TOKEN=... USER_KEY=...
//!
//! # Check for new releases and send a notification
//! herald check
//!
//! # Same, but print the digest instead of sending it
//! herald check --dry-run
//!
//! # Inspect the two scraped surfaces
//! herald list
//! herald feed
//! ```

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires together all components:
/// session, plain HTTP client, notifier.
pub mod app;

/// Command-line interface using clap.
pub mod cli;

/// Process configuration, read once from the environment at startup.
pub mod config;

/// Core domain models.
///
/// - [`ListEntry`](domain::ListEntry): one tracked series on the reading list
/// - [`FeedEntry`](domain::FeedEntry): one release announcement from the feed
pub mod domain;

/// Pushover notification delivery.
pub mod notify;

/// List/feed intersection and digest rendering.
pub mod reconcile;

/// Scrapers for the two external document shapes.
///
/// Both are adapters over one site's markup; structural assumptions live
/// here and nowhere else.
pub mod scrape;

/// Authenticated HTTP session with a cookie jar persisted between runs.
pub mod session;
