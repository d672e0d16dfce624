//! Profile Feed
//!
//! A single-user profile page for the terminal: theme switch, editable bio,
//! profile and cover photos, and a local feed of posts, all kept in a
//! durable key-value store.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{FileKeyValueStorage, TerminalNotifier};
use app::{parse_action, FeedService, ProfileService, ThemeService};
use config::Config;
use domain::ports::{KeyValueStorage, Notifier};
use feed::{render_feed, render_profile, RenderContext};
use handlers::{handle_action, Reply};

/// Application state shared across all handlers
pub struct AppState<S, N>
where
    S: KeyValueStorage,
    N: Notifier,
{
    pub feed_service: FeedService<S, N>,
    pub theme_service: ThemeService<S>,
    pub profile_service: ProfileService<S>,
    pub config: Config,
}

impl<S, N> AppState<S, N>
where
    S: KeyValueStorage,
    N: Notifier,
{
    /// Wire services over one storage and load the feed
    pub async fn new(config: Config, storage: Arc<S>, notifier: Arc<N>) -> Self {
        let profile_service = ProfileService::new(storage.clone(), &config);
        let theme_service = ThemeService::new(storage.clone(), config.prefers_dark);

        let profile = profile_service.profile().await;
        let ctx = RenderContext::new(profile.author(), config.utc_offset_minutes);
        let mut feed_service = FeedService::new(storage, notifier, ctx);
        feed_service.start().await;

        Self {
            feed_service,
            theme_service,
            profile_service,
            config,
        }
    }

    /// Profile header followed by the feed
    pub async fn home_screen(&self) -> String {
        let profile = self.profile_service.profile().await;
        let theme = self.theme_service.resolve().await;
        format!(
            "{}\n{}",
            render_profile(&profile, theme),
            render_feed(&self.feed_service.units())
        )
    }
}

fn prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to stderr (stdout is the UI)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,profile_feed=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting profile feed...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!(path = %config.storage_path().display(), "Using storage file");

    // Create adapters
    let storage = Arc::new(FileKeyValueStorage::new(
        config.storage_path(),
        config.storage_quota_bytes,
    ));
    let notifier = Arc::new(TerminalNotifier);

    let theme = ThemeService::new(storage.clone(), config.prefers_dark)
        .resolve()
        .await;
    tracing::info!(%theme, "Theme applied");

    let mut state = AppState::new(config, storage, notifier).await;
    println!("{}", state.home_screen().await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            prompt()?;
            continue;
        }

        let reply = match parse_action(&line) {
            Ok(action) => handle_action(&mut state, action).await,
            Err(e) => Err(e.into()),
        };

        match reply {
            Ok(Reply::Show(text)) => println!("{}", text),
            Ok(Reply::Quit) => break,
            Err(e) => {
                tracing::debug!("Command failed: {}", e);
                println!("Error: {}", e);
            }
        }
        prompt()?;
    }

    tracing::info!("Bye");
    Ok(())
}
