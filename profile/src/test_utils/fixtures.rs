//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::io::Cursor;
use std::sync::Arc;

use image::{ImageFormat, Rgb, RgbImage};

use super::mocks::{InMemoryStorage, RecordingNotifier};
use crate::config::Config;
use crate::domain::entities::profile::PLACEHOLDER_AVATAR;
use crate::domain::entities::{Author, Post, Timestamp};
use crate::feed::RenderContext;
use crate::AppState;

/// Parse an ISO 8601 instant, e.g. `2024-05-01T10:00:00.000Z`
pub fn ts(iso: &str) -> Timestamp {
    iso.parse().unwrap()
}

/// Create a test post stamped now
pub fn test_post(content: &str) -> Post {
    Post::new(content, Timestamp::now())
}

/// Create a test post with a fixed timestamp
pub fn test_post_at(content: &str, iso: &str) -> Post {
    Post::new(content, ts(iso))
}

pub fn test_author() -> Author {
    Author {
        name: "Ana Pérez".to_string(),
        handle: "@ana".to_string(),
        avatar: PLACEHOLDER_AVATAR.to_string(),
    }
}

/// Config for "Ana Pérez" with a light system theme and UTC times
pub fn test_config() -> Config {
    Config {
        profile_name: "Ana Pérez".to_string(),
        profile_handle: "@ana".to_string(),
        ..Config::default()
    }
}

pub fn test_render_context() -> RenderContext {
    RenderContext::new(test_author(), 0)
}

/// A `width` x `height` PNG with a horizontal gradient
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    buf.into_inner()
}

/// App state over `storage`, with the feed already loaded
pub async fn test_state(
    storage: InMemoryStorage,
) -> (
    AppState<InMemoryStorage, RecordingNotifier>,
    Arc<InMemoryStorage>,
    Arc<RecordingNotifier>,
) {
    let storage = Arc::new(storage);
    let notifier = Arc::new(RecordingNotifier::new());
    let state = AppState::new(test_config(), storage.clone(), notifier.clone()).await;
    (state, storage, notifier)
}
