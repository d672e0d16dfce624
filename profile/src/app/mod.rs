//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the renderer.

pub mod action_parser;
pub mod feed_service;
pub mod feed_store;
pub mod image_resizer;
pub mod profile_service;
pub mod theme_service;

pub use action_parser::{help_text, parse_action, ThemeChoice, UserAction};
pub use feed_service::{DeleteOutcome, FeedService, SubmitOutcome};
pub use feed_store::FeedStore;
pub use image_resizer::{ImageResizer, ResizedImage};
pub use profile_service::ProfileService;
pub use theme_service::ThemeService;
