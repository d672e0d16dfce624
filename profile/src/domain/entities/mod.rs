//! Domain entities
//!
//! Pure domain models for the profile page and its feed.

pub mod post;
pub mod profile;
pub mod theme;

pub use post::{sort_newest_first, Post, Timestamp, TWEETS_KEY};
pub use profile::{Author, PhotoSlot, Profile, BIO_KEY, DEFAULT_BIO};
pub use theme::{Theme, THEME_KEY};
