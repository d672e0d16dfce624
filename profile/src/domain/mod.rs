//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Posts, theme and profile models
//! - `ports`: Trait definitions for storage and user notification

pub mod entities;
pub mod ports;
