//! Feed module
//!
//! Projection of posts and the profile into terminal screens.

pub mod renderer;

pub use renderer::{
    render_feed, render_post, render_profile, truncate, RenderContext, UnitId, VisualUnit,
};
