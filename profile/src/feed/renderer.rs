//! Feed renderer
//!
//! Turns posts and the profile into what the terminal shows. Everything here
//! is a pure function of its inputs.

use chrono::{FixedOffset, Offset, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::{Author, Profile, Theme, Timestamp};

/// Identifies one visual unit for as long as it is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct UnitId(pub Uuid);

impl UnitId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UnitId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything a post's look depends on besides the post itself
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub author: Author,
    /// Offset applied to timestamps before formatting
    pub offset: FixedOffset,
}

impl RenderContext {
    pub fn new(author: Author, utc_offset_minutes: i32) -> Self {
        let offset = FixedOffset::east_opt(utc_offset_minutes.saturating_mul(60))
            .unwrap_or_else(|| {
                tracing::warn!(
                    "UTC offset of {} minutes is out of range, using UTC",
                    utc_offset_minutes
                );
                utc()
            });
        Self { author, offset }
    }
}

fn utc() -> FixedOffset {
    Utc.fix()
}

/// On-screen representation of one post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualUnit {
    pub id: UnitId,
    pub content: String,
    /// The post this unit stands for
    pub timestamp: Timestamp,
    pub author_name: String,
    pub author_handle: String,
    pub avatar: String,
    pub time_label: String,
}

impl VisualUnit {
    /// Same unit drawn against a new context, keeping its identity
    pub fn rerendered(&self, ctx: &RenderContext) -> Self {
        Self {
            id: self.id,
            ..render_post(&self.content, self.timestamp, ctx)
        }
    }
}

/// Build the visual unit for a post
pub fn render_post(content: &str, timestamp: Timestamp, ctx: &RenderContext) -> VisualUnit {
    VisualUnit {
        id: UnitId::new(),
        content: content.to_string(),
        timestamp,
        author_name: ctx.author.name.clone(),
        author_handle: ctx.author.handle.clone(),
        avatar: ctx.author.avatar.clone(),
        time_label: time_label(timestamp, &ctx.offset),
    }
}

/// ` • 1/5/2024 10:00` style date and two-digit hour:minute
pub fn time_label(timestamp: Timestamp, offset: &FixedOffset) -> String {
    let local = timestamp.as_datetime().with_timezone(offset);
    format!(" • {}", local.format("%-d/%-m/%Y %H:%M"))
}

fn render_unit(index: usize, unit: &VisualUnit) -> String {
    let mut buf = format!(
        "[{}] {} {}{}\n",
        index, unit.author_name, unit.author_handle, unit.time_label
    );
    for line in unit.content.lines() {
        buf.push_str(&format!("    {}\n", line));
    }
    buf
}

/// Render the visible feed, newest first, numbered for `delete N`
pub fn render_feed(units: &[VisualUnit]) -> String {
    let mut buf = String::new();

    buf.push_str("## Publicaciones\n\n");

    if units.is_empty() {
        buf.push_str("_No hay publicaciones todavía._\n\n");
    } else {
        for (i, unit) in units.iter().enumerate() {
            buf.push_str(&render_unit(i + 1, unit));
            buf.push('\n');
        }
    }

    buf.push_str("---\n");
    buf.push_str("`post <texto>` para publicar, `delete N` para eliminar, `help` para más.\n");

    buf
}

/// Render the profile header
pub fn render_profile(profile: &Profile, theme: Theme) -> String {
    let mut buf = String::new();

    buf.push_str(&format!("# {}\n", profile.name));
    buf.push_str(&format!("{}\n\n", profile.handle));
    buf.push_str(&format!("{}\n\n", profile.bio));

    buf.push_str(&format!(
        "- **Foto de perfil:** {}\n",
        describe_photo(profile.profile_pic.as_deref())
    ));
    buf.push_str(&format!(
        "- **Foto de portada:** {}\n",
        describe_photo(profile.cover_photo.as_deref())
    ));
    buf.push_str(&format!("- **Tema:** {}\n", theme.label()));

    buf
}

fn describe_photo(data_url: Option<&str>) -> String {
    match data_url {
        Some(url) => format!("{} ({} bytes)", truncate(url, 32), url.len()),
        None => "sin foto".to_string(),
    }
}

/// Truncate a string with ellipsis, counting characters
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
