//! Profile handlers
//!
//! Bio, theme and photo commands.

use std::path::Path;

use crate::app::ThemeChoice;
use crate::domain::entities::PhotoSlot;
use crate::domain::ports::{KeyValueStorage, Notifier};
use crate::error::{AppError, ImageError};
use crate::feed::{render_profile, RenderContext};
use crate::AppState;

/// `profile`
pub async fn show_profile<S, N>(state: &mut AppState<S, N>) -> Result<String, AppError>
where
    S: KeyValueStorage,
    N: Notifier,
{
    let profile = state.profile_service.profile().await;
    let theme = state.theme_service.resolve().await;
    Ok(render_profile(&profile, theme))
}

/// `bio`
pub async fn show_bio<S, N>(state: &mut AppState<S, N>) -> Result<String, AppError>
where
    S: KeyValueStorage,
    N: Notifier,
{
    Ok(state.profile_service.bio().await)
}

/// `bio set <text>`
pub async fn on_set_bio<S, N>(state: &mut AppState<S, N>, text: &str) -> Result<String, AppError>
where
    S: KeyValueStorage,
    N: Notifier,
{
    state.profile_service.set_bio(text).await?;
    Ok(format!("Biografía actualizada:\n{}", state.profile_service.bio().await))
}

/// `theme`
pub async fn show_theme<S, N>(state: &mut AppState<S, N>) -> Result<String, AppError>
where
    S: KeyValueStorage,
    N: Notifier,
{
    Ok(state.theme_service.resolve().await.label().to_string())
}

/// `theme dark|light|toggle`
pub async fn on_set_theme<S, N>(
    state: &mut AppState<S, N>,
    choice: ThemeChoice,
) -> Result<String, AppError>
where
    S: KeyValueStorage,
    N: Notifier,
{
    let theme = match choice {
        ThemeChoice::Set(theme) => state.theme_service.set(theme).await?,
        ThemeChoice::Toggle => state.theme_service.toggle().await?,
    };
    Ok(theme.label().to_string())
}

/// `photo <profile|cover> <path>`
pub async fn on_set_photo<S, N>(
    state: &mut AppState<S, N>,
    slot: PhotoSlot,
    path: &Path,
) -> Result<String, AppError>
where
    S: KeyValueStorage,
    N: Notifier,
{
    let bytes = tokio::fs::read(path).await.map_err(ImageError::Io)?;
    let resized = state.profile_service.set_photo(slot, bytes).await?;

    if slot == PhotoSlot::ProfilePic {
        // posts show the avatar too
        let profile = state.profile_service.profile().await;
        state.feed_service.set_render_context(RenderContext::new(
            profile.author(),
            state.config.utc_offset_minutes,
        ));
    }

    let what = match slot {
        PhotoSlot::ProfilePic => "Foto de perfil",
        PhotoSlot::CoverPhoto => "Foto de portada",
    };
    Ok(format!(
        "{} actualizada ({}x{}, {} bytes).",
        what,
        resized.width,
        resized.height,
        resized.data_url.len()
    ))
}
