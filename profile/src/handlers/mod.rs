//! Command handlers
//!
//! One handler per user command, registered once in `handle_action`. Each
//! returns the text to show; errors are shown by the caller and never end
//! the session.

pub mod feed;
pub mod profile;

pub use feed::{on_delete, on_refresh, on_submit};
pub use profile::{on_set_bio, on_set_photo, on_set_theme, show_bio, show_profile, show_theme};

use crate::app::{help_text, UserAction};
use crate::domain::ports::{KeyValueStorage, Notifier};
use crate::error::AppError;
use crate::AppState;

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Show(String),
    Quit,
}

/// Dispatch a parsed action to its handler
pub async fn handle_action<S, N>(
    state: &mut AppState<S, N>,
    action: UserAction,
) -> Result<Reply, AppError>
where
    S: KeyValueStorage,
    N: Notifier,
{
    let text = match action {
        UserAction::Post { text } => on_submit(state, &text).await?,
        UserAction::Delete { item_index } => on_delete(state, item_index).await?,
        UserAction::Feed => on_refresh(state).await?,
        UserAction::Profile => show_profile(state).await?,
        UserAction::ShowBio => show_bio(state).await?,
        UserAction::SetBio { text } => on_set_bio(state, &text).await?,
        UserAction::ShowTheme => show_theme(state).await?,
        UserAction::SetTheme(choice) => on_set_theme(state, choice).await?,
        UserAction::SetPhoto { slot, path } => on_set_photo(state, slot, &path).await?,
        UserAction::Help => help_text(),
        UserAction::Quit => return Ok(Reply::Quit),
    };
    Ok(Reply::Show(text))
}
