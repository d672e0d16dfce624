//! Feed handlers
//!
//! Compose, delete and reload. Each answers with the redrawn feed.

use crate::app::{DeleteOutcome, SubmitOutcome};
use crate::domain::ports::{KeyValueStorage, Notifier};
use crate::error::AppError;
use crate::feed::render_feed;
use crate::AppState;

const NOTHING_TO_POST: &str = "Nada que publicar: escribe algo primero.";

/// `post <text>`
pub async fn on_submit<S, N>(state: &mut AppState<S, N>, text: &str) -> Result<String, AppError>
where
    S: KeyValueStorage,
    N: Notifier,
{
    match state.feed_service.submit(text).await {
        SubmitOutcome::Ignored => Ok(NOTHING_TO_POST.to_string()),
        SubmitOutcome::Posted { .. } => Ok(render_feed(&state.feed_service.units())),
    }
}

/// `delete N`
pub async fn on_delete<S, N>(
    state: &mut AppState<S, N>,
    item_index: usize,
) -> Result<String, AppError>
where
    S: KeyValueStorage,
    N: Notifier,
{
    let id = state.feed_service.unit_at(item_index).ok_or_else(|| {
        AppError::NotFound(format!("Post at index {} not found", item_index + 1))
    })?;

    match state.feed_service.delete(id).await {
        DeleteOutcome::Deleted { .. } => Ok(render_feed(&state.feed_service.units())),
        DeleteOutcome::NotFound => Err(AppError::NotFound(format!("Post {} not found", id))),
    }
}

/// `feed`
pub async fn on_refresh<S, N>(state: &mut AppState<S, N>) -> Result<String, AppError>
where
    S: KeyValueStorage,
    N: Notifier,
{
    state.feed_service.start().await;
    Ok(render_feed(&state.feed_service.units()))
}
