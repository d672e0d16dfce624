//! Theme service
//!
//! Remembers the light/dark choice. Without a stored choice the system
//! color-scheme preference decides.

use std::sync::Arc;

use crate::domain::entities::{Theme, THEME_KEY};
use crate::domain::ports::KeyValueStorage;
use crate::error::StorageError;

pub struct ThemeService<S>
where
    S: KeyValueStorage,
{
    storage: Arc<S>,
    prefers_dark: bool,
}

impl<S> ThemeService<S>
where
    S: KeyValueStorage,
{
    pub fn new(storage: Arc<S>, prefers_dark: bool) -> Self {
        Self {
            storage,
            prefers_dark,
        }
    }

    /// The stored theme, or the system preference when none is usable
    pub async fn resolve(&self) -> Theme {
        let fallback = Theme::from_system(self.prefers_dark);
        match self.storage.get(THEME_KEY).await {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("Ignoring stored theme: {}", e);
                fallback
            }),
            Ok(None) => fallback,
            Err(e) => {
                tracing::warn!("Failed to read theme: {}", e);
                fallback
            }
        }
    }

    pub async fn set(&self, theme: Theme) -> Result<Theme, StorageError> {
        self.storage.set(THEME_KEY, &theme.to_string()).await?;
        tracing::info!(%theme, "Theme saved");
        Ok(theme)
    }

    /// Flip between light and dark and remember the result
    pub async fn toggle(&self) -> Result<Theme, StorageError> {
        let next = self.resolve().await.toggled();
        self.set(next).await
    }
}
