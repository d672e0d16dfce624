//! Feed store
//!
//! Loads and persists the full list of posts in the `tweets` storage slot.
//! Storage order carries no meaning; `load` always hands back newest first.

use std::sync::Arc;

use crate::domain::entities::{sort_newest_first, Post, TWEETS_KEY};
use crate::domain::ports::KeyValueStorage;
use crate::error::{FeedError, StorageError};
use crate::feed::truncate;

/// Owner of the persisted post sequence
pub struct FeedStore<S>
where
    S: KeyValueStorage,
{
    storage: Arc<S>,
}

impl<S> FeedStore<S>
where
    S: KeyValueStorage,
{
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Load all posts, newest first.
    ///
    /// Any failure is logged and yields an empty feed. Malformed data is left
    /// in storage as it was.
    pub async fn load(&self) -> Vec<Post> {
        match self.try_load().await {
            Ok(posts) => posts,
            Err(e) => {
                tracing::error!("Error loading tweets from storage: {}", e);
                Vec::new()
            }
        }
    }

    /// Load all posts, newest first, reporting why loading failed
    pub async fn try_load(&self) -> Result<Vec<Post>, FeedError> {
        let Some(raw) = self.storage.get(TWEETS_KEY).await? else {
            tracing::debug!("No saved tweets found in storage");
            return Ok(Vec::new());
        };

        tracing::debug!(preview = %truncate(&raw, 100), "Raw tweets from storage");
        let mut posts: Vec<Post> = serde_json::from_str(&raw)?;
        sort_newest_first(&mut posts);
        tracing::debug!(count = posts.len(), "Parsed tweets from storage");

        Ok(posts)
    }

    /// Overwrite the stored sequence with `posts`
    pub async fn save(&self, posts: &[Post]) -> Result<(), StorageError> {
        let body =
            serde_json::to_string(posts).map_err(|e| StorageError::Encode(e.to_string()))?;
        tracing::debug!(bytes = body.len(), count = posts.len(), "Saving tweets");

        self.storage.set(TWEETS_KEY, &body).await?;
        tracing::debug!(preview = %truncate(&body, 100), "Tweets saved to storage");
        Ok(())
    }
}
