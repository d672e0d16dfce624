//! Feed service
//!
//! The command side of the feed: composing and deleting posts. Keeps the
//! ordered list of visible posts, newest first, alongside the visual unit
//! drawn for each. Every change re-persists that whole list; when persisting
//! fails the user is warned and the on-screen list stays as it is.

use std::sync::Arc;

use crate::domain::entities::{Post, Timestamp};
use crate::domain::ports::{KeyValueStorage, Notifier};
use crate::error::StorageError;
use crate::feed::{render_post, RenderContext, UnitId, VisualUnit};

use super::FeedStore;

/// Shown when a save hits the storage quota
pub const STORAGE_FULL_WARNING: &str = "¡Advertencia: El almacenamiento del navegador está lleno! No se pudieron guardar todos los tweets. Intenta eliminar publicaciones antiguas.";

/// A visible post and how it is drawn
#[derive(Debug, Clone)]
struct FeedEntry {
    post: Post,
    unit: VisualUnit,
}

/// Result of submitting composed text
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Blank text, nothing happened
    Ignored,
    /// The post is visible; `persisted` is false if saving failed
    Posted { unit: VisualUnit, persisted: bool },
}

/// Result of deleting a visual unit
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// No visible unit has this id
    NotFound,
    Deleted { post: Post, persisted: bool },
}

/// Service owning the visible feed
pub struct FeedService<S, N>
where
    S: KeyValueStorage,
    N: Notifier,
{
    store: FeedStore<S>,
    notifier: Arc<N>,
    ctx: RenderContext,
    entries: Vec<FeedEntry>,
}

impl<S, N> FeedService<S, N>
where
    S: KeyValueStorage,
    N: Notifier,
{
    pub fn new(storage: Arc<S>, notifier: Arc<N>, ctx: RenderContext) -> Self {
        Self {
            store: FeedStore::new(storage),
            notifier,
            ctx,
            entries: Vec::new(),
        }
    }

    /// Replace the visible list with what storage holds
    pub async fn start(&mut self) {
        let posts = self.store.load().await;
        tracing::info!(count = posts.len(), "Feed loaded");

        self.entries = posts
            .into_iter()
            .map(|post| FeedEntry {
                unit: render_post(&post.content, post.timestamp, &self.ctx),
                post,
            })
            .collect();
    }

    /// Publish `text` stamped with the current instant
    pub async fn submit(&mut self, text: &str) -> SubmitOutcome {
        self.submit_at(text, Timestamp::now()).await
    }

    /// Publish `text` stamped with `timestamp`
    pub async fn submit_at(&mut self, text: &str, timestamp: Timestamp) -> SubmitOutcome {
        if !can_submit(text) {
            tracing::debug!("Ignoring submit without content");
            return SubmitOutcome::Ignored;
        }

        let post = Post::new(text.trim(), timestamp);

        let unit = render_post(&post.content, post.timestamp, &self.ctx);
        self.entries.insert(
            0,
            FeedEntry {
                post,
                unit: unit.clone(),
            },
        );
        tracing::info!(unit = %unit.id, "Post published");

        let persisted = self.persist().await;
        SubmitOutcome::Posted { unit, persisted }
    }

    /// Remove exactly the unit with `id` and persist the rest
    pub async fn delete(&mut self, id: UnitId) -> DeleteOutcome {
        let Some(position) = self.entries.iter().position(|e| e.unit.id == id) else {
            tracing::warn!(unit = %id, "Delete for a unit that is not visible");
            return DeleteOutcome::NotFound;
        };

        let removed = self.entries.remove(position);
        tracing::info!(unit = %id, "Post deleted");

        let persisted = self.persist().await;
        DeleteOutcome::Deleted {
            post: removed.post,
            persisted,
        }
    }

    /// Visible units, newest first
    pub fn units(&self) -> Vec<VisualUnit> {
        self.entries.iter().map(|e| e.unit.clone()).collect()
    }

    /// Visible posts, newest first
    pub fn posts(&self) -> Vec<Post> {
        self.entries.iter().map(|e| e.post.clone()).collect()
    }

    /// Id of the unit shown at `index` (0-based)
    pub fn unit_at(&self, index: usize) -> Option<UnitId> {
        self.entries.get(index).map(|e| e.unit.id)
    }

    /// Redraw every unit against a new context, e.g. after the avatar changed
    pub fn set_render_context(&mut self, ctx: RenderContext) {
        for entry in &mut self.entries {
            entry.unit = entry.unit.rerendered(&ctx);
        }
        self.ctx = ctx;
    }

    async fn persist(&self) -> bool {
        match self.store.save(&self.posts()).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Error saving tweets to storage: {}", e);
                self.notifier.warn(&save_warning(&e));
                false
            }
        }
    }
}

/// Whether `text` would produce a post; drives the compose button's state
pub fn can_submit(text: &str) -> bool {
    !text.trim().is_empty()
}

fn save_warning(e: &StorageError) -> String {
    if e.is_quota_exceeded() {
        STORAGE_FULL_WARNING.to_string()
    } else {
        format!("No se pudieron guardar los tweets en el almacenamiento: {}", e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TWEETS_KEY;
    use crate::test_utils::{test_render_context, ts, InMemoryStorage, RecordingNotifier};

    fn create_service(
        storage: InMemoryStorage,
    ) -> (
        FeedService<InMemoryStorage, RecordingNotifier>,
        Arc<InMemoryStorage>,
        Arc<RecordingNotifier>,
    ) {
        let storage = Arc::new(storage);
        let notifier = Arc::new(RecordingNotifier::new());
        let service = FeedService::new(storage.clone(), notifier.clone(), test_render_context());
        (service, storage, notifier)
    }

    fn stored_contents(storage: &InMemoryStorage) -> Vec<String> {
        let raw = storage.raw(TWEETS_KEY).unwrap_or_else(|| "[]".to_string());
        let posts: Vec<Post> = serde_json::from_str(&raw).unwrap();
        posts.into_iter().map(|p| p.content).collect()
    }

    #[test]
    fn can_submit_requires_non_blank_text() {
        assert!(!can_submit(""));
        assert!(!can_submit(" \n "));
        assert!(can_submit(" a "));
    }

    #[tokio::test]
    async fn submit_blank_is_noop() {
        let (mut service, storage, _) = create_service(InMemoryStorage::new());
        service.start().await;

        assert_eq!(service.submit("").await, SubmitOutcome::Ignored);
        assert_eq!(service.submit("   ").await, SubmitOutcome::Ignored);
        assert!(service.units().is_empty());
        assert_eq!(storage.raw(TWEETS_KEY), None);
        assert_eq!(storage.write_count(), 0);
    }

    #[tokio::test]
    async fn submit_trims_prepends_and_saves() {
        let (mut service, storage, notifier) = create_service(InMemoryStorage::new());
        service.start().await;

        service
            .submit_at("Hello", ts("2024-05-01T10:00:00.000Z"))
            .await;
        let outcome = service
            .submit_at("  World  ", ts("2024-05-01T11:00:00.000Z"))
            .await;

        match outcome {
            SubmitOutcome::Posted { unit, persisted } => {
                assert!(persisted);
                assert_eq!(unit.content, "World");
                assert_eq!(service.units()[0].id, unit.id);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(stored_contents(&storage), vec!["World", "Hello"]);
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn submitted_posts_have_empty_images() {
        let (mut service, _, _) = create_service(InMemoryStorage::new());
        service.submit("hola").await;

        assert!(service.posts()[0].images.is_empty());
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_duplicate() {
        let (mut service, storage, _) = create_service(InMemoryStorage::new());
        let stamp = ts("2024-05-01T10:00:00.000Z");
        service.submit_at("same", stamp).await;
        service.submit_at("same", stamp).await;
        service.submit_at("other", ts("2024-05-01T11:00:00.000Z")).await;

        let target = service.unit_at(1).unwrap();
        let outcome = service.delete(target).await;

        assert!(matches!(outcome, DeleteOutcome::Deleted { persisted: true, .. }));
        assert_eq!(service.units().len(), 2);
        assert!(service.units().iter().all(|u| u.id != target));
        assert_eq!(stored_contents(&storage), vec!["other", "same"]);
    }

    #[tokio::test]
    async fn delete_unknown_unit_is_not_found() {
        let (mut service, storage, _) = create_service(InMemoryStorage::new());
        service.submit("hola").await;
        let writes = storage.write_count();

        assert_eq!(service.delete(UnitId::new()).await, DeleteOutcome::NotFound);
        assert_eq!(storage.write_count(), writes);
    }

    #[tokio::test]
    async fn start_renders_stored_posts_newest_first() {
        let raw = r#"[
            {"content":"Hello","images":[],"timestamp":"2024-05-01T10:00:00.000Z"},
            {"content":"World","images":[],"timestamp":"2024-05-01T11:00:00.000Z"}
        ]"#;
        let (mut service, _, _) =
            create_service(InMemoryStorage::new().with_value(TWEETS_KEY, raw));
        service.start().await;

        let units = service.units();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].content, "World");
        assert_eq!(units[1].content, "Hello");
    }

    #[tokio::test]
    async fn quota_failure_warns_and_keeps_post_visible() {
        let (mut service, storage, notifier) =
            create_service(InMemoryStorage::new().with_quota(32));
        service.start().await;

        let outcome = service.submit("this post will not fit in the quota").await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Posted {
                persisted: false,
                ..
            }
        ));
        assert_eq!(service.units().len(), 1);
        assert_eq!(storage.raw(TWEETS_KEY), None);

        let messages = notifier.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("almacenamiento"));
        assert_eq!(messages[0], STORAGE_FULL_WARNING);
    }

    #[tokio::test]
    async fn io_failure_warns_with_its_own_message() {
        let (mut service, _, notifier) = create_service(InMemoryStorage::new().failing_writes());

        service.submit("hola").await;

        let messages = notifier.messages();
        assert_eq!(messages.len(), 1);
        assert_ne!(messages[0], STORAGE_FULL_WARNING);
        assert!(messages[0].contains("almacenamiento"));
    }

    #[tokio::test]
    async fn set_render_context_redraws_in_place() {
        let (mut service, _, _) = create_service(InMemoryStorage::new());
        service.submit("hola").await;
        let before = service.units()[0].clone();

        let mut ctx = test_render_context();
        ctx.author.avatar = "data:image/jpeg;base64,CCCC".to_string();
        service.set_render_context(ctx);

        let after = &service.units()[0];
        assert_eq!(after.id, before.id);
        assert_eq!(after.avatar, "data:image/jpeg;base64,CCCC");
    }
}
