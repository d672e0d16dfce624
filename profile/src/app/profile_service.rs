//! Profile service
//!
//! Bio and photo slots of the profile header. Each slot is read and written
//! on its own; nothing here touches the feed.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::entities::{PhotoSlot, Profile, BIO_KEY, DEFAULT_BIO};
use crate::domain::ports::KeyValueStorage;
use crate::error::{AppError, StorageError};

use super::{ImageResizer, ResizedImage};

pub struct ProfileService<S>
where
    S: KeyValueStorage,
{
    storage: Arc<S>,
    resizer: ImageResizer,
    name: String,
    handle: String,
}

impl<S> ProfileService<S>
where
    S: KeyValueStorage,
{
    pub fn new(storage: Arc<S>, config: &Config) -> Self {
        Self {
            storage,
            resizer: ImageResizer::new(config.image_max_width, config.image_jpeg_quality),
            name: config.profile_name.clone(),
            handle: config.profile_handle.clone(),
        }
    }

    async fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", key, e);
                None
            }
        }
    }

    /// Stored bio, or the default one when nothing (or nothing but an empty
    /// string) was saved
    pub async fn bio(&self) -> String {
        self.read(BIO_KEY)
            .await
            .filter(|bio| !bio.is_empty())
            .unwrap_or_else(|| DEFAULT_BIO.to_string())
    }

    /// Save the bio exactly as typed
    pub async fn set_bio(&self, text: &str) -> Result<(), StorageError> {
        self.storage.set(BIO_KEY, text).await?;
        tracing::info!(chars = text.chars().count(), "Bio saved");
        Ok(())
    }

    pub async fn photo(&self, slot: PhotoSlot) -> Option<String> {
        let photo = self.read(slot.storage_key()).await;
        match &photo {
            Some(_) => tracing::debug!(%slot, "Photo loaded from storage"),
            None => tracing::debug!(%slot, "No photo found in storage"),
        }
        photo
    }

    /// Resize an uploaded image and store it in `slot`
    pub async fn set_photo(
        &self,
        slot: PhotoSlot,
        bytes: Vec<u8>,
    ) -> Result<ResizedImage, AppError> {
        let resized = self.resizer.to_data_url_async(bytes).await?;
        self.storage
            .set(slot.storage_key(), &resized.data_url)
            .await?;
        tracing::info!(
            key = slot.storage_key(),
            length = resized.data_url.len(),
            "Photo saved to storage"
        );
        Ok(resized)
    }

    pub async fn profile(&self) -> Profile {
        Profile {
            name: self.name.clone(),
            handle: self.handle.clone(),
            bio: self.bio().await,
            profile_pic: self.photo(PhotoSlot::ProfilePic).await,
            cover_photo: self.photo(PhotoSlot::CoverPhoto).await,
        }
    }
}
