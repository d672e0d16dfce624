//! Image resizer
//!
//! Shrinks uploaded photos to a maximum width and re-encodes them as JPEG
//! data URLs small enough to live in key-value storage.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

use crate::error::ImageError;

const DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

/// A resized photo ready to store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizedImage {
    pub data_url: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct ImageResizer {
    max_width: u32,
    quality: u8,
}

impl ImageResizer {
    pub fn new(max_width: u32, quality: u8) -> Self {
        Self {
            max_width: max_width.max(1),
            quality: quality.clamp(1, 100),
        }
    }

    /// Target size for an image of `width` x `height`.
    ///
    /// Wider images are scaled down to `max_width` with the height scaled by
    /// the same factor; narrower ones keep their size.
    pub fn target_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        if width <= self.max_width {
            return (width, height);
        }
        let scaled = (height as u64 * self.max_width as u64 / width as u64) as u32;
        (self.max_width, scaled.max(1))
    }

    pub fn resize(&self, img: &DynamicImage) -> DynamicImage {
        let (width, height) = img.dimensions();
        let (new_width, new_height) = self.target_dimensions(width, height);
        if (new_width, new_height) == (width, height) {
            return img.clone();
        }
        img.resize_exact(new_width, new_height, FilterType::Triangle)
    }

    fn encode_jpeg(&self, img: &DynamicImage) -> Result<Vec<u8>, ImageError> {
        // JPEG has no alpha channel
        let rgb = img.to_rgb8();
        let mut buf = Cursor::new(Vec::new());
        JpegEncoder::new_with_quality(&mut buf, self.quality)
            .encode_image(&rgb)
            .map_err(|e| ImageError::Encode(e.to_string()))?;
        Ok(buf.into_inner())
    }

    /// Decode `bytes`, resize and return a JPEG data URL
    pub fn to_data_url(&self, bytes: &[u8]) -> Result<ResizedImage, ImageError> {
        let img = image::load_from_memory(bytes)?;
        let (orig_w, orig_h) = img.dimensions();

        let resized = self.resize(&img);
        let (width, height) = resized.dimensions();
        let jpeg = self.encode_jpeg(&resized)?;

        tracing::debug!(
            original_width = orig_w,
            original_height = orig_h,
            width,
            height,
            jpeg_bytes = jpeg.len(),
            "Image resized"
        );

        Ok(ResizedImage {
            data_url: format!("{}{}", DATA_URL_PREFIX, STANDARD.encode(&jpeg)),
            width,
            height,
        })
    }

    /// Same as `to_data_url`, run on the blocking pool
    pub async fn to_data_url_async(&self, bytes: Vec<u8>) -> Result<ResizedImage, ImageError> {
        let resizer = *self;
        tokio::task::spawn_blocking(move || resizer.to_data_url(&bytes))
            .await
            .map_err(|e| ImageError::Encode(format!("resize task failed: {}", e)))?
    }
}

/// Raw bytes behind a data URL produced by `to_data_url`
#[cfg(test)]
pub fn decode_data_url(data_url: &str) -> Option<Vec<u8>> {
    let payload = data_url.strip_prefix(DATA_URL_PREFIX)?;
    STANDARD.decode(payload).ok()
}
