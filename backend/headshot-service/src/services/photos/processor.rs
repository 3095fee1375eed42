//! Thumbnail processor - normalizes headshots into square thumbnails
//!
//! Takes raw image bytes, crops the largest centered square, resizes it to a
//! fixed edge length, and encodes it as PNG so repeated runs over the same
//! input stay byte-identical.
//!
//! Uses `spawn_blocking` for CPU-intensive operations to avoid blocking the
//! async runtime.

use crate::error::{AppError, Result};
use bytes::Bytes;
use image::imageops::FilterType;
use image::{GenericImageView, ImageOutputFormat};
use std::io::Cursor;
use std::sync::Arc;
use tracing::debug;

/// Configuration for thumbnail generation
#[derive(Clone, Debug)]
pub struct ThumbnailConfig {
    /// Edge length of the square output in pixels
    pub size: u32,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self { size: 300 }
    }
}

/// Result of thumbnail generation
#[derive(Debug)]
pub struct Thumbnail {
    /// PNG-encoded pixel data
    pub data: Bytes,
    /// Edge length of the square output
    pub size: u32,
}

/// Centered square crop box for a W×H image, as (left, top, size).
///
/// `size = min(W, H)`; the origin rounds down, so odd remainders trim one
/// pixel more from the right/bottom edge. Always satisfies
/// `left + size <= W` and `top + size <= H`.
pub fn crop_box(width: u32, height: u32) -> (u32, u32, u32) {
    let size = width.min(height);
    let left = (width - size) / 2;
    let top = (height - size) / 2;
    (left, top, size)
}

/// Thumbnail processor
pub struct ThumbnailProcessor {
    config: ThumbnailConfig,
}

impl ThumbnailProcessor {
    /// Create a new processor with the given configuration
    pub fn new(config: ThumbnailConfig) -> Self {
        Self { config }
    }

    /// Create a processor with default configuration
    pub fn with_defaults() -> Self {
        Self::new(ThumbnailConfig::default())
    }

    /// Generate a square thumbnail from the given image data (blocking version)
    ///
    /// **Note:** This method performs CPU-intensive operations and should not
    /// be called directly from async code. Use `generate_async` instead.
    pub fn generate(&self, original_data: &[u8]) -> Result<Thumbnail> {
        let img = image::load_from_memory(original_data)
            .map_err(|e| AppError::DecodeError(format!("Failed to decode image: {e}")))?;

        let (orig_w, orig_h) = img.dimensions();
        let (left, top, size) = crop_box(orig_w, orig_h);

        debug!(
            original_width = orig_w,
            original_height = orig_h,
            left,
            top,
            size,
            "Cropping headshot to square"
        );

        let square = img.crop_imm(left, top, size, size);
        let resized = square.resize_exact(self.config.size, self.config.size, FilterType::Triangle);

        let data = self.encode_png(&resized)?;

        debug!(size = data.len(), edge = self.config.size, "Thumbnail generated");

        Ok(Thumbnail {
            data,
            size: self.config.size,
        })
    }

    /// Generate a thumbnail asynchronously using a blocking thread pool
    pub async fn generate_async(self: Arc<Self>, original_data: Bytes) -> Result<Thumbnail> {
        let processor = self.clone();

        tokio::task::spawn_blocking(move || processor.generate(&original_data))
            .await
            .map_err(|e| AppError::Internal(format!("Thumbnail task panicked: {e}")))?
    }

    /// Encode image as PNG (lossless, deterministic)
    fn encode_png(&self, img: &image::DynamicImage) -> Result<Bytes> {
        let mut buf = Vec::new();
        let mut cursor = Cursor::new(&mut buf);

        img.write_to(&mut cursor, ImageOutputFormat::Png)
            .map_err(|e| AppError::Internal(format!("Failed to encode PNG: {e}")))?;

        Ok(Bytes::from(buf))
    }
}
