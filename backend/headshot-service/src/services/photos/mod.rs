//! Roster photo pipeline: resolve candidate locations, fetch with season
//! fallback, normalize to square thumbnails, and package archives.

pub mod archive;
pub mod batch;
pub mod fetcher;
pub mod processor;
pub mod resolver;

pub use archive::{archive_folder, build_archive, sanitize_name};
pub use batch::{run_batch, BatchOutcome, PhotoEntry, PhotoFailure, PlayerPhotoSource};
pub use fetcher::ImageFetcher;
pub use processor::{Thumbnail, ThumbnailConfig, ThumbnailProcessor};

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Result;

/// The production photo pipeline: resolve, fetch with fallback, transform
pub struct HeadshotPipeline {
    fetcher: ImageFetcher,
    processor: Arc<ThumbnailProcessor>,
    image_base_url: String,
}

impl HeadshotPipeline {
    pub fn new(
        fetcher: ImageFetcher,
        processor: ThumbnailProcessor,
        image_base_url: String,
    ) -> Self {
        Self {
            fetcher,
            processor: Arc::new(processor),
            image_base_url,
        }
    }
}

#[async_trait]
impl PlayerPhotoSource for HeadshotPipeline {
    async fn player_photo(&self, team_code: &str, player_id: &str) -> Result<Bytes> {
        let urls = resolver::candidate_urls(&self.image_base_url, team_code, player_id);
        let raw = self.fetcher.fetch_first(&urls).await?;
        let thumbnail = self.processor.clone().generate_async(raw).await?;
        Ok(thumbnail.data)
    }
}
