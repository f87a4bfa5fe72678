//! Image decoding for gallery items

use crate::{GalleryError, MediaItem, MediaSource};
use image::{GenericImageView, ImageReader};
use rayon::prelude::*;
use std::path::Path;

/// Decoded RGBA8 pixels
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Decodes local gallery images, bounded to a maximum edge length
pub struct ImageLoader {
    max_edge: u32,
}

impl ImageLoader {
    pub fn new(max_edge: u32) -> Self {
        Self {
            max_edge: max_edge.max(1),
        }
    }

    /// Decode every item in parallel; failures become `None`
    pub fn load_all(&self, items: &[MediaItem]) -> Vec<Option<LoadedImage>> {
        items
            .par_iter()
            .map(|item| match self.load(item) {
                Ok(img) => Some(img),
                Err(e @ GalleryError::UnsupportedSource(_)) => {
                    tracing::debug!("Skipping {}: {}", item.url, e);
                    None
                }
                Err(e) => {
                    tracing::warn!("Failed to load {}: {}", item.url, e);
                    None
                }
            })
            .collect()
    }

    /// Decode a single item
    pub fn load(&self, item: &MediaItem) -> Result<LoadedImage, GalleryError> {
        match item.source() {
            MediaSource::Local(path) => self.load_path(&path),
            MediaSource::Remote(url) => Err(GalleryError::UnsupportedSource(url)),
        }
    }

    fn load_path(&self, path: &Path) -> Result<LoadedImage, GalleryError> {
        tracing::debug!("Loading image: {:?}", path);

        let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;

        let (w, h) = img.dimensions();
        let img = if w > self.max_edge || h > self.max_edge {
            img.thumbnail(self.max_edge, self.max_edge)
        } else {
            img
        };

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(LoadedImage {
            width,
            height,
            data: rgba.into_raw(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn write_png(dir: &Path, name: &str, w: u32, h: u32) -> String {
        let path = dir.join(name);
        RgbaImage::from_pixel(w, h, Rgba([200, 10, 10, 255]))
            .save(&path)
            .unwrap();
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_load_local_png() {
        let dir = tempfile::tempdir().unwrap();
        let url = write_png(dir.path(), "red.png", 4, 3);

        let img = ImageLoader::new(64).load(&MediaItem::new(url, "Red")).unwrap();
        assert_eq!((img.width, img.height), (4, 3));
        assert_eq!(img.data.len(), 4 * 3 * 4);
        assert_eq!(&img.data[..4], &[200, 10, 10, 255]);
    }

    #[test]
    fn test_large_image_is_bounded() {
        let dir = tempfile::tempdir().unwrap();
        let url = write_png(dir.path(), "wide.png", 200, 100);

        let img = ImageLoader::new(50).load(&MediaItem::new(url, "Wide")).unwrap();
        assert_eq!((img.width, img.height), (50, 25));
    }

    #[test]
    fn test_remote_is_unsupported() {
        let err = ImageLoader::new(64)
            .load(&MediaItem::new("https://example.com/a.jpg", "Remote"))
            .unwrap_err();
        assert!(matches!(err, GalleryError::UnsupportedSource(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_load_all_keeps_positions() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_png(dir.path(), "ok.png", 2, 2);
        let items = vec![
            MediaItem::new("https://example.com/a.jpg", "Remote"),
            MediaItem::new(good, "Local"),
            MediaItem::new(dir.path().join("missing.png").to_string_lossy(), "Missing"),
        ];

        let loaded = ImageLoader::new(64).load_all(&items);
        assert_eq!(loaded.len(), 3);
        assert!(loaded[0].is_none());
        assert!(loaded[1].is_some());
        assert!(loaded[2].is_none());
    }
}
