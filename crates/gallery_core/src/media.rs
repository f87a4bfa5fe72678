//! Gallery items and the fixed, ordered list that holds them

use crate::GalleryError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One picture in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub url: String,
    pub caption: String,
}

impl MediaItem {
    pub fn new(url: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            caption: caption.into(),
        }
    }

    pub fn source(&self) -> MediaSource {
        MediaSource::parse(&self.url)
    }
}

/// Where an item's pixels live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    Local(PathBuf),
    Remote(String),
}

impl MediaSource {
    pub fn parse(url: &str) -> Self {
        let lower = url.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            MediaSource::Remote(url.to_string())
        } else if let Some(path) = url.strip_prefix("file://") {
            MediaSource::Local(PathBuf::from(path))
        } else {
            MediaSource::Local(PathBuf::from(url))
        }
    }
}

/// Non-empty, immutable list of gallery items.
///
/// Order is fixed at construction. Every index handed out by the gallery
/// refers into this list, so an empty list is rejected up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaList {
    items: Vec<MediaItem>,
}

impl MediaList {
    pub fn new(items: Vec<MediaItem>) -> Result<Self, GalleryError> {
        if items.is_empty() {
            return Err(GalleryError::EmptyGallery);
        }
        Ok(Self { items })
    }

    /// Build from parallel url/caption lists
    pub fn from_parallel<U, C>(urls: Vec<U>, captions: Vec<C>) -> Result<Self, GalleryError>
    where
        U: Into<String>,
        C: Into<String>,
    {
        if urls.len() != captions.len() {
            return Err(GalleryError::LengthMismatch {
                urls: urls.len(),
                captions: captions.len(),
            });
        }

        let items = urls
            .into_iter()
            .zip(captions)
            .map(|(url, caption)| MediaItem::new(url, caption))
            .collect();
        Self::new(items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MediaItem> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[MediaItem] {
        &self.items
    }
}

impl TryFrom<Vec<MediaItem>> for MediaList {
    type Error = GalleryError;

    fn try_from(items: Vec<MediaItem>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl std::ops::Index<usize> for MediaList {
    type Output = MediaItem;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a MediaList {
    type Item = &'a MediaItem;
    type IntoIter = std::slice::Iter<'a, MediaItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
