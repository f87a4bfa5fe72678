//! Gallery error types

use thiserror::Error;

/// Main gallery error type
#[derive(Error, Debug)]
pub enum GalleryError {
    // ===== Recoverable Errors (draw placeholder, continue) =====
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported image source: {0}")]
    UnsupportedSource(String),

    #[error("Image decode error: {0}")]
    ImageDecode(String),

    // ===== Fatal Errors (gallery cannot be constructed) =====
    #[error("Gallery has no images")]
    EmptyGallery,

    #[error("Gallery has {urls} images but {captions} captions")]
    LengthMismatch { urls: usize, captions: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GalleryError {
    /// Is this error recoverable?
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GalleryError::Io(_) | GalleryError::UnsupportedSource(_) | GalleryError::ImageDecode(_)
        )
    }

    /// Is this a fatal error?
    pub fn is_fatal(&self) -> bool {
        !self.is_recoverable()
    }
}

impl From<image::ImageError> for GalleryError {
    fn from(e: image::ImageError) -> Self {
        GalleryError::ImageDecode(e.to_string())
    }
}

impl From<toml::de::Error> for GalleryError {
    fn from(e: toml::de::Error) -> Self {
        GalleryError::Config(e.to_string())
    }
}
