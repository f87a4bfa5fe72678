//! Image Gallery Core Domain Logic
//!
//! This crate contains:
//! - Gallery items and their validation
//! - Slideshow state machine
//! - Commands and key map
//! - Host environment capabilities
//! - Declarative view tree
//! - Configuration
//! - Error types
//! - Image decoding

pub mod media;
pub mod state;
pub mod command;
pub mod host;
pub mod view;
pub mod config;
pub mod error;
pub mod image_loader;

pub use media::{MediaItem, MediaList, MediaSource};
pub use state::{GalleryWidget, SlideshowPhase, ViewState};
pub use command::{default_keybindings, CommandId, Direction, GalleryCommand, KeyMap};
pub use host::{HostEnvironment, RecordingHost};
pub use view::{counter_label, Control, Overlay, Thumbnail, ViewTree};
pub use config::{GalleryConfig, GeneralConfig, GridConfig};
pub use error::GalleryError;
pub use image_loader::{ImageLoader, LoadedImage};
