//! Image Gallery UI Layer
//!
//! Provides:
//! - egui components drawing the gallery view tree
//! - wgpu rendering surface
//! - Input translation and the window host

pub mod renderer;
pub mod components;
pub mod input;
pub mod host;
pub mod textures;
pub mod theme;

pub use renderer::Renderer;
pub use input::InputHandler;
pub use host::WindowHost;
pub use textures::TextureSet;
pub use theme::Theme;
