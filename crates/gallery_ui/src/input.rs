//! Keyboard input translation

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{Key, NamedKey};

/// Turns winit key events into the key names used by the gallery key map
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Name of a pressed key, or `None` for releases and unnamed keys
    pub fn handle_key(&self, event: &KeyEvent) -> Option<String> {
        if event.state != ElementState::Pressed {
            return None;
        }

        let name = key_name(&event.logical_key)?;
        tracing::trace!("Key pressed: {}", name);
        Some(name)
    }
}

/// Convert a logical key to a DOM-style key name
pub fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Named(named) => Some(match named {
            NamedKey::ArrowLeft => "ArrowLeft".to_string(),
            NamedKey::ArrowRight => "ArrowRight".to_string(),
            NamedKey::ArrowUp => "ArrowUp".to_string(),
            NamedKey::ArrowDown => "ArrowDown".to_string(),
            NamedKey::Escape => "Escape".to_string(),
            NamedKey::Enter => "Enter".to_string(),
            NamedKey::Space => " ".to_string(),
            _ => format!("{:?}", named),
        }),
        Key::Character(c) => Some(c.to_string()),
        _ => None,
    }
}
