//! Commands that drive the slideshow, and the key map that produces them

use std::collections::HashMap;

/// Direction for slideshow navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Previous,
    Next,
}

/// Every state change the gallery understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryCommand {
    /// Open the slideshow at an item index
    Open(usize),
    /// Close the slideshow
    Close,
    /// Move to the neighbouring item, wrapping at the ends
    Advance(Direction),
}

/// Command identifiers used in the `[keybindings]` configuration table
pub struct CommandId;

impl CommandId {
    pub const SLIDESHOW_PREV: &'static str = "slideshow.prev";
    pub const SLIDESHOW_NEXT: &'static str = "slideshow.next";
    pub const SLIDESHOW_CLOSE: &'static str = "slideshow.close";

    /// Resolve a configured command name
    pub fn resolve(id: &str) -> Option<GalleryCommand> {
        match id {
            Self::SLIDESHOW_PREV => Some(GalleryCommand::Advance(Direction::Previous)),
            Self::SLIDESHOW_NEXT => Some(GalleryCommand::Advance(Direction::Next)),
            Self::SLIDESHOW_CLOSE => Some(GalleryCommand::Close),
            _ => None,
        }
    }
}

/// Maps key names (`ArrowLeft`, `Escape`, ...) to commands
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<String, GalleryCommand>,
}

impl KeyMap {
    /// Build from a command -> keys table, as stored in configuration
    pub fn new(bindings: &HashMap<String, Vec<String>>) -> Self {
        // Invert the bindings map: command -> keys becomes key -> command
        let mut key_to_command = HashMap::new();

        for (command, keys) in bindings {
            let Some(cmd) = CommandId::resolve(command) else {
                tracing::warn!("Unknown command in keybindings: {}", command);
                continue;
            };
            for key in keys {
                key_to_command.insert(key.to_lowercase(), cmd);
            }
        }

        Self {
            bindings: key_to_command,
        }
    }

    /// Look up the command bound to a key name
    pub fn resolve(&self, key: &str) -> Option<GalleryCommand> {
        self.bindings.get(&key.to_lowercase()).copied()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new(&default_keybindings())
    }
}

/// Default slideshow bindings
pub fn default_keybindings() -> HashMap<String, Vec<String>> {
    let mut kb = HashMap::new();
    kb.insert(CommandId::SLIDESHOW_PREV.into(), vec!["ArrowLeft".into()]);
    kb.insert(CommandId::SLIDESHOW_NEXT.into(), vec!["ArrowRight".into()]);
    kb.insert(CommandId::SLIDESHOW_CLOSE.into(), vec!["Escape".into()]);
    kb
}
