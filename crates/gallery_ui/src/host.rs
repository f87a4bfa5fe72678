//! Window-side host for the gallery widget

use gallery_core::HostEnvironment;

/// Host state owned by the desktop window.
///
/// The scroll lock freezes the thumbnail grid's scroll area; the key flag
/// decides whether the event loop forwards key presses to the widget.
#[derive(Debug, Default)]
pub struct WindowHost {
    scroll_locked: bool,
    keys_subscribed: bool,
}

impl WindowHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }
}

impl HostEnvironment for WindowHost {
    fn lock_scroll(&mut self) {
        if !self.scroll_locked {
            tracing::debug!("Grid scrolling locked");
        }
        self.scroll_locked = true;
    }

    fn unlock_scroll(&mut self) {
        if self.scroll_locked {
            tracing::debug!("Grid scrolling unlocked");
        }
        self.scroll_locked = false;
    }

    fn subscribe_keys(&mut self) {
        self.keys_subscribed = true;
    }

    fn unsubscribe_keys(&mut self) {
        self.keys_subscribed = false;
    }

    fn keys_subscribed(&self) -> bool {
        self.keys_subscribed
    }
}
