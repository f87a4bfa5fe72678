//! Host environment capabilities used by the gallery widget

/// Side effects the widget requests from the window that hosts it.
///
/// Implementations must treat repeated lock/unlock and subscribe/unsubscribe
/// calls as no-ops; the widget only issues them on state changes, but a host
/// shared by several widgets may see them interleaved.
pub trait HostEnvironment {
    /// Stop the page behind the slideshow from scrolling
    fn lock_scroll(&mut self);

    /// Let the page scroll again
    fn unlock_scroll(&mut self);

    /// Start routing key presses to the widget
    fn subscribe_keys(&mut self);

    /// Stop routing key presses to the widget
    fn unsubscribe_keys(&mut self);

    /// Is a key observer currently registered?
    fn keys_subscribed(&self) -> bool;
}

/// Host that records every request; used by tests and headless callers
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    pub scroll_locked: bool,
    pub subscribed: bool,
    pub subscribe_calls: usize,
    pub unsubscribe_calls: usize,
}

impl HostEnvironment for RecordingHost {
    fn lock_scroll(&mut self) {
        self.scroll_locked = true;
    }

    fn unlock_scroll(&mut self) {
        self.scroll_locked = false;
    }

    fn subscribe_keys(&mut self) {
        self.subscribe_calls += 1;
        self.subscribed = true;
    }

    fn unsubscribe_keys(&mut self) {
        self.unsubscribe_calls += 1;
        self.subscribed = false;
    }

    fn keys_subscribed(&self) -> bool {
        self.subscribed
    }
}
