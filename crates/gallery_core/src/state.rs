//! Gallery widget state and the slideshow state machine

use crate::{Direction, GalleryCommand, HostEnvironment, KeyMap, MediaItem, MediaList, ViewTree};

/// Mutable slideshow state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub is_open: bool,
    pub current_index: usize,
}

/// Slideshow phase derived from [`ViewState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideshowPhase {
    Closed,
    Open(usize),
}

impl ViewState {
    pub fn phase(&self) -> SlideshowPhase {
        if self.is_open {
            SlideshowPhase::Open(self.current_index)
        } else {
            SlideshowPhase::Closed
        }
    }
}

/// Thumbnail grid plus modal slideshow over a fixed list of items.
///
/// The widget owns its [`ViewState`] and asks the host for scroll locking and
/// key routing while the slideshow is open.
pub struct GalleryWidget<H: HostEnvironment> {
    title: String,
    items: MediaList,
    state: ViewState,
    keymap: KeyMap,
    host: H,
}

impl<H: HostEnvironment> GalleryWidget<H> {
    pub fn new(title: impl Into<String>, items: MediaList, host: H) -> Self {
        Self {
            title: title.into(),
            items,
            state: ViewState::default(),
            keymap: KeyMap::default(),
            host,
        }
    }

    /// Replace the default key bindings
    pub fn with_keymap(mut self, keymap: KeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Open the slideshow at `index`
    pub fn open_slideshow(&mut self, index: usize) {
        if index >= self.items.len() {
            tracing::warn!("Ignoring open request for index {} of {}", index, self.items.len());
            return;
        }

        self.state.current_index = index;
        self.state.is_open = true;

        self.host.lock_scroll();
        if !self.host.keys_subscribed() {
            self.host.subscribe_keys();
        }

        tracing::debug!("Slideshow opened at {}", index);
    }

    /// Close the slideshow; safe to call when already closed
    pub fn close_slideshow(&mut self) {
        self.state.is_open = false;

        self.host.unlock_scroll();
        if self.host.keys_subscribed() {
            self.host.unsubscribe_keys();
        }

        tracing::debug!("Slideshow closed");
    }

    /// Move to the neighbouring item, wrapping at both ends.
    ///
    /// Does not look at `is_open`; advancing while closed still moves
    /// `current_index`.
    pub fn advance(&mut self, direction: Direction) {
        let len = self.items.len();
        let current = self.state.current_index;

        self.state.current_index = match direction {
            Direction::Previous => (current + len - 1) % len,
            Direction::Next => (current + 1) % len,
        };

        tracing::debug!("Slideshow {:?}: {} -> {}", direction, current, self.state.current_index);
    }

    /// Handle a key press routed from the host.
    ///
    /// Keys are dropped unless the widget holds a key subscription, which it
    /// only does while the slideshow is open.
    pub fn handle_key_input(&mut self, key: &str) {
        if !self.host.keys_subscribed() {
            tracing::trace!("Key ignored while unsubscribed: {}", key);
            return;
        }

        match self.keymap.resolve(key) {
            Some(cmd) => self.dispatch(cmd),
            None => tracing::trace!("Key ignored: {}", key),
        }
    }

    /// Apply a command produced by the view or the key map
    pub fn dispatch(&mut self, cmd: GalleryCommand) {
        match cmd {
            GalleryCommand::Open(index) => self.open_slideshow(index),
            GalleryCommand::Close => self.close_slideshow(),
            GalleryCommand::Advance(direction) => self.advance(direction),
        }
    }

    /// Build the view tree for the current state
    pub fn render(&self) -> ViewTree {
        ViewTree::build(&self.title, &self.items, &self.state)
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn current_item(&self) -> &MediaItem {
        &self.items[self.state.current_index]
    }

    pub fn items(&self) -> &MediaList {
        &self.items
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingHost;

    fn gallery(n: usize) -> GalleryWidget<RecordingHost> {
        let urls: Vec<String> = (0..n).map(|i| format!("img{}.png", i)).collect();
        let captions: Vec<String> = (0..n).map(|i| format!("Caption {}", i)).collect();
        let items = MediaList::from_parallel(urls, captions).unwrap();
        GalleryWidget::new("Image Gallery", items, RecordingHost::default())
    }

    #[test]
    fn test_initial_state() {
        let g = gallery(3);
        assert_eq!(g.state(), ViewState { is_open: false, current_index: 0 });
        assert_eq!(g.state().phase(), SlideshowPhase::Closed);
        assert!(!g.host().scroll_locked);
        assert!(!g.host().subscribed);
    }

    #[test]
    fn test_open_sets_state_for_every_index() {
        let mut g = gallery(9);
        for i in 0..9 {
            g.open_slideshow(i);
            assert_eq!(g.state(), ViewState { is_open: true, current_index: i });
            assert_eq!(g.state().phase(), SlideshowPhase::Open(i));
        }
    }

    #[test]
    fn test_open_locks_scroll_and_subscribes_once() {
        let mut g = gallery(4);
        g.open_slideshow(1);
        g.open_slideshow(2);
        assert!(g.host().scroll_locked);
        assert!(g.host().subscribed);
        assert_eq!(g.host().subscribe_calls, 1);

        g.close_slideshow();
        g.open_slideshow(3);
        assert_eq!(g.host().subscribe_calls, 2);
        assert_eq!(g.host().unsubscribe_calls, 1);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut g = gallery(4);
        g.close_slideshow();
        assert!(!g.is_open());
        assert_eq!(g.host().unsubscribe_calls, 0);

        g.open_slideshow(2);
        g.close_slideshow();
        g.close_slideshow();
        assert!(!g.is_open());
        assert!(!g.host().scroll_locked);
        assert!(!g.host().subscribed);
        assert_eq!(g.host().unsubscribe_calls, 1);
    }

    #[test]
    fn test_cyclic_closure() {
        for n in 1..=6 {
            let mut g = gallery(n);
            for start in 0..n {
                g.open_slideshow(start);
                for _ in 0..n {
                    g.advance(Direction::Next);
                }
                assert_eq!(g.state().current_index, start);
            }
        }
    }

    #[test]
    fn test_previous_inverts_next() {
        let mut g = gallery(5);
        for i in 0..5 {
            g.open_slideshow(i);
            g.advance(Direction::Next);
            g.advance(Direction::Previous);
            assert_eq!(g.state().current_index, i);
        }
    }

    #[test]
    fn test_wrap_boundaries() {
        let mut g = gallery(5);
        g.open_slideshow(0);
        g.advance(Direction::Previous);
        assert_eq!(g.state().current_index, 4);

        g.open_slideshow(4);
        g.advance(Direction::Next);
        assert_eq!(g.state().current_index, 0);
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut g = gallery(1);
        g.open_slideshow(0);
        g.advance(Direction::Next);
        assert_eq!(g.state().current_index, 0);
        g.advance(Direction::Previous);
        assert_eq!(g.state().current_index, 0);
    }

    #[test]
    fn test_nine_item_scenario() {
        let mut g = gallery(9);
        g.open_slideshow(0);
        assert_eq!(g.state(), ViewState { is_open: true, current_index: 0 });

        g.advance(Direction::Previous);
        assert_eq!(g.state().current_index, 8);

        g.advance(Direction::Next);
        assert_eq!(g.state().current_index, 0);
        g.advance(Direction::Next);
        assert_eq!(g.state().current_index, 1);

        g.handle_key_input("Escape");
        assert!(!g.is_open());
    }

    #[test]
    fn test_key_input() {
        let mut g = gallery(3);
        g.open_slideshow(1);

        g.handle_key_input("ArrowRight");
        assert_eq!(g.state().current_index, 2);
        g.handle_key_input("ArrowLeft");
        g.handle_key_input("ArrowLeft");
        assert_eq!(g.state().current_index, 0);
        g.handle_key_input("Enter");
        assert_eq!(g.state(), ViewState { is_open: true, current_index: 0 });
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut g = gallery(4);
        g.handle_key_input("ArrowRight");
        g.handle_key_input("Escape");
        assert_eq!(g.state(), ViewState { is_open: false, current_index: 0 });
        assert_eq!(g.host().unsubscribe_calls, 0);

        g.open_slideshow(2);
        g.close_slideshow();
        g.handle_key_input("ArrowLeft");
        assert_eq!(g.state(), ViewState { is_open: false, current_index: 2 });
    }

    #[test]
    fn test_advance_while_closed_and_index_persists() {
        let mut g = gallery(4);
        g.open_slideshow(2);
        g.close_slideshow();
        assert_eq!(g.state().current_index, 2);

        g.advance(Direction::Next);
        assert_eq!(g.state(), ViewState { is_open: false, current_index: 3 });
    }

    #[test]
    fn test_out_of_range_open_ignored() {
        let mut g = gallery(3);
        g.open_slideshow(3);
        assert!(!g.is_open());
        assert!(!g.host().subscribed);
    }

    #[test]
    fn test_dispatch() {
        let mut g = gallery(3);
        g.dispatch(GalleryCommand::Open(2));
        g.dispatch(GalleryCommand::Advance(Direction::Next));
        assert_eq!(g.current_item().caption, "Caption 0");
        g.dispatch(GalleryCommand::Close);
        assert!(!g.is_open());
    }
}
