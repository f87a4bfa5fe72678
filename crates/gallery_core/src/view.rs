//! Declarative view tree built from gallery state

use crate::{Direction, GalleryCommand, MediaList, ViewState};

/// Everything the host UI needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTree {
    pub title: String,
    pub thumbnails: Vec<Thumbnail>,
    /// Present only while the slideshow is open
    pub overlay: Option<Overlay>,
}

/// Clickable grid entry
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub index: usize,
    pub url: String,
    pub caption: String,
    pub on_click: GalleryCommand,
}

/// Button inside the slideshow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Control {
    pub label: &'static str,
    pub on_click: GalleryCommand,
}

/// Modal slideshow content
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub close: Control,
    pub previous: Control,
    pub next: Control,
    pub counter: String,
    pub caption: String,
    pub index: usize,
    pub image_url: String,
}

impl ViewTree {
    pub fn build(title: &str, items: &MediaList, state: &ViewState) -> Self {
        let thumbnails = items
            .iter()
            .enumerate()
            .map(|(index, item)| Thumbnail {
                index,
                url: item.url.clone(),
                caption: item.caption.clone(),
                on_click: GalleryCommand::Open(index),
            })
            .collect();

        let overlay = state.is_open.then(|| {
            let index = state.current_index;
            let item = &items[index];
            Overlay {
                close: Control {
                    label: "×",
                    on_click: GalleryCommand::Close,
                },
                previous: Control {
                    label: "<",
                    on_click: GalleryCommand::Advance(Direction::Previous),
                },
                next: Control {
                    label: ">",
                    on_click: GalleryCommand::Advance(Direction::Next),
                },
                counter: counter_label(index, items.len()),
                caption: item.caption.clone(),
                index,
                image_url: item.url.clone(),
            }
        });

        Self {
            title: title.to_string(),
            thumbnails,
            overlay,
        }
    }
}

/// "Image 3 of 9" style position label
pub fn counter_label(index: usize, total: usize) -> String {
    format!("Image {} of {}", index + 1, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GalleryWidget, RecordingHost};

    fn widget() -> GalleryWidget<RecordingHost> {
        let items = MediaList::from_parallel(
            vec!["a.png", "b.png", "c.png"],
            vec!["Alpha", "Beta", "Gamma"],
        )
        .unwrap();
        GalleryWidget::new("Image Gallery", items, RecordingHost::default())
    }

    #[test]
    fn test_closed_has_no_overlay() {
        let view = widget().render();
        assert_eq!(view.title, "Image Gallery");
        assert_eq!(view.thumbnails.len(), 3);
        assert!(view.overlay.is_none());
    }

    #[test]
    fn test_thumbnails_bound_to_own_index() {
        let view = widget().render();
        for (i, thumb) in view.thumbnails.iter().enumerate() {
            assert_eq!(thumb.index, i);
            assert_eq!(thumb.on_click, GalleryCommand::Open(i));
        }
        assert_eq!(view.thumbnails[2].url, "c.png");
    }

    #[test]
    fn test_open_overlay_contents() {
        let mut w = widget();
        w.open_slideshow(1);
        let view = w.render();
        assert_eq!(view.thumbnails.len(), 3);

        let overlay = view.overlay.expect("overlay while open");
        assert_eq!(overlay.counter, "Image 2 of 3");
        assert_eq!(overlay.caption, "Beta");
        assert_eq!(overlay.image_url, "b.png");
        assert_eq!(overlay.close.on_click, GalleryCommand::Close);
        assert_eq!(overlay.previous.on_click, GalleryCommand::Advance(Direction::Previous));
        assert_eq!(overlay.next.on_click, GalleryCommand::Advance(Direction::Next));
    }

    #[test]
    fn test_overlay_follows_navigation() {
        let mut w = widget();
        w.open_slideshow(0);
        let previous = w.render().overlay.unwrap().previous;
        w.dispatch(previous.on_click);
        let overlay = w.render().overlay.unwrap();
        assert_eq!(overlay.counter, "Image 3 of 3");
        assert_eq!(overlay.caption, "Gamma");

        w.dispatch(overlay.close.on_click);
        assert!(w.render().overlay.is_none());
    }

    #[test]
    fn test_counter_label() {
        assert_eq!(counter_label(0, 9), "Image 1 of 9");
        assert_eq!(counter_label(8, 9), "Image 9 of 9");
    }
}
