//! UI Components

pub mod thumbnail_grid;
pub mod slideshow_overlay;

pub use thumbnail_grid::ThumbnailGrid;
pub use slideshow_overlay::SlideshowOverlay;

use egui::{Rect, Vec2};

/// UV rectangle covering a whole texture
pub(crate) const FULL_UV: Rect = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));

/// Largest rectangle with the image's aspect ratio centered inside `bounds`
pub fn fit_rect(bounds: Rect, image_size: Vec2) -> Rect {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return bounds;
    }

    let scale = (bounds.width() / image_size.x).min(bounds.height() / image_size.y);
    Rect::from_center_size(bounds.center(), image_size * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_wide_image() {
        let bounds = Rect::from_min_size(egui::Pos2::ZERO, Vec2::new(100.0, 100.0));
        let fitted = fit_rect(bounds, Vec2::new(200.0, 100.0));
        assert_eq!(fitted.size(), Vec2::new(100.0, 50.0));
        assert_eq!(fitted.center(), bounds.center());
    }

    #[test]
    fn test_fit_upscales_small_image() {
        let bounds = Rect::from_min_size(egui::Pos2::ZERO, Vec2::new(300.0, 200.0));
        let fitted = fit_rect(bounds, Vec2::new(10.0, 10.0));
        assert_eq!(fitted.size(), Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_fit_degenerate_image() {
        let bounds = Rect::from_min_size(egui::Pos2::ZERO, Vec2::new(30.0, 20.0));
        assert_eq!(fit_rect(bounds, Vec2::ZERO), bounds);
    }
}
