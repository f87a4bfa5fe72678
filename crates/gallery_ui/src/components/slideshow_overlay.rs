//! Modal slideshow drawn above the thumbnail grid

use super::{fit_rect, FULL_UV};
use crate::{TextureSet, Theme};
use egui::{Align2, Color32, FontId, Rect, RichText, Sense, Stroke, Vec2};
use gallery_core::{Control, GalleryCommand, Overlay};

/// Fraction of the window the slideshow stage leaves free on each side
const STAGE_MARGIN: f32 = 0.15;
const BUTTON_SIZE: f32 = 44.0;
const BUTTON_INSET: f32 = 20.0;
/// Longest placeholder label, in characters
const PLACEHOLDER_MAX_CHARS: usize = 40;

/// Slideshow overlay component
pub struct SlideshowOverlay;

impl SlideshowOverlay {
    /// Stage rectangle for a given screen
    pub fn stage_rect(screen: Rect) -> Rect {
        Rect::from_min_size(
            screen.min + screen.size() * STAGE_MARGIN,
            screen.size() * (1.0 - 2.0 * STAGE_MARGIN),
        )
    }

    /// Bounds the full-size image may occupy inside the stage
    pub fn image_bounds(stage: Rect) -> Rect {
        Rect::from_center_size(stage.center(), stage.size() * Vec2::new(0.9, 0.8))
    }

    /// Render the overlay; returns the command of the clicked control
    pub fn show(
        ctx: &egui::Context,
        overlay: &Overlay,
        textures: &TextureSet,
        theme: &Theme,
    ) -> Option<GalleryCommand> {
        let screen = ctx.screen_rect();
        let stage = Self::stage_rect(screen);

        egui::Area::new(egui::Id::new("slideshow_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                // Swallow clicks so the grid underneath stays inert
                ui.allocate_rect(screen, Sense::click());

                let painter = ui.painter();
                painter.rect_filled(screen, 0.0, Color32::from_black_alpha(160));
                painter.rect_filled(stage, 50.0, Color32::BLACK);
                painter.rect_stroke(stage, 50.0, Stroke::new(2.0, theme.accent));

                let bounds = Self::image_bounds(stage);
                match textures.get(overlay.index) {
                    Some(texture) => {
                        let fitted = fit_rect(bounds, texture.size_vec2());
                        let rounding = fitted.size().min_elem() * 0.1;
                        painter.image(texture.id(), fitted, FULL_UV, Color32::WHITE);
                        painter.rect_stroke(fitted, rounding, Stroke::new(2.0, theme.frame));
                    }
                    None => {
                        painter.rect_stroke(bounds, 8.0, Stroke::new(2.0, theme.frame));
                        painter.text(
                            bounds.center(),
                            Align2::CENTER_CENTER,
                            Self::placeholder_label(&overlay.image_url),
                            FontId::proportional(12.0),
                            theme.text_secondary,
                        );
                    }
                }

                painter.text(
                    egui::pos2(stage.center().x, stage.top() + 5.0),
                    Align2::CENTER_TOP,
                    &overlay.counter,
                    FontId::proportional(16.0),
                    theme.counter,
                );
                painter.text(
                    egui::pos2(stage.center().x, stage.bottom() - 5.0),
                    Align2::CENTER_BOTTOM,
                    &overlay.caption,
                    FontId::proportional(16.0),
                    Color32::WHITE,
                );

                let button = Vec2::splat(BUTTON_SIZE);
                let close_rect = Rect::from_min_size(
                    egui::pos2(stage.right() - BUTTON_INSET - BUTTON_SIZE, stage.top() + BUTTON_INSET),
                    button,
                );
                let previous_rect = Rect::from_min_size(
                    egui::pos2(stage.left() + BUTTON_INSET, stage.bottom() - BUTTON_INSET - BUTTON_SIZE),
                    button,
                );
                let next_rect = Rect::from_min_size(
                    stage.max - Vec2::splat(BUTTON_INSET) - button,
                    button,
                );

                let controls = [
                    (&overlay.close, close_rect, theme.close, 4.0),
                    (&overlay.previous, previous_rect, Color32::WHITE, BUTTON_SIZE / 2.0),
                    (&overlay.next, next_rect, Color32::WHITE, BUTTON_SIZE / 2.0),
                ];

                let mut clicked = None;
                for (control, rect, color, rounding) in controls {
                    if let Some(cmd) = Self::control_button(ui, control, rect, color, rounding) {
                        clicked.get_or_insert(cmd);
                    }
                }
                clicked
            })
            .inner
    }

    /// File name of an image url without its query, shortened to fit the stage
    pub fn placeholder_label(url: &str) -> String {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        let name = path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .unwrap_or(path);

        if name.chars().count() <= PLACEHOLDER_MAX_CHARS {
            return name.to_string();
        }
        let mut short: String = name.chars().take(PLACEHOLDER_MAX_CHARS - 1).collect();
        short.push('…');
        short
    }

    fn control_button(
        ui: &mut egui::Ui,
        control: &Control,
        rect: Rect,
        color: Color32,
        rounding: f32,
    ) -> Option<GalleryCommand> {
        let text = RichText::new(control.label).size(24.0).strong().color(color);
        let response = ui.put(rect, egui::Button::new(text).rounding(rounding));
        response.clicked().then_some(control.on_click)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_stage_covers_central_seventy_percent() {
        let screen = Rect::from_min_size(egui::Pos2::ZERO, Vec2::new(1000.0, 800.0));
        let stage = SlideshowOverlay::stage_rect(screen);
        assert!(approx(stage.min.to_vec2(), Vec2::new(150.0, 120.0)));
        assert!(approx(stage.size(), Vec2::new(700.0, 560.0)));
    }

    #[test]
    fn test_image_bounds_inside_stage() {
        let stage = Rect::from_min_size(egui::pos2(100.0, 100.0), Vec2::new(700.0, 500.0));
        let bounds = SlideshowOverlay::image_bounds(stage);
        assert!(stage.contains_rect(bounds));
        assert!(approx(bounds.center().to_vec2(), stage.center().to_vec2()));
        assert!(approx(bounds.size(), Vec2::new(630.0, 400.0)));
    }

    #[test]
    fn test_placeholder_label_drops_query_and_host() {
        let url = "https://static01.nyt.com/images/2017/10/22/travel/22Norway1/22Norway1-superJumbo.jpg?q=75&w=3840";
        assert_eq!(SlideshowOverlay::placeholder_label(url), "22Norway1-superJumbo.jpg");
        assert_eq!(SlideshowOverlay::placeholder_label("pictures/hill.png"), "hill.png");
    }

    #[test]
    fn test_placeholder_label_is_bounded() {
        let url = format!("https://example.com/{}.jpg", "x".repeat(200));
        let label = SlideshowOverlay::placeholder_label(&url);
        assert_eq!(label.chars().count(), PLACEHOLDER_MAX_CHARS);
        assert!(label.ends_with('…'));
    }
}
