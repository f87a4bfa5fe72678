//! Thumbnail grid component
//! Draws every gallery item as a clickable thumbnail

use super::{fit_rect, FULL_UV};
use crate::{TextureSet, Theme};
use egui::{Rect, Response, Ui, Vec2};
use gallery_core::{GalleryCommand, Thumbnail};

/// Thumbnail grid component
pub struct ThumbnailGrid {
    /// Number of columns
    pub columns: usize,
    /// Gap between cells
    pub spacing: f32,
}

impl Default for ThumbnailGrid {
    fn default() -> Self {
        Self::new(3)
    }
}

impl ThumbnailGrid {
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
            spacing: 20.0,
        }
    }

    /// Width of one cell for the given available width
    pub fn cell_width(&self, available_width: f32) -> f32 {
        let gaps = self.spacing * (self.columns as f32 - 1.0);
        ((available_width - gaps) / self.columns as f32).max(32.0)
    }

    /// Render the grid; returns the command of the clicked thumbnail
    pub fn ui(
        &self,
        ui: &mut Ui,
        thumbnails: &[Thumbnail],
        textures: &TextureSet,
        theme: &Theme,
        scroll_locked: bool,
    ) -> Option<GalleryCommand> {
        let mut action = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .enable_scrolling(!scroll_locked)
            .show(ui, |ui| {
                let cell_width = self.cell_width(ui.available_width());

                egui::Grid::new("thumbnail_grid")
                    .num_columns(self.columns)
                    .spacing(Vec2::splat(self.spacing))
                    .show(ui, |ui| {
                        for thumb in thumbnails {
                            let response = self.render_thumbnail(ui, thumb, textures, theme, cell_width);
                            if response.clicked() {
                                action = Some(thumb.on_click);
                            }

                            if (thumb.index + 1) % self.columns == 0 {
                                ui.end_row();
                            }
                        }
                    });
            });

        action
    }

    /// Render a single thumbnail
    fn render_thumbnail(
        &self,
        ui: &mut Ui,
        thumb: &Thumbnail,
        textures: &TextureSet,
        theme: &Theme,
        cell_width: f32,
    ) -> Response {
        let image_height = cell_width * 2.0 / 3.0;
        let item_size = Vec2::new(cell_width, image_height + 22.0);

        let (rect, response) = ui.allocate_exact_size(item_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            let mut image_rect = Rect::from_min_size(rect.min, Vec2::new(cell_width, image_height));
            if response.hovered() {
                image_rect = image_rect.expand2(image_rect.size() * 0.05);
            }

            match textures.get(thumb.index) {
                Some(texture) => {
                    let fitted = fit_rect(image_rect, texture.size_vec2());
                    painter.image(texture.id(), fitted, FULL_UV, egui::Color32::WHITE);
                }
                None => {
                    painter.rect_filled(image_rect, 4.0, theme.button);
                    painter.text(
                        image_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "🖼",
                        egui::FontId::proportional(32.0),
                        egui::Color32::GRAY,
                    );
                }
            }

            painter.text(
                egui::pos2(rect.center().x, rect.max.y - 10.0),
                egui::Align2::CENTER_CENTER,
                &thumb.caption,
                egui::FontId::proportional(12.0),
                if response.hovered() { theme.text } else { theme.text_secondary },
            );
        }

        response.on_hover_cursor(egui::CursorIcon::PointingHand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_width() {
        let grid = ThumbnailGrid::new(3);
        assert_eq!(grid.cell_width(340.0), 100.0);
        // Never collapses below a usable size
        assert_eq!(grid.cell_width(10.0), 32.0);
    }

    #[test]
    fn test_zero_columns_clamped() {
        let grid = ThumbnailGrid::new(0);
        assert_eq!(grid.columns, 1);
        assert_eq!(grid.cell_width(500.0), 500.0);
    }
}
