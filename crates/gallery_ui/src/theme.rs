//! Gallery theming

use egui::{Color32, Visuals};

/// Gallery theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub surface: Color32,
    pub text: Color32,
    pub text_secondary: Color32,
    /// Slideshow border and control hover fill
    pub accent: Color32,
    /// Border around the full-size image
    pub frame: Color32,
    pub counter: Color32,
    pub close: Color32,
    pub button: Color32,
    pub button_hover_border: Color32,
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(24, 24, 24),
            surface: Color32::from_rgb(40, 40, 40),
            text: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(160, 160, 160),
            accent: Color32::from_rgb(0x00, 0x8c, 0xff),
            frame: Color32::GOLD,
            counter: Color32::from_rgb(0x00, 0xff, 0x48),
            close: Color32::RED,
            button: Color32::from_rgb(0x33, 0x33, 0x33),
            button_hover_border: Color32::from_rgb(0x00, 0xff, 0x08),
        }
    }

    /// Light theme; the slideshow keeps its dark stage
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::from_rgb(250, 250, 250),
            surface: Color32::from_rgb(255, 255, 255),
            text: Color32::from_rgb(32, 32, 32),
            text_secondary: Color32::from_rgb(100, 100, 100),
            ..Self::dark()
        }
    }

    /// Apply theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        let mut visuals = if self.name == "dark" {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.surface;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.background;

        visuals.widgets.noninteractive.fg_stroke.color = self.text;

        visuals.widgets.inactive.weak_bg_fill = self.button;
        visuals.widgets.inactive.bg_fill = self.button;
        visuals.widgets.inactive.fg_stroke.color = Color32::WHITE;

        visuals.widgets.hovered.weak_bg_fill = self.accent;
        visuals.widgets.hovered.bg_fill = self.accent;
        visuals.widgets.hovered.bg_stroke = egui::Stroke::new(2.0, self.button_hover_border);

        visuals.widgets.active.weak_bg_fill = self.accent;
        visuals.widgets.active.bg_fill = self.accent;

        visuals.selection.bg_fill = self.accent.linear_multiply(0.3);
        visuals.selection.stroke.color = self.accent;

        style.visuals = visuals;
        ctx.set_style(style);
    }

    /// Get theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(Theme::by_name("Light").name, "light");
        assert_eq!(Theme::by_name("dark").name, "dark");
        assert_eq!(Theme::by_name("solarized").name, "dark");
    }

    #[test]
    fn test_light_keeps_slideshow_colors() {
        let light = Theme::light();
        assert_eq!(light.accent, Theme::dark().accent);
        assert_eq!(light.frame, Color32::GOLD);
    }
}
