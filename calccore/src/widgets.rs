//! Custom widgets — pure black and white, dithered overlays

use egui::{Response, Ui, Widget};

use crate::dither;
use crate::theme::SlowColors;

/// How a key sets itself apart from plain digit keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyAccent {
    /// White key, 1px outline.
    #[default]
    Plain,
    /// Heavier 2px outline.
    Bold,
    /// Black key, white label.
    Inverted,
    /// Dithered inner border.
    Framed,
}

/// A fixed-size keypad button: white bg, 1px outline, dithered when pressed or selected.
pub struct KeypadButton<'a> {
    label: &'a str,
    size: egui::Vec2,
    accent: KeyAccent,
    selected: bool,
}

impl<'a> KeypadButton<'a> {
    pub fn new(label: &'a str, size: egui::Vec2) -> Self {
        Self {
            label,
            size,
            accent: KeyAccent::Plain,
            selected: false,
        }
    }

    pub fn accent(mut self, accent: KeyAccent) -> Self {
        self.accent = accent;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl<'a> Widget for KeypadButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            let (fill, mut text_color) = match self.accent {
                KeyAccent::Inverted => (SlowColors::BLACK, SlowColors::WHITE),
                _ => (SlowColors::WHITE, SlowColors::BLACK),
            };
            let stroke_width = if self.accent == KeyAccent::Bold { 2.0 } else { 1.0 };

            painter.rect_filled(rect, 0.0, fill);
            painter.rect_stroke(rect, 0.0, egui::Stroke::new(stroke_width, SlowColors::BLACK));
            if self.accent == KeyAccent::Framed {
                dither::draw_dither_outline(painter, rect.shrink(3.0), 2.0);
            }

            let pressed = response.is_pointer_button_down_on() || self.selected;
            if pressed && self.accent != KeyAccent::Inverted {
                dither::draw_dither_selection(painter, rect.shrink(stroke_width));
                text_color = SlowColors::WHITE;
            } else if response.hovered() && self.accent != KeyAccent::Inverted {
                dither::draw_dither_hover(painter, rect.shrink(stroke_width));
            }

            let font = ui
                .style()
                .text_styles
                .get(&egui::TextStyle::Button)
                .cloned()
                .unwrap_or_else(|| egui::FontId::proportional(20.0));
            painter.text(rect.center(), egui::Align2::CENTER_CENTER, self.label, font, text_color);
        }

        response
    }
}
