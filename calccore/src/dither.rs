//! Dither pattern drawing for e-ink style overlays.
//!
//! Instead of opaque black boxes, we draw a checkerboard dither
//! pattern so the key label stays readable under press and hover states.

use egui::{Color32, Painter, Pos2, Rect};

/// Pixel origins of a checkerboard over `rect`.
///
/// `density` controls spacing: 1 = every other pixel, 2 = sparser, and so on.
/// Bounds are clamped inward once so every yielded pixel lies inside `rect`.
pub fn dither_cells(rect: Rect, density: u32) -> impl Iterator<Item = Pos2> {
    let density = density.max(1) as i32;

    let x0 = rect.min.x.ceil() as i32;
    let y0 = rect.min.y.ceil() as i32;
    let x1 = rect.max.x.floor() as i32;
    let y1 = rect.max.y.floor() as i32;

    let y_step = density as usize;
    let x_step = (density * 2) as usize;

    (y0..y1.max(y0)).step_by(y_step).flat_map(move |y| {
        let row_offset = if ((y - y0) / density) % 2 == 0 { 0 } else { density };
        ((x0 + row_offset)..x1.max(x0))
            .step_by(x_step)
            .map(move |x| Pos2::new(x as f32, y as f32))
    })
}

/// Draw a checkerboard dither pattern over a rectangle.
pub fn draw_dither_rect(painter: &Painter, rect: Rect, color: Color32, density: u32) {
    let pixel = egui::Vec2::splat(1.0);
    for cell in dither_cells(rect, density) {
        painter.rect_filled(Rect::from_min_size(cell, pixel), 0.0, color);
    }
}

/// Tight 1px checkerboard used for pressed and selected keys.
pub fn draw_dither_selection(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, Color32::BLACK, 1);
}

/// Lighter dither for hover states.
pub fn draw_dither_hover(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, Color32::BLACK, 2);
}

/// Dithered border of `thickness` pixels, interior left untouched.
pub fn draw_dither_outline(painter: &Painter, rect: Rect, thickness: f32) {
    let top = Rect::from_min_size(rect.min, egui::vec2(rect.width(), thickness));
    let bottom = Rect::from_min_size(
        Pos2::new(rect.min.x, rect.max.y - thickness),
        egui::vec2(rect.width(), thickness),
    );
    let side_height = rect.height() - thickness * 2.0;
    let left = Rect::from_min_size(
        Pos2::new(rect.min.x, rect.min.y + thickness),
        egui::vec2(thickness, side_height),
    );
    let right = Rect::from_min_size(
        Pos2::new(rect.max.x - thickness, rect.min.y + thickness),
        egui::vec2(thickness, side_height),
    );
    for edge in [top, bottom, left, right] {
        draw_dither_rect(painter, edge, Color32::BLACK, 1);
    }
}
