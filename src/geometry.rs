//! Hero layout in render-target pixels: background cover fit and the dot row.

use crate::constants::{RENDER_HEIGHT, RENDER_WIDTH};

pub const DOT_RADIUS: f32 = 9.0;
pub const DOT_SPACING: f32 = 36.0;
pub const DOT_ROW_BOTTOM: f32 = 90.0; // Distance of the dot row from the bottom edge

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Destination of a background scaled to cover the whole hero, shifted by
/// `offset` hero widths.
pub fn cover_rect(texture_width: f32, texture_height: f32, offset: f32) -> Rect {
    let (w, h) = (RENDER_WIDTH as f32, RENDER_HEIGHT as f32);
    if texture_width <= 0.0 || texture_height <= 0.0 {
        return Rect { x: offset * w, y: 0.0, width: w, height: h };
    }
    let scale = (w / texture_width).max(h / texture_height);
    let width = texture_width * scale;
    let height = texture_height * scale;
    Rect { x: (w - width) * 0.5 + offset * w, y: (h - height) * 0.5, width, height }
}

/// Centers of the `count` dots, a row centered horizontally.
pub fn dot_centers(count: usize) -> Vec<(f32, f32)> {
    let row_width = DOT_SPACING * count.saturating_sub(1) as f32;
    let start_x = (RENDER_WIDTH as f32 - row_width) * 0.5;
    let y = RENDER_HEIGHT as f32 - DOT_ROW_BOTTOM;
    (0..count).map(|i| (start_x + DOT_SPACING * i as f32, y)).collect()
}

/// Index of the dot under `(x, y)`, with a slightly generous hit radius.
pub fn dot_at(count: usize, x: f32, y: f32) -> Option<usize> {
    let hit = DOT_RADIUS * 1.6;
    dot_centers(count)
        .iter()
        .position(|&(cx, cy)| (x - cx).powi(2) + (y - cy).powi(2) <= hit * hit)
}
