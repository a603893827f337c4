use crate::constants::HEADER_HEIGHT;

/// Initial scroll position on load, instead of the browser-restored one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollNormalizer {
    header_height: f32,
}

impl Default for ScrollNormalizer {
    fn default() -> Self {
        Self { header_height: HEADER_HEIGHT }
    }
}

impl ScrollNormalizer {
    pub fn new(header_height: f32) -> Self {
        Self { header_height }
    }

    /// Top of the page, or the tab-menu anchor minus the fixed header.
    pub fn initial_offset(&self, anchor_top: Option<f32>) -> f32 {
        match anchor_top {
            Some(top) => (top - self.header_height).max(0.0),
            None => 0.0,
        }
    }
}
