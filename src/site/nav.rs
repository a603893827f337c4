use crate::constants::HEADER_SCROLL_THRESHOLD;

/// Mobile navigation drawer (the body-level `nav-open` class).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn backdrop_click(&mut self) {
        self.open = false;
    }

    pub fn link_click(&mut self) {
        self.open = false;
    }
}

/// Site header that switches to its compact style once the page scrolls.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeaderBar {
    scrolled: bool,
}

impl HeaderBar {
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn on_scroll(&mut self, y: f32) {
        self.scrolled = y > HEADER_SCROLL_THRESHOLD;
    }
}
