use std::time::Duration;

use crate::tween::{cubic_out, Tween};

/// One stacked background surface of the hero.
///
/// `offset` is a fraction of the hero width (0.0 is centered, 1.0 is fully
/// off-screen to the right). Placement is instant; `animate_to` starts one
/// tween per property and `update` reports one end signal for each tween
/// that finishes, the way a browser fires `transitionend` per property.
#[derive(Debug, Clone, Default)]
pub struct Layer {
    background: Option<String>,
    offset: f32,
    opacity: f32,

    tween_offset: Option<Tween>,
    tween_opacity: Option<Tween>,
}

impl Layer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_animating(&self) -> bool {
        self.tween_offset.is_some() || self.tween_opacity.is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    pub fn set_background(&mut self, background: &str) {
        self.background = Some(background.to_string());
    }

    /// Moves the layer without any transition.
    pub fn place(&mut self, offset: f32, opacity: f32) {
        self.tween_offset = None;
        self.tween_opacity = None;
        self.offset = offset;
        self.opacity = opacity;
    }

    /// Centered, transparent, not animating: ready to be the next incoming layer.
    pub fn reset(&mut self) {
        self.place(0.0, 0.0);
    }

    pub fn animate_to(&mut self, offset: f32, opacity: f32, duration: Duration) {
        self.tween_offset = Some(Tween::new(cubic_out, self.offset, offset, duration));
        self.tween_opacity = Some(Tween::new(cubic_out, self.opacity, opacity, duration));
    }

    /// Advances running tweens, returning how many finished during this call.
    pub fn update(&mut self, dt: Duration) -> usize {
        let mut ended = 0;

        if let Some(tween) = self.tween_offset.as_mut() {
            self.offset = tween.apply(dt);
            if tween.is_done() {
                self.offset = tween.target();
                self.tween_offset = None;
                ended += 1;
            }
        }
        if let Some(tween) = self.tween_opacity.as_mut() {
            self.opacity = tween.apply(dt);
            if tween.is_done() {
                self.opacity = tween.target();
                self.tween_opacity = None;
                ended += 1;
            }
        }

        ended
    }
}
