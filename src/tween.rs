use std::time::Duration;

pub type EaseFn = fn(f32) -> f32;

pub fn linear(t: f32) -> f32 {
    t
}

pub fn cubic_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Interpolates one value from `from` to `to` over `duration`.
#[derive(Debug, Clone)]
pub struct Tween {
    ease: EaseFn,
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
}

impl Tween {
    pub fn new(ease: EaseFn, from: f32, to: f32, duration: Duration) -> Self {
        Self { ease, from, to, duration, elapsed: Duration::ZERO }
    }

    /// Advances by `dt` and returns the current value.
    pub fn apply(&mut self, dt: Duration) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }

    pub fn value(&self) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * (self.ease)(t.clamp(0.0, 1.0))
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn target(&self) -> f32 {
        self.to
    }
}
