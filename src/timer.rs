use std::time::Duration;

/// Frame-driven timer. Advanced explicitly with `tick`, never by a clock.
#[derive(Debug, Clone)]
pub struct Timer {
    period: Duration,
    elapsed: Duration,
    repeating: bool,
    finished: bool,
}

impl Timer {
    pub fn once(delay: Duration) -> Self {
        Self { period: delay, elapsed: Duration::ZERO, repeating: false, finished: false }
    }

    pub fn repeating(period: Duration) -> Self {
        Self { period, elapsed: Duration::ZERO, repeating: true, finished: false }
    }

    /// Advances the timer, returning true when it fires during this tick.
    /// A repeating timer fires at most once per tick and keeps the remainder.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.finished {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed < self.period {
            return false;
        }

        if self.repeating && !self.period.is_zero() {
            self.elapsed -= self.period;
            // Drop whole periods skipped by a very long frame
            while self.elapsed >= self.period {
                self.elapsed -= self.period;
            }
        } else {
            self.finished = true;
        }
        true
    }

    pub fn remaining(&self) -> Duration {
        if self.finished { Duration::ZERO } else { self.period.saturating_sub(self.elapsed) }
    }
}
