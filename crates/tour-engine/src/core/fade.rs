//! Fixed-duration fade timer.
//!
//! The engine does not render the fade; it only counts it down so a
//! scheduled transition commits at the right moment. The tick loop keeps
//! running while the timer does.

/// Counts up to a fixed duration. A zero-duration timer finishes on its
/// first tick.
#[derive(Debug, Clone)]
pub struct FadeTimer {
    elapsed: f32,
    duration: f32,
}

impl FadeTimer {
    pub fn new(duration: f32) -> Self {
        Self {
            elapsed: 0.0,
            duration: duration.max(0.0),
        }
    }

    /// Advance by `dt`. Returns true once the duration is reached.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.finished()
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Normalized progress [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }
}
