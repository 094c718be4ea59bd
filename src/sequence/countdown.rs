//! One-shot countdown timer advanced explicitly by the frame loop.

/// Fires once after `delay` seconds of ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct Countdown {
    remaining: f32,
    fired: bool,
}

impl Countdown {
    /// Arm a countdown. Negative delays are treated as zero.
    #[must_use]
    pub fn new(delay: f32) -> Self {
        Self {
            remaining: delay.max(0.0),
            fired: false,
        }
    }

    /// Advance by `delta` seconds. Returns `true` on the tick that
    /// exhausts the delay, and never again afterwards.
    pub fn tick(&mut self, delta: f32) -> bool {
        if self.fired {
            return false;
        }
        self.remaining -= delta.max(0.0);
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.fired = true;
            return true;
        }
        false
    }

    /// Seconds left before firing.
    #[must_use]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
