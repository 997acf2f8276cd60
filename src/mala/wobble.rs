pub const WOBBLE_LIMIT_DEG: f64 = 5.0;
pub const WOBBLE_STEP_DEG: f64 = 0.1;

/// Slow back-and-forth rotation of the whole ring while it is on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wobble {
    degrees: f64,
    direction: f64,
}

impl Default for Wobble {
    fn default() -> Self {
        Self {
            degrees: 0.0,
            direction: 1.0,
        }
    }
}

impl Wobble {
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Advance one frame and return the new angle.
    pub fn step(&mut self) -> f64 {
        self.degrees += WOBBLE_STEP_DEG * self.direction;
        if self.degrees >= WOBBLE_LIMIT_DEG {
            self.degrees = WOBBLE_LIMIT_DEG;
            self.direction = -1.0;
        } else if self.degrees <= -WOBBLE_LIMIT_DEG {
            self.degrees = -WOBBLE_LIMIT_DEG;
            self.direction = 1.0;
        }
        self.degrees
    }
}
