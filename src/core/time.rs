//! Simulation timing: frame clock and cooperative delays
//!
//! Nothing here reads the wall clock. Time only moves when the owner of a
//! clock or delay feeds it a frame delta, which keeps every wait in the
//! spawner reproducible under test.

/// Accumulates simulated time handed in by the frame loop
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct FrameClock {
    elapsed: f64,
    frame_count: u64,
    last_delta: f32,
}

impl FrameClock {
    /// Create a clock at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Call once per frame with the frame delta in seconds
    pub fn tick(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.elapsed += dt as f64;
        self.frame_count += 1;
        self.last_delta = dt;
    }

    /// Total simulated seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed
    }

    /// Delta of the most recent tick
    pub fn delta_secs(&self) -> f32 {
        self.last_delta
    }

    /// Number of ticks so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// A countdown that is resumed once per frame from a shared time budget.
///
/// A frame's delta is treated as a budget. Each expiring delay takes what
/// it needs and leaves the surplus for the next step of the same task, so a
/// long frame catches up on several short waits in order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Delay {
    remaining: f32,
}

impl Delay {
    /// Create a delay of `secs` seconds (negative is treated as zero)
    pub fn new(secs: f32) -> Self {
        Self {
            remaining: secs.max(0.0),
        }
    }

    /// A delay that has already elapsed
    pub fn expired() -> Self {
        Self { remaining: 0.0 }
    }

    /// Consume time from `budget`. Returns true once the delay has run out,
    /// leaving any unused time in `budget`.
    pub fn advance(&mut self, budget: &mut f32) -> bool {
        if self.remaining <= *budget {
            *budget -= self.remaining;
            self.remaining = 0.0;
            true
        } else {
            self.remaining -= *budget;
            *budget = 0.0;
            false
        }
    }

    /// Seconds left before expiry
    #[inline]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Whether the delay has run out
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }
}
