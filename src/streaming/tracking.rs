//! Tracked position that drives streaming decisions

use glam::Vec3;

/// Minimum displacement that counts as movement
pub const POSITION_EPSILON: f32 = 0.1;

/// Moving reference point (usually the player) with change detection.
///
/// A sample only counts as a change once it is more than
/// [`POSITION_EPSILON`] away from the last reported position, so jitter
/// below the threshold never reaches the streamer.
#[derive(Clone, Copy, Debug)]
pub struct TrackedPosition {
    position: Vec3,
    reported: bool,
    epsilon: f32,
}

impl TrackedPosition {
    /// Create a tracker that has not reported any position yet
    pub fn new(initial: Vec3) -> Self {
        Self {
            position: initial,
            reported: false,
            epsilon: POSITION_EPSILON,
        }
    }

    /// Override the change threshold
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon.max(0.0);
        self
    }

    /// Feed a new sample. Returns the position when it counts as a change.
    ///
    /// The first sample always reports.
    pub fn sample(&mut self, pos: Vec3) -> Option<Vec3> {
        if self.reported && pos.distance(self.position) <= self.epsilon {
            return None;
        }
        self.position = pos;
        self.reported = true;
        Some(pos)
    }

    /// Last reported position
    pub fn position(&self) -> Vec3 {
        self.position
    }
}
