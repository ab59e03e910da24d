use crate::{
    foundation::core::{Millis, Vec2},
    foundation::math::DurationSource,
};

/// Fraction of the remaining distance covered toward the target each frame.
///
/// Exponential decay rather than timed interpolation: it decelerates
/// naturally without tracking a start time or duration per movement. The
/// step is per frame, matching the displayed refresh cadence.
pub const GAZE_PURSUIT: f64 = 0.04;

// Target offsets around the iris resting position, in canvas pixels.
// Horizontal range is wider than vertical, matching natural eye movement.
const GAZE_RANGE_X: f64 = 3.5;
const GAZE_RANGE_Y: f64 = 1.5;

const FIRST_GAZE_INTERVAL_MS: (f64, f64) = (1500.0, 3500.0);
const NEXT_GAZE_INTERVAL_MS: (f64, f64) = (1500.0, 4000.0);

/// Exponentially-smoothed pursuit of a periodically re-randomized target.
///
/// Deliberately independent of the blink machine: gaze and blinking are
/// separate signals and must be able to overlap freely.
#[derive(Clone, Debug)]
pub struct GazeState {
    offset: Vec2,
    target: Vec2,
    last_change: Millis,
    next_change_in: f64,
}

impl GazeState {
    /// Initial state at `now`: gaze resting at the iris position.
    pub fn new(now: Millis, timing: &mut dyn DurationSource) -> Self {
        Self {
            offset: Vec2::ZERO,
            target: Vec2::ZERO,
            last_change: now,
            next_change_in: timing.sample(FIRST_GAZE_INTERVAL_MS.0, FIRST_GAZE_INTERVAL_MS.1),
        }
    }

    /// Current interpolated pixel offset for the specular highlight.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Target the pursuit is converging toward.
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Retarget if due, then take one pursuit step toward the target.
    pub fn advance(&mut self, now: Millis, timing: &mut dyn DurationSource) {
        if now - self.last_change > self.next_change_in {
            self.target = Vec2::new(
                timing.sample(-GAZE_RANGE_X, GAZE_RANGE_X),
                timing.sample(-GAZE_RANGE_Y, GAZE_RANGE_Y),
            );
            self.last_change = now;
            self.next_change_in = timing.sample(NEXT_GAZE_INTERVAL_MS.0, NEXT_GAZE_INTERVAL_MS.1);
        }
        self.offset += (self.target - self.offset) * GAZE_PURSUIT;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/gaze.rs"]
mod tests;
