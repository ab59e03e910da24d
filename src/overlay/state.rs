use crate::{
    animation::blink::BlinkState,
    animation::gaze::GazeState,
    foundation::core::{Millis, Vec2},
    foundation::math::DurationSource,
};

/// Per-frame animation sample handed to the compositor.
#[derive(Clone, Copy, Debug)]
pub struct FramePose {
    /// Eased blink closedness in `[0, 1]`.
    pub eased_blink: f64,
    /// Specular highlight offset in canvas pixels.
    pub gaze: Vec2,
}

/// Combined mutable animation state of one living portrait.
///
/// Created (or reset) when the portrait image finishes loading; advanced once
/// per animation frame; never shared outside its renderer instance.
#[derive(Clone, Debug)]
pub struct OverlayState {
    blink: BlinkState,
    gaze: GazeState,
}

impl OverlayState {
    /// Initial state at `now`: eye open, gaze at rest.
    pub fn new(now: Millis, timing: &mut dyn DurationSource) -> Self {
        Self {
            blink: BlinkState::new(now, timing),
            gaze: GazeState::new(now, timing),
        }
    }

    /// Advance both signals for this frame and sample the resulting pose.
    ///
    /// Gaze steps first, then blink; both are driven by the same timestamp,
    /// sharing the host's monotonic frame clock.
    pub fn tick(&mut self, now: Millis, timing: &mut dyn DurationSource) -> FramePose {
        self.gaze.advance(now, timing);
        self.blink.advance(now, timing);
        FramePose {
            eased_blink: self.blink.eased_progress(now),
            gaze: self.gaze.offset(),
        }
    }

    /// Blink machine, for phase queries.
    pub fn blink(&self) -> &BlinkState {
        &self.blink
    }

    /// Gaze pursuit state.
    pub fn gaze(&self) -> &GazeState {
        &self.gaze
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/state.rs"]
mod tests;
