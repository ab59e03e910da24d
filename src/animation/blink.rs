use crate::{
    animation::ease::Ease,
    foundation::core::Millis,
    foundation::math::DurationSource,
};

/// Duration of the `Closing` phase.
pub const BLINK_CLOSE_MS: f64 = 80.0;
/// Hold duration of the fully `Closed` phase.
pub const BLINK_CLOSED_MS: f64 = 60.0;
/// Duration of the `Opening` phase.
pub const BLINK_OPEN_MS: f64 = 120.0;

// Randomized delay until the next blink fires from `Open`. The first delay
// after a reset uses a slightly narrower range than the steady-state one.
const FIRST_BLINK_DELAY_MS: (f64, f64) = (2500.0, 5500.0);
const NEXT_BLINK_DELAY_MS: (f64, f64) = (2500.0, 6000.0);

/// Phase of the cyclic blink state machine.
///
/// Transitions strictly follow `Open -> Closing -> Closed -> Opening -> Open`;
/// no phase is skipped and no phase regresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlinkPhase {
    /// Eye fully open, waiting out the randomized inter-blink delay.
    Open,
    /// Lid travelling down.
    Closing,
    /// Lid fully closed, holding.
    Closed,
    /// Lid travelling back up.
    Opening,
}

/// Blink timing state advanced once per animation frame.
///
/// Every transition is driven by elapsed time since the phase's own start
/// timestamp, so the four durations are independently tunable and progress is
/// never measured against a stale origin.
#[derive(Clone, Debug)]
pub struct BlinkState {
    phase: BlinkPhase,
    blink_start: Millis,
    last_blink_end: Millis,
    next_blink_delay: f64,
}

impl BlinkState {
    /// Initial state at `now`, eye open.
    ///
    /// `last_blink_end` is seated at `now` so a freshly reset face waits a
    /// full randomized delay before its first blink.
    pub fn new(now: Millis, timing: &mut dyn DurationSource) -> Self {
        Self {
            phase: BlinkPhase::Open,
            blink_start: now,
            last_blink_end: now,
            next_blink_delay: timing.sample(FIRST_BLINK_DELAY_MS.0, FIRST_BLINK_DELAY_MS.1),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> BlinkPhase {
        self.phase
    }

    /// True while the lid is anywhere but fully open.
    pub fn is_blinking(&self) -> bool {
        self.phase != BlinkPhase::Open
    }

    /// Advance at most one transition for this frame's timestamp.
    pub fn advance(&mut self, now: Millis, timing: &mut dyn DurationSource) {
        match self.phase {
            BlinkPhase::Open => {
                if now - self.last_blink_end > self.next_blink_delay {
                    self.phase = BlinkPhase::Closing;
                    self.blink_start = now;
                    // Drawn now for the *following* cycle, so blinks stay
                    // irregular rather than metronomic.
                    self.next_blink_delay =
                        timing.sample(NEXT_BLINK_DELAY_MS.0, NEXT_BLINK_DELAY_MS.1);
                }
            }
            BlinkPhase::Closing => {
                if now - self.blink_start >= BLINK_CLOSE_MS {
                    self.phase = BlinkPhase::Closed;
                    self.blink_start = now;
                }
            }
            BlinkPhase::Closed => {
                if now - self.blink_start >= BLINK_CLOSED_MS {
                    self.phase = BlinkPhase::Opening;
                    self.blink_start = now;
                }
            }
            BlinkPhase::Opening => {
                if now - self.blink_start >= BLINK_OPEN_MS {
                    self.phase = BlinkPhase::Open;
                    self.last_blink_end = now;
                }
            }
        }
    }

    /// Raw closedness in `[0, 1]`: 0 while open, rising through `Closing`,
    /// pinned at 1 while `Closed`, falling through `Opening`.
    pub fn progress(&self, now: Millis) -> f64 {
        match self.phase {
            BlinkPhase::Open => 0.0,
            BlinkPhase::Closing => ((now - self.blink_start) / BLINK_CLOSE_MS).clamp(0.0, 1.0),
            BlinkPhase::Closed => 1.0,
            BlinkPhase::Opening => {
                1.0 - ((now - self.blink_start) / BLINK_OPEN_MS).clamp(0.0, 1.0)
            }
        }
    }

    /// [`Self::progress`] through the symmetric quadratic in-out curve.
    pub fn eased_progress(&self, now: Millis) -> f64 {
        Ease::InOutQuad.apply(self.progress(now))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/blink.rs"]
mod tests;
