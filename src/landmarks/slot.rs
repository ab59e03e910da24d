use crate::{foundation::error::VivifyResult, landmarks::model::Landmarks};

/// Identifies one issued landmark request.
///
/// Only the result carrying the most recently issued token is ever accepted,
/// so an in-flight fetch for a previous portrait can never overwrite the
/// landmarks of the portrait that replaced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchToken(u64);

/// Generation-guarded holder for the latest accepted landmarks.
///
/// Owned exclusively by one renderer instance. `begin` both clears the stored
/// value (stale eyes are never drawn onto a new face) and invalidates every
/// outstanding token.
#[derive(Debug, Default)]
pub struct LandmarkSlot {
    generation: u64,
    landmarks: Option<Landmarks>,
}

impl LandmarkSlot {
    /// Empty slot; no request issued yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request generation, clearing any stored landmarks.
    pub fn begin(&mut self) -> FetchToken {
        self.generation += 1;
        self.landmarks = None;
        FetchToken(self.generation)
    }

    /// Deliver a fetch outcome. Returns true only if it was stored.
    ///
    /// Stale tokens are discarded silently. Failures and invalid payloads are
    /// logged and leave the slot empty for this generation; the overlay
    /// simply never appears and the static portrait stays usable.
    pub fn resolve(&mut self, token: FetchToken, result: VivifyResult<Landmarks>) -> bool {
        if token.0 != self.generation {
            tracing::debug!(token = token.0, current = self.generation, "stale landmark response discarded");
            return false;
        }
        match result {
            Ok(landmarks) => {
                if let Err(err) = landmarks.validate() {
                    tracing::warn!(%err, "landmark payload rejected");
                    return false;
                }
                self.landmarks = Some(landmarks);
                true
            }
            Err(err) => {
                tracing::warn!(%err, "landmark detection failed");
                false
            }
        }
    }

    /// Latest accepted landmarks, if any.
    pub fn get(&self) -> Option<&Landmarks> {
        self.landmarks.as_ref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/landmarks/slot.rs"]
mod tests;
