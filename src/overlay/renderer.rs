use std::sync::Arc;

use crate::{
    foundation::core::{CanvasSize, Millis},
    foundation::error::VivifyResult,
    foundation::math::{DurationSource, Rng64},
    landmarks::fetch::{LandmarkProvider, PendingFetch},
    landmarks::model::Landmarks,
    landmarks::slot::LandmarkSlot,
    overlay::scene::build_scene,
    overlay::state::OverlayState,
    render::surface::{FrameRGBA, OverlaySurface},
};

/// The living-portrait component.
///
/// Owns all animation state, the landmark slot, and the rasterization
/// surface; nothing here is shared with other instances. The host owns the
/// scheduling primitive (rAF, a game-loop timer) and calls [`Self::frame`]
/// once per display refresh; the frame path never stops the loop itself, only
/// [`Self::teardown`] does.
pub struct OverlayRenderer {
    state: Option<OverlayState>,
    timing: Box<dyn DurationSource>,
    slot: LandmarkSlot,
    pending: Option<PendingFetch>,
    size: CanvasSize,
    surface: OverlaySurface,
    running: bool,
}

impl OverlayRenderer {
    /// Renderer with the default SplitMix64 timing source.
    pub fn new(seed: u64) -> Self {
        Self::with_timing(Box::new(Rng64::new(seed)))
    }

    /// Renderer with an injected timing source (deterministic in tests).
    pub fn with_timing(timing: Box<dyn DurationSource>) -> Self {
        Self {
            state: None,
            timing,
            slot: LandmarkSlot::new(),
            pending: None,
            size: CanvasSize::default(),
            surface: OverlaySurface::new(),
            running: false,
        }
    }

    /// The portrait image finished loading (or was already loaded at mount).
    ///
    /// Resynchronizes the canvas size to the rendered image, resets the
    /// animation state to initial values, and (re)starts frame production.
    pub fn image_loaded(&mut self, size: CanvasSize, now: Millis) {
        self.size = size;
        self.state = Some(OverlayState::new(now, self.timing.as_mut()));
        self.running = true;
    }

    /// The viewport resized: resynchronize dimensions only, keep state.
    pub fn resized(&mut self, size: CanvasSize) {
        self.size = size;
    }

    /// The portrait payload changed: drop current landmarks immediately and
    /// issue a fresh detection request.
    ///
    /// A previous request still in flight is abandoned; even if its worker
    /// resolves first, its token no longer matches and the slot discards it.
    pub fn set_portrait(&mut self, provider: &Arc<dyn LandmarkProvider>, image_base64: &str) {
        let token = self.slot.begin();
        self.pending = Some(PendingFetch::spawn(
            Arc::clone(provider),
            image_base64.to_owned(),
            token,
        ));
    }

    /// Stop producing frames and abandon any in-flight fetch.
    pub fn teardown(&mut self) {
        self.running = false;
        self.pending = None;
    }

    /// True between [`Self::image_loaded`] and [`Self::teardown`].
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Latest accepted landmarks, if detection has resolved.
    pub fn landmarks(&self) -> Option<&Landmarks> {
        self.slot.get()
    }

    /// Produce one overlay frame for the host's frame timestamp.
    ///
    /// `Ok(None)` means "nothing to composite this frame, keep scheduling":
    /// the renderer is torn down or not yet started, or the canvas has no
    /// extent yet. Once the canvas is live, a frame is always returned; with
    /// landmarks still absent it is fully transparent and the animation state
    /// does not advance.
    #[tracing::instrument(skip(self))]
    pub fn frame(&mut self, now: Millis) -> VivifyResult<Option<FrameRGBA>> {
        self.poll_pending();

        if !self.running {
            return Ok(None);
        }
        let Some(state) = self.state.as_mut() else {
            return Ok(None);
        };
        if self.size.is_zero() {
            return Ok(None);
        }

        self.surface.ensure_size(self.size)?;

        let Some(landmarks) = self.slot.get() else {
            return Ok(Some(self.surface.render(&Default::default())?));
        };

        let pose = state.tick(now, self.timing.as_mut());
        let scene = build_scene(landmarks, &pose, self.size);
        Ok(Some(self.surface.render(&scene)?))
    }

    fn poll_pending(&mut self) {
        let Some(pending) = self.pending.as_ref() else {
            return;
        };
        if let Some(result) = pending.poll() {
            let token = pending.token();
            self.pending = None;
            self.slot.resolve(token, result);
        }
    }

    #[cfg(test)]
    pub(crate) fn inject_pending(&mut self) -> std::sync::mpsc::Sender<VivifyResult<Landmarks>> {
        let token = self.slot.begin();
        let (pending, tx) = PendingFetch::channel(token);
        self.pending = Some(pending);
        tx
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/renderer.rs"]
mod tests;
