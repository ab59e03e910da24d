//! Vivify turns a static generated portrait into a "living" face.
//!
//! Given the portrait's detected facial landmarks, it animates eye blinking
//! and gaze drift and produces a transparent overlay frame (`FrameRGBA`) for
//! the host to composite pixel-aligned over the displayed image.
//!
//! # Pipeline overview
//!
//! 1. **Detect**: a [`LandmarkProvider`] asynchronously returns [`Landmarks`]
//!    for a base64 portrait; stale or failed responses are discarded.
//! 2. **Tick**: [`OverlayState`] advances the blink state machine and the
//!    gaze pursuit once per frame, yielding a [`FramePose`].
//! 3. **Build**: [`build_scene`] derives eyelid ellipses and specular
//!    highlights as a pure function of landmarks, pose, and canvas size.
//! 4. **Render**: [`OverlaySurface`] rasterizes the scene (CPU backend) into
//!    a premultiplied RGBA8 frame.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic drawing**: only blink/gaze *scheduling* is randomized,
//!   via an injectable [`DurationSource`]; all geometry and pixels are pure
//!   functions of state and landmarks.
//! - **Host-driven scheduling**: the host calls [`OverlayRenderer::frame`]
//!   once per display refresh; the frame path never stops the loop itself.
//! - **Graceful degradation**: a failed or slow detection simply means no
//!   overlay; the static portrait stays fully usable.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod animation;
mod foundation;
mod landmarks;
mod overlay;
mod render;

pub use animation::blink::{
    BLINK_CLOSE_MS, BLINK_CLOSED_MS, BLINK_OPEN_MS, BlinkPhase, BlinkState,
};
pub use animation::ease::Ease;
pub use animation::gaze::{GAZE_PURSUIT, GazeState};
pub use foundation::core::{CanvasSize, Millis, Point, Rgb8, Vec2};
pub use foundation::error::{VivifyError, VivifyResult};
pub use foundation::math::{DurationSource, Rng64};
pub use landmarks::fetch::{LandmarkProvider, PendingFetch};
pub use landmarks::model::{EyeLandmarks, LandmarkPoint, Landmarks, SkinColor};
pub use landmarks::slot::{FetchToken, LandmarkSlot};
pub use overlay::renderer::OverlayRenderer;
pub use overlay::scene::{
    HIGHLIGHT_CUTOFF, LID_MIN_PROGRESS, LidEllipse, OverlayScene, SpecularHighlight, build_scene,
};
pub use overlay::state::{FramePose, OverlayState};
pub use render::surface::{FrameRGBA, OverlaySurface};
