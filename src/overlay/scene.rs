use crate::{
    foundation::core::{CanvasSize, Point, Rgb8},
    landmarks::model::{EyeLandmarks, Landmarks},
    overlay::state::FramePose,
};

/// Below this eased progress the lid occlusion is invisible and skipped.
pub const LID_MIN_PROGRESS: f64 = 0.01;
/// At or above this eased progress the highlight has fully faded out.
pub const HIGHLIGHT_CUTOFF: f64 = 0.6;

const LID_RX_SCALE: f64 = 0.58;
const LID_RY_SCALE: f64 = 0.72;
const LID_MIN_RX: f64 = 1.0;
const LID_MIN_RY: f64 = 0.5;

const SPEC_RADIUS_SCALE: f64 = 0.11;
const SPEC_RADIUS_MIN: f64 = 2.0;
const SPEC_OFFSET_SCALE: f64 = 0.6;
const GLOW_RADIUS_SCALE: f64 = 1.8;
const CORE_RADIUS_SCALE: f64 = 0.55;
const GLOW_ALPHA: f64 = 0.75;
const CORE_ALPHA: f64 = 0.9;

/// Skin-colored ellipse progressively covering one eye during a blink.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LidEllipse {
    /// Ellipse center in canvas pixels.
    pub center: Point,
    /// Horizontal radius.
    pub rx: f64,
    /// Vertical radius, scaled by eased blink progress.
    pub ry: f64,
}

/// Specular glint over one iris: a soft radial glow plus a bright core.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpecularHighlight {
    /// Highlight center in canvas pixels, gaze offset applied.
    pub center: Point,
    /// Radius of the outer glow (gradient fading to transparent).
    pub glow_radius: f64,
    /// Radius of the inner bright point.
    pub core_radius: f64,
    /// Peak opacity of the glow, already faded by blink progress.
    pub glow_alpha: f64,
    /// Opacity of the core, already faded by blink progress.
    pub core_alpha: f64,
}

/// Everything one frame draws: a deterministic function of landmarks,
/// animation pose, and canvas size. No randomness enters here.
#[derive(Clone, Debug, Default)]
pub struct OverlayScene {
    /// Eyelid fill color (the portrait's detected skin tone).
    pub skin: Option<Rgb8>,
    /// Zero or two lid ellipses.
    pub lids: Vec<LidEllipse>,
    /// Zero or two specular highlights.
    pub highlights: Vec<SpecularHighlight>,
}

impl OverlayScene {
    /// True when the frame is a bare clear.
    pub fn is_empty(&self) -> bool {
        self.lids.is_empty() && self.highlights.is_empty()
    }
}

/// Build the frame's scene.
///
/// Lids appear once eased progress clears [`LID_MIN_PROGRESS`]; highlights
/// fade linearly and vanish at [`HIGHLIGHT_CUTOFF`]. Mid-blink both are
/// present at once.
pub fn build_scene(landmarks: &Landmarks, pose: &FramePose, size: CanvasSize) -> OverlayScene {
    let mut scene = OverlayScene {
        skin: Some(landmarks.skin_color.into()),
        ..OverlayScene::default()
    };

    if pose.eased_blink > LID_MIN_PROGRESS {
        for eye in landmarks.eyes() {
            scene.lids.push(lid_for_eye(eye, pose.eased_blink, size));
        }
    }

    if pose.eased_blink < HIGHLIGHT_CUTOFF {
        let fade = 1.0 - pose.eased_blink / HIGHLIGHT_CUTOFF;
        for eye in landmarks.eyes() {
            scene.highlights.push(highlight_for_eye(eye, pose, fade, size));
        }
    }

    scene
}

fn lid_for_eye(eye: &EyeLandmarks, eased_blink: f64, size: CanvasSize) -> LidEllipse {
    LidEllipse {
        center: eye.center_px(size),
        rx: (eye.width_px(size) * LID_RX_SCALE).max(LID_MIN_RX),
        ry: (eye.aperture_px(size) * LID_RY_SCALE * eased_blink).max(LID_MIN_RY),
    }
}

fn highlight_for_eye(
    eye: &EyeLandmarks,
    pose: &FramePose,
    fade: f64,
    size: CanvasSize,
) -> SpecularHighlight {
    let spec_radius = (eye.width_px(size) * SPEC_RADIUS_SCALE).max(SPEC_RADIUS_MIN);
    let iris = eye.iris_px(size);
    // Offset toward the upper-left of the iris, where a light source usually
    // reads as natural.
    let center = Point::new(
        iris.x + pose.gaze.x - spec_radius * SPEC_OFFSET_SCALE,
        iris.y + pose.gaze.y - spec_radius * SPEC_OFFSET_SCALE,
    );
    SpecularHighlight {
        center,
        glow_radius: spec_radius * GLOW_RADIUS_SCALE,
        core_radius: spec_radius * CORE_RADIUS_SCALE,
        glow_alpha: GLOW_ALPHA * fade,
        core_alpha: CORE_ALPHA * fade,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/scene.rs"]
mod tests;
