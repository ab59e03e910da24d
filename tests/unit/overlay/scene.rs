use super::*;
use crate::foundation::core::{CanvasSize, Vec2};
use crate::landmarks::model::{LandmarkPoint, SkinColor};

fn eye_at(cx: f64) -> EyeLandmarks {
    EyeLandmarks {
        outer: LandmarkPoint { x: cx - 0.05, y: 0.40 },
        inner: LandmarkPoint { x: cx + 0.05, y: 0.40 },
        top: LandmarkPoint { x: cx, y: 0.38 },
        bottom: LandmarkPoint { x: cx, y: 0.42 },
        iris: LandmarkPoint { x: cx, y: 0.40 },
    }
}

fn landmarks() -> Landmarks {
    Landmarks {
        left_eye: eye_at(0.25),
        right_eye: eye_at(0.75),
        skin_color: SkinColor {
            r: 224,
            g: 184,
            b: 160,
        },
    }
}

fn size() -> CanvasSize {
    CanvasSize {
        width: 200,
        height: 100,
    }
}

fn pose(eased_blink: f64, gaze: Vec2) -> FramePose {
    FramePose { eased_blink, gaze }
}

#[test]
fn fully_open_has_highlights_and_no_lids() {
    let scene = build_scene(&landmarks(), &pose(0.0, Vec2::ZERO), size());
    assert!(scene.lids.is_empty());
    assert_eq!(scene.highlights.len(), 2);
    assert!(!scene.is_empty());
}

#[test]
fn lids_appear_above_the_visibility_threshold() {
    let below = build_scene(&landmarks(), &pose(LID_MIN_PROGRESS, Vec2::ZERO), size());
    assert!(below.lids.is_empty());

    let above = build_scene(&landmarks(), &pose(0.02, Vec2::ZERO), size());
    assert_eq!(above.lids.len(), 2);
}

#[test]
fn highlights_vanish_at_the_cutoff() {
    let mid = build_scene(&landmarks(), &pose(0.5, Vec2::ZERO), size());
    assert_eq!(mid.highlights.len(), 2);
    assert_eq!(mid.lids.len(), 2);

    let closed = build_scene(&landmarks(), &pose(HIGHLIGHT_CUTOFF, Vec2::ZERO), size());
    assert!(closed.highlights.is_empty());
    assert_eq!(closed.lids.len(), 2);
}

#[test]
fn lid_geometry_matches_the_eye() {
    // Eye: 20px wide, 4px tall, centered at (50, 40) on a 200x100 canvas.
    let scene = build_scene(&landmarks(), &pose(0.5, Vec2::ZERO), size());
    let lid = &scene.lids[0];

    assert!((lid.center.x - 50.0).abs() < 1e-9);
    assert!((lid.center.y - 40.0).abs() < 1e-9);
    assert!((lid.rx - 20.0 * 0.58).abs() < 1e-9);
    assert!((lid.ry - 4.0 * 0.72 * 0.5).abs() < 1e-9);
}

#[test]
fn tiny_eyes_keep_minimum_lid_radii() {
    let lm = landmarks();
    let tiny = CanvasSize {
        width: 2,
        height: 2,
    };
    let scene = build_scene(&lm, &pose(0.02, Vec2::ZERO), tiny);
    for lid in &scene.lids {
        assert!(lid.rx >= 1.0);
        assert!(lid.ry >= 0.5);
    }
}

#[test]
fn highlight_tracks_iris_and_gaze() {
    let gaze = Vec2::new(2.0, -1.0);
    let scene = build_scene(&landmarks(), &pose(0.0, gaze), size());
    let hl = &scene.highlights[0];

    // spec radius: max(2, 20 * 0.11) = 2.2; center offset -0.6 * 2.2.
    let spec = 20.0f64 * 0.11;
    assert!((hl.center.x - (50.0 + 2.0 - spec * 0.6)).abs() < 1e-9);
    assert!((hl.center.y - (40.0 - 1.0 - spec * 0.6)).abs() < 1e-9);
    assert!((hl.glow_radius - spec * 1.8).abs() < 1e-9);
    assert!((hl.core_radius - spec * 0.55).abs() < 1e-9);
}

#[test]
fn highlight_opacity_fades_with_blink_progress() {
    let open = build_scene(&landmarks(), &pose(0.0, Vec2::ZERO), size());
    assert!((open.highlights[0].glow_alpha - 0.75).abs() < 1e-9);
    assert!((open.highlights[0].core_alpha - 0.9).abs() < 1e-9);

    let half = build_scene(&landmarks(), &pose(0.3, Vec2::ZERO), size());
    assert!((half.highlights[0].glow_alpha - 0.75 * 0.5).abs() < 1e-9);
    assert!((half.highlights[0].core_alpha - 0.9 * 0.5).abs() < 1e-9);
}

#[test]
fn scene_is_a_deterministic_function_of_its_inputs() {
    let a = build_scene(&landmarks(), &pose(0.37, Vec2::new(1.25, -0.5)), size());
    let b = build_scene(&landmarks(), &pose(0.37, Vec2::new(1.25, -0.5)), size());
    assert_eq!(a.lids, b.lids);
    assert_eq!(a.highlights, b.highlights);
    assert_eq!(a.skin, b.skin);
}
