use super::*;
use crate::landmarks::model::{EyeLandmarks, LandmarkPoint, Landmarks, SkinColor};
use crate::landmarks::slot::LandmarkSlot;
use std::time::{Duration, Instant};

fn eye_at(cx: f64) -> EyeLandmarks {
    EyeLandmarks {
        outer: LandmarkPoint { x: cx - 0.05, y: 0.40 },
        inner: LandmarkPoint { x: cx + 0.05, y: 0.40 },
        top: LandmarkPoint { x: cx, y: 0.38 },
        bottom: LandmarkPoint { x: cx, y: 0.42 },
        iris: LandmarkPoint { x: cx, y: 0.40 },
    }
}

fn detector_output() -> Landmarks {
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

struct StubProvider {
    fail: bool,
}

impl LandmarkProvider for StubProvider {
    fn detect(&self, image_base64: &str) -> VivifyResult<Landmarks> {
        if self.fail {
            return Err(VivifyError::landmark(format!(
                "no face found in {image_base64}"
            )));
        }
        Ok(detector_output())
    }
}

fn poll_until_resolved(pending: &PendingFetch) -> VivifyResult<Landmarks> {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(result) = pending.poll() {
            return result;
        }
        assert!(Instant::now() < deadline, "fetch never resolved");
        std::thread::sleep(Duration::from_millis(1));
    }
}

#[test]
fn spawned_fetch_delivers_the_provider_result() {
    let provider: Arc<dyn LandmarkProvider> = Arc::new(StubProvider { fail: false });
    let mut slot = LandmarkSlot::new();
    let token = slot.begin();
    let pending = PendingFetch::spawn(provider, "aGVsbG8=".to_owned(), token);

    let result = poll_until_resolved(&pending);
    assert!(slot.resolve(pending.token(), result));
    assert!(slot.get().is_some());
}

#[test]
fn provider_failure_flows_through_as_an_error() {
    let provider: Arc<dyn LandmarkProvider> = Arc::new(StubProvider { fail: true });
    let mut slot = LandmarkSlot::new();
    let token = slot.begin();
    let pending = PendingFetch::spawn(provider, "aGVsbG8=".to_owned(), token);

    let result = poll_until_resolved(&pending);
    assert!(result.is_err());
    assert!(!slot.resolve(pending.token(), result));
    assert!(slot.get().is_none());
}

#[test]
fn unresolved_channel_polls_empty() {
    let mut slot = LandmarkSlot::new();
    let (pending, _tx) = PendingFetch::channel(slot.begin());
    assert!(pending.poll().is_none());
    assert!(pending.poll().is_none());
}

#[test]
fn dropped_worker_reports_an_error_instead_of_hanging() {
    let mut slot = LandmarkSlot::new();
    let (pending, tx) = PendingFetch::channel(slot.begin());
    drop(tx);
    let result = pending.poll().expect("disconnect must resolve the poll");
    assert!(result.is_err());
}
