use std::sync::{
    Arc,
    mpsc::{self, Receiver, Sender, TryRecvError},
};

use crate::{
    foundation::error::{VivifyError, VivifyResult},
    landmarks::{model::Landmarks, slot::FetchToken},
};

/// External facial-landmark detector.
///
/// Latency and reliability are unspecified; the renderer tolerates slow or
/// failed responses and never blocks a frame on one. Hosts bring their own
/// transport (HTTP, IPC, in-process model) behind this trait.
pub trait LandmarkProvider: Send + Sync {
    /// Detect landmarks for a base64-encoded portrait image.
    fn detect(&self, image_base64: &str) -> VivifyResult<Landmarks>;
}

/// An in-flight landmark request, polled once per frame.
///
/// Dropping the handle abandons the request: the worker's send fails and no
/// state is written, which is exactly the post-teardown contract.
#[derive(Debug)]
pub struct PendingFetch {
    token: FetchToken,
    rx: Receiver<VivifyResult<Landmarks>>,
}

impl PendingFetch {
    /// Issue the request on a background thread.
    pub fn spawn(
        provider: Arc<dyn LandmarkProvider>,
        image_base64: String,
        token: FetchToken,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            // The receiver may be gone (portrait changed or renderer torn
            // down); the result is simply discarded then.
            let _ = tx.send(provider.detect(&image_base64));
        });
        Self { token, rx }
    }

    /// Manually resolved fetch, used by tests to control arrival order.
    pub(crate) fn channel(token: FetchToken) -> (Self, Sender<VivifyResult<Landmarks>>) {
        let (tx, rx) = mpsc::channel();
        (Self { token, rx }, tx)
    }

    /// Token this request was issued under.
    pub fn token(&self) -> FetchToken {
        self.token
    }

    /// Non-blocking poll. `Some` consumes the request's single outcome.
    pub fn poll(&self) -> Option<VivifyResult<Landmarks>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(VivifyError::landmark(
                "landmark worker exited without a result",
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/landmarks/fetch.rs"]
mod tests;
