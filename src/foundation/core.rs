use crate::foundation::error::{VivifyError, VivifyResult};

pub use kurbo::{Point, Vec2};

/// Cached pixel dimensions of the displayed portrait.
///
/// Resynchronized on image load and on viewport resize. A zero size is not an
/// error: it means layout has not settled yet and the frame's draw is skipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CanvasSize {
    /// Build a size, rejecting dimensions the CPU rasterizer cannot address.
    pub fn new(width: u32, height: u32) -> VivifyResult<Self> {
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(VivifyError::validation("canvas dimension exceeds u16"));
        }
        Ok(Self { width, height })
    }

    /// True while the portrait has no rendered extent yet.
    pub fn is_zero(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Straight (non-premultiplied) RGB color, used for the eyelid fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// Monotonic timestamp in milliseconds.
///
/// All timestamps fed to the animation code must share one origin (the host's
/// frame clock); only differences between them are ever interpreted.
pub type Millis = f64;
