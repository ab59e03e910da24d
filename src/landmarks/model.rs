use crate::{
    foundation::core::{CanvasSize, Point, Rgb8},
    foundation::error::{VivifyError, VivifyResult},
};

/// Normalized 2-D coordinate, relative to image width/height.
///
/// Well-formed detector output lies in `[0, 1]` on both axes. Finite values
/// outside that range are tolerated and simply draw off-canvas; see
/// [`Landmarks::validate`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LandmarkPoint {
    /// Horizontal coordinate, fraction of image width.
    pub x: f64,
    /// Vertical coordinate, fraction of image height.
    pub y: f64,
}

impl LandmarkPoint {
    fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    fn in_unit_range(self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

/// One eye's geometry in normalized image space.
///
/// Center, horizontal radius, and vertical aperture are derived from these
/// five points, never stored separately.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EyeLandmarks {
    /// Outer corner (temple side).
    pub outer: LandmarkPoint,
    /// Inner corner (nose side).
    pub inner: LandmarkPoint,
    /// Top of the upper lid.
    pub top: LandmarkPoint,
    /// Bottom of the lower lid.
    pub bottom: LandmarkPoint,
    /// Iris center.
    pub iris: LandmarkPoint,
}

impl EyeLandmarks {
    /// Eye midpoint in canvas pixels: x from the corner pair, y from the lid pair.
    pub fn center_px(&self, size: CanvasSize) -> Point {
        Point::new(
            (self.outer.x + self.inner.x) / 2.0 * f64::from(size.width),
            (self.top.y + self.bottom.y) / 2.0 * f64::from(size.height),
        )
    }

    /// Corner-to-corner eye width in canvas pixels.
    pub fn width_px(&self, size: CanvasSize) -> f64 {
        (self.outer.x - self.inner.x).abs() * f64::from(size.width)
    }

    /// Lid-to-lid vertical aperture in canvas pixels.
    pub fn aperture_px(&self, size: CanvasSize) -> f64 {
        (self.top.y - self.bottom.y).abs() * f64::from(size.height)
    }

    /// Iris center in canvas pixels.
    pub fn iris_px(&self, size: CanvasSize) -> Point {
        Point::new(
            self.iris.x * f64::from(size.width),
            self.iris.y * f64::from(size.height),
        )
    }

    fn points(&self) -> [LandmarkPoint; 5] {
        [self.outer, self.inner, self.top, self.bottom, self.iris]
    }
}

/// Dominant skin color sampled by the detector, used as the eyelid fill so
/// the blink occlusion matches the portrait's skin tone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SkinColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl From<SkinColor> for Rgb8 {
    fn from(c: SkinColor) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

/// Full detector response for one portrait. Immutable once received and
/// replaced wholesale when a new portrait triggers a new fetch.
///
/// Field names match the detector service's JSON payload.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Landmarks {
    /// Left eye geometry.
    pub left_eye: EyeLandmarks,
    /// Right eye geometry.
    pub right_eye: EyeLandmarks,
    /// Dominant skin color.
    pub skin_color: SkinColor,
}

impl Landmarks {
    /// Reject payloads the compositor cannot use.
    ///
    /// Non-finite coordinates are an error. Finite coordinates outside
    /// `[0, 1]` are accepted (they draw off-canvas) but logged, since they
    /// usually indicate a detector bug.
    pub fn validate(&self) -> VivifyResult<()> {
        let eyes = [self.left_eye, self.right_eye];
        for point in eyes.iter().flat_map(EyeLandmarks::points) {
            if !point.is_finite() {
                return Err(VivifyError::validation(
                    "landmark coordinate is not finite",
                ));
            }
        }
        if eyes
            .iter()
            .flat_map(EyeLandmarks::points)
            .any(|p| !p.in_unit_range())
        {
            tracing::warn!("landmark coordinates outside [0, 1]; overlay may draw off-canvas");
        }
        Ok(())
    }

    /// Both eyes, in drawing order.
    pub fn eyes(&self) -> [&EyeLandmarks; 2] {
        [&self.left_eye, &self.right_eye]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/landmarks/model.rs"]
mod tests;
