use crate::{
    foundation::core::{CanvasSize, Point},
    foundation::error::{VivifyError, VivifyResult},
    overlay::scene::{LidEllipse, OverlayScene, SpecularHighlight},
};

/// One finished overlay frame in premultiplied RGBA8.
///
/// Sized exactly to the canvas and fully transparent wherever nothing was
/// drawn, so the host can composite it pixel-aligned over the portrait.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 bytes.
    pub data: Vec<u8>,
    /// Always true: r, g, b are premultiplied by a.
    pub premultiplied: bool,
}

/// CPU rasterization target for the overlay.
///
/// The backing pixmap is reallocated only when the canvas size changes; every
/// frame starts from a fully cleared transparent surface.
#[derive(Default)]
pub struct OverlaySurface {
    pixmap: Option<vello_cpu::Pixmap>,
    width: u16,
    height: u16,
}

impl OverlaySurface {
    /// Surface with no allocated pixels yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Match the surface to the displayed portrait size.
    pub fn ensure_size(&mut self, size: CanvasSize) -> VivifyResult<()> {
        let width: u16 = size
            .width
            .try_into()
            .map_err(|_| VivifyError::render("surface width exceeds u16"))?;
        let height: u16 = size
            .height
            .try_into()
            .map_err(|_| VivifyError::render("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(VivifyError::render("surface must have nonzero extent"));
        }

        if self.pixmap.is_none() || self.width != width || self.height != height {
            self.pixmap = Some(vello_cpu::Pixmap::new(width, height));
            self.width = width;
            self.height = height;
        }
        Ok(())
    }

    /// Allocated size, if any.
    pub fn size(&self) -> Option<CanvasSize> {
        self.pixmap.as_ref().map(|_| CanvasSize {
            width: u32::from(self.width),
            height: u32::from(self.height),
        })
    }

    /// Clear the surface, paint the scene, and read the frame back.
    pub fn render(&mut self, scene: &OverlayScene) -> VivifyResult<FrameRGBA> {
        let pixmap = self
            .pixmap
            .as_mut()
            .ok_or_else(|| VivifyError::render("surface size was never set"))?;
        clear_pixmap(pixmap);

        if !scene.is_empty() {
            let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);

            if let Some(skin) = scene.skin {
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    skin.r, skin.g, skin.b, 255,
                ));
                for lid in &scene.lids {
                    ctx.fill_path(&ellipse_path(lid));
                }
            }

            for highlight in &scene.highlights {
                draw_highlight(&mut ctx, highlight);
            }

            ctx.flush();
            ctx.render_to_pixmap(pixmap);
        }

        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn draw_highlight(ctx: &mut vello_cpu::RenderContext, highlight: &SpecularHighlight) {
    let center = point_to_cpu(highlight.center);

    // Outer soft glow: white radial gradient fading to transparent.
    let glow = vello_cpu::peniko::Gradient::new_radial(center, highlight.glow_radius as f32)
        .with_stops([white_with_alpha(highlight.glow_alpha), white_with_alpha(0.0)]);
    ctx.set_paint(glow);
    ctx.fill_path(&circle_path(highlight.center, highlight.glow_radius));

    // Inner bright point.
    ctx.set_paint(white_with_alpha(highlight.core_alpha));
    ctx.fill_path(&circle_path(highlight.center, highlight.core_radius));
}

fn white_with_alpha(alpha: f64) -> vello_cpu::peniko::Color {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    vello_cpu::peniko::Color::from_rgba8(255, 255, 255, a)
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}

fn ellipse_path(lid: &LidEllipse) -> vello_cpu::kurbo::BezPath {
    use kurbo::Shape;
    let ellipse = kurbo::Ellipse::new((lid.center.x, lid.center.y), (lid.rx, lid.ry), 0.0);
    bezpath_to_cpu(&ellipse.to_path(0.1))
}

fn circle_path(center: Point, radius: f64) -> vello_cpu::kurbo::BezPath {
    use kurbo::Shape;
    let circle = kurbo::Circle::new((center.x, center.y), radius);
    bezpath_to_cpu(&circle.to_path(0.1))
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

// The crate's kurbo and vello_cpu's bundled kurbo are separate versions, so
// paths cross the boundary element by element.
fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
