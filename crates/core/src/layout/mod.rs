use crate::render::Point;

/// Gap between the face and the nearest surface edge.
pub const MARGIN: f32 = 10.0;

/// Drawable area reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Centre and radius of the clock face for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub center: Point,
    /// Never negative. Zero when the surface is too small for a face.
    pub radius: f32,
}

impl Layout {
    /// Centres the face on the surface and leaves [`MARGIN`] to the nearest
    /// edge. The radius is clamped at zero for surfaces smaller than twice
    /// the margin.
    pub fn compute(size: SurfaceSize) -> Self {
        let width = size.width.max(0.0);
        let height = size.height.max(0.0);
        let radius = width.min(height) / 2.0 - MARGIN;

        Self {
            center: Point::new(width / 2.0, height / 2.0),
            radius: radius.max(0.0),
        }
    }

    /// A degenerate layout has no room for a face; nothing is drawn on it.
    pub fn is_degenerate(&self) -> bool {
        self.radius <= 0.0
    }
}
