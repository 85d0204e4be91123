//! Orthographic camera projection from camera space to screen space.

use stardrift_math::Vec3;

/// A 2D point in raster coordinates (origin top-left, y down).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Projection parameters, immutable for a session.
///
/// The projection is deliberately orthographic: X and Y are scaled by the
/// zoom and centered on the viewport, Z is discarded. There is no
/// perspective divide — depth only matters upstream, for paint ordering
/// and fade. The 3D look comes entirely from the rotating scene transform.
#[derive(Clone, Debug)]
pub struct Camera {
    /// World position, the reference point for depth ordering.
    pub position: Vec3,
    /// Forward direction (kept for completeness; the orthographic
    /// projection itself is axis-aligned).
    pub direction: Vec3,
    /// Up vector.
    pub up: Vec3,
    /// Viewport width in pixels.
    pub width: f64,
    /// Viewport height in pixels.
    pub height: f64,
    /// Scale factor: world units map to `zoom * height` pixels.
    pub zoom: f64,
}

impl Camera {
    /// Project a camera-space point onto the screen.
    ///
    /// Total over finite inputs: any finite point produces a finite
    /// screen point, possibly outside the viewport (the canvas clips).
    pub fn project(&self, p: Vec3) -> ScreenPoint {
        let scale = self.zoom * self.height;
        ScreenPoint::new(
            self.width / 2.0 + p.x * scale,
            self.height / 2.0 - p.y * scale,
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, -100.0),
            direction: Vec3::unit_z(),
            up: Vec3::unit_y(),
            width: 900.0,
            height: 900.0,
            zoom: 0.1,
        }
    }
}
