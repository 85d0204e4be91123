//! The static rotating track: a cylinder sketched as two rim rings plus two
//! longitudinal rails, generated purely in spherical coordinates.

use std::f64::consts::FRAC_PI_2;

use stardrift_math::{Spherical, Vec3};

/// Precomputed rim geometry for the cylindrical track.
///
/// Samples a fixed-radius ring at polar 90° across a dense azimuth sweep,
/// a circle in the XY-plane facing the camera. The renderer offsets the rim
/// to each end of the cylinder every frame and joins consecutive samples
/// with line segments.
#[derive(Clone, Debug)]
pub struct Track {
    rim: Vec<Vec3>,
    radius: f64,
    half_depth: f64,
}

impl Track {
    /// Azimuths (degrees) of the rails joining the two rims.
    pub const RAIL_AZIMUTHS_DEG: [f64; 2] = [90.0, 270.0];

    /// Sample the rim every `step_deg` degrees of azimuth through a full
    /// turn (final sample at 360° closes the ring).
    pub fn new(radius: f64, step_deg: u32, half_depth: f64) -> Self {
        let step = step_deg.max(1);
        let rim = (0..=360)
            .step_by(step as usize)
            .map(|deg| {
                Spherical::new(radius, FRAC_PI_2, f64::from(deg).to_radians()).to_cartesian()
            })
            .collect();

        Self {
            rim,
            radius,
            half_depth,
        }
    }

    /// Rim samples in the XY-plane, centered on the origin.
    pub fn rim(&self) -> &[Vec3] {
        &self.rim
    }

    /// Endpoints of one rail: the rim point at `azimuth_deg` pushed to the
    /// near and far ends of the cylinder.
    pub fn rail(&self, azimuth_deg: f64) -> (Vec3, Vec3) {
        let rim_point =
            Spherical::new(self.radius, FRAC_PI_2, azimuth_deg.to_radians()).to_cartesian();
        (
            rim_point + Vec3::new(0.0, 0.0, -self.half_depth),
            rim_point + Vec3::new(0.0, 0.0, self.half_depth),
        )
    }

    pub fn half_depth(&self) -> f64 {
        self.half_depth
    }
}
