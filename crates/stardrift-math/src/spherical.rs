//! Spherical ↔ Cartesian coordinate isomorphism.
//!
//! Physics convention, polar angle measured from +Z:
//!   x = r · sin(polar) · cos(azimuth)
//!   y = r · sin(polar) · sin(azimuth)
//!   z = r · cos(polar)
//!
//! A fixed polar angle of 90° therefore traces a flat ring in the XY-plane
//! facing the camera, which is how the cylindrical track rims and the spawn
//! disc are built; the cylinder axis is Z, the drift axis.

use std::f64::consts::TAU;

use crate::Vec3;

/// Spherical coordinate triple: radius, polar angle from +Z, azimuth in the
/// XY-plane measured from +X toward +Y. Angles are radians.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Spherical {
    pub radius: f64,
    pub polar: f64,
    pub azimuth: f64,
}

impl Spherical {
    /// Create a new spherical triple.
    pub const fn new(radius: f64, polar: f64, azimuth: f64) -> Self {
        Self {
            radius,
            polar,
            azimuth,
        }
    }

    /// Convert to a Cartesian point.
    pub fn to_cartesian(self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = self.azimuth.sin_cos();
        Vec3::new(
            self.radius * sin_polar * cos_azimuth,
            self.radius * sin_polar * sin_azimuth,
            self.radius * cos_polar,
        )
    }

    /// Convert a Cartesian point to spherical coordinates.
    ///
    /// The origin is degenerate (no defined angles) and maps to the
    /// all-zero triple. Azimuth is normalized to [0, 2π); polar lies in
    /// [0, π].
    pub fn from_cartesian(p: Vec3) -> Self {
        let radius = p.length();
        if radius == 0.0 {
            return Self::default();
        }

        let polar = (p.z / radius).clamp(-1.0, 1.0).acos();
        let mut azimuth = p.y.atan2(p.x);
        if azimuth < 0.0 {
            azimuth += TAU;
        }

        Self {
            radius,
            polar,
            azimuth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_close(a: Vec3, b: Vec3, tol: f64) {
        assert!(
            (a - b).length() <= tol * b.length().max(1.0),
            "points differ beyond tolerance: {a} vs {b}"
        );
    }

    #[test]
    fn test_polar_zero_points_along_z() {
        let p = Spherical::new(5.0, 0.0, 1.23).to_cartesian();
        assert_close(p, Vec3::new(0.0, 0.0, 5.0), 1e-12);
    }

    #[test]
    fn test_polar_90_lies_in_xy_plane() {
        for deg in (0..360).step_by(15) {
            let s = Spherical::new(10.0, FRAC_PI_2, (deg as f64).to_radians());
            let p = s.to_cartesian();
            assert!(
                p.z.abs() < 1e-9,
                "polar 90° point should face the camera in the XY-plane, got z = {}",
                p.z
            );
            assert!((p.length() - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_azimuth_90_points_along_y() {
        let p = Spherical::new(2.0, FRAC_PI_2, FRAC_PI_2).to_cartesian();
        assert_close(p, Vec3::new(0.0, 2.0, 0.0), 1e-12);
    }

    #[test]
    fn test_round_trip_from_cartesian() {
        let points = [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-4.5, 0.25, 1.0),
            Vec3::new(0.0, -7.0, 0.0),
            Vec3::new(100.0, -3.0, -42.0),
            Vec3::new(0.001, 0.002, -0.003),
        ];
        for p in points {
            let back = Spherical::from_cartesian(p).to_cartesian();
            assert_close(back, p, 1e-9);
        }
    }

    #[test]
    fn test_round_trip_from_spherical() {
        let s = Spherical::new(7.0, 1.1, 4.2);
        let back = Spherical::from_cartesian(s.to_cartesian());
        assert!((back.radius - s.radius).abs() < 1e-9);
        assert!((back.polar - s.polar).abs() < 1e-9);
        assert!((back.azimuth - s.azimuth).abs() < 1e-9);
    }

    #[test]
    fn test_origin_is_degenerate_not_nan() {
        let s = Spherical::from_cartesian(Vec3::zero());
        assert_eq!(s, Spherical::default());
        assert!(s.to_cartesian().is_finite());
        assert_eq!(s.to_cartesian(), Vec3::zero());
    }

    #[test]
    fn test_zero_radius_maps_to_origin_for_any_angles() {
        let s = Spherical::new(0.0, 1.0, 2.0);
        assert_eq!(s.to_cartesian(), Vec3::zero());
    }

    #[test]
    fn test_azimuth_normalized_to_positive_range() {
        // -Y direction: atan2 gives a negative angle that must wrap.
        let s = Spherical::from_cartesian(Vec3::new(0.0, -1.0, 0.0));
        assert!((s.azimuth - 3.0 * FRAC_PI_2).abs() < 1e-12);
        assert!((0.0..TAU).contains(&s.azimuth));
        assert!((s.polar - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_polar_range_covers_down_axis() {
        let s = Spherical::from_cartesian(Vec3::new(0.0, 0.0, -3.0));
        assert!((s.polar - PI).abs() < 1e-12);
        assert_eq!(s.radius, 3.0);
    }
}
