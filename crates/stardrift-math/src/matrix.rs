//! 4×4 homogeneous transform matrices.
//!
//! The renderer only exercises rotation about the Y axis, but the type
//! supports arbitrary affine composition through matrix multiplication.
//! Incremental animation composes a fresh `rotation_y(delta)` onto the
//! running transform each frame instead of accumulating floating error
//! into stored coefficients, so a rotation stays a rotation across
//! thousands of frames.

use std::ops::Mul;

use crate::Vec3;

/// Row-major 4×4 homogeneous transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4 {
    m: [[f64; 4]; 4],
}

impl Mat4 {
    /// The identity transform.
    pub const fn identity() -> Self {
        Self {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Construct from explicit row-major coefficients.
    pub const fn from_rows(m: [[f64; 4]; 4]) -> Self {
        Self { m }
    }

    /// Rotation about the Y axis by `angle` radians (right-handed).
    pub fn rotation_y(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            m: [
                [cos, 0.0, sin, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [-sin, 0.0, cos, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Returns this transform with an additional Y rotation composed on
    /// the left, the per-frame increment used by the animation loop.
    #[must_use]
    pub fn rotated_y(self, angle: f64) -> Self {
        Self::rotation_y(angle) * self
    }

    /// Apply the transform to the homogeneous extension (x, y, z, 1) of a
    /// point and return the dehomogenized result.
    ///
    /// A w component near zero (possible only for non-affine inputs) skips
    /// the divide instead of manufacturing infinities.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let m = &self.m;
        let x = m[0][0] * p.x + m[0][1] * p.y + m[0][2] * p.z + m[0][3];
        let y = m[1][0] * p.x + m[1][1] * p.y + m[1][2] * p.z + m[1][3];
        let z = m[2][0] * p.x + m[2][1] * p.y + m[2][2] * p.z + m[2][3];
        let w = m[3][0] * p.x + m[3][1] * p.y + m[3][2] * p.z + m[3][3];

        if w.abs() < 1e-12 || w == 1.0 {
            Vec3::new(x, y, z)
        } else {
            Vec3::new(x / w, y / w, z / w)
        }
    }

    /// Row-major coefficient access (row, column).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.m[row][col]
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut out = [[0.0; 4]; 4];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.m[r][k] * rhs.m[k][c]).sum();
            }
        }
        Mat4 { m: out }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_close(a: Vec3, b: Vec3, tol: f64) {
        assert!(
            (a - b).length() < tol,
            "vectors differ beyond tolerance: {a} vs {b}"
        );
    }

    #[test]
    fn test_identity_leaves_points_unchanged() {
        let p = Vec3::new(1.5, -2.0, 7.25);
        assert_eq!(Mat4::identity().transform_point(p), p);
    }

    #[test]
    fn test_rotation_y_quarter_turn() {
        // A quarter turn about Y carries +X onto -Z.
        let rot = Mat4::rotation_y(std::f64::consts::FRAC_PI_2);
        let p = rot.transform_point(Vec3::unit_x());
        assert_vec_close(p, -Vec3::unit_z(), 1e-12);
    }

    #[test]
    fn test_rotation_preserves_y_axis() {
        let rot = Mat4::rotation_y(1.2345);
        assert_vec_close(rot.transform_point(Vec3::unit_y()), Vec3::unit_y(), 1e-12);
    }

    #[test]
    fn test_rotation_composition_matches_sum_of_angles() {
        let a = 0.7;
        let b = -1.3;
        let composed = Mat4::rotation_y(a) * Mat4::rotation_y(b);
        let direct = Mat4::rotation_y(a + b);
        let p = Vec3::new(2.0, 3.0, -5.0);
        assert_vec_close(
            composed.transform_point(p),
            direct.transform_point(p),
            1e-9,
        );
    }

    #[test]
    fn test_rotated_y_composes_on_the_left() {
        let base = Mat4::rotation_y(0.25);
        let stepped = base.rotated_y(0.5);
        let p = Vec3::new(1.0, 0.0, 2.0);
        assert_vec_close(
            stepped.transform_point(p),
            Mat4::rotation_y(0.75).transform_point(p),
            1e-9,
        );
    }

    #[test]
    fn test_incremental_rotation_has_no_scale_drift() {
        // Thousands of small increments must keep lengths intact.
        let step = 0.1_f64.to_radians();
        let mut rot = Mat4::identity();
        for _ in 0..10_000 {
            rot = rot.rotated_y(step);
        }
        let p = Vec3::new(3.0, 4.0, 12.0);
        let len = rot.transform_point(p).length();
        assert!(
            (len - p.length()).abs() < 1e-6,
            "length drifted after 10k increments: {} vs {}",
            len,
            p.length()
        );
    }

    #[test]
    fn test_multiplication_is_associative() {
        let a = Mat4::rotation_y(0.3);
        let b = Mat4::rotation_y(-0.9);
        let c = Mat4::rotation_y(2.1);
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_vec_close(
            ((a * b) * c).transform_point(p),
            (a * (b * c)).transform_point(p),
            1e-9,
        );
    }

    #[test]
    fn test_mul_by_identity_is_noop() {
        let rot = Mat4::rotation_y(1.0);
        let p = Vec3::new(-4.0, 0.5, 9.0);
        assert_eq!(
            (rot * Mat4::identity()).transform_point(p),
            rot.transform_point(p)
        );
    }

    #[test]
    fn test_degenerate_w_does_not_produce_nan() {
        // Bottom row zero makes w = 0 for every point.
        let m = Mat4::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
        ]);
        let p = m.transform_point(Vec3::new(1.0, 2.0, 3.0));
        assert!(p.is_finite(), "w = 0 must not divide: {p}");
    }
}
