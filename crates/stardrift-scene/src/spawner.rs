//! Probability-weighted procedural generation of stars, moons, and planets.
//!
//! One spawn attempt per frame. A uniform draw is tested against ordered
//! thresholds; the winning category differs only in body radius, color
//! source, and ring decoration. New objects always enter at the far end of
//! the cylinder and drift toward the camera from there.

use std::f64::consts::FRAC_PI_2;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use stardrift_math::{Spherical, Vec3};

use crate::color::{Color, PALETTE, STAR_COLOR};
use crate::object::SceneObject;

/// Palette index stride between consecutive planet rings.
const RING_COLOR_STRIDE: usize = 2;

/// Degrees of polar sweep between consecutive ring segment vertices.
const RING_SWEEP_STEP_DEG: usize = 20;

/// Spawn-category outcome of one uniform draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnCategory {
    Planet,
    Moon,
    Star,
    Nothing,
}

/// Tuning for the spawner; values come from configuration.
#[derive(Clone, Debug)]
pub struct SpawnParams {
    /// Draws above this emit a planet.
    pub planet_threshold: f64,
    /// Draws above this (but not the planet threshold) emit a moon.
    pub moon_threshold: f64,
    /// Draws above this (but not the moon threshold) emit a star.
    pub star_threshold: f64,
    /// Screen-unit radius of a planet's central body.
    pub planet_radius: f64,
    /// Screen-unit radius of a moon.
    pub moon_radius: f64,
    /// Screen-unit radius of a star.
    pub star_radius: f64,
    /// Maximum spawn distance from the cylinder axis, in whole world units.
    pub boundary_radius: u32,
    /// Z offset of the spawn disc: objects appear at +half_depth.
    pub half_depth: f64,
    /// World-space radii of a planet's decorative rings, innermost first.
    pub ring_radii: Vec<f64>,
    /// Inclusive ring tilt range in degrees.
    pub ring_tilt_deg: (u32, u32),
}

/// Resolve a uniform draw in [0, 1) to a spawn category by ordered
/// threshold comparison.
pub fn categorize(value: f64, params: &SpawnParams) -> SpawnCategory {
    if value > params.planet_threshold {
        SpawnCategory::Planet
    } else if value > params.moon_threshold {
        SpawnCategory::Moon
    } else if value > params.star_threshold {
        SpawnCategory::Star
    } else {
        SpawnCategory::Nothing
    }
}

/// Seeded generator of scene objects. Deterministic for a given seed.
pub struct Spawner {
    rng: ChaCha8Rng,
    params: SpawnParams,
}

impl Spawner {
    /// Create a spawner with the given seed and tuning.
    pub fn new(seed: u64, params: SpawnParams) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            params,
        }
    }

    pub fn params(&self) -> &SpawnParams {
        &self.params
    }

    /// One generation attempt. Returns the emitted objects, possibly none.
    ///
    /// Position is drawn on the rim disc: uniform integer radius in
    /// [0, boundary], uniform integer azimuth degree, polar fixed at 90°,
    /// then offset to the far end of the cylinder.
    pub fn attempt(&mut self) -> Vec<SceneObject> {
        let value: f64 = self.rng.random();
        let radius = self.rng.random_range(0..=self.params.boundary_radius) as f64;
        let azimuth = f64::from(self.rng.random_range(0..360u32)).to_radians();
        let rim = Spherical::new(radius, FRAC_PI_2, azimuth).to_cartesian();
        let spawn = rim + Vec3::new(0.0, 0.0, self.params.half_depth);

        match categorize(value, &self.params) {
            SpawnCategory::Planet => self.planet(spawn),
            SpawnCategory::Moon => {
                let color = self.sample_palette();
                vec![SceneObject::body(spawn, self.params.moon_radius, color)]
            }
            SpawnCategory::Star => {
                vec![SceneObject::body(spawn, self.params.star_radius, STAR_COLOR)]
            }
            SpawnCategory::Nothing => Vec::new(),
        }
    }

    /// A planet: one large body plus concentric rings at a shared random
    /// tilt, ring colors stepped through the palette from a random start.
    fn planet(&mut self, center: Vec3) -> Vec<SceneObject> {
        let (tilt_min, tilt_max) = self.params.ring_tilt_deg;
        let tilt = f64::from(self.rng.random_range(tilt_min..=tilt_max)).to_radians();
        let body_color = self.sample_palette();

        let mut objects = vec![SceneObject::body(
            center,
            self.params.planet_radius,
            body_color,
        )];

        let mut color_index = self.rng.random_range(0..PALETTE.len());
        let ring_radii = self.params.ring_radii.clone();
        for (i, &radius) in ring_radii.iter().enumerate() {
            if i > 0 {
                color_index = (color_index + RING_COLOR_STRIDE) % (PALETTE.len() - 1);
            }
            objects.extend(ring(radius, tilt, PALETTE[color_index], center));
        }

        log::debug!(
            "spawned planet at {center} with {} rings, tilt {:.1}°",
            ring_radii.len(),
            tilt.to_degrees()
        );
        objects
    }

    fn sample_palette(&mut self) -> Color {
        PALETTE[self.rng.random_range(0..PALETTE.len())]
    }
}

/// A closed ring of line segments: a full polar sweep at fixed radius and
/// fixed tilt azimuth, consecutive samples joined, each segment's depth
/// anchor at its midpoint.
fn ring(radius: f64, tilt: f64, stroke: Color, center: Vec3) -> Vec<SceneObject> {
    let mut segments = Vec::new();
    let mut previous: Option<Vec3> = None;

    for sweep_deg in (0..=360).step_by(RING_SWEEP_STEP_DEG) {
        let polar = (sweep_deg as f64).to_radians();
        let point = Spherical::new(radius, polar, tilt).to_cartesian() + center;
        if let Some(prev) = previous {
            segments.push(SceneObject::line(prev, point, prev.midpoint(point), stroke));
        }
        previous = Some(point);
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Shape;

    fn test_params() -> SpawnParams {
        SpawnParams {
            planet_threshold: 0.995,
            moon_threshold: 0.99,
            star_threshold: 0.8,
            planet_radius: 10.0,
            moon_radius: 5.0,
            star_radius: 0.5,
            boundary_radius: 7,
            half_depth: 20.0,
            ring_radii: vec![2.25, 2.5, 2.75, 3.0],
            ring_tilt_deg: (10, 55),
        }
    }

    #[test]
    fn test_categorize_above_planet_threshold() {
        assert_eq!(categorize(0.999, &test_params()), SpawnCategory::Planet);
    }

    #[test]
    fn test_categorize_moon_band() {
        assert_eq!(categorize(0.992, &test_params()), SpawnCategory::Moon);
    }

    #[test]
    fn test_categorize_star_band() {
        assert_eq!(categorize(0.9, &test_params()), SpawnCategory::Star);
    }

    #[test]
    fn test_categorize_below_star_threshold_is_nothing() {
        assert_eq!(categorize(0.5, &test_params()), SpawnCategory::Nothing);
    }

    #[test]
    fn test_spawns_enter_at_far_end() {
        let mut spawner = Spawner::new(7, test_params());
        for _ in 0..500 {
            for object in spawner.attempt() {
                // Ring geometry extends at most max ring radius past the disc.
                assert!(
                    (object.center.z - 20.0).abs() <= 3.0 + 1e-9,
                    "spawn center z {} is not at the far end",
                    object.center.z
                );
            }
        }
    }

    #[test]
    fn test_spawn_radius_within_boundary() {
        let mut spawner = Spawner::new(11, test_params());
        for _ in 0..500 {
            for object in spawner.attempt() {
                let radial = Vec3::new(object.center.x, object.center.y, 0.0).length();
                assert!(
                    radial <= 7.0 + 3.0 + 1e-9,
                    "spawn sits outside the boundary disc: radial {radial}"
                );
            }
        }
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let mut a = Spawner::new(42, test_params());
        let mut b = Spawner::new(42, test_params());
        for _ in 0..200 {
            assert_eq!(a.attempt(), b.attempt());
        }
    }

    #[test]
    fn test_always_spawn_thresholds_emit_every_frame() {
        let params = SpawnParams {
            planet_threshold: 2.0,
            moon_threshold: 2.0,
            star_threshold: -1.0,
            ..test_params()
        };
        let mut spawner = Spawner::new(1, params);
        for _ in 0..100 {
            let batch = spawner.attempt();
            assert_eq!(batch.len(), 1, "star-only thresholds must emit one body");
            assert!(matches!(batch[0].shape, Shape::Circle { radius, .. } if radius == 0.5));
        }
    }

    #[test]
    fn test_ring_is_closed_loop_of_segments() {
        let segments = ring(3.0, 0.5, STAR_COLOR, Vec3::zero());
        // 360 / 20 sweep steps produce 18 segments.
        assert_eq!(segments.len(), 18);

        // Consecutive segments share endpoints, and the loop closes.
        let first_start = match segments[0].shape {
            Shape::Line { start, .. } => start,
            _ => panic!("ring must be made of lines"),
        };
        let mut last_end = first_start;
        for segment in &segments {
            let Shape::Line { start, end } = segment.shape else {
                panic!("ring must be made of lines");
            };
            assert!((start - last_end).length() < 1e-9, "segments must chain");
            last_end = end;
        }
        assert!(
            (last_end - first_start).length() < 1e-9,
            "ring must close on itself"
        );
    }

    #[test]
    fn test_ring_segment_center_is_midpoint() {
        for segment in ring(2.5, 1.0, STAR_COLOR, Vec3::new(1.0, 2.0, 3.0)) {
            let Shape::Line { start, end } = segment.shape else {
                panic!("ring must be made of lines");
            };
            assert!((segment.center - start.midpoint(end)).length() < 1e-12);
        }
    }

    #[test]
    fn test_planet_batch_contains_body_and_rings() {
        let params = SpawnParams {
            planet_threshold: -1.0, // every draw is a planet
            ..test_params()
        };
        let mut spawner = Spawner::new(3, params);
        let batch = spawner.attempt();
        // One body plus 4 rings of 18 segments each.
        assert_eq!(batch.len(), 1 + 4 * 18);
        assert!(matches!(
            batch[0].shape,
            Shape::Circle { radius, .. } if radius == 10.0
        ));
        assert!(
            batch[1..]
                .iter()
                .all(|o| matches!(o.shape, Shape::Line { .. }))
        );
    }

    #[test]
    fn test_planet_rings_share_center_offset() {
        let params = SpawnParams {
            planet_threshold: -1.0,
            ..test_params()
        };
        let mut spawner = Spawner::new(9, params);
        let batch = spawner.attempt();
        let core = batch[0].center;
        for segment in &batch[1..] {
            assert!(
                (segment.center - core).length() <= 3.0 + 1e-9,
                "ring segment strayed from its planet"
            );
        }
    }
}
