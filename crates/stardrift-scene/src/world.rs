//! Per-frame world state: the running rotation transform and the live
//! object population, advanced in two phases around the render pass.

use stardrift_math::{Mat4, Vec3};

use crate::object::SceneObject;
use crate::spawner::{SpawnParams, Spawner};

/// Tuning for world advancement; values come from configuration.
#[derive(Clone, Debug)]
pub struct WorldParams {
    /// Rotation increment per executed frame, radians.
    pub rotation_step: f64,
    /// Initial rotation of the scene, radians.
    pub initial_rotation: f64,
    /// Z distance each object drifts toward the camera per frame.
    pub z_step: f64,
    /// Cull boundary: objects past -half_depth are retired.
    pub half_depth: f64,
    /// Maximum simultaneous live objects.
    pub population_cap: usize,
}

/// The only mutable state in the system. Owned exclusively by the driver
/// loop; nothing else touches it.
pub struct World {
    rotation: Mat4,
    objects: Vec<SceneObject>,
    spawner: Spawner,
    params: WorldParams,
}

impl World {
    pub fn new(params: WorldParams, spawn_params: SpawnParams, seed: u64) -> Self {
        Self {
            rotation: Mat4::rotation_y(params.initial_rotation),
            objects: Vec::new(),
            spawner: Spawner::new(seed, spawn_params),
            params,
        }
    }

    /// The running scene rotation, recomposed (never decayed) each frame.
    pub fn rotation(&self) -> &Mat4 {
        &self.rotation
    }

    /// The live population, in insertion order.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn population(&self) -> usize {
        self.objects.len()
    }

    /// Pre-render phase: advance the rotation by one fixed angular step.
    pub fn rotate(&mut self) {
        self.rotation = self.rotation.rotated_y(self.params.rotation_step);
    }

    /// Post-render phase: drift every object one Z-step toward the camera,
    /// retire objects past the near cull boundary, then make one spawn
    /// attempt if there is room for a full batch under the population cap.
    pub fn drift(&mut self) {
        let delta = Vec3::new(0.0, 0.0, -self.params.z_step);
        for object in &mut self.objects {
            object.translate(delta);
        }

        let near_boundary = -self.params.half_depth;
        let before = self.objects.len();
        self.objects.retain(|object| object.center.z > near_boundary);
        let culled = before - self.objects.len();
        if culled > 0 {
            log::trace!("culled {culled} objects past z = {near_boundary}");
        }

        if self.objects.len() < self.params.population_cap {
            let batch = self.spawner.attempt();
            if self.objects.len() + batch.len() <= self.params.population_cap {
                self.objects.extend(batch);
            } else if !batch.is_empty() {
                log::trace!(
                    "dropped a {}-object batch that would exceed the population cap",
                    batch.len()
                );
            }
        }
    }
}
