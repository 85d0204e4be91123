//! Painter's-algorithm renderer: full re-sort and re-paint of the live
//! population every frame, plus the static track pass.

use stardrift_math::{Mat4, Vec3};
use stardrift_scene::{SceneObject, Shape, TRACK_COLOR, Track, World};

use crate::camera::Camera;
use crate::canvas::Surface;
use crate::fade::fade_opacity;

/// Stroke opacity of the static track.
const TRACK_OPACITY: f64 = 0.2;

/// Stroke width used for every line in the scene.
const LINE_WIDTH: f64 = 1.0;

/// Draws a world through a camera onto a surface.
pub struct Renderer {
    camera: Camera,
    half_depth: f64,
    fade_margin: f64,
}

impl Renderer {
    pub fn new(camera: Camera, half_depth: f64, fade_margin: f64) -> Self {
        Self {
            camera,
            half_depth,
            fade_margin,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// One full frame: clear, static track, then the depth-sorted
    /// population.
    pub fn render(&self, surface: &mut dyn Surface, world: &World, track: &Track) {
        surface.clear();
        self.draw_track(surface, track, world.rotation());
        self.draw_objects(surface, world.objects(), world.rotation());
    }

    /// Paint order for the population: indices into `objects`, back to
    /// front. The sort key is the object's center carried through the
    /// scene rotation and differenced against the camera position,
    /// ordered by ascending Z, then X, then Y. The sort is stable, so
    /// exact ties (co-planar ring segments) keep insertion order.
    pub fn paint_order(&self, objects: &[SceneObject], rotation: &Mat4) -> Vec<usize> {
        let mut order: Vec<(Vec3, usize)> = objects
            .iter()
            .enumerate()
            .map(|(index, object)| (self.depth_key(object.center, rotation), index))
            .collect();

        order.sort_by(|(a, _), (b, _)| {
            a.z.total_cmp(&b.z)
                .then(a.x.total_cmp(&b.x))
                .then(a.y.total_cmp(&b.y))
        });

        order.into_iter().map(|(_, index)| index).collect()
    }

    fn depth_key(&self, center: Vec3, rotation: &Mat4) -> Vec3 {
        self.camera.position - rotation.transform_point(center)
    }

    /// True when the object's world depth lies strictly inside the
    /// cylinder; anything at or beyond either extent is skipped.
    fn is_visible(&self, object: &SceneObject) -> bool {
        object.center.z < self.half_depth && object.center.z > -self.half_depth
    }

    fn draw_objects(&self, surface: &mut dyn Surface, objects: &[SceneObject], rotation: &Mat4) {
        for index in self.paint_order(objects, rotation) {
            let object = &objects[index];
            if !self.is_visible(object) {
                continue;
            }

            let opacity =
                object.opacity * fade_opacity(object.center.z, self.half_depth, self.fade_margin);

            match object.shape {
                Shape::Line { start, end } => {
                    let p0 = self.camera.project(rotation.transform_point(start));
                    let p1 = self.camera.project(rotation.transform_point(end));
                    if !p0.is_finite() || !p1.is_finite() {
                        log::warn!("skipping line with non-finite projection");
                        continue;
                    }
                    surface.stroke_line(p0, p1, object.stroke, LINE_WIDTH, opacity);
                }
                Shape::Circle { point, radius } => {
                    let center = self.camera.project(rotation.transform_point(point));
                    if !center.is_finite() || !radius.is_finite() {
                        log::warn!("skipping circle with non-finite projection");
                        continue;
                    }
                    surface.draw_circle(center, radius, object.stroke, object.fill, opacity);
                }
            }
        }
    }

    /// The rotating cylindrical track: a rim ring at each end of the
    /// cylinder plus two rails joining them, all dim strokes.
    fn draw_track(&self, surface: &mut dyn Surface, track: &Track, rotation: &Mat4) {
        let near_offset = Vec3::new(0.0, 0.0, -track.half_depth());
        let far_offset = Vec3::new(0.0, 0.0, track.half_depth());

        let mut previous = None;
        for &rim_point in track.rim() {
            let near = self
                .camera
                .project(rotation.transform_point(rim_point + near_offset));
            let far = self
                .camera
                .project(rotation.transform_point(rim_point + far_offset));

            if let Some((prev_near, prev_far)) = previous {
                self.track_line(surface, near, prev_near);
                self.track_line(surface, far, prev_far);
            }
            previous = Some((near, far));
        }

        for azimuth_deg in Track::RAIL_AZIMUTHS_DEG {
            let (near, far) = track.rail(azimuth_deg);
            self.track_line(
                surface,
                self.camera.project(rotation.transform_point(near)),
                self.camera.project(rotation.transform_point(far)),
            );
        }
    }

    fn track_line(
        &self,
        surface: &mut dyn Surface,
        p0: crate::camera::ScreenPoint,
        p1: crate::camera::ScreenPoint,
    ) {
        if p0.is_finite() && p1.is_finite() {
            surface.stroke_line(p0, p1, TRACK_COLOR, LINE_WIDTH, TRACK_OPACITY);
        }
    }
}
