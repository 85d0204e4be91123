//! The scene-object model: a closed sum over the two drawable primitives
//! plus the shared render attributes every live object carries.

use stardrift_math::Vec3;

use crate::color::Color;

/// Drawable geometry. Adding a primitive here forces every paint site to
/// handle it (exhaustive match), which is the point of the closed type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// A world-space line segment.
    Line { start: Vec3, end: Vec3 },
    /// A body anchored at a world-space point. The radius is in screen
    /// units and is painted as-is after projection, so bodies keep their
    /// size regardless of depth — depth only affects ordering and fade.
    Circle { point: Vec3, radius: f64 },
}

/// One live object in the population.
///
/// `center` is carried with the object (for ring segments it is the segment
/// midpoint at creation) and drives depth sorting, culling, and fade; it is
/// never re-derived from the geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub shape: Shape,
    pub center: Vec3,
    pub stroke: Color,
    pub fill: Option<Color>,
    pub opacity: f64,
}

impl SceneObject {
    /// A stroked line segment with its depth anchor at the given center.
    pub fn line(start: Vec3, end: Vec3, center: Vec3, stroke: Color) -> Self {
        Self {
            shape: Shape::Line { start, end },
            center,
            stroke,
            fill: None,
            opacity: 1.0,
        }
    }

    /// A filled body (star, moon, or planet core) centered on `point`.
    pub fn body(point: Vec3, radius: f64, color: Color) -> Self {
        Self {
            shape: Shape::Circle { point, radius },
            center: point,
            stroke: color,
            fill: Some(color),
            opacity: 1.0,
        }
    }

    /// Translate the center and every geometry vertex by `delta`.
    pub fn translate(&mut self, delta: Vec3) {
        self.center += delta;
        match &mut self.shape {
            Shape::Line { start, end } => {
                *start += delta;
                *end += delta;
            }
            Shape::Circle { point, .. } => *point += delta,
        }
    }
}
