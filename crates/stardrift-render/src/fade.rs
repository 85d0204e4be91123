//! Depth-based opacity fade at the cylinder ends.

use stardrift_math::remap;

/// Opacity for an object at world depth `z` inside a cylinder of the given
/// half-depth: a linear ramp from 0 to 1 across `margin` units at each end,
/// full opacity in the interior.
///
/// Unclamped outside the cylinder; callers cull before painting, and the
/// canvas clamps alpha when compositing.
pub fn fade_opacity(z: f64, half_depth: f64, margin: f64) -> f64 {
    let far_ramp_end = -half_depth + margin;
    let near_ramp_start = half_depth - margin;

    if z < far_ramp_end {
        remap(z, (-half_depth, far_ramp_end), (0.0, 1.0))
    } else if z > near_ramp_start {
        1.0 - remap(z, (near_ramp_start, half_depth), (0.0, 1.0))
    } else {
        1.0
    }
}
