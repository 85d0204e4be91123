//! Linear value remapping between ranges.

/// Linear interpolation between `a` and `b` at parameter `t` (unclamped).
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Linearly rescale `value` from the range `from` to the range `to`.
///
/// Unclamped: values outside `from` extrapolate outside `to`. A degenerate
/// source range (zero width) maps everything to the start of `to` rather
/// than dividing by zero.
pub fn remap(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let width = from.1 - from.0;
    if width == 0.0 {
        return to.0;
    }
    let t = (value - from.0) / width;
    lerp(to.0, to.1, t)
}
