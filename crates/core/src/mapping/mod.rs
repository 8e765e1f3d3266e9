use crate::render::Point;

/// Rescales `value` from `[in_lo, in_hi]` to `[out_lo, out_hi]`.
///
/// Values outside the input range are extrapolated, never clamped; the hand
/// calculations rely on this to carry fractions of a coarser unit.
pub fn linear_map(value: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    out_lo + (value - in_lo) * (out_hi - out_lo) / (in_hi - in_lo)
}

/// Point at `distance` from `center` along `degrees`, in screen orientation
/// (0° to the right, angles growing clockwise because y grows downward).
pub fn polar_point(center: Point, degrees: f32, distance: f32) -> Point {
    let radians = degrees.to_radians();
    Point::new(
        center.x + radians.cos() * distance,
        center.y + radians.sin() * distance,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    #[test]
    fn maps_and_extrapolates() {
        assert!((linear_map(6.0, 0.0, 12.0, -90.0, 270.0) - 90.0).abs() <= EPSILON);
        assert!((linear_map(15.0, 0.0, 12.0, -90.0, 270.0) - 360.0).abs() <= EPSILON);
        assert!((linear_map(-1.0, 0.0, 60.0, 0.0, 6.0) + 0.1).abs() <= EPSILON);
    }

    #[test]
    fn polar_points_follow_screen_orientation() {
        let center = Point::new(100.0, 100.0);

        let up = polar_point(center, -90.0, 50.0);
        assert!((up.x - 100.0).abs() <= EPSILON);
        assert!((up.y - 50.0).abs() <= EPSILON);

        let down = polar_point(center, 90.0, 50.0);
        assert!((down.y - 150.0).abs() <= EPSILON);

        let right = polar_point(center, 0.0, 50.0);
        assert!((right.x - 150.0).abs() <= EPSILON);
    }
}
