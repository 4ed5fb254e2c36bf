use macroquad::math::Vec2;

/// Linear interpolation between two f32 values
pub fn lerp(start: f32, end: f32, alpha: f32) -> f32 {
    start + (end - start) * alpha
}

/// Constrain a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamp each component of a vector into `[min, max]`
pub fn clamp_vec(value: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    Vec2::new(clamp(value.x, min.x, max.x), clamp(value.y, min.y, max.y))
}

/// Circle overlap test. Touching circles collide.
pub fn circles_collide(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    a.distance_squared(b) <= reach * reach
}

/// Heading of a velocity in degrees, counter-clockwise from +x
pub fn heading_degrees(velocity: Vec2) -> f32 {
    velocity.y.atan2(velocity.x).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_lerp() {
        assert_approx_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_approx_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_approx_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_approx_eq!(lerp(5.0, 10.0, 0.5), 7.5);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-5, 0, 10), 0);
        assert_eq!(clamp(15, 0, 10), 10);

        assert_approx_eq!(clamp(5.0f32, 0.0f32, 10.0f32), 5.0f32);
        assert_approx_eq!(clamp(-5.0f32, 0.0f32, 10.0f32), 0.0f32);
        assert_approx_eq!(clamp(15.0f32, 0.0f32, 10.0f32), 10.0f32);
    }

    #[test]
    fn test_clamp_vec() {
        let clamped = clamp_vec(
            Vec2::new(-3.0, 900.0),
            Vec2::new(20.0, 20.0),
            Vec2::new(780.0, 580.0),
        );
        assert_eq!(clamped, Vec2::new(20.0, 580.0));
    }

    #[test]
    fn test_circles_collide() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(30.0, 0.0);
        // Exactly touching counts
        assert!(circles_collide(a, 18.0, b, 12.0));
        assert!(!circles_collide(a, 17.9, b, 12.0));
        // Symmetric
        assert_eq!(
            circles_collide(a, 18.0, b, 12.0),
            circles_collide(b, 12.0, a, 18.0)
        );
    }

    #[test]
    fn test_heading_degrees() {
        assert_approx_eq!(heading_degrees(Vec2::new(1.0, 0.0)), 0.0);
        assert_approx_eq!(heading_degrees(Vec2::new(0.0, 2.0)), 90.0);
        assert_approx_eq!(heading_degrees(Vec2::new(-1.0, 0.0)).abs(), 180.0);
    }
}
