//! Right triangle relations between a half angle, a distance along the view ray, and the half
//! height of the frustum at that distance.
//!
//! All angles here are half angles in radians, see [`half_radian`](super::zoom::half_radian).

use core::f64::consts::FRAC_PI_2;

use bevy_math::DVec3;

use super::geometry::Segment;

/// Half height of the frustum cross section at `distance` from the camera.
pub fn height_from_distance(half_angle: f64, distance: f64) -> f64 {
    half_angle.tan() * distance
}

/// Distance from the camera at which the frustum cross section has half height `height`.
pub fn distance_from_height(half_angle: f64, height: f64) -> f64 {
    // cot(a) == tan(pi/2 - a)
    (FRAC_PI_2 - half_angle).tan() * height
}

/// The new camera to anchor distance that keeps the anchor plane the same apparent size when the
/// half angle changes from `old_half_angle` to `new_half_angle`.
///
/// Narrowing the angle pushes the camera back, widening it pulls the camera in.
pub fn distance_by_angle_change(
    old_half_angle: f64,
    new_half_angle: f64,
    old_distance: f64,
) -> f64 {
    let common_height = height_from_distance(old_half_angle, old_distance);
    distance_from_height(new_half_angle, common_height)
}

/// Where the camera must sit so that it is `new_distance` away from an anchor `anchor_distance`
/// along `ray`. The camera only moves along the view direction.
pub fn dolly_position(ray: &Segment, anchor_distance: f64, new_distance: f64) -> DVec3 {
    ray.direction() * (anchor_distance - new_distance) + ray.start()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::controller::zoom::half_radian;

    #[test]
    fn height_and_distance_are_inverses() {
        let angle = half_radian(40.0);
        let height = height_from_distance(angle, 7.5);
        assert_relative_eq!(distance_from_height(angle, height), 7.5, epsilon = 1e-12);
    }

    #[test]
    fn right_angle_frustum() {
        // A 90° fov has half height equal to distance.
        assert_relative_eq!(height_from_distance(half_radian(90.0), 3.0), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn unchanged_angle_keeps_distance() {
        let angle = half_radian(45.0);
        assert_relative_eq!(distance_by_angle_change(angle, angle, 3.0), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn matches_tangent_ratio() {
        let (old, new) = (half_radian(50.0), half_radian(20.0));
        assert_relative_eq!(
            distance_by_angle_change(old, new, 4.0),
            4.0 * old.tan() / new.tan(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn narrowing_recedes_widening_advances() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let old = half_radian(rng.gen_range(1.0..170.0));
            let narrower = old * rng.gen_range(0.05..0.99);
            let wider = old + (FRAC_PI_2 - old) * rng.gen_range(0.01..0.95);
            let distance = rng.gen_range(0.1..100.0);
            assert!(distance_by_angle_change(old, narrower, distance) > distance);
            assert!(distance_by_angle_change(old, wider, distance) < distance);
        }
    }

    #[test]
    fn dolly_moves_along_view_direction() {
        let ray = Segment::new(DVec3::new(0.0, 0.0, 3.0), DVec3::new(0.0, 0.0, -1000.0)).unwrap();
        let position = dolly_position(&ray, 3.0, 5.0);
        assert_relative_eq!(position.x, 0.0);
        assert_relative_eq!(position.y, 0.0);
        assert_relative_eq!(position.z, 5.0);
    }
}
