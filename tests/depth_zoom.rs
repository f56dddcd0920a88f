use approx::assert_relative_eq;
use bevy_depth_zoom::{
    controller::{distance::distance_by_angle_change, zoom::half_radian},
    prelude::*,
};
use bevy_math::DVec3;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn limits() -> FovLimits {
    FovLimits::new(2.0, 60.0).unwrap()
}

fn camera_at_three(fov: f64) -> CameraState {
    CameraState {
        position: DVec3::new(0.0, 0.0, 3.0),
        ray_far_point: DVec3::new(0.0, 0.0, -1000.0),
        field_of_view_degrees: fov,
        is_orthographic: false,
        orthographic_scale: 1.0,
    }
}

fn zoom_to(camera: &CameraState, desired_fov_degrees: f64) -> ZoomOutcome {
    let request = ZoomRequest {
        hint_point: DVec3::ZERO,
        desired_fov_degrees,
    };
    depth_zoom(camera, &request, &limits()).unwrap()
}

#[test]
fn anchor_of_scene_center() {
    let anchor = AnchorResult::resolve(
        DVec3::ZERO,
        DVec3::new(0.0, 0.0, 3.0),
        DVec3::new(0.0, 0.0, -1000.0),
    )
    .unwrap();
    assert_eq!(anchor.anchor_point, DVec3::ZERO);
    assert_relative_eq!(anchor.anchor_distance, 3.0);
}

#[test]
fn narrowing_below_lower_limit_enters_orthographic() {
    let next = zoom_to(&camera_at_three(2.0), 1.0).applied().unwrap();
    assert_eq!(next.field_of_view_degrees, 2.0);
    assert!(next.is_orthographic);
    assert_relative_eq!(next.orthographic_scale, 3.0 * 1f64.to_radians().tan(), epsilon = 1e-12);
    assert_relative_eq!(next.position.z, 3.0, epsilon = 1e-9);
    assert_eq!(next.position.x, 0.0);
    assert_eq!(next.position.y, 0.0);
}

#[test]
fn entering_orthographic_from_wide_angle() {
    let next = zoom_to(&camera_at_three(45.0), 1.0).applied().unwrap();
    let d_new = distance_by_angle_change(half_radian(45.0), half_radian(2.0), 3.0);
    assert!(next.is_orthographic);
    assert!(next.orthographic_scale > 0.0);
    assert_relative_eq!(next.orthographic_scale, 3.0 * half_radian(45.0).tan(), epsilon = 1e-9);
    // Moved along -z by (3 - d_new), i.e. backward since d_new > 3.
    assert_relative_eq!(next.position.z, 3.0 - (3.0 - d_new), epsilon = 1e-9);
    assert!(next.position.z > 3.0);
}

#[test]
fn leaving_orthographic_takes_two_steps() {
    let ortho = zoom_to(&camera_at_three(45.0), 1.0).applied().unwrap();

    let back = zoom_to(&ortho, 30.0).applied().unwrap();
    assert!(!back.is_orthographic);
    assert_eq!(back.field_of_view_degrees, 2.0);
    assert_relative_eq!(
        back.position.z,
        ortho.orthographic_scale / half_radian(2.0).tan(),
        epsilon = 1e-9
    );
    // The anchor plane keeps its size through the round trip.
    assert_relative_eq!(back.position.z, ortho.position.z, epsilon = 1e-9);

    let widened = zoom_to(&back, 30.0).applied().unwrap();
    assert!(!widened.is_orthographic);
    assert_eq!(widened.field_of_view_degrees, 30.0);
    assert!(widened.position.z < back.position.z);
}

#[test]
fn orthographic_from_scale_returns_to_scale_distance() {
    let ortho = CameraState {
        field_of_view_degrees: 2.0,
        is_orthographic: true,
        orthographic_scale: 3.0 * 1f64.to_radians().tan(),
        ..camera_at_three(2.0)
    };
    let back = zoom_to(&ortho, 30.0).applied().unwrap();
    assert_eq!(back.field_of_view_degrees, 2.0);
    assert!(!back.is_orthographic);
    assert_relative_eq!(back.position.z, 3.0, epsilon = 1e-9);
}

#[test]
fn result_fov_is_clamped_request() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let current = rng.gen_range(2.5..60.0);
        let desired = rng.gen_range(-30.0..120.0);
        let next = zoom_to(&camera_at_three(current), desired).applied().unwrap();
        assert_eq!(next.field_of_view_degrees, desired.clamp(2.0, 60.0));
        assert_eq!(next.is_orthographic, next.field_of_view_degrees == 2.0);
    }
}

#[test]
fn apparent_size_of_anchor_plane_is_preserved() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..500 {
        let current = rng.gen_range(3.0..60.0);
        let desired = rng.gen_range(3.0..60.0);
        let camera = camera_at_three(current);
        let next = zoom_to(&camera, desired).applied().unwrap();
        let before = 3.0 * half_radian(current).tan();
        let after = next.position.z * half_radian(desired).tan();
        assert_relative_eq!(before, after, epsilon = 1e-9);
    }
}

#[test]
fn hint_behind_camera_anchors_at_camera() {
    let camera = camera_at_three(30.0);
    let request = ZoomRequest {
        hint_point: DVec3::new(0.0, 0.0, 50.0),
        desired_fov_degrees: 10.0,
    };
    let next = depth_zoom(&camera, &request, &limits())
        .unwrap()
        .applied()
        .unwrap();
    assert_eq!(next.field_of_view_degrees, 10.0);
    assert_relative_eq!(next.position.z, 3.0, epsilon = 1e-12);
}

#[test]
fn contract_violations() {
    let request = ZoomRequest {
        hint_point: DVec3::ZERO,
        desired_fov_degrees: 10.0,
    };
    let bad_limits = FovLimits {
        lower: 2.0,
        upper: 200.0,
    };
    assert_eq!(
        depth_zoom(&camera_at_three(30.0), &request, &bad_limits),
        Err(DepthZoomError::InvalidConfiguration {
            lower: 2.0,
            upper: 200.0
        })
    );

    let degenerate = CameraState {
        ray_far_point: DVec3::new(0.0, 0.0, 3.0),
        ..camera_at_three(30.0)
    };
    assert_eq!(
        depth_zoom(&degenerate, &request, &limits()),
        Err(DepthZoomError::DegenerateRay)
    );
}

#[test]
fn hint_behind_camera_never_enters_an_empty_orthographic_view() {
    let camera = camera_at_three(45.0);
    let request = ZoomRequest {
        hint_point: DVec3::new(0.0, 0.0, 50.0),
        desired_fov_degrees: 1.0,
    };
    assert_eq!(
        depth_zoom(&camera, &request, &limits()),
        Ok(ZoomOutcome::Unchanged)
    );
}

#[test]
fn non_finite_requests_leave_no_state() {
    let camera = camera_at_three(30.0);
    for (hint_point, desired_fov_degrees) in [
        (DVec3::ZERO, f64::NAN),
        (DVec3::ZERO, f64::INFINITY),
        (DVec3::new(f64::NAN, 0.0, 0.0), 10.0),
        (DVec3::new(0.0, 0.0, f64::NEG_INFINITY), 10.0),
    ] {
        let request = ZoomRequest {
            hint_point,
            desired_fov_degrees,
        };
        assert!(matches!(
            depth_zoom(&camera, &request, &limits()),
            Err(DepthZoomError::NonFiniteRequest { .. })
        ));
    }
}
