use super::*;
use crate::foundation::core::MAX_COPIES;

fn state(copies: [u32; 3]) -> RepeaterState {
    RepeaterState {
        copies,
        camera_aware: false,
        ..RepeaterState::default()
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn produces_exactly_one_record_per_copy() {
    for copies in [[1, 1, 1], [3, 1, 1], [4, 5, 2], [10, 10, 10], [MAX_COPIES, 1, 1]] {
        let s = state(copies);
        let t = compute_copy_transforms(&s, None).unwrap();
        let n = (copies[0] * copies[1] * copies[2]) as usize;
        assert_eq!(t.len(), n);
        assert!(t.capacity() <= n);
    }
}

#[test]
fn records_follow_flat_grid_order() {
    let mut s = state([3, 2, 2]);
    s.step_position = Vec3::new(10.0, 20.0, 30.0);
    let t = compute_copy_transforms(&s, None).unwrap();
    for (i, c) in t.iter().enumerate() {
        assert_eq!(c.index as usize, i);
    }
    // index = z*6 + y*3 + x
    let c = t[6 + 3 + 2];
    assert_eq!(c.position, Vec3::new(20.0, 20.0, 30.0));
}

#[test]
fn rotation_steps_use_flat_index() {
    let mut s = state([2, 2, 1]);
    s.base_rotation = Vec3::new(0.0, 0.0, 5.0);
    s.step_rotation = Vec3::new(1.0, 0.0, 10.0);
    let t = compute_copy_transforms(&s, None).unwrap();
    assert_eq!(t[3].rotation, Vec3::new(3.0, 0.0, 35.0));
}

#[test]
fn scale_compounds_geometrically() {
    let mut s = state([4, 1, 1]);
    s.step_scale = 50.0;
    let t = compute_copy_transforms(&s, None).unwrap();
    let scales: Vec<f64> = t.iter().map(|c| c.scale).collect();
    assert_eq!(scales, vec![100.0, 50.0, 25.0, 12.5]);
}

#[test]
fn scale_clamps_and_hides_vanishing_copies() {
    let mut s = state([30, 1, 1]);
    s.step_scale = 10.0;
    let t = compute_copy_transforms(&s, None).unwrap();
    assert!(t[0].visible);
    let last = t.last().unwrap();
    assert_eq!(last.scale, MIN_SCALE);
    assert!(!last.visible);

    s.step_scale = 100_000.0;
    s.base_scale = 1e9;
    let t = compute_copy_transforms(&s, None).unwrap();
    assert_eq!(t[0].scale, 1000.0);
    assert_eq!(t.last().unwrap().scale, MAX_SCALE);
}

#[test]
fn opacity_interpolates_over_copy_range() {
    let mut s = state([5, 1, 1]);
    s.opacity_start = 100.0;
    s.opacity_end = 0.0;
    let t = compute_copy_transforms(&s, None).unwrap();
    let op: Vec<f64> = t.iter().map(|c| c.opacity).collect();
    assert_eq!(op, vec![100.0, 75.0, 50.0, 25.0, 0.0]);
    assert!(!t[4].visible);
}

#[test]
fn single_copy_uses_start_opacity_and_base_weight() {
    let mut s = state([1, 1, 1]);
    s.opacity_start = 80.0;
    s.opacity_end = 0.0;
    s.base_opacity = 50.0;
    let t = compute_copy_transforms(&s, None).unwrap();
    assert_eq!(t[0].opacity, 40.0);
}

#[test]
fn opacity_is_clamped() {
    let mut s = state([2, 1, 1]);
    s.opacity_start = -50.0;
    s.opacity_end = 500.0;
    let t = compute_copy_transforms(&s, None).unwrap();
    assert_eq!(t[0].opacity, 0.0);
    assert_eq!(t[1].opacity, 100.0);
}

#[test]
fn without_camera_depth_is_raw_z() {
    let mut s = state([3, 1, 1]);
    s.base_position = Vec3::new(1.0, 2.0, -7.0);
    let t = compute_copy_transforms(&s, None).unwrap();
    assert!(t.iter().all(|c| c.camera_depth == -7.0 && c.view_scale == 1.0));
    assert_eq!(t[0].world.translation, Vec2::new(1.0, 2.0));
}

#[test]
fn camera_is_ignored_unless_camera_aware() {
    let cam = CameraSample::new(Vec3::new(5.0, 5.0, -100.0), Vec3::new(0.0, 0.0, 1.0), 50.0);
    let s = state([1, 1, 1]);
    let t = compute_copy_transforms(&s, Some(&cam)).unwrap();
    assert_eq!(t[0].camera_depth, 0.0);
    assert_eq!(t[0].world.translation, Vec2::ZERO);
}

#[test]
fn camera_depth_is_signed_view_axis_projection() {
    let cam = CameraSample::new(Vec3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, 1.0), 0.0);
    let mut s = state([1, 1, 3]);
    s.camera_aware = true;
    s.base_position = Vec3::new(0.0, 0.0, -20.0);
    s.step_position = Vec3::new(0.0, 0.0, 10.0);
    let t = compute_copy_transforms(&s, Some(&cam)).unwrap();
    let depths: Vec<f64> = t.iter().map(|c| c.camera_depth).collect();
    assert_eq!(depths, vec![-10.0, 0.0, 10.0]);
    // focal length 0 disables perspective
    assert!(t.iter().all(|c| c.view_scale == 1.0 && c.scale == 100.0));
}

#[test]
fn camera_aware_translation_is_camera_relative() {
    let cam = CameraSample::new(Vec3::new(30.0, -10.0, 0.0), Vec3::new(0.0, 0.0, 1.0), 0.0);
    let mut s = state([1, 1, 1]);
    s.camera_aware = true;
    s.base_position = Vec3::new(40.0, 5.0, 0.0);
    let t = compute_copy_transforms(&s, Some(&cam)).unwrap();
    assert_eq!(t[0].world.translation, Vec2::new(10.0, 15.0));
}

#[test]
fn perspective_scale_follows_focal_over_denominator() {
    let cam = CameraSample::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), 100.0);
    let mut s = state([1, 1, 2]);
    s.camera_aware = true;
    s.step_position = Vec3::new(0.0, 0.0, 50.0);
    let t = compute_copy_transforms(&s, Some(&cam)).unwrap();
    assert_eq!(t[0].view_scale, 1.0);
    assert_eq!(t[1].view_scale, 2.0);
    assert_eq!(t[1].scale, 200.0);
}

#[test]
fn perspective_guards_singularity() {
    assert!(approx(perspective_scale(100.0, 50.0), 2.0));
    assert_eq!(perspective_scale(100.0, 200.0), MIN_PERSPECTIVE);
    assert_eq!(perspective_scale(100.0, 99.5), 10.0);
    assert_eq!(perspective_scale(100.0, 100.0), MIN_PERSPECTIVE);
    assert_eq!(perspective_scale(100.0, 100.5), MIN_PERSPECTIVE);
    assert_eq!(perspective_scale(1000.0, 998.0), MAX_PERSPECTIVE);
    assert!(approx(perspective_scale(100.0, -100.0), 0.5));
}

#[test]
fn world_matrix_holds_inverse_rotation() {
    let mut s = state([1, 1, 1]);
    s.base_rotation = Vec3::new(0.0, 0.0, 90.0);
    let t = compute_copy_transforms(&s, None).unwrap();
    assert!(approx(t[0].world.cos_z, 0.0));
    assert!(approx(t[0].world.sin_z, -1.0));
}

#[test]
fn invalid_counts_fail_before_any_output() {
    let s = state([0, 1, 1]);
    assert!(compute_copy_transforms(&s, None).unwrap_err().is_bad_parameter());
    let s = state([u32::MAX, u32::MAX, u32::MAX]);
    assert!(compute_copy_transforms(&s, None).unwrap_err().is_bad_parameter());
    let s = state([MAX_COPIES, 2, 1]);
    assert!(compute_copy_transforms(&s, None).unwrap_err().is_bad_parameter());
}

#[test]
fn non_finite_state_is_bad_parameter() {
    let mut s = state([1, 1, 1]);
    s.opacity_end = f64::NAN;
    assert!(compute_copy_transforms(&s, None).unwrap_err().is_bad_parameter());
}
