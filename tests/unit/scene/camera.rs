use super::*;
use crate::foundation::error::RepeaterError;

#[test]
fn forward_is_normalized() {
    let cam = CameraSample::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -4.0), 100.0);
    assert_eq!(cam.forward, Vec3::new(0.0, 0.0, -1.0));
}

#[test]
fn zero_forward_falls_back_to_plus_z() {
    let cam = CameraSample::new(Vec3::ZERO, Vec3::ZERO, 100.0);
    assert_eq!(cam.forward, Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn depth_is_signed_projection() {
    let cam = CameraSample::new(Vec3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, 1.0), 50.0);
    assert_eq!(cam.depth_of(Vec3::new(3.0, 4.0, 0.0)), 10.0);
    assert_eq!(cam.depth_of(Vec3::new(0.0, 0.0, -15.0)), -5.0);
}

#[test]
fn non_positive_focal_length_disables_perspective() {
    let mk = |f| CameraSample::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), f);
    assert_eq!(mk(0.0).perspective_focal_length(), None);
    assert_eq!(mk(-5.0).perspective_focal_length(), None);
    assert_eq!(mk(f64::NAN).perspective_focal_length(), None);
    assert_eq!(mk(35.0).perspective_focal_length(), Some(35.0));
}

#[test]
fn deserialize_normalizes_and_defaults() {
    let cam: CameraSample =
        serde_json::from_str(r#"{"position": [1, 2, 3], "forward": [0, 2, 0]}"#).unwrap();
    assert_eq!(cam.position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(cam.forward, Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(cam.focal_length, 0.0);
}

#[test]
fn providers() {
    assert_eq!(NoCamera.camera_at(FrameIndex(0)).unwrap(), None);

    let mut fixed = CameraSample::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), 10.0);
    assert!(fixed.camera_at(FrameIndex(3)).unwrap().is_some());

    let mut failing = |_f: FrameIndex| -> RepeaterResult<Option<CameraSample>> {
        Err(RepeaterError::camera("scene graph unavailable"))
    };
    assert!(failing.camera_at(FrameIndex(0)).is_err());
}
