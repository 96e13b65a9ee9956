use meander::camera::{Camera, CameraSettings};
use meander::math::{Mat4, Vec3, Vec4};

const EPS: f32 = 1e-5;

fn assert_close(a: f32, b: f32) {
    assert!((a - b).abs() < EPS, "{a} != {b}");
}

fn assert_vec3_close(a: &Vec3, b: &Vec3) {
    assert_close(a.x, b.x);
    assert_close(a.y, b.y);
    assert_close(a.z, b.z);
}

#[test]
fn test_matrices_are_identity_until_first_update() {
    let camera = Camera::new(Vec3::new(0.0, 1.0, 1.0), Vec3::zero());
    assert_eq!(camera.view, Mat4::identity());
    assert_eq!(camera.projection, Mat4::identity());
    assert_eq!(camera.front, Vec3::zero());
}

#[test]
fn test_front_at_zero_yaw_and_pitch() {
    let mut camera = Camera::new(Vec3::zero(), Vec3::zero());
    camera.update_vectors();
    assert_vec3_close(&camera.front, &Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn test_front_at_quarter_turn_yaw() {
    let mut camera = Camera::new(Vec3::zero(), Vec3::zero());
    camera.yaw = std::f32::consts::FRAC_PI_2;
    camera.update_vectors();
    assert_vec3_close(&camera.front, &Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn test_front_at_positive_pitch() {
    let mut camera = Camera::new(Vec3::zero(), Vec3::zero());
    camera.pitch = std::f32::consts::FRAC_PI_4;
    camera.update_vectors();

    let half_sqrt2 = std::f32::consts::FRAC_1_SQRT_2;
    assert_vec3_close(&camera.front, &Vec3::new(half_sqrt2, half_sqrt2, 0.0));
}

#[test]
fn test_basis_is_orthogonal() {
    let mut camera = Camera::new(Vec3::zero(), Vec3::zero());
    camera.yaw = 0.8;
    camera.pitch = -0.3;
    camera.update_vectors();

    assert_close(camera.right.dot(&camera.front), 0.0);
    assert_close(camera.right.length(), 1.0);
    assert_vec3_close(&camera.up, &camera.right.cross(&camera.front));
}

#[test]
fn test_view_maps_eye_to_origin() {
    let mut camera = Camera::new(Vec3::new(0.0, 1.0, 1.0), Vec3::zero());
    camera.update_matrices();

    let camera_space = camera
        .view
        .multiply_vec4(&Vec4::from_point(Vec3::new(0.0, 1.0, 1.0)));
    assert_vec3_close(&camera_space.xyz(), &Vec3::zero());
}

#[test]
fn test_update_matrices_rederives_basis() {
    let mut camera = Camera::new(Vec3::zero(), Vec3::zero());
    camera.update_matrices();
    let before = camera.view;

    // Changing yaw alone must be picked up without an explicit
    // update_vectors call.
    camera.yaw = std::f32::consts::FRAC_PI_2;
    camera.update_matrices();
    assert_ne!(camera.view, before);
    assert_vec3_close(&camera.front, &Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn test_update_matrices_is_idempotent() {
    let mut camera = Camera::new(Vec3::new(3.0, 4.0, -2.0), Vec3::zero());
    camera.yaw = 1.2;
    camera.pitch = 0.4;
    camera.update_matrices();
    let view = camera.view;
    let projection = camera.projection;

    camera.update_matrices();
    assert_eq!(camera.view, view);
    assert_eq!(camera.projection, projection);
}

#[test]
fn test_pitch_unclamped_by_default() {
    let mut camera = Camera::new(Vec3::zero(), Vec3::zero());
    camera.rotate(0.0, 4.0);
    assert_close(camera.pitch, 4.0);
}

#[test]
fn test_pitch_limit_clamps_when_configured() {
    let settings = CameraSettings {
        pitch_limit: Some(1.0),
        ..CameraSettings::default()
    };
    let mut camera = Camera::with_settings(Vec3::zero(), Vec3::zero(), settings);

    camera.rotate(0.0, 4.0);
    assert_close(camera.pitch, 1.0);
    camera.rotate(0.0, -10.0);
    assert_close(camera.pitch, -1.0);
}

#[test]
fn test_rotate_accumulates_yaw() {
    let mut camera = Camera::new(Vec3::zero(), Vec3::zero());
    camera.rotate(0.3, 0.0);
    camera.rotate(0.2, -0.1);
    assert_close(camera.yaw, 0.5);
    assert_close(camera.pitch, -0.1);
}

#[test]
fn test_set_aspect_ratio_changes_projection() {
    let mut camera = Camera::new(Vec3::zero(), Vec3::zero());
    camera.update_matrices();
    let before = camera.projection;

    camera.set_aspect_ratio(21.0 / 9.0);
    camera.update_matrices();
    assert_ne!(camera.projection, before);
}
