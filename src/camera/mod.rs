//! First-person yaw/pitch camera

use crate::math::{radians, Mat4, Vec3};

/// Projection and orientation limits for the camera
#[derive(Debug, Clone)]
pub struct CameraSettings {
    /// Vertical field of view in radians (default: 45 degrees)
    pub fov: f32,
    /// Viewport aspect ratio (default: 1024 / 768)
    pub aspect: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Optional pitch clamp in radians; `None` leaves pitch unclamped,
    /// so the basis flips as pitch crosses +/- pi/2
    pub pitch_limit: Option<f32>,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov: radians(45.0),
            aspect: 1024.0 / 768.0,
            near: 0.2,
            far: 100.0,
            pitch_limit: None,
        }
    }
}

/// First-person camera: yaw/pitch orientation, derived front/right/up
/// basis, view and projection outputs.
///
/// `view` and `projection` are identity until the first
/// [`update_matrices`](Camera::update_matrices) call and stale until the
/// next one. `update_matrices` re-derives the basis vectors before
/// building the view matrix, so callers cannot render with a basis that
/// lags the current yaw/pitch.
pub struct Camera {
    /// World-space position
    pub eye: Vec3,
    /// Informational look-at point; kept in sync by the caller as
    /// `eye + front`
    pub target: Vec3,
    /// Horizontal orientation angle in radians
    pub yaw: f32,
    /// Vertical orientation angle in radians
    pub pitch: f32,
    /// Derived viewing direction; not renormalized after construction
    pub front: Vec3,
    /// Derived right vector; the only normalized basis vector
    pub right: Vec3,
    /// Derived up vector, `right x front`
    pub up: Vec3,
    /// World up reference, constant (0, 1, 0)
    pub world_up: Vec3,
    /// Projection parameters and pitch clamp
    pub settings: CameraSettings,
    /// World-to-camera transform, output of `update_matrices`
    pub view: Mat4,
    /// Camera-to-clip transform, output of `update_matrices`
    pub projection: Mat4,
}

impl Camera {
    /// Create a camera at `eye` looking at nothing in particular yet:
    /// yaw and pitch start at zero and are NOT derived from `target`,
    /// so the basis is undefined until the first
    /// [`update_vectors`](Camera::update_vectors) call.
    #[must_use]
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self {
            eye,
            target,
            yaw: 0.0,
            pitch: 0.0,
            front: Vec3::zero(),
            right: Vec3::zero(),
            up: Vec3::zero(),
            world_up: Vec3::new(0.0, 1.0, 0.0),
            settings: CameraSettings::default(),
            view: Mat4::identity(),
            projection: Mat4::identity(),
        }
    }

    #[must_use]
    pub fn with_settings(eye: Vec3, target: Vec3, settings: CameraSettings) -> Self {
        Self {
            settings,
            ..Self::new(eye, target)
        }
    }

    /// Recompute front/right/up from yaw and pitch.
    ///
    /// `front` comes straight from the spherical-to-Cartesian
    /// conversion and is unit length by construction; `right` is
    /// normalized; `up` is the raw cross product of the two.
    pub fn update_vectors(&mut self) {
        self.front = Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        );
        self.right = self.front.cross(&self.world_up).normalize();
        self.up = self.right.cross(&self.front);
    }

    /// Recompute the view and projection matrices.
    ///
    /// Always re-derives the basis vectors first, so the matrices can
    /// never lag a yaw/pitch change. Idempotent for unchanged state.
    pub fn update_matrices(&mut self) {
        self.update_vectors();
        self.view = Mat4::look_at(&self.eye, &self.eye.add(&self.front), &self.world_up);
        self.projection = Mat4::perspective(
            self.settings.fov,
            self.settings.aspect,
            self.settings.near,
            self.settings.far,
        );
    }

    /// Accumulate orientation deltas. Pitch is clamped only when
    /// `settings.pitch_limit` is set.
    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw += yaw_delta;
        self.pitch += pitch_delta;
        if let Some(limit) = self.settings.pitch_limit {
            self.pitch = self.pitch.clamp(-limit, limit);
        }
    }

    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        self.settings.aspect = aspect;
    }
}
