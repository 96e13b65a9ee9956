//! Hand-rolled vector and matrix math.
//!
//! Matrices are column-major: `m[col][row]`, so column `i` holds basis
//! vector `i` and composition reads right-to-left. All constructors are
//! total over their numeric inputs; degenerate geometry (zero-length
//! axes, `near == far`) propagates NaN/Inf rather than being guarded.

use bytemuck::{Pod, Zeroable};

/// Degrees to radians.
#[must_use]
pub fn radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    _padding: f32,
}

impl Vec3 {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            _padding: 0.0,
        }
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    #[must_use]
    pub fn scale(&self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    #[must_use]
    pub fn neg(&self) -> Self {
        self.scale(-1.0)
    }

    #[must_use]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// The one cross product in the crate; `Mat4::look_at` and the
    /// camera basis derivation both go through here.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[must_use]
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    #[must_use]
    pub fn normalize(&self) -> Self {
        self.scale(1.0 / self.length())
    }

    #[must_use]
    pub fn distance(&self, other: &Self) -> f32 {
        self.sub(other).length()
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Self::zero()
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Homogeneous point: w = 1, affected by translation.
    #[must_use]
    pub const fn from_point(p: Vec3) -> Self {
        Self::new(p.x, p.y, p.z, 1.0)
    }

    /// Homogeneous direction: w = 0, rotation only.
    #[must_use]
    pub const fn from_direction(d: Vec3) -> Self {
        Self::new(d.x, d.y, d.z, 0.0)
    }

    #[must_use]
    pub const fn xyz(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// 4x4 matrix, column-major: `m[col][row]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    pub m: [[f32; 4]; 4],
}

impl Mat4 {
    #[must_use]
    pub const fn identity() -> Self {
        let mut m = [[0.0; 4]; 4];
        m[0][0] = 1.0;
        m[1][1] = 1.0;
        m[2][2] = 1.0;
        m[3][3] = 1.0;
        Self { m }
    }

    /// Identity with the translation column set to `v`.
    #[must_use]
    pub fn translate(v: &Vec3) -> Self {
        let mut result = Self::identity();
        result.m[3][0] = v.x;
        result.m[3][1] = v.y;
        result.m[3][2] = v.z;
        result
    }

    /// Identity with the diagonal set to `v`.
    #[must_use]
    pub fn scale(v: &Vec3) -> Self {
        let mut result = Self::identity();
        result.m[0][0] = v.x;
        result.m[1][1] = v.y;
        result.m[2][2] = v.z;
        result
    }

    /// Rotation by `angle` radians about `normalize(axis)`, Rodrigues'
    /// form built from (1 - cos), sin, cos and the axis cross terms.
    #[must_use]
    pub fn rotate(angle: f32, axis: &Vec3) -> Self {
        let a = axis.normalize();
        let c = angle.cos();
        let s = angle.sin();
        let t = 1.0 - c;
        let (x, y, z) = (a.x, a.y, a.z);

        let mut result = Self::identity();
        result.m[0][0] = t * x * x + c;
        result.m[0][1] = t * x * y + z * s;
        result.m[0][2] = t * x * z - y * s;
        result.m[1][0] = t * x * y - z * s;
        result.m[1][1] = t * y * y + c;
        result.m[1][2] = t * y * z + x * s;
        result.m[2][0] = t * x * z + y * s;
        result.m[2][1] = t * y * z - x * s;
        result.m[2][2] = t * z * z + c;
        result
    }

    /// View matrix: rotates world axes onto the camera basis, then
    /// translates the eye to the origin. Right-handed, camera looks
    /// down -Z.
    #[must_use]
    pub fn look_at(eye: &Vec3, target: &Vec3, world_up: &Vec3) -> Self {
        let front = target.sub(eye).normalize();
        let right = front.cross(world_up).normalize();
        let up = right.cross(&front);

        let mut rotation = Self::identity();
        rotation.m[0] = [right.x, up.x, -front.x, 0.0];
        rotation.m[1] = [right.y, up.y, -front.y, 0.0];
        rotation.m[2] = [right.z, up.z, -front.z, 0.0];

        rotation.multiply(&Self::translate(&eye.neg()))
    }

    /// Symmetric perspective frustum, OpenGL clip conventions: z maps
    /// to [-1, 1], w carries -z_view.
    #[must_use]
    pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let top = near * (fov / 2.0).tan();
        let right = aspect * top;
        let c = -(far + near) / (far - near);
        let d = -(2.0 * far * near) / (far - near);

        let mut m = [[0.0; 4]; 4];
        m[0][0] = near / right;
        m[1][1] = near / top;
        m[2][2] = c;
        m[2][3] = -1.0;
        m[3][2] = d;
        Self { m }
    }

    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut m = [[0.0; 4]; 4];
        for col in 0..4 {
            for row in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.m[k][row] * other.m[col][k];
                }
                m[col][row] = sum;
            }
        }
        Self { m }
    }

    #[must_use]
    pub fn multiply_vec4(&self, v: &Vec4) -> Vec4 {
        let input = [v.x, v.y, v.z, v.w];
        let mut out = [0.0; 4];
        for row in 0..4 {
            let mut sum = 0.0;
            for col in 0..4 {
                sum += self.m[col][row] * input[col];
            }
            out[row] = sum;
        }
        Vec4::new(out[0], out[1], out[2], out[3])
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

/// Model transform: translation, axis-angle rotation, non-uniform scale,
/// composed as translate * rotate * scale.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub position: Vec3,
    pub axis: Vec3,
    pub angle: f32,
    pub scale: Vec3,
}

impl Transform {
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            position: Vec3::zero(),
            axis: Vec3::new(0.0, 1.0, 0.0),
            angle: 0.0,
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }

    #[must_use]
    pub const fn new(position: Vec3, axis: Vec3, angle: f32, scale: Vec3) -> Self {
        Self {
            position,
            axis,
            angle,
            scale,
        }
    }

    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        let translate = Mat4::translate(&self.position);
        let rotate = Mat4::rotate(self.angle, &self.axis);
        let scale = Mat4::scale(&self.scale);
        translate.multiply(&rotate).multiply(&scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
