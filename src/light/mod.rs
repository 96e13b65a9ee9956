//! Light descriptions and their view-space transform.
//!
//! Lights are authored in world space; shading runs in view space, so
//! the renderer asks for a [`ViewSpaceLights`] copy once per frame with
//! the current view matrix. Positions transform as homogeneous points
//! (w = 1), directions as homogeneous directions (w = 0).

use crate::math::{Mat4, Vec3, Vec4};

/// A point light with quadratic distance attenuation.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    /// Position in world space
    pub position: Vec3,
    /// Light colour
    pub colour: Vec3,
    /// Constant attenuation term
    pub constant: f32,
    /// Linear attenuation term
    pub linear: f32,
    /// Quadratic attenuation term
    pub quadratic: f32,
}

/// A spot light: a point light restricted to a cone.
#[derive(Debug, Clone, Copy)]
pub struct SpotLight {
    /// Position in world space
    pub position: Vec3,
    /// Cone axis (normalized)
    pub direction: Vec3,
    /// Light colour
    pub colour: Vec3,
    /// Constant attenuation term
    pub constant: f32,
    /// Linear attenuation term
    pub linear: f32,
    /// Quadratic attenuation term
    pub quadratic: f32,
    /// Cosine of the cone half-angle
    pub cos_cutoff: f32,
}

/// A directional light (sun-like); direction only, no attenuation.
#[derive(Debug, Clone, Copy)]
pub struct DirectionalLight {
    /// Light direction (normalized)
    pub direction: Vec3,
    /// Light colour
    pub colour: Vec3,
}

/// All light sources in the scene, in world space.
#[derive(Debug, Clone, Default)]
pub struct Lights {
    pub points: Vec<PointLight>,
    pub spots: Vec<SpotLight>,
    pub directionals: Vec<DirectionalLight>,
}

impl Lights {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point_light(
        &mut self,
        position: Vec3,
        colour: Vec3,
        constant: f32,
        linear: f32,
        quadratic: f32,
    ) {
        self.points.push(PointLight {
            position,
            colour,
            constant,
            linear,
            quadratic,
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_spot_light(
        &mut self,
        position: Vec3,
        direction: Vec3,
        colour: Vec3,
        constant: f32,
        linear: f32,
        quadratic: f32,
        cos_cutoff: f32,
    ) {
        self.spots.push(SpotLight {
            position,
            direction: direction.normalize(),
            colour,
            constant,
            linear,
            quadratic,
            cos_cutoff,
        });
    }

    pub fn add_directional_light(&mut self, direction: Vec3, colour: Vec3) {
        self.directionals.push(DirectionalLight {
            direction: direction.normalize(),
            colour,
        });
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.points.len() + self.spots.len() + self.directionals.len()
    }

    /// Transform every light into view space with the given view
    /// matrix. Colours and attenuation pass through untouched.
    #[must_use]
    pub fn view_space(&self, view: &Mat4) -> ViewSpaceLights {
        let point = |p: &Vec3| view.multiply_vec4(&Vec4::from_point(*p)).xyz();
        let direction = |d: &Vec3| view.multiply_vec4(&Vec4::from_direction(*d)).xyz();

        ViewSpaceLights {
            points: self
                .points
                .iter()
                .map(|l| PointLight {
                    position: point(&l.position),
                    ..*l
                })
                .collect(),
            spots: self
                .spots
                .iter()
                .map(|l| SpotLight {
                    position: point(&l.position),
                    direction: direction(&l.direction),
                    ..*l
                })
                .collect(),
            directionals: self
                .directionals
                .iter()
                .map(|l| DirectionalLight {
                    direction: direction(&l.direction),
                    ..*l
                })
                .collect(),
        }
    }
}

/// The scene's lights after transformation into view space, ready for
/// upload by the shading layer.
#[derive(Debug, Clone, Default)]
pub struct ViewSpaceLights {
    pub points: Vec<PointLight>,
    pub spots: Vec<SpotLight>,
    pub directionals: Vec<DirectionalLight>,
}
