use crate::camera::Camera;
use crate::input::InputState;
use crate::light::{Lights, ViewSpaceLights};
use crate::math::{radians, Mat4, Transform, Vec3};
use log::{info, trace};

/// Phong surface coefficients, passed through to the shading layer.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    /// Ambient reflectance (ka)
    pub ambient: f32,
    /// Diffuse reflectance (kd)
    pub diffuse: f32,
    /// Specular reflectance (ks)
    pub specular: f32,
    /// Specular exponent (Ns)
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: 0.7,
            diffuse: 0.5,
            specular: 1.0,
            shininess: 20.0,
        }
    }
}

/// A renderable object: a named mesh slot with a model transform and
/// surface material. Mesh and texture data live with the renderer.
pub struct SceneObject {
    pub name: String,
    pub transform: Transform,
    pub material: Material,
}

impl SceneObject {
    #[must_use]
    pub fn new(name: &str, transform: Transform) -> Self {
        Self {
            name: name.to_string(),
            transform,
            material: Material::default(),
        }
    }
}

/// Transforms for one object, ready for uniform upload.
#[derive(Debug, Clone, Copy)]
pub struct Draw {
    /// Index into the scene's object list
    pub object: usize,
    pub model: Mat4,
    pub model_view: Mat4,
    pub mvp: Mat4,
    pub material: Material,
}

/// Everything the renderer needs for one frame: the camera matrices,
/// per-object transform stacks, and the lights in view space.
pub struct RenderState {
    pub view: Mat4,
    pub projection: Mat4,
    pub draws: Vec<Draw>,
    pub lights: ViewSpaceLights,
}

/// The whole simulation state: camera, objects, lights, and the tuning
/// constants for walking and carrying. One instance per session,
/// mutated once per frame through [`update`](Scene::update), with no
/// process-scope state anywhere.
pub struct Scene {
    pub camera: Camera,
    pub objects: Vec<SceneObject>,
    /// Index of the carryable object, if any
    pub movable: Option<usize>,
    pub lights: Lights,
    /// Eye height pinned after each walk step
    pub walk_height: f32,
    /// Height the carried object is pinned to
    pub carry_height: f32,
    /// Max eye-to-object distance at which carrying works
    pub carry_reach: f32,
}

impl Scene {
    #[must_use]
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            objects: Vec::new(),
            movable: None,
            lights: Lights::new(),
            walk_height: 4.0,
            carry_height: 1.0,
            carry_reach: 8.0,
        }
    }

    pub fn add_object(&mut self, object: SceneObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// Advance the simulation by `dt` seconds and produce the frame's
    /// render state.
    ///
    /// Runs the per-frame sequence in a fixed order: walk movement,
    /// carried-object movement, mouse look, then matrix recomputation.
    /// The matrices re-derive the basis vectors internally, so the
    /// returned state can never mix a new position with a stale
    /// orientation.
    pub fn update(&mut self, dt: f32, input: &mut InputState) -> RenderState {
        trace!("scene update, dt = {dt}");

        self.walk(dt, input);
        self.carry(dt, input);
        self.look(input);

        self.camera.update_matrices();
        self.camera.target = self.camera.eye.add(&self.camera.front);

        self.snapshot()
    }

    /// WASD movement along the camera basis, eye height pinned to
    /// `walk_height` so the camera stays at head height regardless of
    /// where `front` points.
    fn walk(&mut self, dt: f32, input: &InputState) {
        let (forward, strafe) = input.walk_axes();
        if forward == 0.0 && strafe == 0.0 {
            return;
        }
        let step = input.walk_speed * dt;
        let camera = &mut self.camera;
        camera.eye = camera
            .eye
            .add(&camera.front.scale(step * forward))
            .add(&camera.right.scale(step * strafe));
        camera.eye.y = self.walk_height;
    }

    /// Arrow-key movement of the movable object, only while the eye is
    /// within `carry_reach` of it. The object moves along the camera's
    /// front/right vectors and stays pinned to `carry_height`.
    fn carry(&mut self, dt: f32, input: &InputState) {
        let Some(index) = self.movable else {
            return;
        };
        let position = self.objects[index].transform.position;
        if self.camera.eye.distance(&position) > self.carry_reach {
            return;
        }
        let (forward, strafe) = input.carry_axes();
        if forward == 0.0 && strafe == 0.0 {
            return;
        }
        let step = input.carry_speed * dt;
        let mut moved = position
            .add(&self.camera.front.scale(step * forward))
            .add(&self.camera.right.scale(step * strafe));
        moved.y = self.carry_height;
        self.objects[index].transform.position = moved;
    }

    /// Mouse look: cursor displacement scaled by the sensitivity, with
    /// screen-up motion pitching the view up.
    fn look(&mut self, input: &mut InputState) {
        let (dx, dy) = input.take_mouse_delta();
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        let sensitivity = input.mouse_sensitivity;
        self.camera.rotate(sensitivity * dx, sensitivity * -dy);
    }

    fn snapshot(&self) -> RenderState {
        let view = self.camera.view;
        let projection = self.camera.projection;

        let draws = self
            .objects
            .iter()
            .enumerate()
            .map(|(object, scene_object)| {
                let model = scene_object.transform.to_matrix();
                let model_view = view.multiply(&model);
                let mvp = projection.multiply(&model_view);
                Draw {
                    object,
                    model,
                    model_view,
                    mvp,
                    material: scene_object.material,
                }
            })
            .collect();

        RenderState {
            view,
            projection,
            draws,
            lights: self.lights.view_space(&view),
        }
    }

    /// The walkthrough scene: a terrain plane, a carryable statue, a
    /// field of half-scale cubes, and four light sources.
    #[must_use]
    pub fn demo() -> Self {
        let camera = Camera::new(Vec3::new(15.0, 2.0, 20.0), Vec3::new(1.0, 0.0, -2.0));
        let mut scene = Self::new(camera);

        scene.add_object(SceneObject::new(
            "terrain",
            Transform {
                scale: Vec3::new(5.0, 0.2, 5.0),
                ..Transform::identity()
            },
        ));

        let statue_position = Vec3::new(15.0, 1.0, 10.0);
        let statue = scene.add_object(SceneObject::new(
            "statue",
            Transform {
                position: statue_position,
                ..Transform::identity()
            },
        ));
        scene.movable = Some(statue);

        for x in 0..30 {
            for z in 0..35 {
                scene.add_object(SceneObject::new(
                    "cube",
                    Transform::new(
                        Vec3::new(x as f32, -2.0, z as f32),
                        Vec3::new(1.0, 1.0, 1.0),
                        radians(0.0),
                        Vec3::new(0.5, 0.5, 0.5),
                    ),
                ));
            }
        }

        scene.lights.add_point_light(
            Vec3::new(15.0, 20.0, 20.0),
            Vec3::new(1.0, 1.0, 0.0),
            1.0,
            0.1,
            0.02,
        );
        scene.lights.add_point_light(
            Vec3::new(1.0, 15.0, -8.0),
            Vec3::new(1.0, 0.0, 1.0),
            1.0,
            0.1,
            0.02,
        );

        let spot_position = Vec3::new(0.0, 10.0, 0.0);
        scene.lights.add_spot_light(
            spot_position,
            statue_position.sub(&spot_position),
            Vec3::new(0.0, 1.0, 1.0),
            1.0,
            0.1,
            0.02,
            radians(45.0).cos(),
        );

        scene
            .lights
            .add_directional_light(Vec3::new(1.0, -1.0, 0.0), Vec3::new(1.0, 1.0, 0.0));

        info!(
            "demo scene: {} objects, {} lights",
            scene.objects.len(),
            scene.lights.count()
        );

        scene
    }
}
