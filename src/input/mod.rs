use std::collections::HashSet;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Input snapshot fed by the window layer and consumed once per frame
/// by [`Scene::update`](crate::scene::Scene::update).
///
/// The window layer pushes key transitions and raw mouse motion here;
/// the scene reads movement axes and drains the accumulated mouse delta.
pub struct InputState {
    pressed_keys: HashSet<PhysicalKey>,
    mouse_delta: (f32, f32),
    /// Radians of yaw/pitch per pixel of cursor displacement
    pub mouse_sensitivity: f32,
    /// Camera movement speed, units per second
    pub walk_speed: f32,
    /// Carried-object movement speed, units per second
    pub carry_speed: f32,
}

impl InputState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            mouse_delta: (0.0, 0.0),
            mouse_sensitivity: 0.005,
            walk_speed: 5.0,
            carry_speed: 2.0,
        }
    }

    pub fn key_pressed(&mut self, key: PhysicalKey) {
        self.pressed_keys.insert(key);
    }

    pub fn key_released(&mut self, key: PhysicalKey) {
        self.pressed_keys.remove(&key);
    }

    #[must_use]
    pub fn is_key_pressed(&self, key: PhysicalKey) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Accumulate raw mouse motion; deltas add up until the scene
    /// drains them.
    pub fn push_mouse_delta(&mut self, delta_x: f32, delta_y: f32) {
        self.mouse_delta.0 += delta_x;
        self.mouse_delta.1 += delta_y;
    }

    /// Drain the accumulated mouse delta.
    #[must_use]
    pub fn take_mouse_delta(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.mouse_delta)
    }

    /// WASD walk axes as (forward, strafe) in -1..=1.
    #[must_use]
    pub fn walk_axes(&self) -> (f32, f32) {
        let mut forward = 0.0;
        let mut strafe = 0.0;
        if self.is_key_pressed(PhysicalKey::Code(KeyCode::KeyW)) {
            forward += 1.0;
        }
        if self.is_key_pressed(PhysicalKey::Code(KeyCode::KeyS)) {
            forward -= 1.0;
        }
        if self.is_key_pressed(PhysicalKey::Code(KeyCode::KeyD)) {
            strafe += 1.0;
        }
        if self.is_key_pressed(PhysicalKey::Code(KeyCode::KeyA)) {
            strafe -= 1.0;
        }
        (forward, strafe)
    }

    /// Arrow-key carry axes as (forward, strafe) in -1..=1.
    #[must_use]
    pub fn carry_axes(&self) -> (f32, f32) {
        let mut forward = 0.0;
        let mut strafe = 0.0;
        if self.is_key_pressed(PhysicalKey::Code(KeyCode::ArrowUp)) {
            forward += 1.0;
        }
        if self.is_key_pressed(PhysicalKey::Code(KeyCode::ArrowDown)) {
            forward -= 1.0;
        }
        if self.is_key_pressed(PhysicalKey::Code(KeyCode::ArrowRight)) {
            strafe += 1.0;
        }
        if self.is_key_pressed(PhysicalKey::Code(KeyCode::ArrowLeft)) {
            strafe -= 1.0;
        }
        (forward, strafe)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
