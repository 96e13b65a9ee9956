//! Camera and transform math core for a first-person 3D walkthrough
//!
//! This crate is the simulation half of a small textured-scene viewer:
//! hand-rolled vector/matrix math, a yaw/pitch first-person camera,
//! input state fed by the window layer, a light list with its
//! view-space transform, and a [`Scene`](scene::Scene) that turns
//! elapsed time plus input into a per-frame
//! [`RenderState`](scene::RenderState). Window management, shaders, and
//! draw calls belong to the embedding application.
//!
//! # Example
//! ```
//! use meander::input::InputState;
//! use meander::scene::Scene;
//!
//! let mut scene = Scene::demo();
//! let mut input = InputState::new();
//! let frame = scene.update(1.0 / 60.0, &mut input);
//! assert_eq!(frame.draws.len(), scene.objects.len());
//! ```

pub mod camera;
pub mod core;
pub mod input;
pub mod light;
pub mod math;
pub mod scene;
