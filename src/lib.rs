//! Overlook: scene-graph and camera core for an interactive 3D viewer.
//!
//! The crate maintains a hierarchical scene of transformable objects (meshes
//! and lights), computes per-frame world transforms, and flattens the tree
//! into draw jobs and light lists for a render backend to consume. A fly
//! camera turns keyboard input into eye movement.
//!
//! # Per-frame flow
//!
//! 1. The input layer feeds held keys through [`input::KeyState::update`],
//!    mutating the [`camera::Camera`].
//! 2. Animation code writes directly into node transforms.
//! 3. [`scene::generate_render_jobs`] flattens the tree into
//!    [`scene::RenderJob`]s; [`scene::LightCollection::collect`] gathers the
//!    active lights.
//! 4. The (external) render loop issues one draw call per job, with the
//!    camera's [`view_matrix`](camera::Camera::view_matrix) and a
//!    [`math::Mat4::perspective`] projection bound once per frame.
//!
//! What happens to the GPU (buffers, shaders, uniforms, windowing) lives
//! outside this crate.

pub mod camera;
pub mod geometry;
pub mod input;
pub mod math;
pub mod scene;

pub use camera::{Camera, CameraCommand};
pub use math::{Mat4, Vec4};
pub use scene::{LightCollection, Node, Payload, RenderJob, generate_render_jobs};
