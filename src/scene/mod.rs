//! Scene graph: nodes, per-frame traversal, and light collection.
//!
//! The scene is a tree of [`node::Node`]s. Each frame the owner mutates
//! whatever transforms it likes, then runs the two traversals:
//! [`render_jobs::generate_render_jobs`] to flatten mesh-carrying nodes into
//! draw jobs, and [`light::LightCollection::collect`] to gather active point
//! lights with world-space positions. Both walk the same way: pre-order,
//! accumulating parent × local matrices from an identity root.

pub mod light;
pub mod node;
pub mod render_jobs;

pub use light::{AmbientLight, LightCollection, LitPointLight, PointLight};
pub use node::{Node, Payload, Position, Rotation, Scale};
pub use render_jobs::{RenderJob, generate_render_jobs};

/// Opaque handle to a mesh owned by the render backend.
///
/// The scene graph only passes it through into [`RenderJob`]s; what it
/// indexes is the backend's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(pub u32);
