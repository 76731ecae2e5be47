//! Flattening the scene tree into per-frame draw jobs.

use crate::math::mat::Mat4;
use crate::scene::MeshId;
use crate::scene::node::{Node, Payload};

/// One draw call's worth of work: a world transform and the mesh to draw
/// with it.
///
/// Jobs are transient: produced fresh each frame, consumed by the render
/// loop, and discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderJob {
    /// Cumulative transform from the mesh's local space to world space.
    pub matrix: Mat4,
    /// The mesh to draw.
    pub mesh: MeshId,
}

/// Walks the tree under `node` depth-first, appending one [`RenderJob`] per
/// mesh-carrying node to `jobs`.
///
/// Each node's world matrix is `parent_matrix × node.matrix()`. The output
/// order is stable: pre-order, children in insertion order. No culling,
/// sorting, or de-duplication happens here; this is pure flattening.
///
/// Render the whole scene by passing the root with an identity parent:
///
/// ```
/// use overlook::math::Mat4;
/// use overlook::scene::{Node, generate_render_jobs};
///
/// let root = Node::new();
/// let mut jobs = Vec::new();
/// generate_render_jobs(&Mat4::identity(), &root, &mut jobs);
/// ```
pub fn generate_render_jobs(parent_matrix: &Mat4, node: &Node, jobs: &mut Vec<RenderJob>) {
    let matrix = parent_matrix.mul(&node.matrix());

    if let Some(Payload::Mesh(mesh)) = node.payload {
        jobs.push(RenderJob { matrix, mesh });
    }

    for child in &node.children {
        generate_render_jobs(&matrix, child, jobs);
    }
}
