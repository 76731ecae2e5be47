//! Lights and per-frame light collection.
//!
//! Point lights live in the scene tree as node payloads; their world
//! positions fall out of the same matrix accumulation the render traversal
//! uses. [`LightCollection::collect`] rebuilds the flat light list once per
//! frame; the list is only valid for the frame in which it was collected,
//! never reused across frames.

use crate::math::mat::Mat4;
use crate::scene::node::{Node, Payload, Position};

/// RGB light color, linear components.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// A point light attached to a scene node.
///
/// It carries no position of its own: the owning node's world transform
/// decides where it shines from, frame by frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub color: Color,
}

impl PointLight {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

/// A scene-wide light with a direction instead of a position.
///
/// Ambient/directional lighting is a single global slot, not part of the
/// per-frame collected list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    /// Direction the light arrives from; bound as a direction vector, not a
    /// point.
    pub direction: Position,
    pub color: Color,
}

/// A point light resolved to world space by [`LightCollection::collect`].
///
/// This is a per-frame value copied out of the traversal; the source
/// [`PointLight`] in the tree is left untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LitPointLight {
    /// World-space position, read from the accumulated matrix's translation
    /// column.
    pub position: Position,
    pub color: Color,
}

/// Gathers the scene's active lights once per frame.
///
/// Call [`collect`](LightCollection::collect) before issuing draw calls so
/// the uniform-binding code sees the current light count and positions.
#[derive(Debug, Default)]
pub struct LightCollection {
    point_lights: Vec<LitPointLight>,
    ambient_light: Option<AmbientLight>,
}

impl LightCollection {
    /// Shader-side array size; lights beyond this are dropped with a warning.
    pub const MAX_POINT_LIGHTS: usize = 16;

    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the single ambient/directional slot. Survives across frames;
    /// `collect` does not touch it.
    pub fn set_ambient(&mut self, light: AmbientLight) {
        self.ambient_light = Some(light);
    }

    /// Clears the previous frame's list and walks the tree under `root`,
    /// gathering every light payload with its world-space position.
    ///
    /// The walk is the same pre-order accumulation the render-job traversal
    /// performs, rooted at an identity matrix. A removed light node simply
    /// stops appearing; nothing stale accumulates.
    pub fn collect(&mut self, root: &Node) {
        self.point_lights.clear();
        self.traverse(root, &Mat4::identity());

        log::trace!("collected {} point lights", self.point_lights.len());
    }

    fn traverse(&mut self, node: &Node, parent_matrix: &Mat4) {
        let world_matrix = parent_matrix.mul(&node.matrix());

        if let Some(Payload::Light(light)) = node.payload {
            if self.point_lights.len() < Self::MAX_POINT_LIGHTS {
                // translation column of the row-major world matrix
                let position = Position::new(
                    world_matrix.0[3],
                    world_matrix.0[7],
                    world_matrix.0[11],
                );

                self.point_lights.push(LitPointLight {
                    position,
                    color: light.color,
                });
            } else {
                log::warn!(
                    "point light budget of {} exceeded; dropping light at ({}, {}, {})",
                    Self::MAX_POINT_LIGHTS,
                    world_matrix.0[3],
                    world_matrix.0[7],
                    world_matrix.0[11],
                );
            }
        }

        for child in &node.children {
            self.traverse(child, &world_matrix);
        }
    }

    /// The lights gathered by the most recent [`collect`](Self::collect).
    pub fn point_lights(&self) -> &[LitPointLight] {
        &self.point_lights
    }

    pub fn ambient_light(&self) -> Option<&AmbientLight> {
        self.ambient_light.as_ref()
    }
}
