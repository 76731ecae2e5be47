//! Scene-graph nodes and their local transforms.
//!
//! A [`Node`] owns its children outright, so the graph is a tree by
//! construction: a child has exactly one parent, and cycles or shared
//! subtrees cannot be expressed. There are no parent pointers; world
//! transforms are always derived top-down during traversal.

use crate::math::mat::Mat4;
use crate::math::vec::Vec4;
use crate::scene::MeshId;
use crate::scene::light::PointLight;

/// World-space position in world units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Orientation as fractions of a full turn.
///
/// Not radians: a yaw of 0.5 is an about-face. The values are converted to
/// radians only inside the rotation-matrix constructors.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rotation {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

/// Per-axis multiplicative scale factors.
///
/// Zero factors make the node's transform singular and uninvertible; keep
/// them non-zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for Scale {
    fn default() -> Self {
        Scale {
            x: 1.0,
            y: 1.0,
            z: 1.0,
        }
    }
}

/// What a node carries, if anything.
///
/// Meshes and lights are the two renderable payloads; most structural nodes
/// (the root, grouping pivots) carry neither.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload {
    /// Reference to a mesh owned by the render backend.
    Mesh(MeshId),
    /// A point light whose world position follows the node.
    Light(PointLight),
}

/// A transformable object in the scene tree.
///
/// The transform fields are public and freely mutable between frames by
/// animation or input code; [`Node::matrix`] recomputes the local transform
/// fresh on every call, so there is no dirty state to manage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    pub position: Position,
    pub rotation: Rotation,
    pub scale: Scale,
    /// Optional renderable payload.
    pub payload: Option<Payload>,
    /// Exclusively-owned child nodes, traversed in insertion order.
    pub children: Vec<Node>,
}

impl Node {
    /// Creates an empty node with an identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node carrying the given payload, with an identity transform.
    pub fn with_payload(payload: Payload) -> Self {
        Node {
            payload: Some(payload),
            ..Self::default()
        }
    }

    /// Creates an empty node at the given position.
    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Node {
            position: Position::new(x, y, z),
            ..Self::default()
        }
    }

    /// Appends `child` to this node's children and returns a mutable
    /// reference to it, for chained scene building.
    pub fn add_child(&mut self, child: Node) -> &mut Node {
        self.children.push(child);
        self.children.last_mut().unwrap()
    }

    /// Returns the node's local transform:
    /// `T · Rxz(yaw) · Ryz(pitch) · Rxy(roll) · S`.
    ///
    /// The order is fixed (translation outermost, yaw-then-pitch-then-roll,
    /// scale innermost) and must stay that way: rotation composition is not
    /// commutative, and reordering changes gimbal behavior.
    pub fn matrix(&self) -> Mat4 {
        Mat4::translation(self.position.x, self.position.y, self.position.z)
            .mul(&Mat4::rotation_xz(self.rotation.yaw))
            .mul(&Mat4::rotation_yz(self.rotation.pitch))
            .mul(&Mat4::rotation_xy(self.rotation.roll))
            .mul(&Mat4::scale(self.scale.x, self.scale.y, self.scale.z))
    }

    /// Moves the node by the given offset.
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.position.x += x;
        self.position.y += y;
        self.position.z += z;
    }

    pub fn translate_vec(&mut self, v: &Vec4) {
        self.translate(v.x(), v.y(), v.z());
    }

    /// Teleports the node to the given position.
    pub fn warp(&mut self, x: f32, y: f32, z: f32) {
        self.position.x = x;
        self.position.y = y;
        self.position.z = z;
    }

    pub fn warp_vec(&mut self, v: &Vec4) {
        self.warp(v.x(), v.y(), v.z());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let node = Node::new();
        assert_eq!(node.scale, Scale { x: 1.0, y: 1.0, z: 1.0 });
        assert_eq!(node.position, Position::default());
        assert!(node.payload.is_none());
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_identity_node_matrix() {
        assert_eq!(Node::new().matrix(), Mat4::identity());
    }

    #[test]
    fn test_translation_only_matrix() {
        let node = Node::at(1.0, 2.0, 3.0);
        assert_eq!(node.matrix(), Mat4::translation(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_trs_composition_order() {
        let mut node = Node::at(1.0, 2.0, 3.0);
        node.rotation = Rotation {
            pitch: 0.1,
            yaw: 0.2,
            roll: 0.3,
        };
        node.scale = Scale {
            x: 2.0,
            y: 0.5,
            z: 1.5,
        };

        let expected = Mat4::translation(1.0, 2.0, 3.0)
            .mul(&Mat4::rotation_xz(0.2))
            .mul(&Mat4::rotation_yz(0.1))
            .mul(&Mat4::rotation_xy(0.3))
            .mul(&Mat4::scale(2.0, 0.5, 1.5));

        assert_eq!(node.matrix(), expected);
    }

    #[test]
    fn test_add_child_returns_appended_node() {
        let mut root = Node::new();
        let child = root.add_child(Node::at(4.0, 0.0, 0.0));
        child.translate(1.0, 0.0, 0.0);

        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].position, Position::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_matrix_tracks_field_mutation() {
        let mut node = Node::new();
        let before = node.matrix();
        node.warp(0.0, 7.0, 0.0);
        let after = node.matrix();

        assert_ne!(before, after);
        assert_eq!(after, Mat4::translation(0.0, 7.0, 0.0));
    }
}
