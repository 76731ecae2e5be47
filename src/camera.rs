//! Fly camera state and controls.
//!
//! The [`Camera`] holds an eye pose (position plus yaw/pitch/roll, all angles
//! in turns) and converts movement input into world-space translation via a
//! rotation-only "direction matrix". Input devices never talk to the camera
//! directly; the input layer produces a stream of [`CameraCommand`] values
//! each tick and feeds them through [`Camera::apply`].

use crate::math::mat::Mat4;
use crate::math::vec::Vec4;
use crate::scene::node::Position;

/// A single camera mutation, produced by the input layer once per tick.
///
/// Angles are in turns, distances in world units; both are expected to be
/// pre-scaled by the caller's delta time and sensitivity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Turn left/right by the given amount.
    Yaw(f32),
    /// Look up/down by the given amount.
    Pitch(f32),
    /// Tilt the view by the given amount.
    Roll(f32),
    /// Move relative to the current facing: `strafe` right, `up`, and
    /// `forward` along the view direction.
    Move { strafe: f32, up: f32, forward: f32 },
}

/// First-person fly camera.
///
/// Yaw wraps around the full circle; pitch is clamped short of vertical so
/// the view can never flip over the top, and roll is clamped to a half turn
/// either way.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Position,
    /// Heading in turns, kept in `[0, 1)`.
    pub yaw: f32,
    /// Up/down look angle in turns, kept in `[-PITCH_LIMIT, PITCH_LIMIT]`.
    pub pitch: f32,
    /// View tilt in turns, kept in `[-ROLL_LIMIT, ROLL_LIMIT]`.
    pub roll: f32,
}

impl Camera {
    /// Slightly less than a quarter turn up or down allowed.
    pub const PITCH_LIMIT: f32 = 0.24;

    /// At most a half turn of tilt either way.
    pub const ROLL_LIMIT: f32 = 0.5;

    /// Creates a camera at the origin looking down the +Z axis.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds to the yaw, wrapping the result into `[0, 1)`.
    ///
    /// The wrap loops, so deltas of any magnitude land back in range.
    pub fn add_yaw(&mut self, amount: f32) {
        self.yaw = (self.yaw + amount).rem_euclid(1.0);
    }

    /// Adds to the pitch, clamping to `[-PITCH_LIMIT, PITCH_LIMIT]`.
    ///
    /// The clamp is hard; there is no wraparound past vertical.
    pub fn add_pitch(&mut self, amount: f32) {
        self.pitch = (self.pitch + amount).clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
    }

    /// Adds to the roll, clamping to `[-ROLL_LIMIT, ROLL_LIMIT]`.
    pub fn add_roll(&mut self, amount: f32) {
        self.roll = (self.roll + amount).clamp(-Self::ROLL_LIMIT, Self::ROLL_LIMIT);
    }

    /// Moves relative to the current facing.
    ///
    /// The local offset `(strafe, up, forward)` is reoriented by the
    /// direction matrix (rotation only, so magnitude is preserved) and added
    /// to the position. This is what makes WASD input track the view.
    pub fn move_in_direction(&mut self, strafe: f32, up: f32, forward: f32) {
        let matrix = Self::dir_matrix(self.yaw, self.pitch, self.roll);
        let txed = matrix.transform_vec(&Vec4::direction(strafe, up, forward));

        self.translate_vec(&txed);
    }

    /// Moves by the given world-space offset, ignoring facing.
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.position.x += x;
        self.position.y += y;
        self.position.z += z;
    }

    pub fn translate_vec(&mut self, v: &Vec4) {
        self.translate(v.x(), v.y(), v.z());
    }

    /// Teleports to the given world-space position.
    pub fn warp(&mut self, x: f32, y: f32, z: f32) {
        self.position.x = x;
        self.position.y = y;
        self.position.z = z;
    }

    pub fn warp_vec(&mut self, v: &Vec4) {
        self.warp(v.x(), v.y(), v.z());
    }

    /// Returns the rotation-only matrix `Rxz(yaw) · Ryz(pitch) · Rxy(roll)`,
    /// which reorients local movement input into world space.
    pub fn dir_matrix(yaw: f32, pitch: f32, roll: f32) -> Mat4 {
        Mat4::rotation_xz(yaw)
            .mul(&Mat4::rotation_yz(pitch))
            .mul(&Mat4::rotation_xy(roll))
    }

    /// Returns the world-to-eye view matrix: the inverse of the eye pose
    /// `T(position) · Rxz(yaw) · Ryz(pitch) · Rxy(roll)`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::translation(self.position.x, self.position.y, self.position.z)
            .mul(&Mat4::rotation_xz(self.yaw))
            .mul(&Mat4::rotation_yz(self.pitch))
            .mul(&Mat4::rotation_xy(self.roll))
            .inverse()
    }

    /// Applies a single command from the input layer.
    pub fn apply(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::Yaw(amount) => self.add_yaw(amount),
            CameraCommand::Pitch(amount) => self.add_pitch(amount),
            CameraCommand::Roll(amount) => self.add_roll(amount),
            CameraCommand::Move { strafe, up, forward } => {
                self.move_in_direction(strafe, up, forward)
            }
        }
    }

    /// Applies a tick's worth of commands in order.
    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = CameraCommand>) {
        for command in commands {
            self.apply(command);
        }
    }
}
