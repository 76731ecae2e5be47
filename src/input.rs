//! Keyboard input handling for the fly camera.
//!
//! This module defines the [`ViewerKey`] enum for abstracting camera actions
//! from physical keys, and provides [`KeyState`] for tracking held keys and
//! turning them into a per-tick stream of [`CameraCommand`]s. The camera
//! itself never sees key codes; it only consumes commands.

use crate::camera::{Camera, CameraCommand};
use std::collections::HashSet;
use winit::keyboard;

/// Camera actions that can be bound to keyboard input.
///
/// This abstraction keeps the camera logic decoupled from specific physical
/// keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerKey {
    /// Move along the view direction (W).
    MoveForward,
    /// Move against the view direction (S).
    MoveBackward,
    /// Strafe left (A).
    MoveLeft,
    /// Strafe right (D).
    MoveRight,
    /// Rise (Space).
    MoveUp,
    /// Descend (C).
    MoveDown,
    /// Look up (Up Arrow).
    LookUp,
    /// Look down (Down Arrow).
    LookDown,
    /// Turn left (Left Arrow).
    TurnLeft,
    /// Turn right (Right Arrow).
    TurnRight,
}

/// Tracks the set of currently held viewer keys.
///
/// The windowing glue calls [`press_key`](KeyState::press_key) and
/// [`release_key`](KeyState::release_key) from its event handler; once per
/// tick, [`update`](KeyState::update) converts the held set into camera
/// commands and applies them.
#[derive(Debug, Default)]
pub struct KeyState {
    /// Set of currently held keys.
    pub pressed_keys: HashSet<ViewerKey>,
}

impl KeyState {
    /// Creates a new, empty [`KeyState`].
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
        }
    }

    /// Marks a key as held.
    pub fn press_key(&mut self, key: ViewerKey) {
        self.pressed_keys.insert(key);
    }

    /// Marks a key as released.
    pub fn release_key(&mut self, key: ViewerKey) {
        self.pressed_keys.remove(&key);
    }

    /// Checks whether a key is currently held.
    pub fn is_pressed(&self, key: ViewerKey) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Releases everything, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.pressed_keys.clear();
    }

    /// Converts the held keys into this tick's camera commands.
    ///
    /// `move_speed` is in world units per second, `turn_speed` in turns per
    /// second; both are scaled by `delta_time`. Opposing keys cancel out.
    pub fn commands(&self, delta_time: f32, move_speed: f32, turn_speed: f32) -> Vec<CameraCommand> {
        let mut commands = Vec::new();

        let axis = |positive: ViewerKey, negative: ViewerKey| -> f32 {
            (self.is_pressed(positive) as i32 - self.is_pressed(negative) as i32) as f32
        };

        let strafe = axis(ViewerKey::MoveRight, ViewerKey::MoveLeft);
        let up = axis(ViewerKey::MoveUp, ViewerKey::MoveDown);
        let forward = axis(ViewerKey::MoveForward, ViewerKey::MoveBackward);
        if strafe != 0.0 || up != 0.0 || forward != 0.0 {
            let step = move_speed * delta_time;
            commands.push(CameraCommand::Move {
                strafe: strafe * step,
                up: up * step,
                forward: forward * step,
            });
        }

        let yaw = axis(ViewerKey::TurnRight, ViewerKey::TurnLeft);
        if yaw != 0.0 {
            commands.push(CameraCommand::Yaw(yaw * turn_speed * delta_time));
        }

        let pitch = axis(ViewerKey::LookUp, ViewerKey::LookDown);
        if pitch != 0.0 {
            commands.push(CameraCommand::Pitch(pitch * turn_speed * delta_time));
        }

        commands
    }

    /// Applies this tick's held keys to `camera`.
    pub fn update(&self, camera: &mut Camera, delta_time: f32, move_speed: f32, turn_speed: f32) {
        camera.apply_all(self.commands(delta_time, move_speed, turn_speed));
    }
}

macro_rules! match_char_key {
    ($c:expr, {
        $($key:literal => $variant:expr),* $(,)?
    }) => {{
        match $c.to_ascii_lowercase().as_str() {
            $($key => Some($variant),)*
            _ => None,
        }
    }};
}

macro_rules! match_named_key {
    ($k:expr, {
        $($key:ident => $variant:expr),* $(,)?
    }) => {{
        match $k {
            $(winit::keyboard::NamedKey::$key => Some($variant),)*
            _ => None,
        }
    }};
}

/// Converts a winit [`keyboard::Key`] to a [`ViewerKey`] if it is bound.
///
/// Supports both named keys (arrows, space) and character keys (WASD, C).
pub fn winit_key_to_viewer_key(key: &keyboard::Key) -> Option<ViewerKey> {
    match key {
        keyboard::Key::Named(named) => match_named_key!(named, {
            ArrowUp => ViewerKey::LookUp,
            ArrowDown => ViewerKey::LookDown,
            ArrowLeft => ViewerKey::TurnLeft,
            ArrowRight => ViewerKey::TurnRight,
            Space => ViewerKey::MoveUp,
        }),

        keyboard::Key::Character(c) => match_char_key!(c, {
            "w" => ViewerKey::MoveForward,
            "s" => ViewerKey::MoveBackward,
            "a" => ViewerKey::MoveLeft,
            "d" => ViewerKey::MoveRight,
            "c" => ViewerKey::MoveDown,
        }),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::{Key, NamedKey};

    #[test]
    fn test_press_release_cycle() {
        let mut keys = KeyState::new();
        assert!(!keys.is_pressed(ViewerKey::MoveForward));

        keys.press_key(ViewerKey::MoveForward);
        assert!(keys.is_pressed(ViewerKey::MoveForward));

        keys.release_key(ViewerKey::MoveForward);
        assert!(!keys.is_pressed(ViewerKey::MoveForward));
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            winit_key_to_viewer_key(&Key::Character("w".into())),
            Some(ViewerKey::MoveForward)
        );
        assert_eq!(
            winit_key_to_viewer_key(&Key::Character("W".into())),
            Some(ViewerKey::MoveForward)
        );
        assert_eq!(
            winit_key_to_viewer_key(&Key::Named(NamedKey::Space)),
            Some(ViewerKey::MoveUp)
        );
        assert_eq!(
            winit_key_to_viewer_key(&Key::Named(NamedKey::ArrowLeft)),
            Some(ViewerKey::TurnLeft)
        );
        assert_eq!(winit_key_to_viewer_key(&Key::Character("x".into())), None);
    }

    #[test]
    fn test_commands_scale_with_delta_time() {
        let mut keys = KeyState::new();
        keys.press_key(ViewerKey::MoveForward);

        let commands = keys.commands(0.5, 4.0, 1.0);
        assert_eq!(
            commands,
            vec![CameraCommand::Move {
                strafe: 0.0,
                up: 0.0,
                forward: 2.0,
            }]
        );
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut keys = KeyState::new();
        keys.press_key(ViewerKey::MoveLeft);
        keys.press_key(ViewerKey::MoveRight);
        keys.press_key(ViewerKey::TurnLeft);

        let commands = keys.commands(1.0, 1.0, 0.25);
        assert_eq!(commands, vec![CameraCommand::Yaw(-0.25)]);
    }

    #[test]
    fn test_update_moves_camera() {
        let mut keys = KeyState::new();
        keys.press_key(ViewerKey::MoveForward);

        let mut camera = Camera::new();
        keys.update(&mut camera, 1.0, 3.0, 1.0);

        assert!((camera.position.z - 3.0).abs() < 1e-6);
    }
}
