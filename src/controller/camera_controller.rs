use glam::Vec3;
use tracing::trace;

use super::input::Key;
use crate::config::ControlConfig;
use crate::model::CameraState;

/// Turns key presses into camera rotation and translation steps.
///
/// Arrows rotate, W/S A/D Q/E move along y, x and z. Every press adds a fixed
/// increment; nothing is ever set absolutely.
pub struct CameraController {
    pub move_speed: f32,
    pub rotate_speed: f32,
}

impl CameraController {
    pub fn new(config: &ControlConfig) -> Self {
        Self {
            move_speed: config.move_speed,
            rotate_speed: config.rotate_speed,
        }
    }

    /// Applies one key press to `camera`.
    pub fn apply_key(&self, camera: &mut CameraState, key: Key) {
        let r = self.rotate_speed;
        let m = self.move_speed;

        // translation moves the world, so the camera travels the opposite way
        match key {
            Key::Left => camera.rotate(-r, 0.0),
            Key::Right => camera.rotate(r, 0.0),
            Key::Up => camera.rotate(0.0, -r),
            Key::Down => camera.rotate(0.0, r),
            Key::W => camera.translate(Vec3::new(0.0, -m, 0.0)),
            Key::S => camera.translate(Vec3::new(0.0, m, 0.0)),
            Key::A => camera.translate(Vec3::new(m, 0.0, 0.0)),
            Key::D => camera.translate(Vec3::new(-m, 0.0, 0.0)),
            Key::Q => camera.translate(Vec3::new(0.0, 0.0, m)),
            Key::E => camera.translate(Vec3::new(0.0, 0.0, -m)),
        }
        trace!(?key, yaw = camera.yaw, pitch = camera.pitch, translation = ?camera.translation, "camera");
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(&ControlConfig::default())
    }
}
