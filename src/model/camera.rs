use glam::{Mat4, Vec3};

use crate::config::WindowConfig;

/// Wraps an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// Accumulated view rotation (degrees) and translation of the free camera.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraState {
    pub yaw: f32,
    pub pitch: f32,
    pub translation: Vec3,
}

impl CameraState {
    pub fn new(yaw: f32, pitch: f32, translation: Vec3) -> Self {
        Self {
            yaw: wrap_degrees(yaw),
            pitch: wrap_degrees(pitch),
            translation,
        }
    }

    pub fn rotate(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw = wrap_degrees(self.yaw + d_yaw);
        self.pitch = wrap_degrees(self.pitch + d_pitch);
    }

    pub fn translate(&mut self, delta: Vec3) {
        self.translation += delta;
    }

    /// Rotate by pitch (about x), then by yaw (about the vertical z axis),
    /// then apply the accumulated translation.
    pub fn view(&self) -> Mat4 {
        Mat4::from_rotation_x(self.pitch.to_radians())
            * Mat4::from_rotation_z(self.yaw.to_radians())
            * Mat4::from_translation(self.translation)
    }
}

pub struct Projection {
    pub fov_y: f32,
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Projection {
    pub fn new(config: &WindowConfig) -> Self {
        Self {
            fov_y: config.fov_y_degrees.to_radians(),
            aspect: config.width as f32 / config.height.max(1) as f32,
            z_near: config.z_near,
            z_far: config.z_far,
        }
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.z_near, self.z_far)
    }
}
