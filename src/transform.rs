use glam::{DMat4, Mat4, Vec3};

use crate::config::RenderConfig;

/// Projection and model-view parameters for the tumbling cube.
///
/// Every method is a pure function of its arguments; nothing is cached
/// between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub fov_y: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub camera_distance: f32,
    pub tumble_ratio: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

impl Transform {
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            fov_y: config.fov_y,
            z_near: config.z_near,
            z_far: config.z_far,
            camera_distance: config.camera_distance,
            tumble_ratio: config.tumble_ratio,
        }
    }

    /// OpenGL-style perspective (clip depth in -1..1).
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, sanitize_aspect(aspect), self.z_near, self.z_far)
    }

    /// translate(0, 0, -d) * rotateY(angle) * rotateX(angle * ratio)
    ///
    /// The angle grows without bound, so the rotation is built in f64 and
    /// only narrowed once the trig is done.
    pub fn model_view(&self, angle: f64) -> Mat4 {
        let rotation = DMat4::from_rotation_y(angle) * DMat4::from_rotation_x(angle * self.tumble_ratio);
        Mat4::from_translation(Vec3::new(0.0, 0.0, -self.camera_distance)) * rotation.as_mat4()
    }

    pub fn combined(&self, angle: f64, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.model_view(angle)
    }
}

/// A hidden or collapsed canvas reports a zero height; keep the projection
/// finite in that case.
fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}
