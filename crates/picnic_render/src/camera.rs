//! Eye/look-at camera with perspective projection
//!
//! The camera is a plain value: the rig in `picnic_input` owns all motion
//! state and writes eye/look-at/FOV through the [`CameraControl`] trait.

use picnic_math::{Vec3, Mat4, mat4};
use picnic_input::CameraControl;

/// Perspective camera aimed at a look-at point
pub struct Camera {
    /// Eye position in world space
    pub eye: Vec3,
    /// Point the camera looks at
    pub look_at: Vec3,
    /// Up direction
    pub up: Vec3,
    /// Field of view in degrees
    pub fov: f32,
    /// Width/height ratio
    pub aspect: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 3.0, 6.0),
            look_at: Vec3::ZERO,
            up: Vec3::Y,
            fov: 45.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    /// Create a camera at the given eye position, looking at a point
    pub fn new(eye: Vec3, look_at: Vec3) -> Self {
        Self {
            eye,
            look_at,
            ..Self::default()
        }
    }

    /// Forward direction (from eye toward the look-at point)
    pub fn forward(&self) -> Vec3 {
        (self.look_at - self.eye).normalized()
    }

    /// View matrix
    pub fn view_matrix(&self) -> Mat4 {
        mat4::look_at(self.eye, self.look_at, self.up)
    }

    /// Projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        mat4::perspective(self.fov.to_radians(), self.aspect, self.near, self.far)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        mat4::mul(self.projection_matrix(), self.view_matrix())
    }
}

impl CameraControl for Camera {
    fn eye(&self) -> Vec3 {
        self.eye
    }

    fn look_at(&self) -> Vec3 {
        self.look_at
    }

    fn set_eye(&mut self, eye: Vec3) {
        self.eye = eye;
    }

    fn set_look_at(&mut self, look_at: Vec3) {
        self.look_at = look_at;
    }

    fn fov(&self) -> f32 {
        self.fov
    }

    fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera() {
        let cam = Camera::default();
        assert_eq!(cam.fov, 45.0);
        let vp = cam.view_projection();
        assert!(!vp[0][0].is_nan());
    }

    #[test]
    fn test_forward_points_at_target() {
        let cam = Camera::new(Vec3::new(0.0, 0.0, 6.0), Vec3::ZERO);
        let f = cam.forward();
        assert!((f - (-Vec3::Z)).length() < 1e-6);
    }

    #[test]
    fn test_view_maps_eye_to_origin() {
        let cam = Camera::new(Vec3::new(0.0, 2.0, 6.0), Vec3::ZERO);
        let v = cam.view_matrix();
        let mapped = mat4::transform_point(&v, cam.eye);
        assert!(mapped.length() < 1e-4);
    }

    #[test]
    fn test_camera_control_trait() {
        let mut cam = Camera::default();
        CameraControl::set_eye(&mut cam, Vec3::new(-4.0, 2.0, 6.0));
        CameraControl::set_fov(&mut cam, 60.0);
        assert_eq!(CameraControl::eye(&cam), Vec3::new(-4.0, 2.0, 6.0));
        assert_eq!(CameraControl::fov(&cam), 60.0);
    }

    #[test]
    fn test_projection_changes_with_fov() {
        let mut cam = Camera::default();
        let narrow = cam.projection_matrix();
        cam.fov = 90.0;
        let wide = cam.projection_matrix();
        // A wider FOV shrinks the focal term
        assert!(wide[1][1] < narrow[1][1]);
    }
}
