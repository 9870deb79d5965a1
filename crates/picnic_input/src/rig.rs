//! Camera rig: waypoint glide, FOV clamping, and orbit input
//!
//! Controls:
//! - Panel buttons / digit keys: select a waypoint to glide toward
//! - Panel slider: field of view
//! - Left mouse drag: orbit the eye around the current look-at
//! - Scroll wheel: dolly toward/away from the look-at
//! - R: return to the first waypoint

use picnic_math::Vec3;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Trait for camera control
/// Allows the rig to work with different camera implementations
pub trait CameraControl {
    fn eye(&self) -> Vec3;
    fn look_at(&self) -> Vec3;
    fn set_eye(&mut self, eye: Vec3);
    fn set_look_at(&mut self, look_at: Vec3);
    /// Field of view in degrees
    fn fov(&self) -> f32;
    fn set_fov(&mut self, fov: f32);
}

/// Camera rig handling waypoint interpolation and mouse orbit
///
/// The rig keeps its own eye/look-at pair and blends it toward the goal by
/// `lerp_factor` on every rendered frame. There is no convergence check and
/// no interruption handling: selecting a new waypoint simply replaces the
/// goal, and the blend continues from wherever the camera currently is.
pub struct CameraRig {
    // Interpolation state
    eye: Vec3,
    look_at: Vec3,
    goal_eye: Vec3,
    goal_look_at: Vec3,

    // Waypoints (eye, look_at); selected via panel buttons or digit keys
    waypoints: Vec<(Vec3, Vec3)>,

    // Mouse state
    dragging: bool,
    pending_yaw: f32,
    pending_pitch: f32,
    pending_dolly: f32,

    // Configuration
    pub lerp_factor: f32,
    pub fov_min: f32,
    pub fov_max: f32,
    pub orbit_sensitivity: f32,
    pub dolly_speed: f32,
}

impl CameraRig {
    /// Create a rig starting (and aiming) at the given eye/look-at pair
    pub fn new(eye: Vec3, look_at: Vec3) -> Self {
        Self {
            eye,
            look_at,
            goal_eye: eye,
            goal_look_at: look_at,
            waypoints: Vec::new(),
            dragging: false,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_dolly: 0.0,
            lerp_factor: 0.1,
            fov_min: 20.0,
            fov_max: 90.0,
            orbit_sensitivity: 0.005,
            dolly_speed: 0.5,
        }
    }

    /// Builder: set the waypoint list
    pub fn with_waypoints(mut self, waypoints: impl IntoIterator<Item = (Vec3, Vec3)>) -> Self {
        self.waypoints = waypoints.into_iter().collect();
        self
    }

    /// Builder: set the FOV slider bounds in degrees
    pub fn with_fov_bounds(mut self, min: f32, max: f32) -> Self {
        self.fov_min = min;
        self.fov_max = max;
        self
    }

    /// Builder: set the per-frame blend factor
    pub fn with_lerp_factor(mut self, factor: f32) -> Self {
        self.lerp_factor = factor;
        self
    }

    /// Builder: set orbit sensitivity
    pub fn with_orbit_sensitivity(mut self, sensitivity: f32) -> Self {
        self.orbit_sensitivity = sensitivity;
        self
    }

    /// Builder: set scroll dolly speed
    pub fn with_dolly_speed(mut self, speed: f32) -> Self {
        self.dolly_speed = speed;
        self
    }

    /// Number of configured waypoints
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Current interpolation goal (eye, look_at)
    pub fn goal(&self) -> (Vec3, Vec3) {
        (self.goal_eye, self.goal_look_at)
    }

    /// Current interpolated eye position
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Current interpolated look-at point
    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    /// Set the interpolation goal directly
    pub fn set_goal(&mut self, eye: Vec3, look_at: Vec3) {
        self.goal_eye = eye;
        self.goal_look_at = look_at;
    }

    /// Select a waypoint as the new interpolation goal
    ///
    /// Returns false (and leaves the goal unchanged) for an out-of-range index.
    pub fn select_waypoint(&mut self, index: usize) -> bool {
        match self.waypoints.get(index) {
            Some(&(eye, look_at)) => {
                self.goal_eye = eye;
                self.goal_look_at = look_at;
                log::info!("camera gliding to waypoint {}", index);
                true
            }
            None => {
                log::warn!("waypoint index {} out of range", index);
                false
            }
        }
    }

    /// Clamp a requested FOV to the slider bounds
    pub fn clamp_fov(&self, fov: f32) -> f32 {
        fov.clamp(self.fov_min, self.fov_max)
    }

    /// Write a clamped FOV through to the camera
    pub fn set_fov<C: CameraControl>(&self, camera: &mut C, fov: f32) {
        camera.set_fov(self.clamp_fov(fov));
    }

    /// Process keyboard input
    ///
    /// Digits 1-9 select the matching waypoint; R returns to the first one.
    /// Returns true if the key was handled.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        if state != ElementState::Pressed {
            return false;
        }

        let index = match key {
            KeyCode::Digit1 => Some(0),
            KeyCode::Digit2 => Some(1),
            KeyCode::Digit3 => Some(2),
            KeyCode::Digit4 => Some(3),
            KeyCode::Digit5 => Some(4),
            KeyCode::Digit6 => Some(5),
            KeyCode::Digit7 => Some(6),
            KeyCode::Digit8 => Some(7),
            KeyCode::Digit9 => Some(8),
            KeyCode::KeyR => Some(0),
            _ => None,
        };

        match index {
            Some(i) => self.select_waypoint(i),
            None => false,
        }
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.dragging = state == ElementState::Pressed;
        }
    }

    /// Process mouse movement (only accumulated while dragging)
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        if self.dragging {
            self.pending_yaw += delta_x as f32;
            self.pending_pitch += delta_y as f32;
        }
    }

    /// Process scroll wheel input (dolly)
    pub fn process_scroll(&mut self, delta: f32) {
        self.pending_dolly += delta;
    }

    /// Whether the left button is currently held
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Advance the rig one frame and write the result into the camera
    ///
    /// Applies one lerp step of eye and look-at toward the goal (factor per
    /// rendered frame, as in the original scene), then any accumulated orbit
    /// and dolly input. Orbit moves the goal along with the eye so the glide
    /// does not immediately undo the drag.
    pub fn update<C: CameraControl>(&mut self, camera: &mut C, _dt: f32) {
        self.eye = self.eye.lerp(self.goal_eye, self.lerp_factor);
        self.look_at = self.look_at.lerp(self.goal_look_at, self.lerp_factor);

        self.apply_orbit();

        camera.set_eye(self.eye);
        camera.set_look_at(self.look_at);
    }

    /// Apply accumulated orbit/dolly input to the eye (and its goal)
    fn apply_orbit(&mut self) {
        let has_orbit = self.pending_yaw != 0.0 || self.pending_pitch != 0.0;
        let has_dolly = self.pending_dolly != 0.0;
        if !has_orbit && !has_dolly {
            return;
        }

        let offset = self.eye - self.look_at;
        let mut radius = offset.length().max(1e-3);
        let mut yaw = offset.z.atan2(offset.x);
        let mut pitch = (offset.y / radius).clamp(-1.0, 1.0).asin();

        yaw += self.pending_yaw * self.orbit_sensitivity;
        // Keep away from the poles
        pitch = (pitch + self.pending_pitch * self.orbit_sensitivity).clamp(-1.5, 1.5);
        radius = (radius - self.pending_dolly * self.dolly_speed).clamp(0.5, 100.0);

        self.eye = self.look_at
            + Vec3::new(
                radius * pitch.cos() * yaw.cos(),
                radius * pitch.sin(),
                radius * pitch.cos() * yaw.sin(),
            );
        self.goal_eye = self.eye;

        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
        self.pending_dolly = 0.0;
    }
}
