//! Camera input handling for the Picnic renderer
//!
//! [`CameraRig`] owns the interpolation state that glides the camera toward
//! the selected waypoint, clamps FOV writes, and turns mouse drags into
//! orbiting. It drives any camera through the [`CameraControl`] trait.

mod rig;

pub use rig::{CameraRig, CameraControl};
