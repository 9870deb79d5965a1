//! 3D Transform (position, rotation, scale)
//!
//! A Transform3D represents the position, Euler rotation, and scale of an
//! entity. Rotation is stored as per-axis angles in radians, which is all the
//! scene needs (the only rotated entities are the scattered sprinkles).

use picnic_math::{Vec3, Mat4, mat4};
use serde::{Serialize, Deserialize};

/// A 3D transform with position, Euler rotation, and non-uniform scale
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    /// Position in world space
    pub position: Vec3,
    /// Rotation as Euler angles in radians (applied X, then Y, then Z)
    pub rotation: Vec3,
    /// Per-axis scale factors
    pub scale: Vec3,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3D {
    /// Create an identity transform (no translation, rotation, or scale change)
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Create a transform with just a position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale: Vec3::ONE,
        }
    }

    /// Get the full model matrix (scale, then rotation, then translation)
    pub fn matrix(&self) -> Mat4 {
        mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Transform a point from local space to world space
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        mat4::transform_point(&self.matrix(), p)
    }

    /// Compose two transforms at the matrix level: result = self * other
    ///
    /// The composed matrix applies `other` first, then `self`.
    pub fn compose_matrix(&self, other: &Self) -> Mat4 {
        mat4::mul(self.matrix(), other.matrix())
    }

    /// Translate the transform by an offset
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Set a uniform scale
    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = Vec3::splat(scale);
    }
}
