//! 3D Mathematics Library
//!
//! This crate provides the vector, matrix, and mesh primitives for the
//! Picnic renderer.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`mat4::Mat4`] - 4x4 column-major matrix for transformations
//!
//! ## Shape Types
//!
//! - [`Shape3D`] - Trait for meshable shapes
//! - [`Mesh`] - Triangle mesh with positions, normals, and UVs
//! - [`Cuboid`] - An axis-aligned box
//! - [`Cylinder`] - A capped cylinder (or truncated cone)

mod vec3;
pub mod mat4;
pub mod shape;
pub mod cuboid;
pub mod cylinder;

pub use vec3::Vec3;
pub use mat4::Mat4;
pub use shape::{Shape3D, Mesh, MeshVertex};
pub use cuboid::Cuboid;
pub use cylinder::Cylinder;
