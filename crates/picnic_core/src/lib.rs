//! Core types for the Picnic renderer
//!
//! This crate provides the foundational types for building scenes:
//!
//! - [`Transform3D`] - Position, Euler rotation, and scale
//! - [`Material`] - Visual properties of an entity
//! - [`Entity`] - An object in the world with transform, shape, and material
//! - [`ShapeRef`] - Reference to a shape (shared or owned)
//! - [`World`] - Container for all entities
//! - [`Scatter`] - Bounded region expanded into instanced decoration
//! - [`ShapeTemplate`] / [`EntityTemplate`] - Serializable templates
//! - [`Scene`] - Loadable/saveable scene with camera waypoints

mod transform;
mod entity;
mod world;
mod shapes;
mod scatter;
mod scene;

pub use transform::Transform3D;
pub use entity::{Material, Entity, ShapeRef, EntityTemplate};
pub use world::{World, EntityHandle};
pub use shapes::ShapeTemplate;
pub use scatter::Scatter;
pub use scene::{Scene, SceneError, Waypoint};

// Re-export commonly used types from picnic_math for convenience
pub use picnic_math::{Vec3, Mat4, Shape3D, Mesh, MeshVertex, Cuboid, Cylinder};
