//! Rendering library for the Picnic scene
//!
//! This crate provides the wgpu-based pipeline that draws the world as
//! instanced, lit, optionally textured meshes.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::Camera`] - Eye/look-at camera with FOV projection
//! - [`pipeline::MeshPipeline`] - Instanced mesh rendering with lighting
//! - [`renderable::RenderableScene`] - Converts World/Entity to draw batches
//! - [`texture::TextureImage`] - RGBA images from disk or procedural fallback

pub mod context;
pub mod camera;
pub mod pipeline;
pub mod renderable;
pub mod texture;

// Re-export core types for convenience
pub use picnic_core::{World, Entity, Transform3D, Material, ShapeRef};
pub use picnic_core::{Shape3D, Cuboid, Cylinder, Vec3};

pub use camera::Camera;
pub use context::RenderContext;
pub use pipeline::{MeshPipeline, GpuBatch, SceneUniforms, Vertex, InstanceData};
pub use renderable::{RenderableScene, MeshBatch};
pub use texture::{TextureImage, TextureError, GpuTexture};
