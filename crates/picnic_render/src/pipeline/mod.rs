//! Instanced mesh rendering pipeline

mod types;
mod mesh_pipeline;

pub use types::{Vertex, InstanceData, SceneUniforms};
pub use mesh_pipeline::{MeshPipeline, GpuBatch};
