//! GPU-compatible data types for the mesh pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use picnic_math::Mat4;

/// A mesh vertex: position, normal, and texture coordinates
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Vertex {
    /// Position in local space
    pub position: [f32; 3],
    /// Unit surface normal
    pub normal: [f32; 3],
    /// Texture coordinates
    pub uv: [f32; 2],
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self { position, normal, uv }
    }
}

/// Per-instance data: model matrix columns, color, and material parameters
///
/// `params` packs [roughness, metalness, uv_repeat_u, uv_repeat_v].
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct InstanceData {
    pub model_0: [f32; 4],
    pub model_1: [f32; 4],
    pub model_2: [f32; 4],
    pub model_3: [f32; 4],
    pub color: [f32; 4],
    pub params: [f32; 4],
}

impl InstanceData {
    /// Build instance data from a model matrix and material values
    pub fn new(model: Mat4, color: [f32; 4], roughness: f32, metalness: f32, uv_repeat: [f32; 2]) -> Self {
        Self {
            model_0: model[0],
            model_1: model[1],
            model_2: model[2],
            model_3: model[3],
            color,
            params: [roughness, metalness, uv_repeat[0], uv_repeat[1]],
        }
    }
}

/// Scene-wide uniforms for the mesh shader
/// Layout: 96 bytes total (must match mesh.wgsl SceneUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SceneUniforms {
    /// Combined view-projection matrix (64 bytes)
    pub view_proj: Mat4,
    /// Key light direction (normalized) + ambient strength (16 bytes)
    pub light_dir: [f32; 3],
    pub ambient_strength: f32,
    /// Camera eye position + diffuse strength (16 bytes)
    pub camera_pos: [f32; 3],
    pub diffuse_strength: f32,
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self {
            view_proj: picnic_math::mat4::IDENTITY,
            light_dir: [0.4, 0.4, 0.4],
            ambient_strength: 0.45,
            camera_pos: [0.0, 3.0, 6.0],
            diffuse_strength: 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_vertex_size() {
        // 3 floats position + 3 floats normal + 2 floats uv = 32 bytes
        assert_eq!(size_of::<Vertex>(), 32);
    }

    #[test]
    fn test_instance_data_size() {
        // 4 vec4 model columns + vec4 color + vec4 params = 96 bytes
        assert_eq!(size_of::<InstanceData>(), 96);
    }

    #[test]
    fn test_scene_uniforms_size() {
        // 16 floats view_proj + 4 floats light + 4 floats camera = 96 bytes
        assert_eq!(size_of::<SceneUniforms>(), 96);
    }

    #[test]
    fn test_alignment() {
        // All types should be 4-byte aligned (f32 alignment)
        assert_eq!(std::mem::align_of::<Vertex>(), 4);
        assert_eq!(std::mem::align_of::<InstanceData>(), 4);
        assert_eq!(std::mem::align_of::<SceneUniforms>(), 4);
    }

    #[test]
    fn test_instance_data_packs_matrix_columns() {
        let model = picnic_math::mat4::from_translation(picnic_math::Vec3::new(4.0, -0.4, 0.0));
        let instance = InstanceData::new(model, [1.0; 4], 0.8, 0.0, [1.0, 1.0]);
        assert_eq!(instance.model_3, [4.0, -0.4, 0.0, 1.0]);
        assert_eq!(instance.params, [0.8, 0.0, 1.0, 1.0]);
    }
}
