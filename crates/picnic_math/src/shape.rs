//! Shape trait and mesh primitives
//!
//! Shapes are pure geometric data - no colors, materials, or rendering info.
//! Each shape owns a precomputed triangle [`Mesh`] built once at construction.

use crate::Vec3;

/// A single mesh vertex: position, normal, and texture coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshVertex {
    /// Position in local space
    pub position: Vec3,
    /// Unit surface normal
    pub normal: Vec3,
    /// Texture coordinates in [0, 1]
    pub uv: [f32; 2],
}

impl MeshVertex {
    /// Create a new mesh vertex
    #[inline]
    pub fn new(position: Vec3, normal: Vec3, uv: [f32; 2]) -> Self {
        Self { position, normal, uv }
    }
}

/// An indexed triangle mesh
///
/// Indices come in triples; each triple is one counter-clockwise triangle.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    /// Vertex data in local space
    pub vertices: Vec<MeshVertex>,
    /// Triangle indices into `vertices`
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Trait for shapes that can produce a triangle mesh
///
/// A Shape3D provides the geometric data needed for rendering:
/// vertices with normals/UVs and a triangle index list. Shapes are pure
/// geometry - visual properties live in the entity/material system.
pub trait Shape3D: Send + Sync {
    /// Get the precomputed mesh of this shape
    fn mesh(&self) -> &Mesh;

    /// Get the number of vertices
    #[inline]
    fn vertex_count(&self) -> usize {
        self.mesh().vertex_count()
    }

    /// Get the number of triangles
    #[inline]
    fn triangle_count(&self) -> usize {
        self.mesh().triangle_count()
    }
}
