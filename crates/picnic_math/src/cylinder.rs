//! Capped cylinder geometry
//!
//! A cylinder (or truncated cone when the radii differ) centered at the
//! origin with its axis along Y. The side wall duplicates the seam column so
//! UVs wrap cleanly, and the caps get their own ring so normals stay flat.

use crate::{Vec3, shape::{Mesh, MeshVertex, Shape3D}};

/// A capped cylinder along the Y axis - pure geometry without colors
#[derive(Clone)]
pub struct Cylinder {
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    segments: u32,
    mesh: Mesh,
}

impl Cylinder {
    /// Create a new cylinder centered at origin
    ///
    /// # Arguments
    /// * `radius_top` - Radius of the top cap
    /// * `radius_bottom` - Radius of the bottom cap
    /// * `height` - Full height along Y
    /// * `segments` - Number of radial segments (minimum 3)
    pub fn new(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> Self {
        let segments = segments.max(3);
        let hy = height * 0.5;
        let n = segments as usize;

        let mut mesh = Mesh::new();

        // Side wall: two rings of n+1 vertices (seam duplicated for UV wrap).
        // The side normal tilts with the radius difference.
        let slope = (radius_bottom - radius_top) / height;
        for i in 0..=n {
            let theta = i as f32 / n as f32 * std::f32::consts::TAU;
            let (sn, cs) = theta.sin_cos();
            let normal = Vec3::new(cs, slope, sn).normalized();
            let u = i as f32 / n as f32;

            mesh.vertices.push(MeshVertex::new(
                Vec3::new(cs * radius_top, hy, sn * radius_top),
                normal,
                [u, 0.0],
            ));
            mesh.vertices.push(MeshVertex::new(
                Vec3::new(cs * radius_bottom, -hy, sn * radius_bottom),
                normal,
                [u, 1.0],
            ));
        }
        for i in 0..n as u32 {
            let top = i * 2;
            let bottom = top + 1;
            let next_top = top + 2;
            let next_bottom = top + 3;
            // Angle increases toward +Z, so winding runs top -> next_top -> bottom
            // to stay CCW from outside.
            mesh.indices.extend_from_slice(&[
                top, next_top, bottom,
                next_top, next_bottom, bottom,
            ]);
        }

        // Caps: center vertex plus a ring of n+1.
        for &(y, radius, normal) in &[
            (hy, radius_top, Vec3::Y),
            (-hy, radius_bottom, -Vec3::Y),
        ] {
            let center = mesh.vertices.len() as u32;
            mesh.vertices.push(MeshVertex::new(Vec3::new(0.0, y, 0.0), normal, [0.5, 0.5]));
            for i in 0..=n {
                let theta = i as f32 / n as f32 * std::f32::consts::TAU;
                let (sn, cs) = theta.sin_cos();
                mesh.vertices.push(MeshVertex::new(
                    Vec3::new(cs * radius, y, sn * radius),
                    normal,
                    [0.5 + cs * 0.5, 0.5 + sn * 0.5],
                ));
            }
            for i in 0..n as u32 {
                let a = center + 1 + i;
                let b = center + 2 + i;
                if normal.y > 0.0 {
                    mesh.indices.extend_from_slice(&[center, b, a]);
                } else {
                    mesh.indices.extend_from_slice(&[center, a, b]);
                }
            }
        }

        Self { radius_top, radius_bottom, height, segments, mesh }
    }

    /// Top cap radius
    #[inline]
    pub fn radius_top(&self) -> f32 {
        self.radius_top
    }

    /// Bottom cap radius
    #[inline]
    pub fn radius_bottom(&self) -> f32 {
        self.radius_bottom
    }

    /// Full height along Y
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Number of radial segments
    #[inline]
    pub fn segments(&self) -> u32 {
        self.segments
    }
}

impl Shape3D for Cylinder {
    fn mesh(&self) -> &Mesh {
        &self.mesh
    }
}
