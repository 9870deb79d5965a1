//! Serializable shape templates
//!
//! ShapeTemplate provides a serializable representation of shapes,
//! solving the trait object serialization problem. Each variant
//! corresponds to a shape type and stores its construction parameters.
//!
//! All shapes are created in **local space**, centered at the origin.
//! The entity transform positions them in the world.

use serde::{Serialize, Deserialize};
use picnic_math::{Cuboid, Cylinder, Shape3D};

/// Serializable shape template
///
/// This enum allows shapes to be serialized to/from RON files.
/// Each variant stores the parameters needed to construct the shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeTemplate {
    /// An axis-aligned box
    Cuboid {
        /// Full extent along X
        width: f32,
        /// Full extent along Y
        height: f32,
        /// Full extent along Z
        depth: f32,
    },
    /// A capped cylinder along the Y axis
    Cylinder {
        /// Radius of the top cap
        radius_top: f32,
        /// Radius of the bottom cap
        radius_bottom: f32,
        /// Full height along Y
        height: f32,
        /// Number of radial segments
        segments: u32,
    },
}

impl ShapeTemplate {
    /// Create the actual shape from this template
    pub fn create_shape(&self) -> Box<dyn Shape3D> {
        match self {
            ShapeTemplate::Cuboid { width, height, depth } => {
                Box::new(Cuboid::new(*width, *height, *depth))
            }
            ShapeTemplate::Cylinder { radius_top, radius_bottom, height, segments } => {
                Box::new(Cylinder::new(*radius_top, *radius_bottom, *height, *segments))
            }
        }
    }

    /// Create a cuboid template
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        ShapeTemplate::Cuboid { width, height, depth }
    }

    /// Create a cylinder template with equal radii
    pub fn cylinder(radius: f32, height: f32, segments: u32) -> Self {
        ShapeTemplate::Cylinder {
            radius_top: radius,
            radius_bottom: radius,
            height,
            segments,
        }
    }
}
