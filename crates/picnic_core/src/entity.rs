//! Entity and Material types
//!
//! An Entity represents one object in the scene with a transform, shape, and
//! material. Entities carrying a [`Scatter`] are expanded into many instances
//! of their shape at render time.

use std::collections::HashSet;
use std::sync::Arc;
use picnic_math::Shape3D;
use serde::{Serialize, Deserialize};
use crate::Transform3D;
use crate::scatter::Scatter;
use crate::shapes::ShapeTemplate;

/// Surface properties of an entity
///
/// Base color plus the two scalar knobs the scene actually varies. An
/// optional texture key selects an image sampled across the surface,
/// tiled `uv_repeat` times in each direction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Material {
    /// Base color as RGBA (each component 0.0-1.0)
    pub base_color: [f32; 4],
    /// Surface roughness (0.0 = mirror-smooth, 1.0 = fully diffuse)
    pub roughness: f32,
    /// Metalness (0.0 = dielectric, 1.0 = metal)
    pub metalness: f32,
    /// Optional texture key, resolved against the configured assets directory
    #[serde(default)]
    pub texture: Option<String>,
    /// Texture tiling factors in U and V
    #[serde(default = "default_uv_repeat")]
    pub uv_repeat: [f32; 2],
}

fn default_uv_repeat() -> [f32; 2] {
    [1.0, 1.0]
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color: [1.0, 1.0, 1.0, 1.0],
            roughness: 1.0,
            metalness: 0.0,
            texture: None,
            uv_repeat: [1.0, 1.0],
        }
    }
}

impl Material {
    /// Create a new opaque material with the given RGB color
    pub fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            base_color: [r, g, b, 1.0],
            ..Self::default()
        }
    }

    /// Create a material from a packed 0xRRGGBB color
    pub fn from_hex(rgb: u32) -> Self {
        let r = ((rgb >> 16) & 0xff) as f32 / 255.0;
        let g = ((rgb >> 8) & 0xff) as f32 / 255.0;
        let b = (rgb & 0xff) as f32 / 255.0;
        Self::from_rgb(r, g, b)
    }

    /// Builder: set roughness
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    /// Builder: set metalness
    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness;
        self
    }

    /// Builder: set the texture key and tiling
    pub fn with_texture(mut self, key: impl Into<String>, repeat: [f32; 2]) -> Self {
        self.texture = Some(key.into());
        self.uv_repeat = repeat;
        self
    }

    /// White material
    pub fn white() -> Self {
        Self::default()
    }
}

/// Reference to a shape - either shared (Arc) or owned (Box)
///
/// Use `Shared` for memory-efficient storage when multiple entities use the
/// same shape. Use `Owned` when an entity needs its own unique copy.
pub enum ShapeRef {
    /// A shared reference to a shape (multiple entities can share this)
    Shared(Arc<dyn Shape3D>),
    /// An owned shape (unique to this entity)
    Owned(Box<dyn Shape3D>),
}

impl ShapeRef {
    /// Create a shared shape reference
    pub fn shared<S: Shape3D + 'static>(shape: S) -> Self {
        Self::Shared(Arc::new(shape))
    }

    /// Create an owned shape reference
    pub fn owned<S: Shape3D + 'static>(shape: S) -> Self {
        Self::Owned(Box::new(shape))
    }

    /// Get a reference to the underlying shape
    pub fn as_shape(&self) -> &dyn Shape3D {
        match self {
            ShapeRef::Shared(arc) => arc.as_ref(),
            ShapeRef::Owned(boxed) => boxed.as_ref(),
        }
    }
}

/// An entity in the scene
///
/// Each entity has:
/// - An optional name (for lookup by name)
/// - Tags (for categorization and filtering)
/// - A transform (position, rotation, scale)
/// - A shape (the geometry)
/// - A material (visual properties)
/// - An optional scatter (expands the shape into many instances)
pub struct Entity {
    /// Optional name for this entity (for lookup)
    pub name: Option<String>,
    /// Tags for categorization (e.g., "table", "cookie", "sprinkles")
    pub tags: HashSet<String>,
    /// The entity's transform in world space
    pub transform: Transform3D,
    /// The entity's shape
    pub shape: ShapeRef,
    /// The entity's material
    pub material: Material,
    /// Optional scatter region (one instance per generated transform)
    pub scatter: Option<Scatter>,
}

impl Entity {
    /// Create a new entity with the given shape
    pub fn new(shape: ShapeRef) -> Self {
        Self {
            name: None,
            tags: HashSet::new(),
            transform: Transform3D::identity(),
            shape,
            material: Material::default(),
            scatter: None,
        }
    }

    /// Create a new entity with shape and material
    pub fn with_material(shape: ShapeRef, material: Material) -> Self {
        Self {
            material,
            ..Self::new(shape)
        }
    }

    /// Create a new entity with shape, transform, and material
    pub fn with_transform(shape: ShapeRef, transform: Transform3D, material: Material) -> Self {
        Self {
            transform,
            material,
            ..Self::new(shape)
        }
    }

    /// Set the name of this entity (for lookup)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a tag to this entity
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Add multiple tags to this entity
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for tag in tags {
            self.tags.insert(tag.into());
        }
        self
    }

    /// Attach a scatter region to this entity
    pub fn with_scatter(mut self, scatter: Scatter) -> Self {
        self.scatter = Some(scatter);
        self
    }

    /// Check if this entity has a specific tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Get the shape of this entity
    pub fn shape(&self) -> &dyn Shape3D {
        self.shape.as_shape()
    }

    /// Number of rendered instances (1, or the scatter count)
    pub fn instance_count(&self) -> usize {
        self.scatter.as_ref().map_or(1, |s| s.count as usize)
    }
}

/// A serializable entity template
///
/// EntityTemplate is used for scene serialization. Unlike Entity, it stores
/// a ShapeTemplate (enum) rather than a trait object, making it serializable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityTemplate {
    /// Optional name for this entity (for lookup)
    pub name: Option<String>,
    /// Tags for categorization
    #[serde(default)]
    pub tags: Vec<String>,
    /// The entity's transform in world space
    pub transform: Transform3D,
    /// The entity's shape template (serializable)
    pub shape: ShapeTemplate,
    /// The entity's material
    pub material: Material,
    /// Optional scatter region
    #[serde(default)]
    pub scatter: Option<Scatter>,
}

impl EntityTemplate {
    /// Create a new entity template
    pub fn new(shape: ShapeTemplate, transform: Transform3D, material: Material) -> Self {
        Self {
            name: None,
            tags: Vec::new(),
            transform,
            shape,
            material,
            scatter: None,
        }
    }

    /// Set the name of this template
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a tag to this template
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Attach a scatter region to this template
    pub fn with_scatter(mut self, scatter: Scatter) -> Self {
        self.scatter = Some(scatter);
        self
    }

    /// Convert this template to an Entity
    pub fn to_entity(&self) -> Entity {
        let shape = self.shape.create_shape();
        let mut entity = Entity::with_transform(
            ShapeRef::Owned(shape),
            self.transform,
            self.material.clone(),
        );
        if let Some(ref name) = self.name {
            entity = entity.with_name(name.clone());
        }
        for tag in &self.tags {
            entity = entity.with_tag(tag.clone());
        }
        if let Some(scatter) = self.scatter {
            entity = entity.with_scatter(scatter);
        }
        entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picnic_math::{Vec3, Cuboid};

    #[test]
    fn test_material_default() {
        let m = Material::default();
        assert_eq!(m.base_color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(m.roughness, 1.0);
        assert_eq!(m.metalness, 0.0);
        assert!(m.texture.is_none());
    }

    #[test]
    fn test_material_from_hex() {
        let m = Material::from_hex(0xff6666);
        assert!((m.base_color[0] - 1.0).abs() < 1e-6);
        assert!((m.base_color[1] - 0.4).abs() < 0.01);
        assert!((m.base_color[2] - 0.4).abs() < 0.01);
        assert_eq!(m.base_color[3], 1.0);
    }

    #[test]
    fn test_material_builders() {
        let m = Material::from_hex(0x442211)
            .with_roughness(0.3)
            .with_metalness(0.2);
        assert_eq!(m.roughness, 0.3);
        assert_eq!(m.metalness, 0.2);
    }

    #[test]
    fn test_material_with_texture() {
        let m = Material::white().with_texture("gingham_red", [10.0, 10.0]);
        assert_eq!(m.texture.as_deref(), Some("gingham_red"));
        assert_eq!(m.uv_repeat, [10.0, 10.0]);
    }

    #[test]
    fn test_shape_ref_shared() {
        let shape_ref = ShapeRef::shared(Cuboid::cube(2.0));
        match &shape_ref {
            ShapeRef::Shared(_) => {}
            _ => panic!("Expected Shared variant"),
        }
        assert_eq!(shape_ref.as_shape().vertex_count(), 24);
    }

    #[test]
    fn test_shape_ref_owned() {
        let shape_ref = ShapeRef::owned(Cuboid::cube(2.0));
        match &shape_ref {
            ShapeRef::Owned(_) => {}
            _ => panic!("Expected Owned variant"),
        }
        assert_eq!(shape_ref.as_shape().vertex_count(), 24);
    }

    #[test]
    fn test_entity_new() {
        let entity = Entity::new(ShapeRef::shared(Cuboid::cube(2.0)));
        assert_eq!(entity.shape().vertex_count(), 24);
        assert_eq!(entity.material.base_color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(entity.instance_count(), 1);
    }

    #[test]
    fn test_entity_builders() {
        let entity = Entity::with_material(
            ShapeRef::shared(Cuboid::cube(1.0)),
            Material::from_hex(0x66aa66),
        )
        .with_name("layer_green")
        .with_tag("cookie");

        assert_eq!(entity.name.as_deref(), Some("layer_green"));
        assert!(entity.has_tag("cookie"));
        assert!(!entity.has_tag("table"));
    }

    #[test]
    fn test_entity_with_scatter() {
        let scatter = Scatter::new(100, [0.7, 0.45], 0.38, 7);
        let entity = Entity::new(ShapeRef::shared(Cuboid::cube(1.0))).with_scatter(scatter);
        assert_eq!(entity.instance_count(), 100);
    }

    #[test]
    fn test_entity_template_to_entity() {
        let template = EntityTemplate::new(
            ShapeTemplate::cuboid(1.5, 0.2, 1.0),
            Transform3D::from_position(Vec3::new(0.0, 0.2, 0.0)),
            Material::from_hex(0xff6666),
        )
        .with_name("layer_red")
        .with_tag("cookie");

        let entity = template.to_entity();
        assert_eq!(entity.name.as_deref(), Some("layer_red"));
        assert!(entity.has_tag("cookie"));
        assert_eq!(entity.transform.position.y, 0.2);
        assert_eq!(entity.shape().vertex_count(), 24);
    }
}
