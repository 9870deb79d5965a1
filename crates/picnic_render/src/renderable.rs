//! Renderable scene - bridges World/Entity to draw batches
//!
//! This module converts the abstract shape data from picnic_core into
//! GPU-compatible vertex, index, and instance arrays. A plain entity becomes
//! a batch with a single instance; an entity carrying a scatter becomes one
//! batch with an instance per generated transform (a single draw call for
//! all of a cookie's sprinkles).

use picnic_core::{Entity, World};
use picnic_math::mat4;
use crate::pipeline::{InstanceData, Vertex};

/// One draw batch: a mesh plus all the instances that share it
pub struct MeshBatch {
    /// Label for debugging (entity name where available)
    pub label: String,
    /// Vertex data in local space
    pub vertices: Vec<Vertex>,
    /// Triangle indices
    pub indices: Vec<u32>,
    /// Per-instance transforms and material data
    pub instances: Vec<InstanceData>,
    /// Texture key (None = untextured)
    pub texture: Option<String>,
}

/// Draw batches collected from a world
pub struct RenderableScene {
    pub batches: Vec<MeshBatch>,
}

impl RenderableScene {
    /// Collect draw batches from all entities in a world
    pub fn from_world(world: &World) -> Self {
        let batches = world.iter().map(Self::batch_from_entity).collect();
        Self { batches }
    }

    fn batch_from_entity(entity: &Entity) -> MeshBatch {
        let mesh = entity.shape().mesh();
        let vertices = mesh
            .vertices
            .iter()
            .map(|v| Vertex::new(v.position.to_array(), v.normal.to_array(), v.uv))
            .collect();

        let material = &entity.material;
        let make_instance = |model| {
            InstanceData::new(
                model,
                material.base_color,
                material.roughness,
                material.metalness,
                material.uv_repeat,
            )
        };

        let instances = match &entity.scatter {
            Some(scatter) => {
                let base = entity.transform.matrix();
                scatter
                    .transforms()
                    .iter()
                    .map(|t| make_instance(mat4::mul(base, t.matrix())))
                    .collect()
            }
            None => vec![make_instance(entity.transform.matrix())],
        };

        MeshBatch {
            label: entity.name.clone().unwrap_or_else(|| "entity".to_string()),
            vertices,
            indices: mesh.indices.clone(),
            instances,
            texture: material.texture.clone(),
        }
    }

    /// Number of batches (one draw call each)
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Total instance count across all batches
    pub fn instance_count(&self) -> usize {
        self.batches.iter().map(|b| b.instances.len()).sum()
    }

    /// Distinct texture keys referenced by the batches
    pub fn texture_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .batches
            .iter()
            .filter_map(|b| b.texture.as_deref())
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picnic_core::{Material, Scatter, ShapeRef, Transform3D};
    use picnic_math::{Cuboid, Cylinder, Vec3};

    fn test_world() -> World {
        let mut world = World::new();
        world.add_entity(
            Entity::with_material(
                ShapeRef::shared(Cuboid::new(100.0, 0.1, 50.0)),
                Material::white().with_texture("gingham_red", [10.0, 10.0]),
            )
            .with_name("table"),
        );
        world.add_entity(
            Entity::with_transform(
                ShapeRef::shared(Cylinder::new(0.02, 0.02, 0.1, 8)),
                Transform3D::from_position(Vec3::new(0.0, 0.15, 0.0)),
                Material::white().with_roughness(0.0),
            )
            .with_name("sprinkles")
            .with_scatter(Scatter::new(100, [0.7, 0.45], 0.38, 7)),
        );
        world
    }

    #[test]
    fn test_one_batch_per_entity() {
        let scene = RenderableScene::from_world(&test_world());
        assert_eq!(scene.batch_count(), 2);
    }

    #[test]
    fn test_scatter_expands_to_single_batch() {
        let scene = RenderableScene::from_world(&test_world());
        let sprinkles = scene
            .batches
            .iter()
            .find(|b| b.label == "sprinkles")
            .unwrap();
        // All 100 sprinkles share one draw call
        assert_eq!(sprinkles.instances.len(), 100);
        assert_eq!(scene.instance_count(), 101);
    }

    #[test]
    fn test_scatter_instances_offset_by_entity_transform() {
        let scene = RenderableScene::from_world(&test_world());
        let sprinkles = scene
            .batches
            .iter()
            .find(|b| b.label == "sprinkles")
            .unwrap();
        for instance in &sprinkles.instances {
            // Translation column carries entity offset (0, 0.15, 0) plus the
            // local scatter placement (|x| <= 0.7, y = 0.38, |z| <= 0.45)
            let [x, y, z, w] = instance.model_3;
            assert_eq!(w, 1.0);
            assert!(x.abs() <= 0.7 + 1e-5);
            assert!((y - 0.53).abs() < 1e-5);
            assert!(z.abs() <= 0.45 + 1e-5);
        }
    }

    #[test]
    fn test_texture_keys() {
        let scene = RenderableScene::from_world(&test_world());
        assert_eq!(scene.texture_keys(), vec!["gingham_red"]);
    }

    #[test]
    fn test_material_flows_into_instances() {
        let scene = RenderableScene::from_world(&test_world());
        let table = scene.batches.iter().find(|b| b.label == "table").unwrap();
        assert_eq!(table.instances.len(), 1);
        // uv repeat packed into params.zw
        assert_eq!(table.instances[0].params[2], 10.0);
        assert_eq!(table.instances[0].params[3], 10.0);
    }

    #[test]
    fn test_vertex_data_copied() {
        let scene = RenderableScene::from_world(&test_world());
        let table = scene.batches.iter().find(|b| b.label == "table").unwrap();
        assert_eq!(table.vertices.len(), 24);
        assert_eq!(table.indices.len(), 36);
    }
}
