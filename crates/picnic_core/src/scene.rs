//! Scene serialization
//!
//! Provides the Scene struct for loading/saving scenes from RON files.
//! Scenes contain entity templates plus the camera waypoints the rig can
//! glide between.

use serde::{Serialize, Deserialize};
use std::path::Path;
use std::fs;
use std::io;

use crate::entity::EntityTemplate;
use crate::World;

/// A named camera target: where the eye should end up and what it looks at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Display name (used for the panel button label)
    pub name: String,
    /// Goal eye position
    pub eye: [f32; 3],
    /// Goal look-at point
    pub look_at: [f32; 3],
}

impl Waypoint {
    /// Create a new waypoint
    pub fn new(name: impl Into<String>, eye: [f32; 3], look_at: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            eye,
            look_at,
        }
    }
}

/// A serializable scene containing entity templates and camera waypoints
///
/// Scenes are loaded from RON files and contain all the data needed to
/// populate a world: entities, plus the waypoint list driving the camera
/// panel. An empty waypoint list means a static camera (no buttons).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Scene name (for display/debugging)
    pub name: String,
    /// Entity templates in this scene
    pub entities: Vec<EntityTemplate>,
    /// Camera waypoints (may be empty)
    #[serde(default)]
    pub waypoints: Vec<Waypoint>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entities: Vec::new(),
            waypoints: Vec::new(),
        }
    }

    /// Load a scene from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        let contents = fs::read_to_string(path)?;
        let scene = ron::from_str(&contents)?;
        Ok(scene)
    }

    /// Save a scene to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Add an entity template to this scene
    pub fn add_entity(&mut self, entity: EntityTemplate) {
        self.entities.push(entity);
    }

    /// Add a camera waypoint to this scene
    pub fn with_waypoint(mut self, waypoint: Waypoint) -> Self {
        self.waypoints.push(waypoint);
        self
    }

    /// Instantiate all entity templates into a fresh World
    pub fn instantiate(&self) -> World {
        let mut world = World::with_capacity(self.entities.len());
        for template in &self.entities {
            world.add_entity(template.to_entity());
        }
        log::info!(
            "instantiated scene '{}': {} entities, {} waypoints",
            self.name,
            world.entity_count(),
            self.waypoints.len()
        );
        world
    }
}

/// Error for scene load/save operations
#[derive(Debug)]
pub enum SceneError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for SceneError {
    fn from(e: io::Error) -> Self {
        SceneError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SceneError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneError::Parse(e)
    }
}

impl From<ron::Error> for SceneError {
    fn from(e: ron::Error) -> Self {
        SceneError::Serialize(e)
    }
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::Io(e) => write!(f, "IO error: {}", e),
            SceneError::Parse(e) => write!(f, "Parse error: {}", e),
            SceneError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for SceneError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Scatter, Transform3D};
    use crate::shapes::ShapeTemplate;
    use picnic_math::Vec3;

    #[test]
    fn test_scene_new() {
        let scene = Scene::new("Picnic");
        assert_eq!(scene.name, "Picnic");
        assert!(scene.entities.is_empty());
        assert!(scene.waypoints.is_empty());
    }

    #[test]
    fn test_scene_with_waypoint() {
        let scene = Scene::new("Picnic")
            .with_waypoint(Waypoint::new("Left", [-4.0, 2.0, 6.0], [-4.0, 0.0, 0.0]));
        assert_eq!(scene.waypoints.len(), 1);
        assert_eq!(scene.waypoints[0].eye, [-4.0, 2.0, 6.0]);
    }

    #[test]
    fn test_scene_serialization() {
        let mut scene = Scene::new("Picnic")
            .with_waypoint(Waypoint::new("Center", [0.0, 2.0, 6.0], [0.0, 0.0, 0.0]));

        scene.add_entity(
            EntityTemplate::new(
                ShapeTemplate::cuboid(1.5, 0.2, 1.0),
                Transform3D::from_position(Vec3::new(0.0, 0.35, 0.0)),
                Material::from_hex(0xff6666),
            )
            .with_name("layer_red")
            .with_tag("cookie"),
        );

        let pretty = ron::ser::PrettyConfig::new().struct_names(true);
        let serialized = ron::ser::to_string_pretty(&scene, pretty).unwrap();

        assert!(serialized.contains("Picnic"));
        assert!(serialized.contains("layer_red"));
        assert!(serialized.contains("Cuboid"));

        let deserialized: Scene = ron::from_str(&serialized).unwrap();
        assert_eq!(deserialized.name, "Picnic");
        assert_eq!(deserialized.entities.len(), 1);
        assert_eq!(deserialized.waypoints.len(), 1);
        assert_eq!(deserialized.entities[0].name, Some("layer_red".to_string()));
    }

    #[test]
    fn test_parse_scene_file_format() {
        let scene_ron = r#"
Scene(
    name: "Test Scene",
    entities: [
        EntityTemplate(
            name: Some("plate_center"),
            tags: ["plate"],
            transform: Transform3D(
                position: Vec3(x: 0.0, y: -0.4, z: 0.0),
                rotation: Vec3(x: 0.0, y: 0.0, z: 0.0),
                scale: Vec3(x: 1.0, y: 1.0, z: 1.0),
            ),
            shape: ShapeTemplate(
                type: "Cylinder",
                radius_top: 1.2,
                radius_bottom: 1.2,
                height: 0.1,
                segments: 32,
            ),
            material: Material(
                base_color: (1.0, 1.0, 1.0, 1.0),
                roughness: 0.8,
                metalness: 0.0,
            ),
        ),
        EntityTemplate(
            name: Some("sprinkles_center"),
            tags: ["sprinkles"],
            transform: Transform3D(
                position: Vec3(x: 0.0, y: 0.15, z: 0.0),
                rotation: Vec3(x: 0.0, y: 0.0, z: 0.0),
                scale: Vec3(x: 1.0, y: 1.0, z: 1.0),
            ),
            shape: ShapeTemplate(
                type: "Cylinder",
                radius_top: 0.02,
                radius_bottom: 0.02,
                height: 0.1,
                segments: 8,
            ),
            material: Material(
                base_color: (1.0, 1.0, 1.0, 1.0),
                roughness: 0.0,
                metalness: 0.0,
            ),
            scatter: Some(Scatter(
                count: 100,
                half_extents: (0.7, 0.45),
                y: 0.38,
                seed: 7,
            )),
        ),
    ],
    waypoints: [
        Waypoint(name: "Center", eye: (0.0, 2.0, 6.0), look_at: (0.0, 0.0, 0.0)),
    ],
)
"#;
        let scene: Scene = ron::from_str(scene_ron).unwrap();
        assert_eq!(scene.name, "Test Scene");
        assert_eq!(scene.entities.len(), 2);
        assert_eq!(scene.waypoints.len(), 1);

        assert_eq!(scene.entities[0].name, Some("plate_center".to_string()));
        match &scene.entities[0].shape {
            ShapeTemplate::Cylinder { radius_top, segments, .. } => {
                assert_eq!(*radius_top, 1.2);
                assert_eq!(*segments, 32);
            }
            _ => panic!("Expected Cylinder shape"),
        }

        let scatter = scene.entities[1].scatter.expect("sprinkles have a scatter");
        assert_eq!(scatter.count, 100);
        assert_eq!(scatter.seed, 7);
    }

    #[test]
    fn test_scene_instantiate() {
        let mut scene = Scene::new("Small");
        scene.add_entity(
            EntityTemplate::new(
                ShapeTemplate::cuboid(1.0, 1.0, 1.0),
                Transform3D::identity(),
                Material::white(),
            )
            .with_scatter(Scatter::new(10, [0.5, 0.5], 0.0, 3)),
        );

        let world = scene.instantiate();
        assert_eq!(world.entity_count(), 1);
        assert_eq!(world.instance_count(), 10);
    }

    #[test]
    fn test_scene_save_load_round_trip() {
        let mut scene = Scene::new("RoundTrip")
            .with_waypoint(Waypoint::new("Right", [4.0, 2.0, 6.0], [4.0, 0.0, 0.0]));
        scene.add_entity(EntityTemplate::new(
            ShapeTemplate::cylinder(1.2, 0.1, 32),
            Transform3D::from_position(Vec3::new(4.0, -0.4, 0.0)),
            Material::white().with_roughness(0.8),
        ));

        let path = std::env::temp_dir().join("picnic_scene_round_trip.ron");
        scene.save(&path).unwrap();
        let loaded = Scene::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.name, "RoundTrip");
        assert_eq!(loaded.entities.len(), 1);
        assert_eq!(loaded.waypoints[0].look_at, [4.0, 0.0, 0.0]);
    }

    #[test]
    fn test_scene_load_missing_file() {
        let err = Scene::load("/nonexistent/picnic.ron").unwrap_err();
        match err {
            SceneError::Io(_) => {}
            other => panic!("Expected Io error, got {:?}", other),
        }
    }
}
