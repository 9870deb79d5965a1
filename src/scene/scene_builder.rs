//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for assembling the picnic world: the gingham table,
//! plates, layered rainbow cookies, and their sprinkle scatters.

use picnic_core::{
    Cuboid, Cylinder, Entity, Material, Scatter, ShapeRef, Transform3D, Vec3, Waypoint, World,
};

/// Texture key the table material resolves against the assets directory
pub const TABLE_TEXTURE: &str = "gingham_red";

// Cookie geometry: three layers, chocolate caps, one chocolate side wall.
// (y offset, color)
const COOKIE_LAYERS: [(f32, u32); 3] = [
    (0.2, 0xff6666),
    (0.0, 0xeeee66),
    (-0.2, 0x66aa66),
];
const CHOCOLATE: u32 = 0x442211;

/// Builder for constructing the picnic world
///
/// # Example
/// ```ignore
/// let world = SceneBuilder::new()
///     .add_table()
///     .add_place_setting(Vec3::new(0.0, -0.4, 0.0), 7)
///     .build();
/// ```
pub struct SceneBuilder {
    world: World,
}

impl SceneBuilder {
    /// Create a new scene builder
    pub fn new() -> Self {
        Self {
            world: World::new(),
        }
    }

    /// Create a scene builder with a pre-allocated world capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            world: World::with_capacity(capacity),
        }
    }

    /// Add the picnic table: a wide flat slab with the gingham cloth tiled
    /// ten times across it
    pub fn add_table(mut self) -> Self {
        self.world.add_entity(
            Entity::with_transform(
                ShapeRef::shared(Cuboid::new(100.0, 0.1, 50.0)),
                Transform3D::from_position(Vec3::new(0.0, -0.5, 0.0)),
                Material::white().with_texture(TABLE_TEXTURE, [10.0, 10.0]),
            )
            .with_name("table")
            .with_tag("table"),
        );
        self
    }

    /// Add a plate at the given position
    pub fn add_plate(mut self, position: Vec3, name: &str) -> Self {
        self.world.add_entity(
            Entity::with_transform(
                ShapeRef::shared(Cylinder::new(1.2, 1.2, 0.1, 32)),
                Transform3D::from_position(position),
                Material::white().with_roughness(0.8),
            )
            .with_name(name)
            .with_tag("plate"),
        );
        self
    }

    /// Add a rainbow cookie with its sprinkles
    ///
    /// `position` is the cookie group origin; all parts are placed relative
    /// to it. The sprinkles become a single scatter entity so they render as
    /// one instanced draw call.
    pub fn add_cookie(mut self, position: Vec3, name: &str, sprinkle_seed: u64) -> Self {
        for (i, (y, color)) in COOKIE_LAYERS.iter().enumerate() {
            self.world.add_entity(
                Entity::with_transform(
                    ShapeRef::shared(Cuboid::new(1.5, 0.2, 1.0)),
                    Transform3D::from_position(position + Vec3::new(0.0, *y, 0.0)),
                    Material::from_hex(*color),
                )
                .with_name(format!("{}_layer_{}", name, i))
                .with_tag("cookie"),
            );
        }

        let chocolate = Material::from_hex(CHOCOLATE)
            .with_roughness(0.3)
            .with_metalness(0.2);

        // Top and bottom caps
        for (suffix, y) in [("cap_top", 0.325), ("cap_bottom", -0.325)] {
            self.world.add_entity(
                Entity::with_transform(
                    ShapeRef::shared(Cuboid::new(1.5, 0.05, 1.0)),
                    Transform3D::from_position(position + Vec3::new(0.0, y, 0.0)),
                    chocolate.clone(),
                )
                .with_name(format!("{}_{}", name, suffix))
                .with_tag("cookie"),
            );
        }

        // Side wall
        self.world.add_entity(
            Entity::with_transform(
                ShapeRef::shared(Cuboid::new(0.05, 0.7, 1.0)),
                Transform3D::from_position(position + Vec3::new(0.775, 0.0, 0.0)),
                chocolate,
            )
            .with_name(format!("{}_side", name))
            .with_tag("cookie"),
        );

        // Sprinkles: 100 tiny cylinders scattered over the top layer
        self.world.add_entity(
            Entity::with_transform(
                ShapeRef::shared(Cylinder::new(0.02, 0.02, 0.1, 8)),
                Transform3D::from_position(position),
                Material::white().with_roughness(0.0),
            )
            .with_name(format!("{}_sprinkles", name))
            .with_tag("sprinkles")
            .with_scatter(Scatter::new(100, [0.7, 0.45], 0.38, sprinkle_seed)),
        );

        self
    }

    /// Add a plate and the cookie sitting on it
    pub fn add_place_setting(self, plate_position: Vec3, sprinkle_seed: u64) -> Self {
        let name = match plate_position.x {
            x if x < -0.1 => "left",
            x if x > 0.1 => "right",
            _ => "center",
        };
        let cookie_position = Vec3::new(plate_position.x, 0.15, plate_position.z);

        self.add_plate(plate_position, &format!("plate_{}", name))
            .add_cookie(cookie_position, name, sprinkle_seed)
    }

    /// Add a custom entity to the scene
    pub fn add_entity(mut self, entity: Entity) -> Self {
        self.world.add_entity(entity);
        self
    }

    /// Build the scene and return the configured World
    pub fn build(self) -> World {
        self.world
    }

    /// The full default scene: table plus three place settings
    pub fn picnic(sprinkle_seed: u64) -> World {
        let mut builder = Self::with_capacity(22).add_table();
        for (i, x) in [-4.0f32, 0.0, 4.0].into_iter().enumerate() {
            builder = builder.add_place_setting(
                Vec3::new(x, -0.4, 0.0),
                sprinkle_seed.wrapping_add(i as u64),
            );
        }
        builder.build()
    }

    /// The three plate-view camera waypoints used by the default scene
    pub fn default_waypoints() -> Vec<Waypoint> {
        vec![
            Waypoint::new("Left", [-4.0, 2.0, 6.0], [-4.0, 0.0, 0.0]),
            Waypoint::new("Center", [0.0, 2.0, 6.0], [0.0, 0.0, 0.0]),
            Waypoint::new("Right", [4.0, 2.0, 6.0], [4.0, 0.0, 0.0]),
        ]
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scene() {
        let world = SceneBuilder::new().build();
        assert_eq!(world.entity_count(), 0);
    }

    #[test]
    fn test_table_only() {
        let world = SceneBuilder::new().add_table().build();
        assert_eq!(world.entity_count(), 1);

        let (_, table) = world.get_by_name("table").unwrap();
        assert!(table.has_tag("table"));
        assert_eq!(table.material.texture.as_deref(), Some(TABLE_TEXTURE));
        assert_eq!(table.material.uv_repeat, [10.0, 10.0]);
        assert_eq!(table.transform.position, Vec3::new(0.0, -0.5, 0.0));
    }

    #[test]
    fn test_cookie_census() {
        // 3 layers + 2 caps + 1 side + 1 sprinkle scatter = 7 entities
        let world = SceneBuilder::new()
            .add_cookie(Vec3::new(0.0, 0.15, 0.0), "center", 7)
            .build();
        assert_eq!(world.entity_count(), 7);
        assert_eq!(world.instance_count(), 6 + 100);
    }

    #[test]
    fn test_cookie_layer_colors() {
        let world = SceneBuilder::new()
            .add_cookie(Vec3::new(0.0, 0.15, 0.0), "center", 7)
            .build();

        let (_, top) = world.get_by_name("center_layer_0").unwrap();
        // #ff6666
        assert!((top.material.base_color[0] - 1.0).abs() < 1e-6);
        assert!((top.transform.position.y - 0.35).abs() < 1e-6);

        let (_, cap) = world.get_by_name("center_cap_top").unwrap();
        assert_eq!(cap.material.roughness, 0.3);
        assert_eq!(cap.material.metalness, 0.2);
    }

    #[test]
    fn test_place_setting() {
        let world = SceneBuilder::new()
            .add_place_setting(Vec3::new(-4.0, -0.4, 0.0), 7)
            .build();
        // plate + 7 cookie parts
        assert_eq!(world.entity_count(), 8);

        let (_, plate) = world.get_by_name("plate_left").unwrap();
        assert_eq!(plate.material.roughness, 0.8);

        let (_, sprinkles) = world.get_by_name("left_sprinkles").unwrap();
        assert_eq!(sprinkles.transform.position, Vec3::new(-4.0, 0.15, 0.0));
        assert_eq!(sprinkles.scatter.unwrap().count, 100);
    }

    #[test]
    fn test_full_picnic_census() {
        // 1 table + 3 x (1 plate + 7 cookie parts) = 25 entities
        let world = SceneBuilder::picnic(7);
        assert_eq!(world.entity_count(), 25);
        // 22 single instances + 3 x 100 sprinkles
        assert_eq!(world.instance_count(), 322);
    }

    #[test]
    fn test_picnic_sprinkle_seeds_differ_per_cookie() {
        let world = SceneBuilder::picnic(7);
        let left = world.get_by_name("left_sprinkles").unwrap().1;
        let right = world.get_by_name("right_sprinkles").unwrap().1;
        assert_ne!(
            left.scatter.unwrap().seed,
            right.scatter.unwrap().seed
        );
    }

    #[test]
    fn test_default_waypoints_literals() {
        let waypoints = SceneBuilder::default_waypoints();
        assert_eq!(waypoints.len(), 3);
        assert_eq!(waypoints[0].eye, [-4.0, 2.0, 6.0]);
        assert_eq!(waypoints[0].look_at, [-4.0, 0.0, 0.0]);
        assert_eq!(waypoints[1].name, "Center");
        assert_eq!(waypoints[2].eye, [4.0, 2.0, 6.0]);
    }
}
