//! 03 - Scene File
//!
//! Write a scene to a RON file, load it back, and instantiate it. No window;
//! this shows the declarative file format the app loads when
//! `scene.path` is configured.
//!
//! Run with: `cargo run --example 03_scene_file`

use picnic_core::{
    EntityTemplate, Material, Scatter, Scene, ShapeTemplate, Transform3D, Vec3, Waypoint,
};

fn main() {
    env_logger::init();

    let mut scene = Scene::new("Picnic (file)")
        .with_waypoint(Waypoint::new("Center", [0.0, 2.0, 6.0], [0.0, 0.0, 0.0]));

    // The table: a wide slab with the gingham cloth tiled across it
    scene.add_entity(
        EntityTemplate::new(
            ShapeTemplate::cuboid(100.0, 0.1, 50.0),
            Transform3D::from_position(Vec3::new(0.0, -0.5, 0.0)),
            Material::white().with_texture("gingham_red", [10.0, 10.0]),
        )
        .with_name("table")
        .with_tag("table"),
    );

    // One plate with a cookie
    scene.add_entity(
        EntityTemplate::new(
            ShapeTemplate::cylinder(1.2, 0.1, 32),
            Transform3D::from_position(Vec3::new(0.0, -0.4, 0.0)),
            Material::white().with_roughness(0.8),
        )
        .with_name("plate_center")
        .with_tag("plate"),
    );

    let cookie = Vec3::new(0.0, 0.15, 0.0);
    for (i, (y, color)) in [(0.2, 0xff6666), (0.0, 0xeeee66), (-0.2, 0x66aa66)]
        .iter()
        .enumerate()
    {
        scene.add_entity(
            EntityTemplate::new(
                ShapeTemplate::cuboid(1.5, 0.2, 1.0),
                Transform3D::from_position(cookie + Vec3::new(0.0, *y, 0.0)),
                Material::from_hex(*color),
            )
            .with_name(format!("layer_{}", i))
            .with_tag("cookie"),
        );
    }

    let chocolate = Material::from_hex(0x442211)
        .with_roughness(0.3)
        .with_metalness(0.2);
    for (name, offset, size) in [
        ("cap_top", Vec3::new(0.0, 0.325, 0.0), (1.5, 0.05, 1.0)),
        ("cap_bottom", Vec3::new(0.0, -0.325, 0.0), (1.5, 0.05, 1.0)),
        ("side", Vec3::new(0.775, 0.0, 0.0), (0.05, 0.7, 1.0)),
    ] {
        scene.add_entity(
            EntityTemplate::new(
                ShapeTemplate::cuboid(size.0, size.1, size.2),
                Transform3D::from_position(cookie + offset),
                chocolate.clone(),
            )
            .with_name(name)
            .with_tag("cookie"),
        );
    }

    scene.add_entity(
        EntityTemplate::new(
            ShapeTemplate::Cylinder {
                radius_top: 0.02,
                radius_bottom: 0.02,
                height: 0.1,
                segments: 8,
            },
            Transform3D::from_position(cookie),
            Material::white().with_roughness(0.0),
        )
        .with_name("sprinkles")
        .with_tag("sprinkles")
        .with_scatter(Scatter::new(100, [0.7, 0.45], 0.38, 7)),
    );

    let path = std::env::temp_dir().join("picnic_demo_scene.ron");
    scene.save(&path).expect("Failed to save scene");
    println!("Saved scene to {}", path.display());

    let loaded = Scene::load(&path).expect("Failed to load scene");
    let world = loaded.instantiate();
    println!(
        "Loaded '{}': {} entities, {} instances, {} waypoints",
        loaded.name,
        world.entity_count(),
        world.instance_count(),
        loaded.waypoints.len()
    );

    for entity in world.iter() {
        println!(
            "  {:<12} at ({:+.2}, {:+.2}, {:+.2}) x{}",
            entity.name.as_deref().unwrap_or("?"),
            entity.transform.position.x,
            entity.transform.position.y,
            entity.transform.position.z,
            entity.instance_count()
        );
    }
}
