//! Integration tests for scene assembly and camera behavior
//!
//! Exercises the default picnic world end-to-end on the CPU: builder census,
//! batch collection, scene file round-trips, and the waypoint glide.

use picnic::scene::SceneBuilder;
use picnic_core::{Scene, Vec3, Waypoint};
use picnic_input::CameraRig;
use picnic_render::{Camera, RenderableScene};

#[test]
fn default_world_census() {
    let world = SceneBuilder::picnic(7);

    // 1 table + 3 plates + 3 x (3 layers + 2 caps + 1 side + 1 sprinkles)
    assert_eq!(world.entity_count(), 25);
    assert_eq!(world.instance_count(), 322);

    for name in ["table", "plate_left", "plate_center", "plate_right"] {
        assert!(world.get_by_name(name).is_some(), "missing entity {}", name);
    }
}

#[test]
fn default_world_batches() {
    let world = SceneBuilder::picnic(7);
    let renderable = RenderableScene::from_world(&world);

    // One draw call per entity; sprinkles stay one call per cookie
    assert_eq!(renderable.batch_count(), 25);
    assert_eq!(renderable.instance_count(), 322);
    assert_eq!(renderable.texture_keys(), vec!["gingham_red"]);

    let sprinkle_batches: Vec<_> = renderable
        .batches
        .iter()
        .filter(|b| b.label.ends_with("_sprinkles"))
        .collect();
    assert_eq!(sprinkle_batches.len(), 3);
    for batch in sprinkle_batches {
        assert_eq!(batch.instances.len(), 100);
    }
}

#[test]
fn default_scene_round_trips_through_ron() {
    let mut scene = Scene::new("Picnic");
    for waypoint in SceneBuilder::default_waypoints() {
        scene = scene.with_waypoint(waypoint);
    }

    let path = std::env::temp_dir().join("picnic_integration_scene.ron");
    scene.save(&path).unwrap();
    let loaded = Scene::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.waypoints.len(), 3);
    assert_eq!(loaded.waypoints[0].eye, [-4.0, 2.0, 6.0]);
    assert_eq!(loaded.waypoints[2].look_at, [4.0, 0.0, 0.0]);
}

#[test]
fn camera_glides_to_selected_waypoint() {
    let waypoints = SceneBuilder::default_waypoints();
    let mut camera = Camera::new(Vec3::new(0.0, 3.0, 6.0), Vec3::ZERO);
    let mut rig = CameraRig::new(Vec3::new(0.0, 2.0, 6.0), Vec3::ZERO).with_waypoints(
        waypoints
            .iter()
            .map(|w| (Vec3::from_array(w.eye), Vec3::from_array(w.look_at))),
    );

    // Select the left plate and let the blend converge
    assert!(rig.select_waypoint(0));
    for _ in 0..300 {
        rig.update(&mut camera, 1.0 / 60.0);
    }

    let goal_eye = Vec3::new(-4.0, 2.0, 6.0);
    let goal_look = Vec3::new(-4.0, 0.0, 0.0);
    assert!(camera.eye.distance(goal_eye) < 1e-3);
    assert!(camera.look_at.distance(goal_look) < 1e-3);

    // Reselect mid-flight: the new goal simply replaces the old one
    rig.select_waypoint(2);
    rig.update(&mut camera, 1.0 / 60.0);
    assert!(camera.eye.x > goal_eye.x);
}

#[test]
fn fov_bounded_through_rig_for_any_input() {
    let mut camera = Camera::default();
    let rig = CameraRig::new(Vec3::new(0.0, 2.0, 6.0), Vec3::ZERO).with_fov_bounds(20.0, 90.0);

    for raw in [f32::NEG_INFINITY, -5.0, 19.99, 45.0, 90.01, f32::INFINITY] {
        rig.set_fov(&mut camera, raw);
        assert!((20.0..=90.0).contains(&camera.fov), "fov = {}", camera.fov);
    }
}

#[test]
fn scene_file_world_matches_builder_features() {
    // A hand-written scene file with one place setting renders through the
    // same pipeline types as the built-in world
    let mut scene = Scene::new("Mini")
        .with_waypoint(Waypoint::new("Center", [0.0, 2.0, 6.0], [0.0, 0.0, 0.0]));
    let built = SceneBuilder::new()
        .add_place_setting(Vec3::new(0.0, -0.4, 0.0), 7)
        .build();

    // Mirror the built world into templates via census only: the file-based
    // path must agree on instance math
    assert_eq!(built.entity_count(), 8);
    let renderable = RenderableScene::from_world(&built);
    assert_eq!(renderable.instance_count(), 7 + 100);
    assert_eq!(scene.waypoints.len(), 1);

    scene.add_entity(picnic_core::EntityTemplate::new(
        picnic_core::ShapeTemplate::cylinder(1.2, 0.1, 32),
        picnic_core::Transform3D::from_position(Vec3::new(0.0, -0.4, 0.0)),
        picnic_core::Material::white().with_roughness(0.8),
    ));
    let world = scene.instantiate();
    assert_eq!(world.entity_count(), 1);
    assert_eq!(RenderableScene::from_world(&world).batch_count(), 1);
}
