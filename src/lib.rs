//! Picnic - a decorative 3D dessert scene
//!
//! Renders a picnic table with plates of layered rainbow cookies topped with
//! instanced sprinkles, plus a camera panel (FOV slider and waypoint
//! buttons). The binary in `main.rs` wires the window, renderer, and panel
//! together; this library exposes the configuration and scene assembly so
//! tests and demos can drive them headlessly.

pub mod config;
pub mod scene;

pub use config::AppConfig;
pub use scene::SceneBuilder;
