//! Scene construction utilities
//!
//! This module provides a declarative API for building the picnic scene.

mod scene_builder;

pub use scene_builder::SceneBuilder;
