//! Scatter regions for instanced decoration
//!
//! A Scatter describes a bounded box region plus a count and seed. Expanding
//! it yields exactly `count` pseudo-random transforms, each translated within
//! the region and rotated freely about every axis. The seed makes placement
//! reproducible run-to-run for the same scene file.

use picnic_math::Vec3;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Serialize, Deserialize};
use crate::Transform3D;

/// A bounded scatter region in the entity's local space
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scatter {
    /// Number of instances to generate
    pub count: u32,
    /// Half-extents of the region in X and Z
    pub half_extents: [f32; 2],
    /// Y level at which instances sit
    pub y: f32,
    /// RNG seed for reproducible placement
    pub seed: u64,
}

impl Scatter {
    /// Create a new scatter region
    pub fn new(count: u32, half_extents: [f32; 2], y: f32, seed: u64) -> Self {
        Self {
            count,
            half_extents,
            y,
            seed,
        }
    }

    /// Generate the instance transforms for this region
    ///
    /// Always produces exactly `count` transforms. Each translation lies
    /// within the region bounds; each rotation is uniform in [0, pi) per axis.
    pub fn transforms(&self) -> Vec<Transform3D> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let [hx, hz] = self.half_extents;

        (0..self.count)
            .map(|_| {
                let position = Vec3::new(
                    rng.gen_range(-hx..=hx),
                    self.y,
                    rng.gen_range(-hz..=hz),
                );
                let rotation = Vec3::new(
                    rng.gen_range(0.0..std::f32::consts::PI),
                    rng.gen_range(0.0..std::f32::consts::PI),
                    rng.gen_range(0.0..std::f32::consts::PI),
                );
                Transform3D::from_position_rotation(position, rotation)
            })
            .collect()
    }

    /// Check whether a transform's translation lies within this region
    pub fn contains(&self, transform: &Transform3D) -> bool {
        let [hx, hz] = self.half_extents;
        let p = transform.position;
        p.x.abs() <= hx && p.z.abs() <= hz && (p.y - self.y).abs() < f32::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprinkle_scatter() -> Scatter {
        // The cookie-top region: x in (-0.7, 0.7), z in (-0.45, 0.45), y = 0.38
        Scatter::new(100, [0.7, 0.45], 0.38, 7)
    }

    #[test]
    fn test_exact_count() {
        let scatter = sprinkle_scatter();
        assert_eq!(scatter.transforms().len(), 100);

        let empty = Scatter::new(0, [1.0, 1.0], 0.0, 0);
        assert!(empty.transforms().is_empty());
    }

    #[test]
    fn test_all_transforms_in_bounds() {
        let scatter = sprinkle_scatter();
        for t in scatter.transforms() {
            assert!(scatter.contains(&t), "out of bounds: {:?}", t.position);
        }
    }

    #[test]
    fn test_rotations_in_half_turn() {
        let scatter = sprinkle_scatter();
        for t in scatter.transforms() {
            for angle in [t.rotation.x, t.rotation.y, t.rotation.z] {
                assert!((0.0..std::f32::consts::PI).contains(&angle));
            }
        }
    }

    #[test]
    fn test_same_seed_same_placement() {
        let a = sprinkle_scatter().transforms();
        let b = sprinkle_scatter().transforms();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = Scatter::new(100, [0.7, 0.45], 0.38, 1).transforms();
        let b = Scatter::new(100, [0.7, 0.45], 0.38, 2).transforms();
        assert_ne!(a, b);
    }

    #[test]
    fn test_serialization_round_trip() {
        let scatter = sprinkle_scatter();
        let serialized = ron::to_string(&scatter).unwrap();
        let deserialized: Scatter = ron::from_str(&serialized).unwrap();
        assert_eq!(scatter, deserialized);
    }
}
