//! 4x4 Matrix utilities
//!
//! Column-major matrices used for model transforms, the look-at view, and
//! perspective projection. The raw `[[f32; 4]; 4]` representation uploads
//! directly into GPU uniform and instance buffers.

use crate::Vec3;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Translation matrix
pub fn from_translation(t: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = t.x;
    m[3][1] = t.y;
    m[3][2] = t.z;
    m
}

/// Non-uniform scale matrix
pub fn from_scale(s: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[0][0] = s.x;
    m[1][1] = s.y;
    m[2][2] = s.z;
    m
}

/// Rotation about the X axis
pub fn from_rotation_x(angle: f32) -> Mat4 {
    let (sn, cs) = angle.sin_cos();
    let mut m = IDENTITY;
    m[1][1] = cs;
    m[1][2] = sn;
    m[2][1] = -sn;
    m[2][2] = cs;
    m
}

/// Rotation about the Y axis
pub fn from_rotation_y(angle: f32) -> Mat4 {
    let (sn, cs) = angle.sin_cos();
    let mut m = IDENTITY;
    m[0][0] = cs;
    m[0][2] = -sn;
    m[2][0] = sn;
    m[2][2] = cs;
    m
}

/// Rotation about the Z axis
pub fn from_rotation_z(angle: f32) -> Mat4 {
    let (sn, cs) = angle.sin_cos();
    let mut m = IDENTITY;
    m[0][0] = cs;
    m[0][1] = sn;
    m[1][0] = -sn;
    m[1][1] = cs;
    m
}

/// Rotation from Euler angles, applied X then Y then Z
pub fn from_euler(rx: f32, ry: f32, rz: f32) -> Mat4 {
    mul(from_rotation_z(rz), mul(from_rotation_y(ry), from_rotation_x(rx)))
}

/// Compose scale, Euler rotation, and translation into a model matrix
///
/// Applies scale first, then rotation, then translation.
pub fn from_scale_rotation_translation(scale: Vec3, rotation: Vec3, translation: Vec3) -> Mat4 {
    mul(
        from_translation(translation),
        mul(from_euler(rotation.x, rotation.y, rotation.z), from_scale(scale)),
    )
}

/// Transform a point (w = 1) by a matrix
pub fn transform_point(m: &Mat4, p: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0],
        m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1],
        m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2],
    )
}

/// Transform a direction (w = 0) by a matrix
pub fn transform_direction(m: &Mat4, d: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * d.x + m[1][0] * d.y + m[2][0] * d.z,
        m[0][1] * d.x + m[1][1] * d.y + m[2][1] * d.z,
        m[0][2] * d.x + m[1][2] * d.y + m[2][2] * d.z,
    )
}

/// Perspective projection matrix
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, (far + near) * nf, -1.0],
        [0.0, 0.0, 2.0 * far * near * nf, 0.0],
    ]
}

/// Look-at view matrix
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = (target - eye).normalized();
    let s = f.cross(up).normalized();
    let u = s.cross(f);

    [
        [s.x, u.x, -f.x, 0.0],
        [s.y, u.y, -f.y, 0.0],
        [s.z, u.z, -f.z, 0.0],
        [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    const EPSILON: f32 = 1e-4;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_identity() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(transform_point(&IDENTITY, p), p));
    }

    #[test]
    fn test_translation() {
        let m = from_translation(Vec3::new(1.0, 2.0, 3.0));
        let p = transform_point(&m, Vec3::ZERO);
        assert!(vec_approx_eq(p, Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_translation_ignores_directions() {
        let m = from_translation(Vec3::new(100.0, 100.0, 100.0));
        assert!(vec_approx_eq(transform_direction(&m, Vec3::X), Vec3::X));
    }

    #[test]
    fn test_rotation_y() {
        // Rotating +X by 90 degrees about Y gives -Z
        let m = from_rotation_y(FRAC_PI_2);
        let p = transform_point(&m, Vec3::X);
        assert!(vec_approx_eq(p, -Vec3::Z), "got {:?}", p);
    }

    #[test]
    fn test_rotation_x() {
        // Rotating +Y by 90 degrees about X gives +Z
        let m = from_rotation_x(FRAC_PI_2);
        let p = transform_point(&m, Vec3::Y);
        assert!(vec_approx_eq(p, Vec3::Z), "got {:?}", p);
    }

    #[test]
    fn test_rotation_z() {
        // Rotating +X by 90 degrees about Z gives +Y
        let m = from_rotation_z(FRAC_PI_2);
        let p = transform_point(&m, Vec3::X);
        assert!(vec_approx_eq(p, Vec3::Y), "got {:?}", p);
    }

    #[test]
    fn test_srt_order() {
        // Scale 2, rotate +X 90 degrees about Z, then translate +10 on X:
        // (1,0,0) -> (2,0,0) -> (0,2,0) -> (10,2,0)
        let m = from_scale_rotation_translation(
            Vec3::splat(2.0),
            Vec3::new(0.0, 0.0, FRAC_PI_2),
            Vec3::new(10.0, 0.0, 0.0),
        );
        let p = transform_point(&m, Vec3::X);
        assert!(vec_approx_eq(p, Vec3::new(10.0, 2.0, 0.0)), "got {:?}", p);
    }

    #[test]
    fn test_mul_composition() {
        let t = from_translation(Vec3::new(5.0, 0.0, 0.0));
        let r = from_rotation_z(FRAC_PI_2);
        // mul(t, r) applies r first
        let p = transform_point(&mul(t, r), Vec3::X);
        assert!(vec_approx_eq(p, Vec3::new(5.0, 1.0, 0.0)), "got {:?}", p);
    }

    #[test]
    fn test_perspective_nonzero() {
        let m = perspective(FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);
        assert!(m[0][0] != 0.0);
        assert!(m[1][1] != 0.0);
        assert_eq!(m[2][3], -1.0);
    }

    #[test]
    fn test_look_at_maps_eye_to_origin() {
        let eye = Vec3::new(0.0, 3.0, 6.0);
        let m = look_at(eye, Vec3::ZERO, Vec3::Y);
        assert!(vec_approx_eq(transform_point(&m, eye), Vec3::ZERO));
    }

    #[test]
    fn test_look_at_target_on_negative_z() {
        let eye = Vec3::new(0.0, 0.0, 6.0);
        let m = look_at(eye, Vec3::ZERO, Vec3::Y);
        let t = transform_point(&m, Vec3::ZERO);
        assert!(t.z < 0.0, "target should be in front of the camera: {:?}", t);
    }
}
