// extensions/easing.rs
//
// Interpolation helpers for camera motion.
// No dependencies on bodies or the registry, just math.

use glam::Vec3;

/// Linear interpolation between two points.
#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Per-frame approach factor that covers `fraction` of the remaining gap once
/// per nominal frame, scaled to an arbitrary `dt`.
///
/// `1 - (1 - fraction)^(dt * fps)`. With `dt = 1 / fps` this is `fraction`.
#[inline]
pub fn approach_factor(fraction: f32, dt: f32, fps: f32) -> f32 {
    if dt <= 0.0 {
        return 0.0;
    }
    let keep = (1.0 - fraction).clamp(0.0, 1.0);
    (1.0 - keep.powf(dt * fps)).clamp(0.0, 1.0)
}
