use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::api::config::OrreryConfig;
use crate::picking::ray::Ray;

/// Perspective camera: eye, look-at target and projection parameters.
/// Y is up; orbits lie in the XZ plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera3D {
    /// Eye position in world space.
    pub eye: Vec3,
    /// Look-at target in world space.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
    /// Eye-to-target distance limits.
    pub min_distance: f32,
    pub max_distance: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 3],
    pub aspect: f32,
    pub target: [f32; 3],
    pub fovy: f32,
}

impl Camera3D {
    pub fn new(eye: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            eye,
            target,
            fovy: 75.0,
            aspect,
            znear: 0.1,
            zfar: 1000.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
        }
    }

    pub fn from_config(config: &OrreryConfig, aspect: f32) -> Self {
        Self {
            eye: Vec3::from_array(config.camera_position),
            target: Vec3::from_array(config.camera_target),
            fovy: config.fovy,
            aspect,
            znear: config.znear,
            zfar: config.zfar,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
        }
    }

    /// Right-handed look-at view. When looking straight up or down the world
    /// up axis is parallel to the view line, so screen-up switches to -Z
    /// (looking down) or +Z (looking up).
    pub fn view_matrix(&self) -> Mat4 {
        let Some(forward) = (self.target - self.eye).try_normalize() else {
            return Mat4::look_to_rh(self.eye, Vec3::NEG_Z, Vec3::Y);
        };
        Mat4::look_to_rh(self.eye, forward, up_for(forward))
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy.to_radians(), self.aspect, self.znear, self.zfar)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_proj().to_cols_array_2d(),
            eye: self.eye.to_array(),
            aspect: self.aspect,
            target: self.target.to_array(),
            fovy: self.fovy,
        }
    }

    /// Update the aspect ratio after a viewport resize.
    /// Degenerate sizes leave the camera untouched.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
            self.aspect = width / height;
        }
    }

    /// Eye-to-target distance.
    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }

    /// Pull the eye along its view line back into `[min_distance, max_distance]`.
    /// The upper limit wins if the two are inverted.
    pub fn clamp_distance(&mut self) {
        let offset = self.eye - self.target;
        let dist = offset.length();
        if dist <= f32::EPSILON {
            return;
        }
        let clamped = dist.max(self.min_distance).min(self.max_distance);
        if clamped != dist {
            self.eye = self.target + offset * (clamped / dist);
        }
    }

    /// World-space ray from the eye through a point in normalized device
    /// coordinates (x right, y up, both in [-1, 1]).
    ///
    /// Unprojects the matching near- and far-plane points. Returns `None` if
    /// the view-projection matrix is singular.
    pub fn ray_through(&self, ndc: Vec2) -> Option<Ray> {
        let view_proj = self.view_proj();
        if !(view_proj.determinant().abs() >= f32::EPSILON * f32::EPSILON) {
            return None;
        }
        let inverse = view_proj.inverse();
        // glam's perspective_rh maps depth to [0, 1]
        let near = unproject(inverse, Vec4::new(ndc.x, ndc.y, 0.0, 1.0))?;
        let far = unproject(inverse, Vec4::new(ndc.x, ndc.y, 1.0, 1.0))?;
        Ray::new(near, far - near)
    }
}

fn up_for(forward: Vec3) -> Vec3 {
    if forward.cross(Vec3::Y).length_squared() > 1e-6 {
        Vec3::Y
    } else if forward.y < 0.0 {
        Vec3::NEG_Z
    } else {
        Vec3::Z
    }
}

fn unproject(inverse: Mat4, clip: Vec4) -> Option<Vec3> {
    let world = inverse * clip;
    if !(world.w.abs() >= f32::EPSILON) {
        return None;
    }
    Some(world.truncate() / world.w)
}
