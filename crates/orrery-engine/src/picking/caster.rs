use crate::api::types::RenderHandle;
use crate::picking::ray::Ray;

/// One ray intersection reported by a caster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub handle: RenderHandle,
    /// Distance from the ray origin along the ray.
    pub distance: f32,
}

/// Anything that can intersect a world-space ray with renderable nodes.
///
/// Implemented by the scene registry's built-in CPU caster, or by the host
/// renderer when it owns the real geometry. Hits may come back in any order
/// and may include handles the registry does not know about.
pub trait RayCaster {
    fn cast_ray(&self, ray: &Ray) -> Vec<RayHit>;
}
