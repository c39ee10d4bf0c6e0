use glam::Vec3;

/// A half-line in world space. `direction` is always unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Returns `None` for a zero-length or non-finite direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        if !origin.is_finite() {
            return None;
        }
        Some(Self { origin, direction })
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to the nearest intersection with a sphere.
    /// A ray starting inside the sphere hits the far side.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        if radius <= 0.0 {
            return None;
        }
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sqrt_disc = disc.sqrt();
        let near = -b - sqrt_disc;
        if near >= 0.0 {
            return Some(near);
        }
        let far = -b + sqrt_disc;
        (far >= 0.0).then_some(far)
    }

    /// Distance along the ray to a flat annulus lying in the horizontal
    /// plane through `center`, between `inner` and `outer` radii.
    pub fn intersect_annulus(&self, center: Vec3, inner: f32, outer: f32) -> Option<f32> {
        let denom = self.direction.y;
        if denom.abs() < 1e-6 {
            return None;
        }
        let t = (center.y - self.origin.y) / denom;
        if t < 0.0 {
            return None;
        }
        let r = (self.at(t) - center).length();
        (r >= inner && r <= outer).then_some(t)
    }
}
