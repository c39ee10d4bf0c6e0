//! Hit resolution: from a screen point to the body the user meant.
//!
//! The caster reports raw `(handle, distance)` hits in whatever order it
//! likes. Resolution sorts them nearest first, breaking equal distances by
//! registration order, and returns the owner of the first handle the
//! registry knows. Unknown handles (orbit paths, glow sprites, background
//! stars) are skipped rather than ending the search.

use std::cmp::Ordering;

use glam::Vec2;

use crate::api::types::BodyId;
use crate::core::scene::SceneRegistry;
use crate::picking::caster::{RayCaster, RayHit};
use crate::renderer::camera::Camera3D;

/// Resolve a pick at `ndc` to a body. `None` means "nothing selectable here".
pub fn pick(
    ndc: Vec2,
    camera: &Camera3D,
    caster: &dyn RayCaster,
    registry: &SceneRegistry,
) -> Option<BodyId> {
    let ray = camera.ray_through(ndc)?;
    let hits = caster.cast_ray(&ray);
    resolve_hits(hits, registry)
}

/// Order raw hits and map the first registered one to its owning body.
pub fn resolve_hits(mut hits: Vec<RayHit>, registry: &SceneRegistry) -> Option<BodyId> {
    hits.retain(|h| h.distance.is_finite());
    hits.sort_by(|a, b| compare_hits(a, b, registry));
    hits.iter().find_map(|h| registry.owner_of(h.handle))
}

fn compare_hits(a: &RayHit, b: &RayHit, registry: &SceneRegistry) -> Ordering {
    let order = |h: &RayHit| registry.insertion_index(h.handle).unwrap_or(usize::MAX);
    a.distance
        .total_cmp(&b.distance)
        .then_with(|| order(a).cmp(&order(b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    use crate::api::types::RenderHandle;
    use crate::assets::textures::NoTextures;
    use crate::components::attachment::AttachmentDesc;
    use crate::components::body::BodyDesc;
    use crate::core::scene::SceneBuilder;
    use crate::picking::ray::Ray;

    fn registry() -> SceneRegistry {
        SceneBuilder::new()
            .add(BodyDesc::star("Sun", RenderHandle(10), 5.0))
            .add(BodyDesc::planet("Earth", RenderHandle(20), 1.0, 20.0, 10.0)
                .with_attachment(AttachmentDesc::clouds(RenderHandle(21))))
            .add(BodyDesc::planet("Saturn", RenderHandle(30), 2.0, 80.0, 294.0)
                .with_attachment(AttachmentDesc::rings(RenderHandle(31), 2.5, 4.0)))
            .build(&mut NoTextures)
            .unwrap()
    }

    fn hit(handle: u32, distance: f32) -> RayHit {
        RayHit { handle: RenderHandle(handle), distance }
    }

    struct FixedHits(Vec<RayHit>);

    impl RayCaster for FixedHits {
        fn cast_ray(&self, _ray: &Ray) -> Vec<RayHit> {
            self.0.clone()
        }
    }

    #[test]
    fn nearest_hit_wins() {
        let reg = registry();
        let hits = vec![hit(30, 50.0), hit(20, 12.0), hit(10, 30.0)];
        assert_eq!(resolve_hits(hits, &reg), Some(BodyId(1)));
    }

    #[test]
    fn attachment_resolves_to_owner() {
        let reg = registry();
        assert_eq!(resolve_hits(vec![hit(31, 4.0)], &reg), Some(BodyId(2)));
        assert_eq!(resolve_hits(vec![hit(21, 4.0)], &reg), reg.find_by_name("Earth").map(|b| b.id));
    }

    #[test]
    fn unregistered_handles_are_skipped() {
        let reg = registry();
        let hits = vec![hit(999, 1.0), hit(998, 2.0), hit(30, 9.0)];
        assert_eq!(resolve_hits(hits, &reg), Some(BodyId(2)));
    }

    #[test]
    fn ties_break_by_registration_order() {
        let reg = registry();
        let hits = vec![hit(31, 5.0), hit(20, 5.0)];
        assert_eq!(resolve_hits(hits, &reg), Some(BodyId(1)));
    }

    #[test]
    fn no_hits_means_no_selection() {
        let reg = registry();
        assert_eq!(resolve_hits(Vec::new(), &reg), None);
        assert_eq!(resolve_hits(vec![hit(999, 1.0)], &reg), None);
    }

    #[test]
    fn pick_uses_supplied_caster() {
        let reg = registry();
        let cam = Camera3D::new(Vec3::new(0.0, 0.0, 50.0), Vec3::ZERO, 1.0);
        let caster = FixedHits(vec![hit(999, 0.5), hit(10, 45.0)]);
        assert_eq!(pick(Vec2::ZERO, &cam, &caster, &reg), Some(BodyId(0)));
    }

    #[test]
    fn pick_ring_with_builtin_caster() {
        let reg = registry();
        // Saturn at (80, 0, 0); camera above, looking down at a point on the rings
        let cam = Camera3D::new(Vec3::new(83.0, 40.0, 0.01), Vec3::new(83.0, 0.0, 0.0), 1.0);
        assert_eq!(pick(Vec2::ZERO, &cam, &reg, &reg), reg.find_by_name("Saturn").map(|b| b.id));
    }

    #[test]
    fn pick_empty_space() {
        let reg = registry();
        let cam = Camera3D::new(Vec3::new(0.0, 100.0, 0.01), Vec3::new(0.0, 0.0, 0.0), 1.0);
        assert_eq!(pick(Vec2::new(1.0, 1.0), &cam, &reg, &reg), None);
    }
}
