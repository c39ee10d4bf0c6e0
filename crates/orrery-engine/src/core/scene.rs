use std::collections::HashMap;

use glam::Vec3;

use crate::api::config::OrreryConfig;
use crate::api::types::{BodyDetails, BodyId, RenderHandle};
use crate::assets::textures::{resolve_texture, LoadProgress, TextureLoader};
use crate::components::attachment::{Attachment, AttachmentKind};
use crate::components::body::{Body, BodyDesc, BodyKind};
use crate::core::error::SceneError;
use crate::core::orbit::{Orbit, Spin};
use crate::picking::caster::{RayCaster, RayHit};
use crate::picking::ray::Ray;

/// Collects body descriptions and validates them into a `SceneRegistry`.
///
/// Moons must be added after their parent.
pub struct SceneBuilder {
    descs: Vec<BodyDesc>,
    cloud_shell: f32,
    atmosphere_shell: f32,
}

impl SceneBuilder {
    pub fn new() -> Self {
        let config = OrreryConfig::default();
        Self {
            descs: Vec::new(),
            cloud_shell: config.cloud_shell,
            atmosphere_shell: config.atmosphere_shell,
        }
    }

    /// Take shell heights for cloud and atmosphere picking from a config.
    pub fn with_config(mut self, config: &OrreryConfig) -> Self {
        self.cloud_shell = config.cloud_shell;
        self.atmosphere_shell = config.atmosphere_shell;
        self
    }

    pub fn add(mut self, desc: BodyDesc) -> Self {
        self.descs.push(desc);
        self
    }

    /// Validate every description, resolve textures and build the registry.
    pub fn build(self, loader: &mut dyn TextureLoader) -> Result<SceneRegistry, SceneError> {
        let mut bodies = Vec::with_capacity(self.descs.len());
        let mut by_name = HashMap::with_capacity(self.descs.len());
        let mut handles = HashMap::new();
        let mut progress = LoadProgress::default();

        for desc in self.descs {
            validate(&desc)?;
            if by_name.contains_key(&desc.name) {
                return Err(SceneError::DuplicateName(desc.name));
            }

            let id = BodyId(bodies.len() as u32);
            let parent = match desc.kind {
                BodyKind::Moon => {
                    let parent_name = desc.parent.clone().unwrap_or_default();
                    match by_name.get(&parent_name) {
                        Some(&parent) => Some(parent),
                        None => {
                            return Err(SceneError::UnknownParent {
                                body: desc.name,
                                parent: parent_name,
                            })
                        }
                    }
                }
                _ => None,
            };
            let orbit = match desc.kind {
                BodyKind::Star => None,
                _ => Orbit::new(desc.distance, desc.period),
            };

            register_handle(&mut handles, desc.handle, id)?;
            let mut attachments = Vec::with_capacity(desc.attachments.len());
            for att in &desc.attachments {
                register_handle(&mut handles, att.handle, id)?;
                let texture =
                    resolve_texture(loader, att.texture.as_deref(), att.color, &mut progress);
                attachments.push(Attachment::from_desc(att, texture));
            }
            let texture =
                resolve_texture(loader, desc.texture.as_deref(), desc.color, &mut progress);

            by_name.insert(desc.name.clone(), id);
            bodies.push(Body {
                id,
                name: desc.name,
                kind: desc.kind,
                handle: desc.handle,
                parent,
                orbit,
                radius: desc.radius,
                color: desc.color,
                texture,
                info: desc.info,
                detailed_info: desc.detailed_info,
                spin: Spin::new(desc.spin_rate),
                attachments,
                local_pos: Vec3::ZERO,
                world_pos: Vec3::ZERO,
            });
        }

        log::info!(
            "Scene built: {} bodies, {} render handles, textures {}/{} loaded ({} fallback)",
            bodies.len(),
            handles.len(),
            progress.loaded,
            progress.total,
            progress.fallback,
        );

        let mut registry = SceneRegistry {
            bodies,
            by_name,
            handles,
            cloud_shell: self.cloud_shell,
            atmosphere_shell: self.atmosphere_shell,
            progress,
        };
        registry.update(0.0, 0.0);
        Ok(registry)
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(desc: &BodyDesc) -> Result<(), SceneError> {
    if !desc.radius.is_finite() || desc.radius < 0.0 {
        return Err(SceneError::InvalidRadius {
            body: desc.name.clone(),
            radius: desc.radius,
        });
    }
    if desc.kind == BodyKind::Star {
        return Ok(());
    }
    if !desc.distance.is_finite() || desc.distance < 0.0 {
        return Err(SceneError::InvalidDistance {
            body: desc.name.clone(),
            distance: desc.distance,
        });
    }
    if !desc.period.is_finite() || desc.period <= 0.0 {
        return Err(SceneError::InvalidPeriod {
            body: desc.name.clone(),
            period: desc.period,
        });
    }
    Ok(())
}

fn register_handle(
    handles: &mut HashMap<RenderHandle, HandleEntry>,
    handle: RenderHandle,
    owner: BodyId,
) -> Result<(), SceneError> {
    if handles.contains_key(&handle) {
        return Err(SceneError::DuplicateHandle(handle));
    }
    let order = handles.len();
    handles.insert(handle, HandleEntry { owner, order });
    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct HandleEntry {
    owner: BodyId,
    /// Registration order, used to break picking ties.
    order: usize,
}

/// Every body in the scene, in insertion order, plus the lookup tables built
/// once at construction. Bodies are never added or removed afterwards.
pub struct SceneRegistry {
    bodies: Vec<Body>,
    by_name: HashMap<String, BodyId>,
    handles: HashMap<RenderHandle, HandleEntry>,
    cloud_shell: f32,
    atmosphere_shell: f32,
    progress: LoadProgress,
}

impl SceneRegistry {
    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Body> {
        self.by_name.get(name).and_then(|&id| self.get(id))
    }

    /// The body that owns a render handle. Attachments resolve to their body.
    pub fn owner_of(&self, handle: RenderHandle) -> Option<BodyId> {
        self.handles.get(&handle).map(|e| e.owner)
    }

    /// Position of a handle in registration order.
    pub fn insertion_index(&self, handle: RenderHandle) -> Option<usize> {
        self.handles.get(&handle).map(|e| e.order)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Texture load counters gathered during construction.
    pub fn load_progress(&self) -> LoadProgress {
        self.progress
    }

    /// Recompute every position from `elapsed` and advance every spin by one
    /// frame at `speed`.
    ///
    /// Parents always precede their moons, so a single pass in insertion
    /// order sees each parent's world position already updated.
    pub fn update(&mut self, elapsed: f64, speed: f64) {
        for i in 0..self.bodies.len() {
            let origin = match self.bodies[i].parent {
                Some(parent) => self.bodies[parent.index()].world_pos,
                None => Vec3::ZERO,
            };
            let body = &mut self.bodies[i];
            body.local_pos = body
                .orbit
                .map_or(Vec3::ZERO, |orbit| orbit.position_at(elapsed));
            body.world_pos = origin + body.local_pos;
            body.spin.advance(speed);
            for att in &mut body.attachments {
                att.spin.advance(speed);
            }
        }
    }

    /// Detail-panel payload for a body. Planets also carry their distance
    /// and their period in Earth days.
    pub fn details(&self, id: BodyId, reference_period: f64) -> Option<BodyDetails> {
        let body = self.get(id)?;
        let (distance, period_days) = match (body.kind, body.orbit) {
            (BodyKind::Planet, Some(orbit)) => {
                let days = (reference_period > 0.0)
                    .then(|| orbit.period() / reference_period * 365.0);
                (Some(orbit.distance()), days)
            }
            _ => (None, None),
        };
        Some(BodyDetails {
            id,
            name: body.name.clone(),
            info: body.info.clone(),
            detailed_info: body.detailed_info.clone(),
            distance,
            period_days,
        })
    }
}

/// Built-in CPU caster: bodies, cloud and atmosphere shells as spheres,
/// rings as flat annuli around the owner.
impl RayCaster for SceneRegistry {
    fn cast_ray(&self, ray: &Ray) -> Vec<RayHit> {
        let mut hits = Vec::new();
        for body in &self.bodies {
            if let Some(distance) = ray.intersect_sphere(body.world_pos, body.radius) {
                hits.push(RayHit { handle: body.handle, distance });
            }
            for att in &body.attachments {
                let distance = match att.kind {
                    AttachmentKind::Rings { inner, outer } => {
                        ray.intersect_annulus(body.world_pos, inner, outer)
                    }
                    AttachmentKind::Clouds => {
                        ray.intersect_sphere(body.world_pos, body.radius + self.cloud_shell)
                    }
                    AttachmentKind::Atmosphere => {
                        ray.intersect_sphere(body.world_pos, body.radius + self.atmosphere_shell)
                    }
                };
                if let Some(distance) = distance {
                    hits.push(RayHit { handle: att.handle, distance });
                }
            }
        }
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::textures::{NoTextures, PreloadedTextures, TextureRef};
    use crate::components::attachment::AttachmentDesc;

    fn small_system() -> SceneRegistry {
        SceneBuilder::new()
            .add(BodyDesc::star("Sun", RenderHandle(1), 5.0))
            .add(BodyDesc::planet("Earth", RenderHandle(2), 1.0, 20.0, 10.0)
                .with_attachment(AttachmentDesc::clouds(RenderHandle(3)).with_spin_rate(0.002)))
            .add(BodyDesc::moon("Moon", "Earth", RenderHandle(4), 0.27, 2.0, 2.7))
            .add(BodyDesc::planet("Saturn", RenderHandle(5), 2.0, 80.0, 294.0)
                .with_attachment(AttachmentDesc::rings(RenderHandle(6), 2.5, 4.0)))
            .build(&mut NoTextures)
            .unwrap()
    }

    fn assert_vec3_near(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-3, "{a:?} != {b:?}");
    }

    #[test]
    fn ids_follow_insertion_order() {
        let reg = small_system();
        assert_eq!(reg.len(), 4);
        assert_eq!(reg.find_by_name("Sun").unwrap().id, BodyId(0));
        assert_eq!(reg.find_by_name("Saturn").unwrap().id, BodyId(3));
        assert!(reg.find_by_name("Pluto").is_none());
    }

    #[test]
    fn attachments_map_to_owner() {
        let reg = small_system();
        assert_eq!(reg.owner_of(RenderHandle(3)), Some(BodyId(1)));
        assert_eq!(reg.owner_of(RenderHandle(6)), Some(BodyId(3)));
        assert_eq!(reg.owner_of(RenderHandle(99)), None);
        assert_eq!(reg.insertion_index(RenderHandle(1)), Some(0));
        assert_eq!(reg.insertion_index(RenderHandle(6)), Some(5));
    }

    #[test]
    fn earth_at_half_period() {
        let mut reg = small_system();
        reg.update(5.0, 1.0);
        assert_vec3_near(reg.find_by_name("Earth").unwrap().world_pos, Vec3::new(-20.0, 0.0, 0.0));
        assert_eq!(reg.find_by_name("Sun").unwrap().world_pos, Vec3::ZERO);
    }

    #[test]
    fn moon_follows_parent() {
        let mut reg = small_system();
        reg.update(5.0, 1.0);
        let earth = reg.find_by_name("Earth").unwrap().world_pos;
        let moon = reg.find_by_name("Moon").unwrap();
        assert_vec3_near(moon.world_pos, earth + moon.local_pos);
        assert!((moon.local_pos.length() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn spins_advance_per_update() {
        let mut reg = small_system();
        reg.update(0.0, 2.0);
        reg.update(0.0, 2.0);
        let earth = reg.find_by_name("Earth").unwrap();
        assert!((earth.attachments[0].spin.total() - 0.008).abs() < 1e-12);
    }

    #[test]
    fn zero_speed_freezes_spin() {
        let mut reg = small_system();
        reg.update(1.0, 0.0);
        assert_eq!(reg.find_by_name("Earth").unwrap().attachments[0].spin.total(), 0.0);
    }

    #[test]
    fn rejects_bad_period() {
        for period in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = SceneBuilder::new()
                .add(BodyDesc::planet("Bad", RenderHandle(1), 1.0, 10.0, period))
                .build(&mut NoTextures);
            assert!(matches!(err, Err(SceneError::InvalidPeriod { .. })), "period {period}");
        }
    }

    #[test]
    fn rejects_bad_distance_and_radius() {
        let err = SceneBuilder::new()
            .add(BodyDesc::planet("Bad", RenderHandle(1), 1.0, -3.0, 10.0))
            .build(&mut NoTextures);
        assert!(matches!(err, Err(SceneError::InvalidDistance { .. })));
        let err = SceneBuilder::new()
            .add(BodyDesc::star("Bad", RenderHandle(1), f32::NAN))
            .build(&mut NoTextures);
        assert!(matches!(err, Err(SceneError::InvalidRadius { .. })));
    }

    #[test]
    fn rejects_duplicates() {
        let err = SceneBuilder::new()
            .add(BodyDesc::star("Sun", RenderHandle(1), 5.0))
            .add(BodyDesc::star("Sun", RenderHandle(2), 5.0))
            .build(&mut NoTextures);
        assert!(matches!(err, Err(SceneError::DuplicateName(name)) if name == "Sun"));

        let err = SceneBuilder::new()
            .add(BodyDesc::star("Sun", RenderHandle(1), 5.0))
            .add(BodyDesc::planet("Earth", RenderHandle(2), 1.0, 20.0, 10.0)
                .with_attachment(AttachmentDesc::clouds(RenderHandle(1))))
            .build(&mut NoTextures);
        assert!(matches!(err, Err(SceneError::DuplicateHandle(RenderHandle(1)))));
    }

    #[test]
    fn moon_needs_earlier_parent() {
        let err = SceneBuilder::new()
            .add(BodyDesc::moon("Moon", "Earth", RenderHandle(1), 0.27, 2.0, 2.7))
            .add(BodyDesc::planet("Earth", RenderHandle(2), 1.0, 20.0, 10.0))
            .build(&mut NoTextures);
        assert!(matches!(err, Err(SceneError::UnknownParent { .. })));
    }

    #[test]
    fn textures_resolve_or_fall_back() {
        let mut loader = PreloadedTextures::new();
        loader.insert("earth.jpg", TextureRef(7));
        let reg = SceneBuilder::new()
            .add(BodyDesc::planet("Earth", RenderHandle(1), 1.0, 20.0, 10.0).with_texture("earth.jpg"))
            .add(BodyDesc::planet("Mars", RenderHandle(2), 0.5, 30.0, 18.8)
                .with_color(0xC1440E)
                .with_texture("mars.jpg"))
            .build(&mut loader)
            .unwrap();
        assert!(reg.find_by_name("Earth").unwrap().texture.is_loaded());
        assert_eq!(reg.find_by_name("Mars").unwrap().texture.tint(), 0xC1440E);
        let progress = reg.load_progress();
        assert_eq!((progress.loaded, progress.fallback, progress.total), (1, 1, 2));
    }

    #[test]
    fn details_for_planet_and_star() {
        let reg = small_system();
        let earth = reg.details(BodyId(1), 10.0).unwrap();
        assert_eq!(earth.name, "Earth");
        assert_eq!(earth.distance, Some(20.0));
        assert!((earth.period_days.unwrap() - 365.0).abs() < 1e-9);
        let sun = reg.details(BodyId(0), 10.0).unwrap();
        assert_eq!(sun.distance, None);
        assert_eq!(reg.details(BodyId(2), 10.0).unwrap().period_days, None);
        assert!(reg.details(BodyId(42), 10.0).is_none());
    }

    #[test]
    fn caster_hits_rings_and_bodies() {
        let reg = small_system();
        // Saturn sits at (80, 0, 0) at t = 0; look straight down onto its rings
        let ray = Ray::new(Vec3::new(83.0, 50.0, 0.0), Vec3::NEG_Y).unwrap();
        let hits = reg.cast_ray(&ray);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].handle, RenderHandle(6));

        let ray = Ray::new(Vec3::new(20.0, 0.0, 50.0), Vec3::NEG_Z).unwrap();
        let handles: Vec<_> = reg.cast_ray(&ray).iter().map(|h| h.handle).collect();
        assert!(handles.contains(&RenderHandle(2)));
        assert!(handles.contains(&RenderHandle(3)));
    }
}
