use glam::{Vec2, Vec3};

use crate::api::config::OrreryConfig;
use crate::api::types::{BodyId, SceneEvent};
use crate::core::scene::SceneRegistry;
use crate::core::time::{FrameTimer, SimClock};
use crate::extensions::focus::{FocusController, FocusStep};
use crate::input::pointer::{PointerEvent, Viewport};
use crate::input::queue::{InputEvent, InputQueue};
use crate::picking::caster::RayCaster;
use crate::picking::resolver;
use crate::renderer::camera::Camera3D;
use crate::renderer::instance::InstanceBuffer;
use crate::renderer::traits::{FrameData, Renderer};

/// Mutable session state shared by the per-frame steps.
pub struct SimulationContext {
    pub clock: SimClock,
    pub frame_timer: FrameTimer,
    pub focus: FocusController,
    pub camera: Camera3D,
    pub viewport: Viewport,
    /// Reference planet period, for converting periods to Earth days.
    pub reference_period: f64,
    /// Events produced since the last drain.
    pub events: Vec<SceneEvent>,
}

impl SimulationContext {
    pub fn new(config: &OrreryConfig, viewport: Viewport, start: f64) -> Self {
        let aspect = if viewport.is_valid() { viewport.aspect() } else { 1.0 };
        Self {
            clock: SimClock::new(start, config.initial_speed, config.max_speed),
            frame_timer: FrameTimer::new(),
            focus: FocusController::from_config(config),
            camera: Camera3D::from_config(config, aspect),
            viewport,
            reference_period: config.reference_period,
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: SceneEvent) {
        self.events.push(event);
    }
}

/// Runs one tick of the orrery: input, clock, orbits, focus, then hands the
/// frame to the renderer.
///
/// Input pushed between ticks is queued and applied at the start of the next
/// tick, so a frame never sees a half-applied event.
pub struct FrameDriver {
    registry: SceneRegistry,
    ctx: SimulationContext,
    input: InputQueue,
    instances: InstanceBuffer,
    caster: Option<Box<dyn RayCaster>>,
}

impl FrameDriver {
    pub fn new(registry: SceneRegistry, config: &OrreryConfig, viewport: Viewport, start: f64) -> Self {
        log::info!(
            "Frame driver ready: {} bodies, speed {}, focus {:?}",
            registry.len(),
            config.initial_speed,
            config.focus_pacing,
        );
        Self {
            registry,
            ctx: SimulationContext::new(config, viewport, start),
            input: InputQueue::new(),
            instances: InstanceBuffer::new(),
            caster: None,
        }
    }

    /// Pick against host-supplied geometry instead of the registry's own
    /// spheres and annuli.
    pub fn with_caster(mut self, caster: Box<dyn RayCaster>) -> Self {
        self.caster = Some(caster);
        self
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    pub fn context(&self) -> &SimulationContext {
        &self.ctx
    }

    pub fn camera(&self) -> &Camera3D {
        &self.ctx.camera
    }

    pub fn speed(&self) -> f64 {
        self.ctx.clock.speed()
    }

    pub fn focus_target(&self) -> Option<BodyId> {
        self.ctx.focus.target()
    }

    /// Apply a camera pose right away. The eye is pulled back into the
    /// configured distance range. Hosts that interleave poses with picks
    /// should queue `InputEvent::SetCamera` instead, so a pick resolves
    /// against the pose that was on screen when it was made.
    pub fn set_camera(&mut self, eye: Vec3, target: Vec3) {
        if !eye.is_finite() || !target.is_finite() {
            log::warn!("Ignoring non-finite camera pose");
            return;
        }
        self.ctx.camera.eye = eye;
        self.ctx.camera.target = target;
        self.ctx.camera.clamp_distance();
    }

    /// Take every event emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.ctx.events)
    }

    /// Advance one frame at wall-clock time `now` (seconds).
    pub fn tick(&mut self, now: f64, renderer: &mut dyn Renderer) {
        let dt = self.ctx.frame_timer.delta(now) as f32;

        for event in self.input.drain() {
            self.apply_input(event, now, renderer);
        }

        let elapsed = self.ctx.clock.elapsed(now);
        let speed = self.ctx.clock.speed();
        self.registry.update(elapsed, speed);

        match self.ctx.focus.advance(dt, &self.registry, &mut self.ctx.camera) {
            FocusStep::Finished(target) => self.ctx.emit(SceneEvent::FocusFinished { target }),
            FocusStep::Lost(_) => self.ctx.emit(SceneEvent::HideDetails),
            FocusStep::Moved | FocusStep::Idle => {}
        }

        self.instances.fill(&self.registry);
        renderer.draw(&FrameData {
            nodes: &self.instances.instances,
            camera: &self.ctx.camera,
            elapsed,
            speed,
        });
    }

    fn apply_input(&mut self, event: InputEvent, now: f64, renderer: &mut dyn Renderer) {
        match event {
            InputEvent::Pick { ndc } => {
                if let Some(pointer) = PointerEvent::from_ndc(ndc) {
                    self.pick(pointer.ndc);
                }
            }
            InputEvent::PointerTap { x, y } => {
                if let Some(pointer) = PointerEvent::from_client(x, y, self.ctx.viewport) {
                    self.pick(pointer.ndc);
                }
            }
            InputEvent::SetSpeed { factor } => {
                self.ctx.clock.set_speed(now, factor);
            }
            InputEvent::Resize { width, height } => {
                let viewport = Viewport::new(width, height);
                if !viewport.is_valid() {
                    log::warn!("Ignoring resize to {width}x{height}");
                    return;
                }
                self.ctx.viewport = viewport;
                self.ctx.camera.resize(width, height);
                renderer.resize(width as u32, height as u32);
            }
            InputEvent::DismissDetails => self.ctx.emit(SceneEvent::HideDetails),
            InputEvent::SetCamera { eye, target } => self.set_camera(eye, target),
        }
    }

    fn pick(&mut self, ndc: Vec2) {
        let caster: &dyn RayCaster = match &self.caster {
            Some(caster) => caster.as_ref(),
            None => &self.registry,
        };
        let hit = resolver::pick(ndc, &self.ctx.camera, caster, &self.registry);
        let selected = hit.and_then(|id| {
            let details = self.registry.details(id, self.ctx.reference_period)?;
            let body = self.registry.get(id)?;
            Some((body, details))
        });

        match selected {
            Some((body, details)) => {
                self.ctx.focus.select(body);
                self.ctx.emit(SceneEvent::ShowDetails(details));
                self.ctx.emit(SceneEvent::FocusStarted { target: body.id });
            }
            None => {
                self.ctx.focus.cancel();
                self.ctx.emit(SceneEvent::HideDetails);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::RenderHandle;
    use crate::assets::textures::NoTextures;
    use crate::components::attachment::AttachmentDesc;
    use crate::components::body::BodyDesc;
    use crate::core::scene::SceneBuilder;
    use crate::picking::caster::RayHit;
    use crate::picking::ray::Ray;
    use crate::renderer::traits::FrameCapture;

    fn driver() -> FrameDriver {
        let registry = SceneBuilder::new()
            .add(BodyDesc::star("Sun", RenderHandle(1), 5.0).with_info("A star", "Our star"))
            .add(BodyDesc::planet("Earth", RenderHandle(2), 1.0, 20.0, 10.0)
                .with_attachment(AttachmentDesc::clouds(RenderHandle(3))))
            .add(BodyDesc::moon("Moon", "Earth", RenderHandle(4), 0.27, 2.0, 2.7))
            .add(BodyDesc::planet("Saturn", RenderHandle(5), 2.0, 80.0, 294.0)
                .with_attachment(AttachmentDesc::rings(RenderHandle(6), 2.5, 4.0)))
            .build(&mut NoTextures)
            .unwrap();
        FrameDriver::new(registry, &OrreryConfig::default(), Viewport::new(800.0, 600.0), 0.0)
    }

    fn position(driver: &FrameDriver, name: &str) -> Vec3 {
        driver.registry().find_by_name(name).unwrap().world_pos
    }

    #[test]
    fn earth_half_orbit_after_five_seconds() {
        let mut d = driver();
        let mut capture = FrameCapture::new();
        d.tick(5.0, &mut capture);
        assert!((position(&d, "Earth") - Vec3::new(-20.0, 0.0, 0.0)).length() < 1e-3);
        assert_eq!(capture.frames, 1);
        assert_eq!(capture.elapsed, 5.0);
        // Six records, bodies and attachments: Sun, Earth, clouds, Moon, Saturn, rings
        assert_eq!(capture.node_count(), 6);
    }

    #[test]
    fn moon_stays_near_earth() {
        let mut d = driver();
        let mut capture = FrameCapture::new();
        for i in 0..50 {
            d.tick(i as f64 * 0.37, &mut capture);
            let gap = position(&d, "Moon").distance(position(&d, "Earth"));
            assert!((gap - 2.0).abs() < 1e-3);
        }
    }

    #[test]
    fn ring_click_selects_saturn() {
        let mut d = driver();
        let mut capture = FrameCapture::new();
        d.tick(0.0, &mut capture);
        d.set_camera(Vec3::new(83.0, 40.0, 0.01), Vec3::new(83.0, 0.0, 0.0));
        d.push_input(InputEvent::Pick { ndc: Vec2::ZERO });
        d.tick(0.016, &mut capture);

        let saturn = d.registry().find_by_name("Saturn").unwrap().id;
        assert_eq!(d.focus_target(), Some(saturn));
        let events = d.drain_events();
        match &events[0] {
            SceneEvent::ShowDetails(details) => assert_eq!(details.name, "Saturn"),
            other => panic!("expected ShowDetails, got {other:?}"),
        }
        assert_eq!(events[1], SceneEvent::FocusStarted { target: saturn });
        assert!(d.drain_events().is_empty());
    }

    #[test]
    fn overhead_camera_picks_body_below() {
        let mut d = driver();
        let mut capture = FrameCapture::new();
        d.tick(0.0, &mut capture);
        d.set_camera(Vec3::new(20.0, 30.0, 0.0), Vec3::new(20.0, 0.0, 0.0));
        d.push_input(InputEvent::Pick { ndc: Vec2::ZERO });
        d.tick(0.016, &mut capture);

        let earth = d.registry().find_by_name("Earth").unwrap().id;
        assert_eq!(d.focus_target(), Some(earth));
        let events = d.drain_events();
        assert_eq!(events[1], SceneEvent::FocusStarted { target: earth });
        let uniform = capture.camera.unwrap();
        assert!(uniform.view_proj.iter().flatten().all(|v| v.is_finite()));
    }

    #[test]
    fn empty_click_while_focusing_goes_idle() {
        let mut d = driver();
        let mut capture = FrameCapture::new();
        d.tick(0.0, &mut capture);
        d.set_camera(Vec3::new(83.0, 40.0, 0.01), Vec3::new(83.0, 0.0, 0.0));
        d.push_input(InputEvent::Pick { ndc: Vec2::ZERO });
        d.tick(0.016, &mut capture);
        assert!(d.focus_target().is_some());
        d.drain_events();

        d.set_camera(Vec3::new(0.0, 100.0, 0.01), Vec3::ZERO);
        d.push_input(InputEvent::Pick { ndc: Vec2::new(1.0, 1.0) });
        d.tick(0.032, &mut capture);
        assert_eq!(d.focus_target(), None);
        assert_eq!(d.drain_events(), vec![SceneEvent::HideDetails]);
    }

    #[test]
    fn queued_camera_pose_applies_after_earlier_pick() {
        let mut d = driver();
        let mut capture = FrameCapture::new();
        d.tick(0.0, &mut capture);
        // Looking straight down at empty space between Earth and Saturn
        d.set_camera(Vec3::new(0.0, 100.0, 50.0), Vec3::new(0.0, 0.0, 50.0));
        d.push_input(InputEvent::Pick { ndc: Vec2::ZERO });
        d.push_input(InputEvent::SetCamera {
            eye: Vec3::new(20.0, 30.0, 0.0),
            target: Vec3::new(20.0, 0.0, 0.0),
        });
        d.tick(0.016, &mut capture);

        assert_eq!(d.focus_target(), None);
        assert_eq!(d.drain_events(), vec![SceneEvent::HideDetails]);
        assert_eq!(d.camera().eye, Vec3::new(20.0, 30.0, 0.0));

        d.push_input(InputEvent::Pick { ndc: Vec2::ZERO });
        d.tick(0.032, &mut capture);
        assert_eq!(d.focus_target(), d.registry().find_by_name("Earth").map(|b| b.id));
    }

    #[test]
    fn tap_uses_viewport_for_ndc() {
        let mut d = driver();
        let mut capture = FrameCapture::new();
        d.tick(0.0, &mut capture);
        d.set_camera(Vec3::new(83.0, 40.0, 0.01), Vec3::new(83.0, 0.0, 0.0));
        // Center of the 800x600 surface
        d.push_input(InputEvent::PointerTap { x: 400.0, y: 300.0 });
        d.tick(0.016, &mut capture);
        assert_eq!(d.focus_target(), d.registry().find_by_name("Saturn").map(|b| b.id));
    }

    #[test]
    fn focus_runs_to_completion() {
        let mut d = driver();
        let mut capture = FrameCapture::new();
        d.tick(0.0, &mut capture);
        d.set_camera(Vec3::new(0.0, 40.0, 0.01), Vec3::ZERO);
        d.push_input(InputEvent::Pick { ndc: Vec2::ZERO });
        let mut now = 0.0;
        for _ in 0..100 {
            now += 1.0 / 60.0;
            d.tick(now, &mut capture);
        }
        let sun = BodyId(0);
        let events = d.drain_events();
        assert!(events.contains(&SceneEvent::FocusStarted { target: sun }));
        assert!(events.contains(&SceneEvent::FocusFinished { target: sun }));
        assert_eq!(d.focus_target(), None);
        // Camera looked at the sun and closed most of the gap to 15 units
        assert_eq!(d.camera().target, Vec3::ZERO);
        let dist = d.camera().distance();
        assert!(dist < 25.0 && dist > 15.0, "distance {dist}");
    }

    #[test]
    fn speed_change_keeps_time_continuous() {
        let mut d = driver();
        let mut capture = FrameCapture::new();
        d.tick(4.0, &mut capture);
        d.push_input(InputEvent::SetSpeed { factor: 2.0 });
        d.tick(4.0, &mut capture);
        assert_eq!(capture.elapsed, 4.0);
        d.tick(5.0, &mut capture);
        assert_eq!(capture.elapsed, 6.0);
        assert_eq!(d.speed(), 2.0);

        d.push_input(InputEvent::SetSpeed { factor: 50.0 });
        d.tick(5.0, &mut capture);
        assert_eq!(d.speed(), 5.0);
    }

    #[test]
    fn zero_speed_freezes_orbits() {
        let mut d = driver();
        let mut capture = FrameCapture::new();
        d.push_input(InputEvent::SetSpeed { factor: 0.0 });
        d.tick(1.0, &mut capture);
        let earth = position(&d, "Earth");
        d.tick(3.0, &mut capture);
        assert_eq!(position(&d, "Earth"), earth);
    }

    #[test]
    fn resize_updates_aspect_and_viewport() {
        let mut d = driver();
        let mut capture = FrameCapture::new();
        d.push_input(InputEvent::Resize { width: 1000.0, height: 500.0 });
        d.push_input(InputEvent::Resize { width: 0.0, height: 500.0 });
        d.tick(0.0, &mut capture);
        assert_eq!(d.camera().aspect, 2.0);
        assert_eq!(d.context().viewport, Viewport::new(1000.0, 500.0));
    }

    #[test]
    fn dismiss_hides_details_but_keeps_focus() {
        let mut d = driver();
        let mut capture = FrameCapture::new();
        d.tick(0.0, &mut capture);
        d.set_camera(Vec3::new(0.0, 40.0, 0.01), Vec3::ZERO);
        d.push_input(InputEvent::Pick { ndc: Vec2::ZERO });
        d.tick(0.016, &mut capture);
        d.drain_events();
        d.push_input(InputEvent::DismissDetails);
        d.tick(0.032, &mut capture);
        assert_eq!(d.drain_events(), vec![SceneEvent::HideDetails]);
        assert_eq!(d.focus_target(), Some(BodyId(0)));
    }

    struct AlwaysMoon;

    impl RayCaster for AlwaysMoon {
        fn cast_ray(&self, _ray: &Ray) -> Vec<RayHit> {
            vec![
                RayHit { handle: RenderHandle(500), distance: 1.0 },
                RayHit { handle: RenderHandle(4), distance: 2.0 },
            ]
        }
    }

    #[test]
    fn external_caster_is_used() {
        let mut d = driver().with_caster(Box::new(AlwaysMoon));
        let mut capture = FrameCapture::new();
        d.push_input(InputEvent::Pick { ndc: Vec2::new(0.3, -0.2) });
        d.tick(0.0, &mut capture);
        assert_eq!(d.focus_target(), Some(BodyId(2)));
        let events = d.drain_events();
        match &events[0] {
            SceneEvent::ShowDetails(details) => {
                assert_eq!(details.name, "Moon");
                assert_eq!(details.period_days, None);
            }
            other => panic!("expected ShowDetails, got {other:?}"),
        }
    }

    #[test]
    fn set_camera_clamps_distance() {
        let mut d = driver();
        d.set_camera(Vec3::new(0.0, 0.0, 1000.0), Vec3::ZERO);
        assert!((d.camera().distance() - 300.0).abs() < 1e-3);
        d.set_camera(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO);
        assert!((d.camera().distance() - 10.0).abs() < 1e-3);
    }
}
