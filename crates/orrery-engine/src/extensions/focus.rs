// extensions/focus.rs
//
// Camera focus transitions. Picking a body starts a timed fly-to that
// re-reads the target's position every frame, so the camera chases a moving
// planet rather than the spot it occupied when clicked.
//
// Usage:
//   let mut focus = FocusController::from_config(&config);
//   focus.select(body);
//   let step = focus.advance(dt, &registry, &mut camera);

use glam::Vec3;

use crate::api::config::{FocusPacing, OrreryConfig};
use crate::api::types::BodyId;
use crate::components::body::{Body, BodyKind};
use crate::core::scene::SceneRegistry;
use crate::renderer::camera::Camera3D;
use super::easing::{approach_factor, lerp_vec3};

/// Where the controller is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusState {
    Idle,
    Focusing {
        target: BodyId,
        /// Normalized progress in `[0, 1)`.
        progress: f32,
        /// Framing distance from the target.
        distance: f32,
    },
}

/// Outcome of one `advance` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusStep {
    /// Nothing to do.
    Idle,
    /// Camera moved toward the target.
    Moved,
    /// The transition completed this frame. The camera was not moved.
    Finished(BodyId),
    /// The target vanished from the registry; focus dropped.
    Lost(BodyId),
}

pub struct FocusController {
    state: FocusState,
    duration: f32,
    pacing: FocusPacing,
    approach_fraction: f32,
    nominal_fps: f32,
    star_framing_distance: f32,
    framing_scale: f32,
    framing_offset: f32,
}

impl FocusController {
    pub fn from_config(config: &OrreryConfig) -> Self {
        Self {
            state: FocusState::Idle,
            duration: config.focus_duration,
            pacing: config.focus_pacing,
            approach_fraction: config.approach_fraction,
            nominal_fps: config.nominal_fps,
            star_framing_distance: config.star_framing_distance,
            framing_scale: config.framing_scale,
            framing_offset: config.framing_offset,
        }
    }

    pub fn state(&self) -> FocusState {
        self.state
    }

    pub fn target(&self) -> Option<BodyId> {
        match self.state {
            FocusState::Focusing { target, .. } => Some(target),
            FocusState::Idle => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, FocusState::Focusing { .. })
    }

    /// How far from a body the camera settles. The star uses a fixed
    /// distance; everything else scales with its radius.
    pub fn framing_distance(&self, body: &Body) -> f32 {
        match body.kind {
            BodyKind::Star => self.star_framing_distance,
            _ => body.radius * self.framing_scale + self.framing_offset,
        }
    }

    /// Start (or restart) a transition toward `body`, superseding any
    /// transition in flight.
    pub fn select(&mut self, body: &Body) {
        let distance = self.framing_distance(body);
        log::debug!("Focus -> {} (framing distance {distance})", body.name);
        self.state = FocusState::Focusing {
            target: body.id,
            progress: 0.0,
            distance,
        };
    }

    pub fn cancel(&mut self) {
        if let FocusState::Focusing { target, .. } = self.state {
            log::debug!("Focus on {target:?} cancelled");
        }
        self.state = FocusState::Idle;
    }

    fn progress_step(&self, dt: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        match self.pacing {
            FocusPacing::WallClock => dt.max(0.0) / self.duration,
            FocusPacing::NominalFrameRate { fps } => 1.0 / (fps.max(1.0) * self.duration),
        }
    }

    fn approach(&self, dt: f32) -> f32 {
        match self.pacing {
            FocusPacing::WallClock => approach_factor(self.approach_fraction, dt, self.nominal_fps),
            FocusPacing::NominalFrameRate { .. } => self.approach_fraction.clamp(0.0, 1.0),
        }
    }

    /// Advance one frame of `dt` wall-clock seconds.
    pub fn advance(&mut self, dt: f32, registry: &SceneRegistry, camera: &mut Camera3D) -> FocusStep {
        let FocusState::Focusing { target, progress, distance } = self.state else {
            return FocusStep::Idle;
        };
        let Some(body) = registry.get(target) else {
            log::warn!("Focus target {target:?} no longer in the scene");
            self.state = FocusState::Idle;
            return FocusStep::Lost(target);
        };

        let progress = progress + self.progress_step(dt);
        if progress >= 1.0 {
            log::debug!("Focus on {} finished", body.name);
            self.state = FocusState::Idle;
            return FocusStep::Finished(target);
        }
        self.state = FocusState::Focusing { target, progress, distance };

        let target_pos = body.world_pos;
        let dir = (camera.eye - target_pos).try_normalize().unwrap_or(Vec3::Z);
        let desired = target_pos + dir * distance;
        camera.eye = lerp_vec3(camera.eye, desired, self.approach(dt));
        camera.target = target_pos;
        FocusStep::Moved
    }
}
