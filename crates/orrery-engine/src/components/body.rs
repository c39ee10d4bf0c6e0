use glam::Vec3;

use crate::api::types::{BodyId, RenderHandle};
use crate::assets::textures::TextureSlot;
use crate::components::attachment::{Attachment, AttachmentDesc};
use crate::core::orbit::{Orbit, Spin};

/// Which role a body plays in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Fixed at the origin, no orbit.
    Star,
    /// Orbits the origin.
    Planet,
    /// Orbits its parent's current world position.
    Moon,
}

/// Description of a body, supplied by the scene-construction side.
/// Built with the `star` / `planet` / `moon` constructors and `with_*` methods.
#[derive(Debug, Clone)]
pub struct BodyDesc {
    pub name: String,
    pub kind: BodyKind,
    pub handle: RenderHandle,
    /// Parent body name (moons only).
    pub parent: Option<String>,
    pub distance: f64,
    /// Orbital period in simulation seconds.
    pub period: f64,
    /// Visual radius in scene units.
    pub radius: f32,
    /// Base color as 0xRRGGBB.
    pub color: u32,
    pub texture: Option<String>,
    /// Self-rotation in radians per frame at speed 1.
    pub spin_rate: f64,
    pub info: String,
    pub detailed_info: String,
    pub attachments: Vec<AttachmentDesc>,
}

impl BodyDesc {
    pub fn star(name: impl Into<String>, handle: RenderHandle, radius: f32) -> Self {
        Self::new(name.into(), BodyKind::Star, handle, radius)
    }

    pub fn planet(
        name: impl Into<String>,
        handle: RenderHandle,
        radius: f32,
        distance: f64,
        period: f64,
    ) -> Self {
        let mut desc = Self::new(name.into(), BodyKind::Planet, handle, radius);
        desc.distance = distance;
        desc.period = period;
        desc
    }

    pub fn moon(
        name: impl Into<String>,
        parent: impl Into<String>,
        handle: RenderHandle,
        radius: f32,
        distance: f64,
        period: f64,
    ) -> Self {
        let mut desc = Self::new(name.into(), BodyKind::Moon, handle, radius);
        desc.parent = Some(parent.into());
        desc.distance = distance;
        desc.period = period;
        desc
    }

    fn new(name: String, kind: BodyKind, handle: RenderHandle, radius: f32) -> Self {
        Self {
            name,
            kind,
            handle,
            parent: None,
            distance: 0.0,
            period: 0.0,
            radius,
            color: 0xFFFFFF,
            texture: None,
            spin_rate: 0.0,
            info: String::new(),
            detailed_info: String::new(),
            attachments: Vec::new(),
        }
    }

    // -- Builder pattern --

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.texture = Some(texture.into());
        self
    }

    pub fn with_spin_rate(mut self, rate: f64) -> Self {
        self.spin_rate = rate;
        self
    }

    pub fn with_info(mut self, info: impl Into<String>, detailed: impl Into<String>) -> Self {
        self.info = info.into();
        self.detailed_info = detailed.into();
        self
    }

    pub fn with_attachment(mut self, attachment: AttachmentDesc) -> Self {
        self.attachments.push(attachment);
        self
    }
}

/// A body as held by the scene registry.
///
/// Created once at construction and never destroyed; only the position and
/// spin fields change per frame.
#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub name: String,
    pub kind: BodyKind,
    pub handle: RenderHandle,
    pub parent: Option<BodyId>,
    pub orbit: Option<Orbit>,
    pub radius: f32,
    pub color: u32,
    pub texture: TextureSlot,
    pub info: String,
    pub detailed_info: String,
    pub spin: Spin,
    pub attachments: Vec<Attachment>,
    /// Offset from the parent (or the origin) after the last update.
    pub local_pos: Vec3,
    /// World-space position after the last update.
    pub world_pos: Vec3,
}
