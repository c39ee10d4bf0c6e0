use crate::api::types::RenderHandle;
use crate::assets::textures::TextureSlot;
use crate::core::orbit::Spin;

/// What kind of visual layer an attachment is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttachmentKind {
    /// Flat annulus in the owner's equatorial (XZ) plane.
    Rings { inner: f32, outer: f32 },
    /// Cloud shell slightly above the surface.
    Clouds,
    /// Atmosphere shell above the surface.
    Atmosphere,
}

/// Description of an attachment, supplied at scene construction.
#[derive(Debug, Clone)]
pub struct AttachmentDesc {
    pub kind: AttachmentKind,
    pub handle: RenderHandle,
    /// Self-rotation rate in radians per frame at speed 1. Clamped to ≥ 0.
    pub spin_rate: f64,
    /// Texture name, resolved through the texture loader.
    pub texture: Option<String>,
    /// Fallback color used when the texture is missing.
    pub color: u32,
}

impl AttachmentDesc {
    pub fn rings(handle: RenderHandle, inner: f32, outer: f32) -> Self {
        Self::new(AttachmentKind::Rings { inner, outer }, handle)
    }

    pub fn clouds(handle: RenderHandle) -> Self {
        Self::new(AttachmentKind::Clouds, handle)
    }

    pub fn atmosphere(handle: RenderHandle) -> Self {
        Self::new(AttachmentKind::Atmosphere, handle)
    }

    fn new(kind: AttachmentKind, handle: RenderHandle) -> Self {
        Self {
            kind,
            handle,
            spin_rate: 0.0,
            texture: None,
            color: 0xFFFFFF,
        }
    }

    pub fn with_spin_rate(mut self, rate: f64) -> Self {
        self.spin_rate = rate;
        self
    }

    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.texture = Some(texture.into());
        self
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }
}

/// A visual layer rigidly co-located with its owner body.
/// Translates with the owner, rotates on its own, never selectable.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub kind: AttachmentKind,
    pub handle: RenderHandle,
    pub texture: TextureSlot,
    pub spin: Spin,
}

impl Attachment {
    pub(crate) fn from_desc(desc: &AttachmentDesc, texture: TextureSlot) -> Self {
        Self {
            kind: desc.kind,
            handle: desc.handle,
            texture,
            spin: Spin::new(desc.spin_rate),
        }
    }
}
