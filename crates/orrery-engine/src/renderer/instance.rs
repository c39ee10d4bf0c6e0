use bytemuck::{Pod, Zeroable};

use crate::assets::textures::TextureSlot;
use crate::components::body::Body;
use crate::core::scene::SceneRegistry;

/// Per-node transform record read by the JS renderer.
/// Must match the TypeScript protocol: 8 floats = 32 bytes stride.
///
/// One record per render handle: every body, then its attachments directly
/// after it. Attachments share their owner's position and carry their own
/// rotation.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct NodeInstance {
    /// Render handle, as f32 (exact below 2^24).
    pub handle: f32,
    /// World-space position.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Self-rotation about local Y in radians, wrapped to `[0, 2π)`.
    pub rotation: f32,
    /// Visual radius of the owning body.
    pub radius: f32,
    /// Host texture id, or -1 when the node uses its fallback color.
    pub texture: f32,
    /// Fallback color 0xRRGGBB, as f32 (exact for 24-bit values).
    pub color: f32,
}

impl NodeInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

fn texture_fields(slot: TextureSlot) -> (f32, f32) {
    let texture = match slot {
        TextureSlot::Loaded(tex) => tex.0 as f32,
        TextureSlot::Fallback(_) => -1.0,
    };
    (texture, slot.tint() as f32)
}

fn push_body(out: &mut Vec<NodeInstance>, body: &Body) {
    let (texture, color) = texture_fields(body.texture);
    out.push(NodeInstance {
        handle: body.handle.0 as f32,
        x: body.world_pos.x,
        y: body.world_pos.y,
        z: body.world_pos.z,
        rotation: body.spin.angle(),
        radius: body.radius,
        texture,
        color,
    });
    for att in &body.attachments {
        let (texture, color) = texture_fields(att.texture);
        out.push(NodeInstance {
            handle: att.handle.0 as f32,
            x: body.world_pos.x,
            y: body.world_pos.y,
            z: body.world_pos.z,
            rotation: att.spin.angle(),
            radius: body.radius,
            texture,
            color,
        });
    }
}

/// Flat buffer of node instances, rebuilt every frame.
pub struct InstanceBuffer {
    pub instances: Vec<NodeInstance>,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(32),
        }
    }

    /// Rewrite the buffer from the registry's current state.
    pub fn fill(&mut self, registry: &SceneRegistry) {
        self.instances.clear();
        for body in registry.iter() {
            push_body(&mut self.instances, body);
        }
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::new()
    }
}
