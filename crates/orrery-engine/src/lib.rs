pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod extensions;
pub mod input;
pub mod picking;
pub mod renderer;

pub use glam;

// Re-export key types at crate root for convenience
pub use api::config::{FocusPacing, OrreryConfig};
pub use api::driver::{FrameDriver, SimulationContext};
pub use api::types::{BodyDetails, BodyId, RenderHandle, SceneEvent};
pub use assets::manifest::TextureManifest;
pub use assets::textures::{
    LoadProgress, NoTextures, PreloadedTextures, TextureError, TextureLoader, TextureRef,
    TextureSlot,
};
pub use components::attachment::{Attachment, AttachmentDesc, AttachmentKind};
pub use components::body::{Body, BodyDesc, BodyKind};
pub use crate::core::error::SceneError;
pub use crate::core::orbit::{orbital_position, Orbit, Spin};
pub use crate::core::scene::{SceneBuilder, SceneRegistry};
pub use crate::core::time::{FrameTimer, SimClock};
pub use input::pointer::{PointerEvent, Viewport};
pub use input::queue::{InputEvent, InputQueue};
pub use picking::{Ray, RayCaster, RayHit};
pub use renderer::camera::{Camera3D, CameraUniform};
pub use renderer::instance::{InstanceBuffer, NodeInstance};
pub use renderer::traits::{FrameCapture, FrameData, Renderer};

// Extensions
pub use extensions::{FocusController, FocusState, FocusStep};
