// extensions/mod.rs
//
// Camera behaviour layered on top of the scene registry.
// The registry knows nothing about these; the frame driver wires them in.

pub mod easing;
pub mod focus;

pub use easing::{approach_factor, lerp_vec3};
pub use focus::{FocusController, FocusState, FocusStep};
