pub mod pointer;
pub mod queue;

pub use pointer::{PointerEvent, Viewport};
pub use queue::{InputEvent, InputQueue};
