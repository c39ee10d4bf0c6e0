use glam::{Vec2, Vec3};

/// Input events the orrery core understands.
/// Pushed by the host between frames, drained at the start of the next tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pick at normalized device coordinates.
    Pick { ndc: Vec2 },
    /// Click or tap at client pixel coordinates (origin top-left).
    PointerTap { x: f32, y: f32 },
    /// New simulation speed factor from the speed control.
    SetSpeed { factor: f64 },
    /// Drawing surface resized, in CSS pixels.
    Resize { width: f32, height: f32 },
    /// Detail panel close button.
    DismissDetails,
    /// Camera pose from the host's orbit controls.
    SetCamera { eye: Vec3, target: Vec3 },
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events in arrival order.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
