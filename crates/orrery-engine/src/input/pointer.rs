use glam::Vec2;

/// Drawing-surface size in CSS pixels, used to map client coordinates to NDC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Positive and finite in both dimensions.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// A pick location in normalized device coordinates: x right, y up, `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub ndc: Vec2,
}

impl PointerEvent {
    /// Clamps into `[-1, 1]`. Non-finite input yields `None`.
    pub fn from_ndc(ndc: Vec2) -> Option<Self> {
        ndc.is_finite().then(|| Self {
            ndc: ndc.clamp(Vec2::NEG_ONE, Vec2::ONE),
        })
    }

    /// Convert a client-pixel position (origin top-left, y down).
    ///
    /// `x / w * 2 - 1`, `-(y / h) * 2 + 1`. Positions outside the surface
    /// clamp to its edge. A degenerate viewport yields `None`.
    pub fn from_client(x: f32, y: f32, viewport: Viewport) -> Option<Self> {
        if !viewport.is_valid() {
            log::warn!(
                "Dropping pointer event: viewport is {}x{}",
                viewport.width,
                viewport.height
            );
            return None;
        }
        Self::from_ndc(Vec2::new(
            x / viewport.width * 2.0 - 1.0,
            -(y / viewport.height) * 2.0 + 1.0,
        ))
    }
}
