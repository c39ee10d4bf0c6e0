use serde::Serialize;

/// Stable identifier for a body in the scene registry.
/// Dense index in insertion order; never reused during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BodyId(pub u32);

impl BodyId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Opaque handle for a renderable node, owned by the scene-construction side.
/// The renderer reports hits in terms of these handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RenderHandle(pub u32);

/// Read-only payload for the detail panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyDetails {
    pub id: BodyId,
    pub name: String,
    pub info: String,
    pub detailed_info: String,
    /// Distance from the parent in scene units (planets only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Orbital period converted to Earth days (planets only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_days: Option<f64>,
}

/// Events emitted by the core for the UI layer.
/// Collected per tick, drained by the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneEvent {
    /// Show the detail panel for a body.
    ShowDetails(BodyDetails),
    /// Hide the detail panel.
    HideDetails,
    /// A focus transition started toward `target`.
    FocusStarted { target: BodyId },
    /// A focus transition ran to completion.
    FocusFinished { target: BodyId },
}

impl SceneEvent {
    /// Serialize a batch of events for the JS side.
    pub fn to_json(events: &[SceneEvent]) -> Result<String, serde_json::Error> {
        serde_json::to_string(events)
    }
}
