//! Construction-time errors.
//!
//! Everything that can go wrong in the core goes wrong while the scene is
//! being built. Once a `SceneRegistry` exists, per-frame paths fail soft.

use std::fmt;

use crate::api::types::RenderHandle;

#[derive(Debug)]
pub enum SceneError {
    /// Orbital period is zero, negative or not finite.
    InvalidPeriod { body: String, period: f64 },
    /// Orbital distance is negative or not finite.
    InvalidDistance { body: String, distance: f64 },
    /// Visual radius is negative or not finite.
    InvalidRadius { body: String, radius: f32 },
    /// Two bodies share a name.
    DuplicateName(String),
    /// A moon names a parent that was not added before it.
    UnknownParent { body: String, parent: String },
    /// A render handle was registered twice.
    DuplicateHandle(RenderHandle),
    /// JSON config or manifest could not be parsed.
    Config(serde_json::Error),
    /// A config value is outside its usable range.
    InvalidConfig { field: &'static str, reason: &'static str },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPeriod { body, period } => {
                write!(f, "{body}: orbital period must be positive and finite, got {period}")
            }
            Self::InvalidDistance { body, distance } => {
                write!(f, "{body}: orbital distance must be non-negative and finite, got {distance}")
            }
            Self::InvalidRadius { body, radius } => {
                write!(f, "{body}: radius must be non-negative and finite, got {radius}")
            }
            Self::DuplicateName(name) => write!(f, "duplicate body name: {name}"),
            Self::UnknownParent { body, parent } => {
                write!(f, "{body}: unknown parent body {parent}")
            }
            Self::DuplicateHandle(handle) => {
                write!(f, "render handle {} registered twice", handle.0)
            }
            Self::Config(e) => write!(f, "config parse error: {e}"),
            Self::InvalidConfig { field, reason } => write!(f, "config field {field}: {reason}"),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_error_names_the_body() {
        let err = SceneError::InvalidPeriod { body: "Mars".into(), period: 0.0 };
        let msg = err.to_string();
        assert!(msg.contains("Mars"), "message was {msg}");
        assert!(msg.contains('0'));
    }

    #[test]
    fn config_error_has_source() {
        let parse = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = SceneError::from(parse);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn invalid_config_names_the_field() {
        let err = SceneError::InvalidConfig { field: "min_distance", reason: "exceeds max_distance" };
        assert_eq!(err.to_string(), "config field min_distance: exceeds max_distance");
    }
}
