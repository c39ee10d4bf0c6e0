use serde::Deserialize;

use crate::core::error::SceneError;

/// How focus-transition progress advances each frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FocusPacing {
    /// Progress by real elapsed wall time. Same duration at any refresh rate.
    #[default]
    WallClock,
    /// Legacy pacing: a fixed step of `1 / (fps * duration)` per frame.
    NominalFrameRate { fps: f32 },
}

/// Engine configuration. Every field has a default, so a JSON config only
/// needs the values it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    /// Focus transition duration in seconds.
    pub focus_duration: f32,
    pub focus_pacing: FocusPacing,
    /// Fraction of the remaining distance covered per nominal frame.
    pub approach_fraction: f32,
    /// Frame rate the approach fraction is defined against.
    pub nominal_fps: f32,
    /// Framing distance used for the star, independent of its radius.
    pub star_framing_distance: f32,
    /// Framing distance = radius * framing_scale + framing_offset.
    pub framing_scale: f32,
    pub framing_offset: f32,
    pub initial_speed: f64,
    /// Lowest value offered by the speed control. The clock itself accepts 0.
    pub min_speed: f64,
    pub max_speed: f64,
    /// Orbital period of the reference planet, for converting periods to days.
    pub reference_period: f64,
    pub camera_position: [f32; 3],
    pub camera_target: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
    /// Camera distance limits for orbit controls.
    pub min_distance: f32,
    pub max_distance: f32,
    /// Shell heights above the surface for picking clouds and atmospheres.
    pub cloud_shell: f32,
    pub atmosphere_shell: f32,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            focus_duration: 1.5,
            focus_pacing: FocusPacing::WallClock,
            approach_fraction: 0.05,
            nominal_fps: 60.0,
            star_framing_distance: 15.0,
            framing_scale: 10.0,
            framing_offset: 10.0,
            initial_speed: 1.0,
            min_speed: 0.1,
            max_speed: 5.0,
            reference_period: 10.0,
            camera_position: [0.0, 50.0, 100.0],
            camera_target: [0.0, 0.0, 0.0],
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            min_distance: 10.0,
            max_distance: 300.0,
            cloud_shell: 0.03,
            atmosphere_shell: 0.05,
        }
    }
}

impl OrreryConfig {
    /// Parse and validate a config from a JSON string. Missing fields keep
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the camera and focus maths cannot run with.
    pub fn validate(&self) -> Result<(), SceneError> {
        require(self.focus_duration.is_finite() && self.focus_duration > 0.0, "focus_duration", "must be positive")?;
        if let FocusPacing::NominalFrameRate { fps } = self.focus_pacing {
            require(fps.is_finite() && fps > 0.0, "focus_pacing.fps", "must be positive")?;
        }
        require((0.0..=1.0).contains(&self.approach_fraction), "approach_fraction", "must be within [0, 1]")?;
        require(self.nominal_fps.is_finite() && self.nominal_fps > 0.0, "nominal_fps", "must be positive")?;
        require(self.max_speed.is_finite() && self.max_speed >= 0.0, "max_speed", "must be non-negative")?;
        require(self.fovy > 0.0 && self.fovy < 180.0, "fovy", "must be within (0, 180) degrees")?;
        require(self.znear.is_finite() && self.znear > 0.0, "znear", "must be positive")?;
        require(self.zfar.is_finite() && self.zfar > self.znear, "zfar", "must exceed znear")?;
        require(self.min_distance.is_finite() && self.min_distance >= 0.0, "min_distance", "must be non-negative")?;
        require(self.max_distance.is_finite(), "max_distance", "must be finite")?;
        require(self.min_distance <= self.max_distance, "min_distance", "exceeds max_distance")?;
        Ok(())
    }
}

fn require(ok: bool, field: &'static str, reason: &'static str) -> Result<(), SceneError> {
    if ok {
        Ok(())
    } else {
        Err(SceneError::InvalidConfig { field, reason })
    }
}
