//! Simulation time from absolute wall time.
//!
//! Elapsed time is recomputed from the wall clock every frame instead of being
//! summed from frame deltas, so frame-rate jitter never drifts the orbits.

/// `(now - start) * speed`, in seconds.
#[inline]
pub fn elapsed(now: f64, start: f64, speed: f64) -> f64 {
    (now - start) * speed
}

/// Session clock with a user-controlled speed factor.
///
/// A speed change re-anchors the clock at the current wall time: elapsed time
/// stays continuous and only its future growth rate changes.
#[derive(Debug, Clone)]
pub struct SimClock {
    /// Wall time (seconds) of the current anchor.
    anchor_wall: f64,
    /// Simulation time already elapsed at the anchor.
    anchor_elapsed: f64,
    speed: f64,
    max_speed: f64,
}

impl SimClock {
    pub fn new(start: f64, speed: f64, max_speed: f64) -> Self {
        let max_speed = if max_speed.is_finite() && max_speed > 0.0 { max_speed } else { 1.0 };
        let speed = if speed.is_finite() { speed.clamp(0.0, max_speed) } else { 1.0 };
        Self {
            anchor_wall: start,
            anchor_elapsed: 0.0,
            speed,
            max_speed,
        }
    }

    /// Simulation seconds elapsed at wall time `now`.
    pub fn elapsed(&self, now: f64) -> f64 {
        self.anchor_elapsed + elapsed(now, self.anchor_wall, self.speed)
    }

    /// Current speed factor.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Change the speed factor at wall time `now`.
    /// Clamped to `[0, max_speed]`; non-finite values are ignored.
    /// Returns the speed actually in effect.
    pub fn set_speed(&mut self, now: f64, speed: f64) -> f64 {
        if !speed.is_finite() {
            log::warn!("ignoring non-finite speed factor {speed}");
            return self.speed;
        }
        self.anchor_elapsed = self.elapsed(now);
        self.anchor_wall = now;
        self.speed = speed.clamp(0.0, self.max_speed);
        self.speed
    }
}

/// Wall-clock frame delta tracker for per-frame pacing (focus transitions).
#[derive(Debug, Clone, Default)]
pub struct FrameTimer {
    last: Option<f64>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous call, 0 on the first call.
    /// Backwards steps of the wall clock yield 0.
    pub fn delta(&mut self, now: f64) -> f64 {
        let dt = match self.last {
            Some(prev) => (now - prev).max(0.0),
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }
}
