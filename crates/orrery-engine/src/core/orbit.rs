//! Circular, coplanar orbits. Pure math, no scene dependencies.
//!
//! Periods are artistic scale factors in simulation seconds, not Keplerian.
//! Time and angles stay in f64; positions drop to f32 at the end.

use std::f64::consts::TAU;

use glam::Vec3;

/// Position on a circular orbit in the XZ plane at simulation time `t`.
///
/// `x = d·cos(2πt/P)`, `z = d·sin(2πt/P)`, `y = 0`. Phase zero sits on +X.
/// `period` must be positive; `Orbit::new` enforces that at construction.
#[inline]
pub fn orbital_position(t: f64, distance: f64, period: f64) -> Vec3 {
    let angle = TAU * t / period;
    Vec3::new((distance * angle.cos()) as f32, 0.0, (distance * angle.sin()) as f32)
}

/// Validated orbital parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    distance: f64,
    period: f64,
}

impl Orbit {
    /// Returns `None` if the period is not positive and finite or the
    /// distance is negative or not finite.
    pub fn new(distance: f64, period: f64) -> Option<Self> {
        let period_ok = period.is_finite() && period > 0.0;
        let distance_ok = distance.is_finite() && distance >= 0.0;
        (period_ok && distance_ok).then_some(Self { distance, period })
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    /// Offset from the orbit's center at simulation time `t`.
    #[inline]
    pub fn position_at(&self, t: f64) -> Vec3 {
        orbital_position(t, self.distance, self.period)
    }
}

/// Self-rotation about the local Y axis.
///
/// Grows by `rate * speed` every frame with no coupling to orbital phase.
/// The angle is kept unwrapped; `angle()` wraps it for the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spin {
    rate: f64,
    total: f64,
}

impl Spin {
    /// Negative rates are clamped to zero.
    pub fn new(rate: f64) -> Self {
        Self { rate: rate.max(0.0), total: 0.0 }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Advance by one frame at the given speed factor.
    #[inline]
    pub fn advance(&mut self, speed: f64) {
        self.total += self.rate * speed;
    }

    /// Accumulated, unwrapped rotation in radians.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Rotation wrapped into `[0, 2π)`.
    pub fn angle(&self) -> f32 {
        self.total.rem_euclid(TAU) as f32
    }
}
