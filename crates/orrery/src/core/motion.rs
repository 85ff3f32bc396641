//! Motion model: uniform circular orbits, then straight-line drift.
//!
//! Pure math over the registry, no rendering. f64 throughout; positions
//! are only narrowed to f32 when render buffers are built.
//!
//! There is no gravity here: angular speed is `2π / period`, so one tick
//! advances each planet by `2π · time_step / period` radians.

use std::f64::consts::TAU;

use glam::DVec2;
use serde::Serialize;

use crate::core::bodies::{BodyRegistry, OrbitingBody};

/// System-wide motion mode. Chosen once, when the Sun is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Regime {
    /// Positions are projected from `(orbit_radius, angle)`.
    Orbiting,
    /// Positions integrate a constant per-tick velocity.
    FreeFlight,
}

/// Point on a circle of `orbit_radius` around `center` at `angle` radians.
pub fn orbital_projection(center: DVec2, orbit_radius: f64, angle: f64) -> DVec2 {
    DVec2::new(
        center.x + orbit_radius * angle.cos(),
        center.y + orbit_radius * angle.sin(),
    )
}

/// Radians covered in one tick.
pub fn angular_step(orbital_period: f64, time_step: f64) -> f64 {
    (TAU / orbital_period) * time_step
}

/// One orbital tick: advance the angle, re-project the position.
pub fn advance_orbiting(body: &mut OrbitingBody, center: DVec2, time_step: f64) {
    if !body.present {
        return;
    }
    body.angle += angular_step(body.orbital_period, time_step);
    body.position = orbital_projection(center, body.orbit_radius, body.angle);
}

/// One free-flight tick: constant velocity, no drag, no bounds.
pub fn advance_free_flight(body: &mut OrbitingBody) {
    if !body.present {
        return;
    }
    body.position += body.velocity;
}

/// Convert a body's orbit into a drift velocity.
///
/// The velocity is the finite difference between the projection one
/// tick ahead and the current one, so the body keeps going the way it
/// was heading. The position stays at the current projection.
pub fn release(body: &mut OrbitingBody, center: DVec2, time_step: f64) {
    if !body.present {
        return;
    }
    let current = orbital_projection(center, body.orbit_radius, body.angle);
    let future = orbital_projection(
        center,
        body.orbit_radius,
        body.angle + angular_step(body.orbital_period, time_step),
    );
    body.velocity = future - current;
    body.position = current;
}

/// Advances the registry one tick at a time under the current regime.
#[derive(Debug, Clone)]
pub struct MotionModel {
    center: DVec2,
    time_step: f64,
    regime: Regime,
}

impl MotionModel {
    pub fn new(center: DVec2, time_step: f64) -> Self {
        Self {
            center,
            time_step,
            regime: Regime::Orbiting,
        }
    }

    pub fn regime(&self) -> Regime {
        self.regime
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// One tick over every present body. Paused ticks change nothing.
    pub fn advance(&self, registry: &mut BodyRegistry, paused: bool) {
        if paused {
            return;
        }
        match self.regime {
            Regime::Orbiting => {
                for body in registry.present_mut() {
                    advance_orbiting(body, self.center, self.time_step);
                }
            }
            Regime::FreeFlight => {
                for body in registry.present_mut() {
                    advance_free_flight(body);
                }
            }
        }
    }

    /// Switch to free flight, releasing every present body from orbit.
    /// Returns false (and touches nothing) if already in free flight.
    pub fn detach(&mut self, registry: &mut BodyRegistry) -> bool {
        if self.regime == Regime::FreeFlight {
            return false;
        }
        self.regime = Regime::FreeFlight;
        for body in registry.present_mut() {
            release(body, self.center, self.time_step);
        }
        true
    }
}
