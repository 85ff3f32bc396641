//! Body registry: the Sun, the planets, and the reference body table.
//!
//! The registry owns every body record. Removal only flips `present`;
//! records are never dropped, so indices stay stable for the session.

use glam::DVec2;

use crate::api::config::{self, BodyConfig, CentralConfig, Color};
use crate::core::motion::orbital_projection;
use crate::error::ConfigResult;

/// Visual attributes shared by the Sun and the planets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub color: Color,
    /// Display diameter in world units.
    pub size: f64,
}

impl Appearance {
    /// Pointer hits count when closer than this to the centre.
    pub fn hit_radius(&self) -> f64 {
        self.size / 2.0
    }
}

/// The non-orbiting body at the centre of the system.
#[derive(Debug, Clone)]
pub struct CentralBody {
    pub name: String,
    pub appearance: Appearance,
    /// Fixed at the world centre.
    pub position: DVec2,
    pub present: bool,
}

impl CentralBody {
    /// Whether `point` lands on the body. Always false once removed.
    pub fn contains(&self, point: DVec2) -> bool {
        self.present && point.distance(self.position) < self.appearance.hit_radius()
    }
}

/// A planet. While the Sun is present, `position` is a function of
/// `orbit_radius` and `angle`; afterwards it drifts by `velocity`.
#[derive(Debug, Clone)]
pub struct OrbitingBody {
    pub name: String,
    pub appearance: Appearance,
    pub orbit_radius: f64,
    /// Simulated years per revolution.
    pub orbital_period: f64,
    /// Radians; never normalized.
    pub angle: f64,
    pub position: DVec2,
    /// World units per tick. Zero until the Sun is removed.
    pub velocity: DVec2,
    pub present: bool,
    pub scaled_distance: f64,
    pub fact: String,
}

impl OrbitingBody {
    fn from_config(config: &BodyConfig, center: DVec2) -> Self {
        Self {
            name: config.name.clone(),
            appearance: Appearance {
                color: config.color,
                size: config.size,
            },
            orbit_radius: config.orbit_radius,
            orbital_period: config.orbital_period,
            angle: 0.0,
            position: orbital_projection(center, config.orbit_radius, 0.0),
            velocity: DVec2::ZERO,
            present: true,
            scaled_distance: config.scaled_distance,
            fact: config.fact.clone(),
        }
    }

    /// Whether a click at `point` removes this body.
    pub fn contains(&self, point: DVec2) -> bool {
        self.present && point.distance(self.position) < self.appearance.hit_radius()
    }

    /// Whether `point` hovers this body, with `margin` of extra reach.
    pub fn is_near(&self, point: DVec2, margin: f64) -> bool {
        self.present && point.distance(self.position) < self.appearance.hit_radius() + margin
    }

    /// Where the name label starts: just right of the disc.
    pub fn label_anchor(&self) -> DVec2 {
        self.position + DVec2::new(self.appearance.hit_radius() + 5.0, 0.0)
    }
}

/// Canonical storage for all bodies.
#[derive(Debug, Clone)]
pub struct BodyRegistry {
    sun: CentralBody,
    bodies: Vec<OrbitingBody>,
}

impl BodyRegistry {
    /// Build the registry with every body present and at angle zero.
    /// Fails on a malformed table (e.g. a non-positive orbital period).
    pub fn initialize(
        central: &CentralConfig,
        orbiting: &[BodyConfig],
        center: DVec2,
    ) -> ConfigResult<Self> {
        config::validate_body_table(central, orbiting)?;

        let sun = CentralBody {
            name: central.name.clone(),
            appearance: Appearance {
                color: central.color,
                size: central.size,
            },
            position: center,
            present: true,
        };
        let bodies = orbiting
            .iter()
            .map(|body| OrbitingBody::from_config(body, center))
            .collect();

        Ok(Self { sun, bodies })
    }

    pub fn sun(&self) -> &CentralBody {
        &self.sun
    }

    /// All planet records in configuration order, removed ones included.
    pub fn bodies(&self) -> &[OrbitingBody] {
        &self.bodies
    }

    pub fn get(&self, index: usize) -> Option<&OrbitingBody> {
        self.bodies.get(index)
    }

    pub fn find(&self, name: &str) -> Option<&OrbitingBody> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Present planets in configuration order. Call again each frame.
    pub fn present(&self) -> impl Iterator<Item = &OrbitingBody> + '_ {
        self.bodies.iter().filter(|b| b.present)
    }

    /// Present planets with their registry indices.
    pub fn present_indexed(&self) -> impl Iterator<Item = (usize, &OrbitingBody)> + '_ {
        self.bodies.iter().enumerate().filter(|(_, b)| b.present)
    }

    pub(crate) fn present_mut(&mut self) -> impl Iterator<Item = &mut OrbitingBody> + '_ {
        self.bodies.iter_mut().filter(|b| b.present)
    }

    /// Mark the Sun absent. Returns false if it was already gone.
    pub(crate) fn remove_sun(&mut self) -> bool {
        std::mem::replace(&mut self.sun.present, false)
    }

    /// Mark a planet absent. Returns false if it was already gone or the
    /// index is out of range.
    pub(crate) fn remove(&mut self, index: usize) -> bool {
        match self.bodies.get_mut(index) {
            Some(body) => std::mem::replace(&mut body.present, false),
            None => false,
        }
    }

    /// Number of planet records (present or not).
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

// ── Reference system ─────────────────────────────────────────────────

pub fn reference_sun() -> CentralConfig {
    CentralConfig {
        name: "Sun".to_string(),
        color: Color::rgb8(0xFF, 0xFF, 0x00),
        size: 50.0,
    }
}

/// The eight planets with exaggerated sizes and compressed orbit radii.
/// `scaled_distance` is the real semi-major axis in AU.
pub fn reference_planets() -> Vec<BodyConfig> {
    // (name, color, size, orbit radius, AU, period in years, fact)
    const TABLE: [(&str, [u8; 3], f64, f64, f64, f64, &str); 8] = [
        (
            "Mercury",
            [0xA9, 0xA9, 0xA9],
            6.0,
            50.0,
            0.387,
            0.24,
            "Mercury has no atmosphere, so its surface is scarred by countless craters.",
        ),
        (
            "Venus",
            [0xFF, 0xD7, 0x00],
            10.0,
            80.0,
            0.723,
            0.62,
            "Venus spins backwards and has a day longer than its year!",
        ),
        (
            "Earth",
            [0x00, 0x00, 0xFF],
            12.0,
            110.0,
            1.0,
            1.0,
            "Earth is the only planet known to support life, thanks to its liquid water.",
        ),
        (
            "Mars",
            [0xFF, 0x00, 0x00],
            8.0,
            140.0,
            1.524,
            1.88,
            "Mars hosts the solar system's largest volcano, Olympus Mons.",
        ),
        (
            "Jupiter",
            [0xFF, 0xA5, 0x00],
            30.0,
            200.0,
            5.203,
            11.86,
            "Jupiter's Great Red Spot is a storm that's raged for over 300 years.",
        ),
        (
            "Saturn",
            [0xFF, 0xFF, 0xE0],
            25.0,
            250.0,
            9.539,
            29.46,
            "Saturn's rings are made of ice, dust, and rock, stretching thousands of kilometers.",
        ),
        (
            "Uranus",
            [0xAD, 0xD8, 0xE6],
            18.0,
            300.0,
            19.191,
            84.01,
            "Uranus rolls on its side due to a dramatic tilt, likely from an ancient collision.",
        ),
        (
            "Neptune",
            [0x00, 0x00, 0x8B],
            18.0,
            350.0,
            30.069,
            164.79,
            "Neptune has the strongest winds in the solar system, up to 2,000 km/h.",
        ),
    ];

    TABLE
        .iter()
        .map(|&(name, [r, g, b], size, orbit_radius, au, period, fact)| BodyConfig {
            name: name.to_string(),
            color: Color::rgb8(r, g, b),
            size,
            orbit_radius,
            scaled_distance: au,
            orbital_period: period,
            fact: fact.to_string(),
        })
        .collect()
}
