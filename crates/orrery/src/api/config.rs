//! Simulation configuration: the body table plus world and timing knobs.
//!
//! `SimConfig::default()` is the reference eight-planet system. A host can
//! replace it with JSON; any top-level field left out keeps its default.

use std::collections::HashSet;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::core::bodies;
use crate::error::{ConfigError, ConfigResult};

/// RGB color (0.0 - 1.0), written as `#RRGGBB` in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from RGB u8 values (0-255).
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> ConfigResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ConfigError::InvalidColor(hex.to_string()))
        };
        Ok(Self::rgb8(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02X}{:02X}{:02X}", byte(self.r), byte(self.g), byte(self.b))
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> ConfigResult<Self> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        color.to_hex()
    }
}

/// The body at the centre of the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentralConfig {
    pub name: String,
    pub color: Color,
    /// Display diameter. Clicks closer than `size / 2` hit the body.
    pub size: f64,
}

/// One orbiting body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub name: String,
    pub color: Color,
    /// Display diameter in world units.
    pub size: f64,
    /// Distance from the centre in world units.
    pub orbit_radius: f64,
    /// Informational distance shown on hover (AU for the reference table).
    pub scaled_distance: f64,
    /// Simulated years per revolution. Must be positive.
    pub orbital_period: f64,
    pub fact: String,
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub world_width: f64,
    pub world_height: f64,
    /// Simulated years added per tick.
    pub time_step: f64,
    /// Real seconds per tick.
    pub fixed_dt: f64,
    /// Most ticks a single slow frame may catch up on.
    pub max_catch_up_ticks: u32,
    /// Letter that toggles pause, either case.
    pub pause_key: char,
    /// Extra hover reach beyond a body's disc.
    pub hover_margin: f64,
    pub star_count: usize,
    pub star_seed: u64,
    pub central: CentralConfig,
    pub bodies: Vec<BodyConfig>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 800.0,
            time_step: 0.01,
            fixed_dt: 1.0 / 60.0,
            max_catch_up_ticks: 10,
            pause_key: 's',
            hover_margin: 5.0,
            star_count: 100,
            star_seed: 42,
            central: bodies::reference_sun(),
            bodies: bodies::reference_planets(),
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Fixed position of the central body.
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.world_width / 2.0, self.world_height / 2.0)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.world_width.is_finite()
            && self.world_height.is_finite()
            && self.world_width > 0.0
            && self.world_height > 0.0)
        {
            return Err(ConfigError::InvalidWorld {
                width: self.world_width,
                height: self.world_height,
            });
        }
        positive_timing("time_step", self.time_step)?;
        positive_timing("fixed_dt", self.fixed_dt)?;
        if self.max_catch_up_ticks == 0 {
            return Err(ConfigError::InvalidTiming {
                field: "max_catch_up_ticks",
                value: 0.0,
            });
        }
        if !self.pause_key.is_ascii_alphabetic() {
            return Err(ConfigError::InvalidPauseKey(self.pause_key));
        }
        non_negative("world", "hover_margin", self.hover_margin)?;
        validate_body_table(&self.central, &self.bodies)
    }
}

/// Checks shared by `SimConfig::validate` and `BodyRegistry::initialize`.
pub(crate) fn validate_body_table(
    central: &CentralConfig,
    orbiting: &[BodyConfig],
) -> ConfigResult<()> {
    let mut names = HashSet::with_capacity(orbiting.len() + 1);

    if central.name.is_empty() {
        return Err(ConfigError::EmptyName);
    }
    non_negative(&central.name, "size", central.size)?;
    names.insert(central.name.as_str());

    for body in orbiting {
        if body.name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if !names.insert(body.name.as_str()) {
            return Err(ConfigError::DuplicateName(body.name.clone()));
        }
        non_negative(&body.name, "size", body.size)?;
        non_negative(&body.name, "orbit_radius", body.orbit_radius)?;
        finite(&body.name, "scaled_distance", body.scaled_distance)?;
        finite(&body.name, "orbital_period", body.orbital_period)?;
        if body.orbital_period <= 0.0 {
            return Err(ConfigError::NonPositivePeriod {
                name: body.name.clone(),
                period: body.orbital_period,
            });
        }
    }
    Ok(())
}

fn finite(name: &str, field: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite {
            name: name.to_string(),
            field,
        })
    }
}

fn non_negative(name: &str, field: &'static str, value: f64) -> ConfigResult<()> {
    finite(name, field, value)?;
    if value < 0.0 {
        return Err(ConfigError::NegativeSize {
            name: name.to_string(),
            field,
            value,
        });
    }
    Ok(())
}

fn positive_timing(field: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidTiming { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SimConfig::default();
        config.validate().unwrap();
        assert_eq!(config.bodies.len(), 8);
        assert_eq!(config.center(), DVec2::new(400.0, 400.0));
    }

    #[test]
    fn color_parses_hex() {
        let c = Color::from_hex("#FF8000").unwrap();
        assert_eq!(c.r, 1.0);
        assert!((c.g - 0.502).abs() < 0.01);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.to_hex(), "#FF8000");

        assert!(Color::from_hex("#FFF").is_err());
        assert!(Color::from_hex("#GG0000").is_err());
    }

    #[test]
    fn color_rejects_signed_channels() {
        assert!(Color::from_hex("#+F+F+F").is_err());
        assert!(Color::from_hex("-F0000").is_err());
        assert!(Color::from_hex("#ff8000").is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SimConfig::from_json(r#"{ "time_step": 0.02 }"#).unwrap();
        assert_eq!(config.time_step, 0.02);
        assert_eq!(config.bodies.len(), 8);
        assert_eq!(config.pause_key, 's');
    }

    #[test]
    fn json_body_table() {
        let json = r##"{
            "central": { "name": "Star", "color": "#FFFFFF", "size": 20 },
            "bodies": [
                { "name": "Rock", "color": "#808080", "size": 4, "orbit_radius": 30,
                  "scaled_distance": 0.5, "orbital_period": 0.3, "fact": "Small." }
            ]
        }"##;
        let config = SimConfig::from_json(json).unwrap();
        assert_eq!(config.central.name, "Star");
        assert_eq!(config.bodies.len(), 1);
        assert_eq!(config.bodies[0].orbit_radius, 30.0);
    }

    #[test]
    fn rejects_non_positive_period() {
        let mut config = SimConfig::default();
        config.bodies[2].orbital_period = 0.0;
        match config.validate() {
            Err(ConfigError::NonPositivePeriod { name, .. }) => assert_eq!(name, "Earth"),
            other => panic!("expected NonPositivePeriod, got {other:?}"),
        }

        config.bodies[2].orbital_period = -1.0;
        assert!(config.validate().is_err());

        config.bodies[2].orbital_period = f64::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::NonFinite { .. })));
    }

    #[test]
    fn rejects_duplicate_and_empty_names() {
        let mut config = SimConfig::default();
        config.bodies[1].name = "Mercury".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::DuplicateName(n)) if n == "Mercury"));

        let mut config = SimConfig::default();
        config.bodies[0].name.clear();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyName)));
    }

    #[test]
    fn rejects_bad_timing_and_world() {
        let mut config = SimConfig::default();
        config.time_step = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTiming { field: "time_step", .. })
        ));

        let mut config = SimConfig::default();
        config.max_catch_up_ticks = 0;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.world_height = -1.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidWorld { .. })));
    }

    #[test]
    fn rejects_bad_pause_key_and_negative_size() {
        let mut config = SimConfig::default();
        config.pause_key = ' ';
        assert!(matches!(config.validate(), Err(ConfigError::InvalidPauseKey(' '))));

        let mut config = SimConfig::default();
        config.bodies[4].size = -3.0;
        assert!(matches!(config.validate(), Err(ConfigError::NegativeSize { field: "size", .. })));
    }

    #[test]
    fn from_json_reports_validation_and_syntax_errors() {
        assert!(matches!(SimConfig::from_json("{"), Err(ConfigError::Json(_))));
        assert!(matches!(
            SimConfig::from_json(r#"{ "fixed_dt": -0.5 }"#),
            Err(ConfigError::InvalidTiming { field: "fixed_dt", .. })
        ));
        let bad_color = r#"{ "central": { "name": "S", "color": "red", "size": 5 } }"#;
        assert!(SimConfig::from_json(bad_color).is_err());
    }
}
