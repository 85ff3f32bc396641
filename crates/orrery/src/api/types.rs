use bytemuck::{Pod, Zeroable};
use serde::Serialize;

use crate::api::config::Color;
use crate::core::motion::Regime;

// ── Custom input kinds from UI buttons ───────────────────────────────

/// Set pause to `a != 0`. Unlike the pause key, this is idempotent.
pub const CUSTOM_SET_PAUSED: u32 = 1;

// ── Game event kinds to the host ─────────────────────────────────────

/// a = 1.0 if now paused, else 0.0.
pub const EVENT_PAUSE_CHANGED: f32 = 1.0;
/// Emitted once, when the Sun is clicked away.
pub const EVENT_SUN_REMOVED: f32 = 2.0;
/// a = registry index of the removed planet.
pub const EVENT_BODY_REMOVED: f32 = 3.0;
/// Every frame. a = hovered index or -1.0, b = its scaled distance.
pub const EVENT_HOVER: f32 = 4.0;

/// A notification from the simulation to the host UI.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32, b: f32) -> Self {
        Self { kind, a, b, c: 0.0 }
    }
}

// ── Per-frame view for the presentation layer ────────────────────────

/// Everything a renderer needs for one frame, serialized to JSON for
/// hosts that draw text and shapes themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameView {
    pub paused: bool,
    pub regime: Regime,
    pub sun: Option<SunView>,
    /// Present planets in registry order.
    pub bodies: Vec<BodyView>,
    /// Orbit paths; empty once the Sun is gone.
    pub orbits: Vec<OrbitView>,
    pub hovered: Option<HoverView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunView {
    pub name: String,
    pub color: Color,
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyView {
    pub index: usize,
    pub name: String,
    pub color: Color,
    pub size: f64,
    pub x: f64,
    pub y: f64,
    pub label_x: f64,
    pub label_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitView {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverView {
    pub index: usize,
    pub name: String,
    pub scaled_distance: f64,
    pub fact: String,
    /// Ready-to-draw info panel text.
    pub caption: String,
}

impl FrameView {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
