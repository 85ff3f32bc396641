//! Interaction controller: pause toggling, click removal, hover lookup.
//!
//! Two independent state machines: Running/Paused (toggles freely) and
//! the Sun's presence (Intact → Detached, absorbing). Only the controller
//! removes bodies; hover is a read-only query.

use glam::DVec2;

use crate::core::bodies::{BodyRegistry, OrbitingBody};
use crate::core::motion::MotionModel;

/// What a single pointer press removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClickOutcome {
    pub sun_removed: bool,
    /// Registry indices of planets removed, in registry order.
    pub removed: Vec<usize>,
}

impl ClickOutcome {
    pub fn is_empty(&self) -> bool {
        !self.sun_removed && self.removed.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct InteractionController {
    paused: bool,
    pause_key: char,
    hover_margin: f64,
    /// Last known pointer position, if the pointer has been seen.
    pointer: Option<DVec2>,
}

impl InteractionController {
    pub fn new(pause_key: char, hover_margin: f64) -> Self {
        Self {
            paused: false,
            pause_key,
            hover_margin,
            pointer: None,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pointer(&self) -> Option<DVec2> {
        self.pointer
    }

    /// Flip pause if `key` is the pause key (either case). Returns true
    /// when the flag flipped; every other key is ignored.
    pub fn on_key(&mut self, key: char) -> bool {
        if key.eq_ignore_ascii_case(&self.pause_key) {
            self.paused = !self.paused;
            true
        } else {
            false
        }
    }

    /// Set pause explicitly. Returns true if the flag changed.
    pub fn set_paused(&mut self, paused: bool) -> bool {
        std::mem::replace(&mut self.paused, paused) != paused
    }

    /// Remove whatever lies under the pointer.
    ///
    /// The Sun is tested first; hitting it switches every present planet
    /// to free flight before any planet is tested. Then every planet whose
    /// disc contains the pointer is removed, with no early exit, so
    /// overlapping discs all go in one click.
    pub fn on_pointer_down(
        &mut self,
        pointer: DVec2,
        registry: &mut BodyRegistry,
        motion: &mut MotionModel,
    ) -> ClickOutcome {
        self.pointer = Some(pointer);
        let mut outcome = ClickOutcome::default();

        if registry.sun().contains(pointer) && registry.remove_sun() {
            motion.detach(registry);
            outcome.sun_removed = true;
        }

        for index in 0..registry.len() {
            let hit = registry.bodies()[index].contains(pointer);
            if hit && registry.remove(index) {
                outcome.removed.push(index);
            }
        }
        outcome
    }

    /// Remember where the pointer is. Hover is evaluated per frame from
    /// this position, since bodies move under a still cursor.
    pub fn on_pointer_move(&mut self, pointer: DVec2) {
        self.pointer = Some(pointer);
    }

    /// The hovered planet at the last pointer position, if any.
    pub fn hovered<'a>(&self, registry: &'a BodyRegistry) -> Option<(usize, &'a OrbitingBody)> {
        hovered_body(registry, self.pointer?, self.hover_margin)
    }
}

/// Hover lookup: a present planet within `hit_radius + margin` of the
/// pointer. When several qualify, the last in registry order wins.
pub fn hovered_body(
    registry: &BodyRegistry,
    pointer: DVec2,
    margin: f64,
) -> Option<(usize, &OrbitingBody)> {
    registry
        .present_indexed()
        .filter(|(_, body)| body.is_near(pointer, margin))
        .last()
}
