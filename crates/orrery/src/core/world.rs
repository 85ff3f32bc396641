//! World: the owned simulation state and its per-frame phase order.
//!
//! Phase order each frame: input events → motion ticks → (host renders).
//! The registry is only written by the controller (during input) and the
//! motion model (during ticks); nothing else holds a mutable reference.

use glam::DVec2;

use crate::api::config::SimConfig;
use crate::api::types::{
    BodyView, FrameView, GameEvent, HoverView, OrbitView, SunView,
    CUSTOM_SET_PAUSED, EVENT_BODY_REMOVED, EVENT_HOVER, EVENT_PAUSE_CHANGED, EVENT_SUN_REMOVED,
};
use crate::core::bodies::{BodyRegistry, OrbitingBody};
use crate::core::motion::{MotionModel, Regime};
use crate::error::ConfigResult;
use crate::input::controller::InteractionController;
use crate::input::queue::InputEvent;
use crate::systems::captions;

pub struct World {
    config: SimConfig,
    registry: BodyRegistry,
    motion: MotionModel,
    controller: InteractionController,
    /// Notifications since the last `take_events`.
    events: Vec<GameEvent>,
    /// Unpaused ticks since construction.
    ticks: u64,
}

impl World {
    pub fn new(config: SimConfig) -> ConfigResult<Self> {
        config.validate()?;
        let center = config.center();
        let registry = BodyRegistry::initialize(&config.central, &config.bodies, center)?;
        let motion = MotionModel::new(center, config.time_step);
        let controller = InteractionController::new(config.pause_key, config.hover_margin);

        log::info!(
            "orrery: {} bodies around {}, time step {} years/tick",
            registry.len(),
            registry.sun().name,
            config.time_step,
        );

        Ok(Self {
            config,
            registry,
            motion,
            controller,
            events: Vec::with_capacity(16),
            ticks: 0,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn regime(&self) -> Regime {
        self.motion.regime()
    }

    pub fn is_paused(&self) -> bool {
        self.controller.is_paused()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    // ── Phases ─────────────────────────────────────────────────────

    /// Apply input in arrival order. Each event is applied whole.
    pub fn apply_input(&mut self, events: &[InputEvent]) {
        for event in events {
            self.handle(event);
        }
    }

    /// One simulation tick. A paused tick changes nothing.
    pub fn advance(&mut self) {
        let paused = self.controller.is_paused();
        self.motion.advance(&mut self.registry, paused);
        if !paused {
            self.ticks += 1;
        }
    }

    /// Run one frame: input first, then `ticks` motion steps, then the
    /// per-frame hover notification.
    ///
    /// The hover event replaces any hover event still pending; only
    /// input-driven events accumulate until `take_events`.
    pub fn frame(&mut self, events: &[InputEvent], ticks: u32) {
        self.apply_input(events);
        for _ in 0..ticks {
            self.advance();
        }
        self.emit_hover();
    }

    fn handle(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key_code } => {
                let Some(key) = char::from_u32(key_code) else {
                    return;
                };
                if self.controller.on_key(key) {
                    log::debug!("pause toggled: paused={}", self.controller.is_paused());
                    self.emit_pause();
                }
            }
            InputEvent::PointerDown { x, y } => {
                let pointer = DVec2::new(x as f64, y as f64);
                let outcome = self
                    .controller
                    .on_pointer_down(pointer, &mut self.registry, &mut self.motion);

                if outcome.sun_removed {
                    log::info!(
                        "{} removed: {} bodies now in free flight",
                        self.registry.sun().name,
                        self.registry.present().count(),
                    );
                    self.events.push(GameEvent::new(EVENT_SUN_REMOVED, 0.0, 0.0));
                }
                for index in outcome.removed {
                    log::info!("{} removed", self.registry.bodies()[index].name);
                    self.events
                        .push(GameEvent::new(EVENT_BODY_REMOVED, index as f32, 0.0));
                }
            }
            InputEvent::PointerMove { x, y } => {
                self.controller.on_pointer_move(DVec2::new(x as f64, y as f64));
            }
            InputEvent::Custom { kind: CUSTOM_SET_PAUSED, a, .. } => {
                if self.controller.set_paused(a != 0.0) {
                    log::debug!("pause set: paused={}", self.controller.is_paused());
                    self.emit_pause();
                }
            }
            InputEvent::Custom { .. } => {}
        }
    }

    fn emit_pause(&mut self) {
        let flag = if self.controller.is_paused() { 1.0 } else { 0.0 };
        self.events.push(GameEvent::new(EVENT_PAUSE_CHANGED, flag, 0.0));
    }

    fn emit_hover(&mut self) {
        let event = match self.controller.hovered(&self.registry) {
            Some((index, body)) => {
                GameEvent::new(EVENT_HOVER, index as f32, body.scaled_distance as f32)
            }
            None => GameEvent::new(EVENT_HOVER, -1.0, 0.0),
        };
        self.events.retain(|e| e.kind != EVENT_HOVER);
        self.events.push(event);
    }

    // ── Queries for the presentation layer ─────────────────────────

    pub fn hovered(&self) -> Option<&OrbitingBody> {
        self.controller.hovered(&self.registry).map(|(_, body)| body)
    }

    pub fn hover_text(&self) -> Option<String> {
        self.hovered().map(captions::hover_caption)
    }

    pub fn instructions(&self) -> Vec<String> {
        captions::instructions(self.config.pause_key)
    }

    /// Drain notifications collected since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// The rendering contract for the current frame.
    pub fn snapshot(&self) -> FrameView {
        let sun = self.registry.sun();
        let sun_view = sun.present.then(|| SunView {
            name: sun.name.clone(),
            color: sun.appearance.color,
            size: sun.appearance.size,
            x: sun.position.x,
            y: sun.position.y,
        });

        let bodies = self
            .registry
            .present_indexed()
            .map(|(index, body)| {
                let label = body.label_anchor();
                BodyView {
                    index,
                    name: body.name.clone(),
                    color: body.appearance.color,
                    size: body.appearance.size,
                    x: body.position.x,
                    y: body.position.y,
                    label_x: label.x,
                    label_y: label.y,
                }
            })
            .collect();

        let center = self.motion.center();
        let orbits = if sun.present {
            self.registry
                .present()
                .map(|body| OrbitView {
                    center_x: center.x,
                    center_y: center.y,
                    radius: body.orbit_radius,
                })
                .collect()
        } else {
            Vec::new()
        };

        let hovered = self
            .controller
            .hovered(&self.registry)
            .map(|(index, body)| HoverView {
                index,
                name: body.name.clone(),
                scaled_distance: body.scaled_distance,
                fact: body.fact.clone(),
                caption: captions::hover_caption(body),
            });

        FrameView {
            paused: self.controller.is_paused(),
            regime: self.motion.regime(),
            sun: sun_view,
            bodies,
            orbits,
            hovered,
        }
    }
}
