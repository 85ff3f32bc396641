use orrery::{
    build_body_buffer, ConfigResult, FrameClock, GameEvent, InputEvent, InputQueue, SdfBuffer,
    SimConfig, Starfield, World,
};
#[cfg(feature = "vectors")]
use orrery::OverlayPainter;

/// Wires the simulation into the browser frame loop.
///
/// Each frame: drain input → apply it → run the ticks the clock says are
/// due → rebuild the buffers the host reads.
pub struct Runner {
    world: World,
    input: InputQueue,
    clock: FrameClock,
    bodies: SdfBuffer,
    stars: Starfield,
    #[cfg(feature = "vectors")]
    overlay: OverlayPainter,
    /// Events from the most recent frame.
    events: Vec<GameEvent>,
}

impl Runner {
    pub fn new(config: SimConfig) -> ConfigResult<Self> {
        let clock = FrameClock::new(config.fixed_dt, config.max_catch_up_ticks);
        let stars = Starfield::generate(
            config.star_count,
            config.star_seed,
            config.world_width,
            config.world_height,
        );
        let world = World::new(config)?;

        let mut runner = Self {
            world,
            input: InputQueue::new(),
            clock,
            bodies: SdfBuffer::new(),
            stars,
            #[cfg(feature = "vectors")]
            overlay: OverlayPainter::new(),
            events: Vec::new(),
        };
        runner.rebuild_buffers();
        Ok(runner)
    }

    /// Swap in a new configuration from JSON. On error the current world
    /// keeps running untouched.
    pub fn replace_config(&mut self, json: &str) -> ConfigResult<()> {
        let replacement = SimConfig::from_json(json).and_then(Runner::new);
        match replacement {
            Ok(runner) => {
                *self = runner;
                Ok(())
            }
            Err(err) => {
                log::warn!("configuration rejected: {err}");
                Err(err)
            }
        }
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame of `frame_dt` real seconds.
    pub fn tick(&mut self, frame_dt: f32) {
        let ticks = self.clock.accumulate(frame_dt as f64);
        let pending = self.input.drain();
        self.world.frame(&pending, ticks);
        self.events = self.world.take_events();
        self.rebuild_buffers();
    }

    fn rebuild_buffers(&mut self) {
        build_body_buffer(&self.world, &mut self.bodies);
        #[cfg(feature = "vectors")]
        self.overlay.paint(&self.world, &self.stars);
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn stars(&self) -> &Starfield {
        &self.stars
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    // ---- Pointer accessors for host-side buffer reads ----

    pub fn sdf_instances_ptr(&self) -> *const f32 {
        self.bodies.instances_ptr()
    }

    pub fn sdf_instance_count(&self) -> u32 {
        self.bodies.instance_count() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.events.len() as u32
    }

    #[cfg(feature = "vectors")]
    pub fn overlay(&self) -> &OverlayPainter {
        &self.overlay
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.overlay.vertices_ptr()
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertex_count(&self) -> u32 {
        self.overlay.vertex_count() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.world.config().world_width as f32
    }

    pub fn world_height(&self) -> f32 {
        self.world.config().world_height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery::{Regime, EVENT_BODY_REMOVED, EVENT_HOVER, EVENT_SUN_REMOVED};

    const FRAME: f32 = 1.0 / 60.0;

    fn runner() -> Runner {
        Runner::new(SimConfig::default()).unwrap()
    }

    #[test]
    fn buffers_ready_before_first_tick() {
        let r = runner();
        assert_eq!(r.sdf_instance_count(), 9);
        assert_eq!(r.world_width(), 800.0);
        assert_eq!(r.stars().len(), 100);
    }

    #[test]
    fn one_tick_per_frame() {
        let mut r = runner();
        for _ in 0..25 {
            r.tick(FRAME);
        }
        assert_eq!(r.world().ticks(), 25);
        let earth = r.world().registry().find("Earth").unwrap();
        assert!((earth.position.x - 400.0).abs() < 1e-6);
        assert!((earth.position.y - 510.0).abs() < 1e-6);
    }

    #[test]
    fn queued_input_lands_at_next_tick() {
        let mut r = runner();
        r.push_input(InputEvent::PointerDown { x: 400.0, y: 400.0 });
        // Nothing happens until the frame runs.
        assert!(r.world().registry().sun().present);

        r.tick(FRAME);
        assert_eq!(r.world().regime(), Regime::FreeFlight);
        assert_eq!(r.events()[0].kind, EVENT_SUN_REMOVED);
        assert_eq!(r.sdf_instance_count(), 8);

        r.push_input(InputEvent::PointerDown { x: 450.0, y: 400.0 });
        r.tick(0.0);
        // Mercury drifted one tick already, so the old spot misses.
        assert!(r.events().iter().all(|e| e.kind != EVENT_BODY_REMOVED));
        assert_eq!(r.events().last().unwrap().kind, EVENT_HOVER);
        assert_eq!(r.game_events_len() as usize, r.events().len());
    }

    #[test]
    fn bad_config_keeps_current_world() {
        let mut r = runner();
        r.tick(FRAME);
        assert!(r.replace_config(r#"{ "time_step": -1 }"#).is_err());
        assert_eq!(r.world().ticks(), 1);

        r.replace_config(r#"{ "star_count": 5, "bodies": [] }"#).unwrap();
        assert_eq!(r.world().ticks(), 0);
        assert_eq!(r.stars().len(), 5);
        assert_eq!(r.sdf_instance_count(), 1);
    }

    #[cfg(feature = "vectors")]
    #[test]
    fn overlay_is_painted() {
        let r = runner();
        assert!(r.vector_vertex_count() > 6);
    }
}
