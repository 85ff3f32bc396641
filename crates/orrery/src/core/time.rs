/// Frame clock: turns variable frame times into whole simulation ticks.
/// A tick is one `tick_dt` slice of real time; at `1 / tick_dt` Hz that is
/// exactly one tick per rendered frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    tick_dt: f64,
    max_catch_up: u32,
    /// Real time not yet spent on a tick.
    backlog: f64,
}

// Absorbs f32 frame-time rounding so 1/60 s still yields one whole tick.
const TICK_EPSILON: f64 = 1e-6;

impl FrameClock {
    pub fn new(tick_dt: f64, max_catch_up: u32) -> Self {
        Self {
            tick_dt,
            max_catch_up,
            backlog: 0.0,
        }
    }

    /// Add one frame's elapsed time. Returns the number of ticks due,
    /// never more than `max_catch_up` (a stalled tab does not fast-forward).
    pub fn accumulate(&mut self, frame_dt: f64) -> u32 {
        if !(frame_dt.is_finite() && frame_dt > 0.0) {
            return 0;
        }
        let cap = self.tick_dt * self.max_catch_up as f64;
        self.backlog = (self.backlog + frame_dt).min(cap);
        let ticks = (self.backlog / self.tick_dt + TICK_EPSILON).floor() as u32;
        self.backlog = (self.backlog - ticks as f64 * self.tick_dt).max(0.0);
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_frame_one_tick() {
        let mut clock = FrameClock::new(1.0 / 60.0, 10);
        for _ in 0..120 {
            assert_eq!(clock.accumulate(1.0 / 60.0), 1);
        }
    }

    #[test]
    fn short_frames_accumulate() {
        let mut clock = FrameClock::new(1.0 / 60.0, 10);
        assert_eq!(clock.accumulate(0.008), 0);
        assert_eq!(clock.accumulate(0.010), 1);
    }

    #[test]
    fn long_frame_is_capped() {
        let mut clock = FrameClock::new(1.0 / 60.0, 10);
        assert_eq!(clock.accumulate(1.0), 10);
        assert_eq!(clock.accumulate(0.0), 0);
    }

    #[test]
    fn bogus_frame_times_are_ignored() {
        let mut clock = FrameClock::new(1.0 / 60.0, 10);
        assert_eq!(clock.accumulate(-1.0), 0);
        assert_eq!(clock.accumulate(f64::NAN), 0);
        assert_eq!(clock.accumulate(f64::INFINITY), 0);
        assert_eq!(clock.backlog, 0.0);
    }

    #[test]
    fn remainder_carries_into_next_frame() {
        let mut clock = FrameClock::new(0.01, 10);
        assert_eq!(clock.accumulate(0.025), 2);
        assert!((clock.backlog - 0.005).abs() < 1e-12);
        assert_eq!(clock.accumulate(0.005), 1);
    }
}
