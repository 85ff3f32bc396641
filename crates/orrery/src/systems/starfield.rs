//! Background stars at fixed pseudo-random positions.

use glam::DVec2;

/// Seedable pseudo-random number generator (xorshift64).
/// Deterministic, so the same seed always paints the same sky.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Star positions, generated once per world.
#[derive(Debug, Clone, Default)]
pub struct Starfield {
    stars: Vec<DVec2>,
}

impl Starfield {
    /// `count` stars spread uniformly over a `width` × `height` world.
    pub fn generate(count: usize, seed: u64, width: f64, height: f64) -> Self {
        let mut rng = Rng::new(seed);
        let stars = (0..count)
            .map(|_| DVec2::new(rng.next_f64() * width, rng.next_f64() * height))
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[DVec2] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_deterministic() {
        let mut rng1 = Rng::new(42);
        let mut rng2 = Rng::new(42);
        for _ in 0..10 {
            assert_eq!(rng1.next_f64(), rng2.next_f64());
        }
    }

    #[test]
    fn rng_zero_seed_handled() {
        let mut rng = Rng::new(0);
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v));
    }

    #[test]
    fn stars_stay_inside_world() {
        let field = Starfield::generate(100, 7, 800.0, 600.0);
        assert_eq!(field.len(), 100);
        for s in field.stars() {
            assert!(s.x >= 0.0 && s.x < 800.0);
            assert!(s.y >= 0.0 && s.y < 600.0);
        }
        assert_eq!(field.stars(), Starfield::generate(100, 7, 800.0, 600.0).stars());
        assert!(Starfield::generate(0, 7, 800.0, 600.0).is_empty());
    }
}
