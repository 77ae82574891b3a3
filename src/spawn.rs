//! Spawn context for particle initialization.
//!
//! Spawner closures receive a [`SpawnContext`] with a per-particle RNG, so
//! initial state can be randomized without manual RNG plumbing. Passing an
//! explicit seed makes every spawn reproducible, which the tests rely on.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::field::{Particle, Viewport};

/// Context provided to spawner functions.
pub struct SpawnContext {
    /// Index of the particle being spawned (0 to count-1).
    pub index: u32,
    /// Total number of particles being spawned.
    pub count: u32,
    /// Viewport bounds at spawn time, in device pixels.
    pub viewport: Viewport,
    rng: SmallRng,
}

impl SpawnContext {
    /// Create a spawn context for one particle.
    ///
    /// With `seed` set, the same seed and index always produce the same
    /// particle. Without it, wall-clock nanos are mixed in so each launch
    /// spawns a different field.
    pub fn new(index: u32, count: u32, viewport: Viewport, seed: Option<u64>) -> Self {
        let base = seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(42)
        });
        // Spread indices across the seed space so neighboring particles
        // don't share low-bit RNG streams.
        let seed = base ^ u64::from(index).wrapping_mul(0x9E37_79B9_7F4A_7C15);

        Self {
            index,
            count,
            viewport,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Normalized progress through the spawn (0.0 to 1.0).
    #[inline]
    pub fn progress(&self) -> f32 {
        self.index as f32 / self.count as f32
    }

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in the given range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    /// Random point inside the viewport.
    pub fn random_in_viewport(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.gen::<f32>() * self.viewport.width,
            self.rng.gen::<f32>() * self.viewport.height,
        )
    }

    /// Random drift velocity, each axis uniform in `-max_speed..max_speed`.
    pub fn drift_velocity(&mut self, max_speed: f32) -> Vec2 {
        Vec2::new(
            self.rng.gen_range(-max_speed..max_speed),
            self.rng.gen_range(-max_speed..max_speed),
        )
    }
}

/// The default spawner: a faint slow-drifting dot somewhere in the viewport.
///
/// Radius is uniform in 0.5..2.0 px, resting opacity uniform in 0.1..0.4,
/// drift up to 0.1 px per frame on each axis.
pub fn ambient_particle(ctx: &mut SpawnContext) -> Particle {
    let base_alpha = ctx.random_range(0.1, 0.4);
    Particle {
        position: ctx.random_in_viewport(),
        velocity: ctx.drift_velocity(0.1),
        radius: ctx.random_range(0.5, 2.0),
        base_alpha,
        alpha: base_alpha,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_context_progress() {
        let ctx = SpawnContext::new(50, 100, Viewport::new(800.0, 600.0), Some(1));
        assert!((ctx.progress() - 0.5).abs() < 0.001);
    }

    #[test]
    fn seeded_spawn_is_deterministic() {
        let viewport = Viewport::new(800.0, 600.0);
        let a = ambient_particle(&mut SpawnContext::new(7, 40, viewport, Some(99)));
        let b = ambient_particle(&mut SpawnContext::new(7, 40, viewport, Some(99)));

        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, b.velocity);
        assert_eq!(a.radius, b.radius);
        assert_eq!(a.base_alpha, b.base_alpha);
    }

    #[test]
    fn ambient_particle_stays_in_documented_ranges() {
        let viewport = Viewport::new(800.0, 600.0);
        for i in 0..200 {
            let p = ambient_particle(&mut SpawnContext::new(i, 200, viewport, Some(5)));
            assert!(p.position.x >= 0.0 && p.position.x <= 800.0);
            assert!(p.position.y >= 0.0 && p.position.y <= 600.0);
            assert!(p.velocity.x.abs() <= 0.1 && p.velocity.y.abs() <= 0.1);
            assert!(p.radius >= 0.5 && p.radius <= 2.0);
            assert!(p.base_alpha >= 0.1 && p.base_alpha <= 0.4);
            assert_eq!(p.alpha, p.base_alpha);
        }
    }
}
