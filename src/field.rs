//! The particle field: simulation state and per-frame physics.
//!
//! Everything here runs on the CPU. [`ParticleField::tick`] advances exactly
//! one frame and is synchronous, so tests can drive the field without a
//! window, a GPU, or wall-clock timing.

use glam::Vec2;

use crate::surface::Surface;

/// Number of particles when none is configured.
pub const DEFAULT_PARTICLE_COUNT: u32 = 40;

/// Pointer repulsion radius in device pixels.
pub const REPULSION_RADIUS: f32 = 250.0;

/// Displacement applied right at the pointer, decaying linearly to zero at
/// [`REPULSION_RADIUS`].
pub const REPULSION_STRENGTH: f32 = 1.5;

/// Maximum opacity boost a particle gains when the pointer sits on top of it.
pub const ALPHA_BOOST: f32 = 0.5;

/// A single drifting dot.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Position in device pixels.
    pub position: Vec2,
    /// Drift velocity in pixels per frame.
    pub velocity: Vec2,
    /// Dot radius in device pixels.
    pub radius: f32,
    /// Resting opacity, fixed at spawn.
    pub base_alpha: f32,
    /// Current opacity. Stays within `base_alpha..=base_alpha + ALPHA_BOOST`.
    pub alpha: f32,
}

/// Window bounds in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The full particle set plus the shared state `tick` reads: viewport
/// bounds, last-known pointer position, and the reduced-motion flag.
///
/// Pointer and viewport updates arrive as discrete events between frames;
/// both the handlers and `tick` run on the event-loop thread, so no
/// synchronization is involved.
pub struct ParticleField {
    particles: Vec<Particle>,
    viewport: Viewport,
    pointer: Option<Vec2>,
    reduced_motion: bool,
}

impl ParticleField {
    pub fn new(particles: Vec<Particle>, viewport: Viewport, reduced_motion: bool) -> Self {
        Self {
            particles,
            viewport,
            pointer: None,
            reduced_motion,
        }
    }

    /// Replace the viewport bounds after a resize.
    ///
    /// Particles keep their positions and velocities; only the walls move.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Record the pointer position in device pixels.
    pub fn pointer_moved(&mut self, position: Vec2) {
        self.pointer = Some(position);
    }

    /// Forget the pointer after it leaves the window.
    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance every particle by one frame.
    ///
    /// Order per particle: integrate velocity, reflect off the walls, then
    /// apply pointer repulsion. Reflection flips the velocity component
    /// without clamping the position, so a particle may sit slightly outside
    /// the viewport for a frame before drifting back in.
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.position += p.velocity;

            if p.position.x < 0.0 || p.position.x > self.viewport.width {
                p.velocity.x = -p.velocity.x;
            }
            if p.position.y < 0.0 || p.position.y > self.viewport.height {
                p.velocity.y = -p.velocity.y;
            }

            p.alpha = p.base_alpha;

            if self.reduced_motion {
                continue;
            }
            let Some(pointer) = self.pointer else {
                continue;
            };

            let offset = pointer - p.position;
            let distance = offset.length();
            // A particle exactly under the pointer has no outward direction;
            // leave it alone rather than dividing by zero.
            if distance == 0.0 || distance >= REPULSION_RADIUS {
                continue;
            }

            let direction = offset / distance;
            let force = (REPULSION_RADIUS - distance) / REPULSION_RADIUS;
            p.position -= direction * force * REPULSION_STRENGTH;
            p.alpha = p.base_alpha + force * ALPHA_BOOST;
        }
    }

    /// Draw the current frame: clear, then one filled circle per particle.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        for p in &self.particles {
            surface.fill_circle(p.position, p.radius, p.alpha);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(x: f32, y: f32) -> Particle {
        Particle {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            radius: 1.0,
            base_alpha: 0.2,
            alpha: 0.2,
        }
    }

    #[test]
    fn tick_integrates_velocity() {
        let mut p = dot(10.0, 20.0);
        p.velocity = Vec2::new(0.1, -0.05);
        let mut field = ParticleField::new(vec![p], Viewport::new(800.0, 600.0), false);

        field.tick();

        let p = &field.particles()[0];
        assert!((p.position.x - 10.1).abs() < 1e-6);
        assert!((p.position.y - 19.95).abs() < 1e-6);
    }

    #[test]
    fn pointer_state_round_trip() {
        let mut field = ParticleField::new(vec![], Viewport::new(800.0, 600.0), false);
        field.pointer_moved(Vec2::new(3.0, 4.0));
        assert_eq!(field.pointer, Some(Vec2::new(3.0, 4.0)));
        field.pointer_left();
        assert_eq!(field.pointer, None);
    }

    #[test]
    fn axes_reflect_independently() {
        let mut p = dot(799.95, 300.0);
        p.velocity = Vec2::new(0.1, 0.1);
        let mut field = ParticleField::new(vec![p], Viewport::new(800.0, 600.0), false);

        field.tick();

        let p = &field.particles()[0];
        // x crossed the wall, y did not.
        assert_eq!(p.velocity.x, -0.1);
        assert_eq!(p.velocity.y, 0.1);
    }
}
