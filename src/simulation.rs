//! Simulation builder and event-loop runner.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::RunError;
use crate::field::{Particle, ParticleField, Viewport, DEFAULT_PARTICLE_COUNT};
use crate::gpu::GpuState;
use crate::input::Pointer;
use crate::spawn::{self, SpawnContext};
use crate::time::Time;

/// A particle field simulation builder.
///
/// Use method chaining to configure, then call `.run()` to open a window
/// and drive the field until it is closed.
///
/// ```ignore
/// use driftfield::Simulation;
///
/// Simulation::new()
///     .with_particle_count(60)
///     .run()?;
/// ```
pub struct Simulation {
    particle_count: u32,
    seed: Option<u64>,
    reduced_motion: bool,
    title: String,
    spawner: Box<dyn Fn(&mut SpawnContext) -> Particle>,
}

impl Simulation {
    /// Create a new simulation with default settings.
    pub fn new() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            seed: None,
            reduced_motion: false,
            title: "driftfield".to_string(),
            spawner: Box::new(spawn::ambient_particle),
        }
    }

    /// Set the number of particles.
    pub fn with_particle_count(mut self, count: u32) -> Self {
        self.particle_count = count;
        self
    }

    /// Seed the spawn RNG so every run starts with the same field.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Suppress pointer-driven motion effects.
    ///
    /// Particles still drift and bounce off the walls; only the repulsion
    /// force and the proximity brightening are disabled. Sampled once at
    /// startup, matching how a host would read an accessibility preference.
    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replace the default spawner.
    /// Called once per particle with a seeded [`SpawnContext`].
    pub fn with_spawner<F>(mut self, spawner: F) -> Self
    where
        F: Fn(&mut SpawnContext) -> Particle + 'static,
    {
        self.spawner = Box::new(spawner);
        self
    }

    /// Run the simulation. Blocks until the window is closed.
    ///
    /// If no GPU is available the field degrades to absent: the failure is
    /// reported and the run ends cleanly instead of returning an error.
    pub fn run(self) -> Result<(), RunError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    config: Simulation,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    field: Option<ParticleField>,
    pointer: Pointer,
    time: Time,
}

impl App {
    fn new(config: Simulation) -> Self {
        Self {
            config,
            window: None,
            gpu: None,
            field: None,
            pointer: Pointer::new(),
            time: Time::new(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = Arc::new(event_loop.create_window(window_attrs).unwrap());
        self.window = Some(window.clone());

        let size = window.inner_size();
        let viewport = Viewport::new(size.width as f32, size.height as f32);

        let count = self.config.particle_count;
        let particles: Vec<Particle> = (0..count)
            .map(|i| {
                let mut ctx = SpawnContext::new(i, count, viewport, self.config.seed);
                (self.config.spawner)(&mut ctx)
            })
            .collect();
        self.field = Some(ParticleField::new(
            particles,
            viewport,
            self.config.reduced_motion,
        ));

        match pollster::block_on(GpuState::new(window, count)) {
            Ok(gpu) => self.gpu = Some(gpu),
            Err(e) => {
                // No drawing surface means no background field. Shut down
                // quietly instead of crashing the host.
                eprintln!("driftfield: gpu unavailable, field disabled: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.pointer.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                // Resize moves the walls but never respawns the particles.
                if let Some(field) = &mut self.field {
                    field.set_viewport(physical_size.width as f32, physical_size.height as f32);
                }
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.time.update();

                if let Some(field) = &mut self.field {
                    // Pointer state is read once per frame, right before the
                    // physics step that consumes it.
                    match self.pointer.position() {
                        Some(position) => field.pointer_moved(position),
                        None => field.pointer_left(),
                    }
                    field.tick();
                }

                if let (Some(gpu), Some(field)) = (&mut self.gpu, &self.field) {
                    match gpu.render(field) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => gpu.resize(winit::dpi::PhysicalSize {
                            width: gpu.config.width,
                            height: gpu.config.height,
                        }),
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => eprintln!("Render error: {:?}", e),
                    }
                }

                if let Some(window) = &self.window {
                    if self.time.frame() % 30 == 0 {
                        window.set_title(&format!(
                            "{} - {:.0} fps",
                            self.config.title,
                            self.time.fps()
                        ));
                    }
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
