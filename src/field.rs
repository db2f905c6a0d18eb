// The particle field: a fixed population of drifting points, linked to their
// neighbours by fading lines and pushed around by the pointer.
//
// The field owns no host resources. Each step draws one frame onto whatever
// surface it is handed, so the whole simulation can be driven synchronously.

use crate::config::FieldConfig;
use crate::error::Result;
use crate::particle::Particle;
use crate::pointer::Pointer;
use crate::surface::{Surface, SurfaceSize};
use rand::Rng;

/// Number of particles seeded for `size` at the given density (area per particle).
pub fn particle_count(size: SurfaceSize, density: u64) -> usize {
    (size.area() / density.max(1)) as usize
}

/// Alpha of the line joining two particles `distance` apart, or `None` when
/// they are too far apart to be linked.
pub fn connection_alpha(distance: f64, link_distance: f64, max_alpha: f64) -> Option<f64> {
    if distance < link_distance {
        Some(max_alpha * (1.0 - distance / link_distance))
    } else {
        None
    }
}

pub struct ParticleField {
    config: FieldConfig,
    size: SurfaceSize,
    particles: Vec<Particle>,
    pointer: Pointer,
    generation: u64,
}

impl ParticleField {
    pub fn new(config: FieldConfig, size: SurfaceSize) -> Self {
        Self::with_rng(config, size, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(config: FieldConfig, size: SurfaceSize, rng: &mut R) -> Self {
        let mut field = ParticleField {
            config,
            size,
            particles: Vec::new(),
            pointer: Pointer::new(),
            generation: 0,
        };
        field.reseed(rng);
        field
    }

    /// Field over an explicit population. Counts as a seeding.
    pub fn from_particles(
        config: FieldConfig,
        size: SurfaceSize,
        particles: Vec<Particle>,
    ) -> Self {
        ParticleField {
            config,
            size,
            particles,
            pointer: Pointer::new(),
            generation: 1,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: FieldConfig) {
        self.config = config;
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    /// Bumped every time the population is regenerated.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Throws the current population away and scatters a fresh one sized for
    /// the current surface.
    pub fn reseed<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let count = particle_count(self.size, self.config.density);
        let width = self.size.width as f64;
        let height = self.size.height as f64;
        let config = &self.config;
        self.particles = (0..count)
            .map(|_| Particle::random(&mut *rng, width, height, config))
            .collect();
        self.generation += 1;
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        self.resize_with_rng(size, &mut rand::thread_rng());
    }

    pub fn resize_with_rng<R: Rng + ?Sized>(&mut self, size: SurfaceSize, rng: &mut R) {
        self.size = size;
        self.reseed(rng);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.pointer.set(x, y);
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.clear();
    }

    /// Advances every particle by one frame and draws the result.
    ///
    /// Per particle, in index order: integrate, reflect off the surface edges,
    /// draw, link to every later particle within `link_distance`, then apply
    /// the pointer push. Later particles are linked using their positions from
    /// the previous frame, since they have not moved yet.
    ///
    /// The surface is cleared first; if that fails nothing is mutated.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<()> {
        surface.clear()?;

        let width = self.size.width as f64;
        let height = self.size.height as f64;
        let config = &self.config;

        for i in 0..self.particles.len() {
            let (head, tail) = self.particles.split_at_mut(i + 1);
            let particle = &mut head[i];

            particle.advance();
            particle.reflect(width, height);

            surface.fill_circle(
                particle.pos,
                particle.radius(),
                config.particle_color,
                particle.opacity(),
            )?;

            for other in tail.iter() {
                let distance = particle.distance_to(other.pos);
                let alpha = connection_alpha(distance, config.link_distance, config.link_max_alpha);
                if let Some(alpha) = alpha {
                    surface.draw_line(
                        particle.pos,
                        other.pos,
                        config.link_color,
                        alpha,
                        config.link_width,
                    )?;
                }
            }

            let impulse = self.pointer.impulse(
                particle.pos,
                config.pointer_radius,
                config.pointer_strength,
            );
            if let Some(impulse) = impulse {
                particle.push(impulse);
                if let Some(max_speed) = config.max_speed {
                    particle.limit_speed(max_speed);
                }
            }
        }

        Ok(())
    }
}
