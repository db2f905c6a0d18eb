// Drives the particle field through its public API with a counting surface,
// the way a host would without a live display.

use particle_field::animation::{Animation, FrameControl};
use particle_field::color::Color;
use particle_field::config::FieldConfig;
use particle_field::error::SurfaceError;
use particle_field::field::{connection_alpha, particle_count, ParticleField};
use particle_field::particle::Particle;
use particle_field::surface::{Surface, SurfaceSize};
use rand::rngs::StdRng;
use rand::SeedableRng;
use vecmath::Vector2;

#[derive(Default)]
struct CountingSurface {
    size: SurfaceSize,
    clears: usize,
    circles: usize,
    lines: Vec<f64>,
}

impl Surface for CountingSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn set_size(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        self.clears += 1;
        self.circles = 0;
        self.lines.clear();
        Ok(())
    }

    fn fill_circle(
        &mut self,
        _: Vector2<f64>,
        _: f64,
        _: Color,
        _: f64,
    ) -> Result<(), SurfaceError> {
        self.circles += 1;
        Ok(())
    }

    fn draw_line(
        &mut self,
        _: Vector2<f64>,
        _: Vector2<f64>,
        _: Color,
        alpha: f64,
        _: f64,
    ) -> Result<(), SurfaceError> {
        self.lines.push(alpha);
        Ok(())
    }
}

#[test]
fn hero_sized_field() {
    let size = SurfaceSize::new(300, 300);
    assert_eq!(particle_count(size, FieldConfig::DENSITY), 6);

    let mut field = ParticleField::new(FieldConfig::default(), size);
    let mut surface = CountingSurface::default();
    field.step(&mut surface).unwrap();

    assert_eq!(surface.clears, 1);
    assert_eq!(surface.circles, 6);
    // 6 particles form at most 15 pairs
    assert!(surface.lines.len() <= 15);
    for alpha in &surface.lines {
        assert!(*alpha > 0.0 && *alpha <= FieldConfig::LINK_MAX_ALPHA);
    }
}

#[test]
fn two_particles_fifty_apart() {
    let particles = vec![
        Particle::new([0.0, 0.0], [0.0, 0.0], 1.0, 0.5),
        Particle::new([50.0, 0.0], [0.0, 0.0], 1.0, 0.5),
    ];
    let size = SurfaceSize::new(200, 200);
    let mut field = ParticleField::from_particles(FieldConfig::default(), size, particles);
    let mut surface = CountingSurface::default();
    field.step(&mut surface).unwrap();

    assert_eq!(surface.lines.len(), 1);
    assert!((surface.lines[0] - 0.1 * (1.0 - 50.0 / 150.0)).abs() < 1e-12);
    assert_eq!(connection_alpha(150.0, 150.0, 0.1), None);
}

#[test]
fn animation_survives_resizes_and_pointer_storms() {
    let mut rng = StdRng::seed_from_u64(99);
    let size = SurfaceSize::new(800, 600);
    let field = ParticleField::with_rng(FieldConfig::default(), size, &mut rng);
    let mut animation = Animation::new(field);
    let mut surface = CountingSurface::default();

    for frame in 0..600u32 {
        for k in 0..5 {
            animation.pointer_move((frame * 3 + k) as f64 % 800.0, 300.0);
        }
        if frame == 200 {
            animation.request_resize(SurfaceSize::from_host(1280.0, 720.0));
        }
        if frame == 400 {
            animation.request_resize(SurfaceSize::from_host(-5.0, 720.0));
        }
        assert_eq!(animation.tick(&mut surface), FrameControl::Continue);
        assert_eq!(surface.circles, animation.field().particles().len());
    }

    assert_eq!(animation.frames(), 600);
    assert_eq!(animation.field().size(), SurfaceSize::new(0, 720));
    assert!(animation.field().particles().is_empty());
}
