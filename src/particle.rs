// Simple particle struct to keep track of individual position, velocity,
// and the radius/opacity it was born with

use crate::config::FieldConfig;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    radius: f64,
    opacity: f64,
}

impl Particle {
    // Radius is kept strictly positive and opacity inside [0, 1]
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, radius: f64, opacity: f64) -> Particle {
        let radius = if radius.is_finite() && radius > 0.0 {
            radius
        } else {
            f64::MIN_POSITIVE
        };
        let opacity = if opacity.is_nan() {
            0.0
        } else {
            opacity.max(0.0).min(1.0)
        };
        Particle {
            pos,
            vel,
            radius,
            opacity,
        }
    }

    // Uniformly placed anywhere on the surface, with a slow drift
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: &FieldConfig,
    ) -> Particle {
        let speed = config.max_initial_speed;
        Particle::new(
            [rng.gen::<f64>() * width, rng.gen::<f64>() * height],
            [uniform(rng, -speed, speed), uniform(rng, -speed, speed)],
            uniform(rng, config.min_radius, config.max_radius),
            uniform(rng, config.min_opacity, config.max_opacity),
        )
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn advance(&mut self) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
    }

    // Flip the velocity component of any axis that left the surface.
    // Position is left where it is; the particle drifts back in next frame.
    pub fn reflect(&mut self, width: f64, height: f64) {
        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] *= -1.0;
        }
    }

    pub fn push(&mut self, impulse: Vector2<f64>) {
        self.vel = vecmath::vec2_add(self.vel, impulse);
    }

    pub fn speed(&self) -> f64 {
        vecmath::vec2_len(self.vel)
    }

    pub fn limit_speed(&mut self, max_speed: f64) {
        let speed = self.speed();
        if speed > max_speed && speed > 0.0 {
            self.vel = vecmath::vec2_scale(self.vel, max_speed / speed);
        }
    }

    pub fn distance_to(&self, point: Vector2<f64>) -> f64 {
        vecmath::vec2_len(vecmath::vec2_sub(self.pos, point))
    }
}

fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high > low {
        rng.gen_range(low, high)
    } else {
        low
    }
}
