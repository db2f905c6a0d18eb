// Tuning parameters for the particle field. The defaults reproduce the look
// of the portfolio hero background; the numbers are picked for visual
// density, not physics.

use crate::color::Color;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Surface area (units²) per particle.
    pub density: u64,
    /// Initial velocity components are drawn from `[-max_initial_speed, max_initial_speed]`.
    pub max_initial_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub min_opacity: f64,
    pub max_opacity: f64,
    /// Pairs closer than this are linked.
    pub link_distance: f64,
    /// Link alpha at zero distance, fading linearly to 0 at `link_distance`.
    pub link_max_alpha: f64,
    pub link_width: f64,
    /// Particles closer than this to the pointer are pushed away.
    pub pointer_radius: f64,
    pub pointer_strength: f64,
    /// Optional cap on speed after pointer repulsion. `None` leaves velocity unbounded.
    pub max_speed: Option<f64>,
    pub particle_color: Color,
    pub link_color: Color,
}

impl FieldConfig {
    pub const DENSITY: u64 = 15_000;
    pub const MAX_INITIAL_SPEED: f64 = 0.25;
    pub const RADIUS_RANGE: (f64, f64) = (1.0, 3.0);
    pub const OPACITY_RANGE: (f64, f64) = (0.2, 0.7);
    pub const LINK_DISTANCE: f64 = 150.0;
    pub const LINK_MAX_ALPHA: f64 = 0.1;
    pub const LINK_WIDTH: f64 = 1.0;
    pub const POINTER_RADIUS: f64 = 100.0;
    pub const POINTER_STRENGTH: f64 = 0.01;
    pub const ACCENT: Color = Color::from_u32(0x64ffdaff);

    pub fn with_density(mut self, density: u64) -> Self {
        self.density = density.max(1);
        self
    }

    pub fn with_max_speed(mut self, max_speed: Option<f64>) -> Self {
        self.max_speed = max_speed.filter(|s| s.is_finite() && *s >= 0.0);
        self
    }

    pub fn with_colors(mut self, particle_color: Color, link_color: Color) -> Self {
        self.particle_color = particle_color;
        self.link_color = link_color;
        self
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            density: Self::DENSITY,
            max_initial_speed: Self::MAX_INITIAL_SPEED,
            min_radius: Self::RADIUS_RANGE.0,
            max_radius: Self::RADIUS_RANGE.1,
            min_opacity: Self::OPACITY_RANGE.0,
            max_opacity: Self::OPACITY_RANGE.1,
            link_distance: Self::LINK_DISTANCE,
            link_max_alpha: Self::LINK_MAX_ALPHA,
            link_width: Self::LINK_WIDTH,
            pointer_radius: Self::POINTER_RADIUS,
            pointer_strength: Self::POINTER_STRENGTH,
            max_speed: None,
            particle_color: Self::ACCENT,
            link_color: Self::ACCENT,
        }
    }
}
