// Last known pointer position, and the falloff of its push on nearby particles.
// Pointer events only write here; particles react during the next step.

use vecmath::Vector2;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Pointer {
    pos: Option<Vector2<f64>>,
}

impl Pointer {
    pub fn new() -> Self {
        Pointer { pos: None }
    }

    pub fn position(&self) -> Option<Vector2<f64>> {
        self.pos
    }

    pub fn set(&mut self, x: f64, y: f64) {
        if x.is_finite() && y.is_finite() {
            self.pos = Some([x, y]);
        }
    }

    pub fn clear(&mut self) {
        self.pos = None;
    }

    /// Force factor in `(0, 1]` for a point within `radius` of the pointer:
    /// 1 on top of it, falling linearly to 0 at `radius`.
    pub fn repulsion(&self, point: Vector2<f64>, radius: f64) -> Option<f64> {
        let pos = self.pos?;
        let distance = vecmath::vec2_len(vecmath::vec2_sub(point, pos));
        if distance < radius {
            Some((radius - distance) / radius)
        } else {
            None
        }
    }

    /// Velocity nudge pushing `point` away from the pointer, or `None` when out of reach.
    pub fn impulse(&self, point: Vector2<f64>, radius: f64, strength: f64) -> Option<Vector2<f64>> {
        let pos = self.pos?;
        let force = self.repulsion(point, radius)?;
        let away = vecmath::vec2_sub(point, pos);
        Some(vecmath::vec2_scale(away, force * strength))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_pointer_has_no_effect() {
        let pointer = Pointer::new();
        assert_eq!(pointer.repulsion([0.0, 0.0], 100.0), None);
        assert_eq!(pointer.impulse([0.0, 0.0], 100.0, 0.01), None);
    }

    #[test]
    fn force_is_one_on_top_and_zero_at_radius() {
        let mut pointer = Pointer::new();
        pointer.set(10.0, 10.0);
        assert_eq!(pointer.repulsion([10.0, 10.0], 100.0), Some(1.0));
        assert_eq!(pointer.repulsion([110.0, 10.0], 100.0), None);
        assert_eq!(pointer.repulsion([10.0, 250.0], 100.0), None);
        let half = pointer.repulsion([60.0, 10.0], 100.0).unwrap();
        assert!((half - 0.5).abs() < 1e-12);
    }

    #[test]
    fn impulse_points_away_from_pointer() {
        let mut pointer = Pointer::new();
        pointer.set(0.0, 0.0);
        let impulse = pointer.impulse([50.0, 0.0], 100.0, 0.01).unwrap();
        // (50 - 0) * 0.5 * 0.01
        assert!((impulse[0] - 0.25).abs() < 1e-12);
        assert_eq!(impulse[1], 0.0);
    }

    #[test]
    fn ignores_non_finite_positions() {
        let mut pointer = Pointer::new();
        pointer.set(f64::NAN, 3.0);
        assert_eq!(pointer.position(), None);
        pointer.set(1.0, 2.0);
        pointer.clear();
        assert_eq!(pointer.position(), None);
    }
}
