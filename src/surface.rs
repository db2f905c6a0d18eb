// The drawing capabilities the particle field needs from its host.

use crate::color::Color;
use crate::error::SurfaceError;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const ZERO: SurfaceSize = SurfaceSize {
        width: 0,
        height: 0,
    };

    pub fn new(width: u32, height: u32) -> Self {
        SurfaceSize { width, height }
    }

    /// Size reported by the host as floats (CSS pixels). Negative, NaN and
    /// infinite dimensions collapse to 0.
    pub fn from_host(width: f64, height: f64) -> Self {
        SurfaceSize {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

fn sanitize(dim: f64) -> u32 {
    if dim.is_finite() && dim > 0.0 {
        dim.min(u32::MAX as f64).floor() as u32
    } else {
        0
    }
}

/// A 2-D drawing target: a canvas in the browser, a recorder in tests.
pub trait Surface {
    fn size(&self) -> SurfaceSize;

    fn set_size(&mut self, size: SurfaceSize);

    /// Wipes the previous frame. Fails with [`SurfaceError::Detached`] once the
    /// surface has been torn down.
    fn clear(&mut self) -> Result<(), SurfaceError>;

    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), SurfaceError>;

    fn draw_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
        alpha: f64,
        width: f64,
    ) -> Result<(), SurfaceError>;
}
