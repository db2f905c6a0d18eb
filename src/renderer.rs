// Canvas 2D implementation of the drawing surface. Grabs the "2d" context
// from a canvas on the DOM and turns draw calls into path fills/strokes.

use crate::color::Color;
use crate::error::{FieldError, SurfaceError};
use crate::surface::{Surface, SurfaceSize};
use std::f64::consts::PI;
use vecmath::Vector2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    pub canvas: HtmlCanvasElement,
    pub context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, FieldError> {
        let context = canvas
            .get_context("2d")
            .map_err(|e| FieldError::Context(format!("{:?}", e)))?
            .ok_or_else(|| FieldError::Context(String::from("canvas has no 2d context")))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| {
                FieldError::Context(String::from("context is not a CanvasRenderingContext2d"))
            })?;

        Ok(CanvasSurface { canvas, context })
    }

    pub fn from_element_id(id: &str) -> Result<Self, FieldError> {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .ok_or_else(|| FieldError::MissingElement(format!("#{}", id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| FieldError::MissingElement(format!("#{} is not a canvas", id)))?;
        Self::new(canvas)
    }

    // Surface-space coordinates of a viewport point
    pub fn to_surface(&self, client_x: f64, client_y: f64) -> Vector2<f64> {
        let rect = self.canvas.get_bounding_client_rect();
        [client_x - rect.left(), client_y - rect.top()]
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.canvas.width(), self.canvas.height())
    }

    fn set_size(&mut self, size: SurfaceSize) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        if !self.canvas.is_connected() {
            return Err(SurfaceError::Detached);
        }
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        self.context.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    #[allow(deprecated)]
    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), SurfaceError> {
        self.context.begin_path();
        self.context
            .arc(center[0], center[1], radius, 0.0, 2.0 * PI)
            .map_err(SurfaceError::from_js)?;
        self.context.set_fill_style(&JsValue::from_str(&color.css(alpha)));
        self.context.fill();
        Ok(())
    }

    #[allow(deprecated)]
    fn draw_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
        alpha: f64,
        width: f64,
    ) -> Result<(), SurfaceError> {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.set_stroke_style(&JsValue::from_str(&color.css(alpha)));
        self.context.set_line_width(width);
        self.context.stroke();
        Ok(())
    }
}
