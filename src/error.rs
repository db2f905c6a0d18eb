// Error types for the particle field.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("drawing surface is no longer attached to the document")]
    Detached,

    #[error("canvas call failed: {0}")]
    Draw(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    #[error("surface error: {0}")]
    Surface(#[from] SurfaceError),

    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("unable to acquire rendering context: {0}")]
    Context(String),

    #[error("animation has been stopped")]
    Stopped,
}

impl SurfaceError {
    pub fn from_js(value: JsValue) -> Self {
        SurfaceError::Draw(format!("{:?}", value))
    }
}

impl From<FieldError> for JsValue {
    fn from(err: FieldError) -> JsValue {
        js_sys::Error::new(&err.to_string()).into()
    }
}

pub type Result<T> = std::result::Result<T, FieldError>;
