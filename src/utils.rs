use wasm_bindgen::JsValue;

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// Viewport size in CSS pixels, 0 when it can't be read
pub fn window_size() -> (f64, f64) {
    match web_sys::window() {
        Some(window) => {
            let width = dimension(window.inner_width());
            let height = dimension(window.inner_height());
            (width, height)
        }
        None => (0.0, 0.0),
    }
}

fn dimension(value: Result<JsValue, JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}
