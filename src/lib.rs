mod utils;
pub mod animation;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod particle;
pub mod pointer;
pub mod renderer;
pub mod surface;

use animation::{Animation, AnimationState, FrameControl};
use config::FieldConfig;
use error::FieldError;
use field::ParticleField;
use renderer::CanvasSurface;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use surface::{Surface, SurfaceSize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Event, EventTarget, MouseEvent};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

struct Shared {
    animation: Animation,
    surface: CanvasSurface,
    profiling: bool,
    frame: Option<Closure<dyn FnMut()>>,
    frame_id: Option<i32>,
}

struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Particle field bound to a canvas element, animated with `requestAnimationFrame`.
#[wasm_bindgen]
pub struct ParticleFieldCanvas {
    shared: Rc<RefCell<Shared>>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl ParticleFieldCanvas {
    /// Binds to the canvas with id `canvas_id` and sizes it to the viewport.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<ParticleFieldCanvas, JsValue> {
        let mut surface = CanvasSurface::from_element_id(canvas_id)?;
        let (width, height) = utils::window_size();
        let size = SurfaceSize::from_host(width, height);
        surface.set_size(size);

        let field = ParticleField::new(FieldConfig::default(), size);
        log_seeded(&field);

        let shared = Shared {
            animation: Animation::new(field),
            surface,
            profiling: false,
            frame: None,
            frame_id: None,
        };
        Ok(ParticleFieldCanvas {
            shared: Rc::new(RefCell::new(shared)),
            listeners: Vec::new(),
        })
    }

    /// Hooks up window/document listeners and schedules the first frame.
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.shared.borrow().animation.state() == AnimationState::Stopped {
            return Err(FieldError::Stopped.into());
        }
        if self.listeners.is_empty() {
            self.attach_listeners()?;
        }
        schedule(&self.shared);
        Ok(())
    }

    pub fn pause(&mut self) {
        self.shared.borrow_mut().animation.pause();
    }

    pub fn resume(&mut self) {
        let resumed = self.shared.borrow_mut().animation.resume();
        if resumed {
            schedule(&self.shared);
        }
    }

    /// Stops the loop for good and releases every listener.
    pub fn stop(&mut self) {
        {
            let mut shared = self.shared.borrow_mut();
            shared.animation.stop();
            if let (Some(id), Some(window)) = (shared.frame_id.take(), web_sys::window()) {
                let _ = window.cancel_animation_frame(id);
            }
            shared.frame = None;
        }
        for listener in self.listeners.drain(..) {
            let _ = listener.target.remove_event_listener_with_callback(
                listener.kind,
                listener.callback.as_ref().unchecked_ref(),
            );
        }
    }

    /// Applied at the start of the next frame.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.shared
            .borrow_mut()
            .animation
            .request_resize(SurfaceSize::from_host(width, height));
    }

    /// Pointer position in canvas coordinates.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.shared.borrow_mut().animation.pointer_move(x, y);
    }

    pub fn pointer_leave(&mut self) {
        self.shared.borrow_mut().animation.pointer_leave();
    }

    /// Draws a single frame without touching the scheduler, applying any
    /// queued resize first. Fails once stopped.
    pub fn step(&mut self) -> Result<(), JsValue> {
        let mut shared = self.shared.borrow_mut();
        let Shared {
            animation,
            surface,
            ..
        } = &mut *shared;
        animation.step(surface).map_err(JsValue::from)
    }

    pub fn particle_count(&self) -> usize {
        self.shared.borrow().animation.field().particles().len()
    }

    pub fn frames(&self) -> f64 {
        self.shared.borrow().animation.frames() as f64
    }

    pub fn set_max_speed(&mut self, max_speed: Option<f64>) {
        let mut shared = self.shared.borrow_mut();
        let config = shared.animation.field().config().with_max_speed(max_speed);
        shared.animation.field_mut().set_config(config);
    }

    pub fn set_profiling(&mut self, profiling: bool) {
        self.shared.borrow_mut().profiling = profiling;
    }
}

impl ParticleFieldCanvas {
    fn attach_listeners(&mut self) -> Result<(), FieldError> {
        let window = web_sys::window()
            .ok_or_else(|| FieldError::MissingElement(String::from("window")))?;
        let document = window
            .document()
            .ok_or_else(|| FieldError::MissingElement(String::from("document")))?;

        let weak = Rc::downgrade(&self.shared);
        self.listen(window.clone().into(), "resize", move |_| {
            with_shared(&weak, |shared| {
                let (width, height) = utils::window_size();
                shared.animation.request_resize(SurfaceSize::from_host(width, height));
            });
        })?;

        let weak = Rc::downgrade(&self.shared);
        self.listen(window.clone().into(), "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                with_shared(&weak, |shared| {
                    let pos = shared
                        .surface
                        .to_surface(event.client_x() as f64, event.client_y() as f64);
                    shared.animation.pointer_move(pos[0], pos[1]);
                });
            }
        })?;

        let weak = Rc::downgrade(&self.shared);
        self.listen(window.into(), "mouseout", move |event| {
            let left_window = event
                .dyn_ref::<MouseEvent>()
                .map(|e| e.related_target().is_none())
                .unwrap_or(false);
            if left_window {
                with_shared(&weak, |shared| shared.animation.pointer_leave());
            }
        })?;

        let weak = Rc::downgrade(&self.shared);
        let doc = document.clone();
        self.listen(document.into(), "visibilitychange", move |_| {
            let hidden = doc.hidden();
            let resumed = with_shared(&weak, |shared| {
                if hidden {
                    console::log_1(&"particle field: page hidden, pausing".into());
                    shared.animation.pause();
                    false
                } else {
                    shared.animation.resume()
                }
            });
            if resumed == Some(true) {
                if let Some(shared) = weak.upgrade() {
                    schedule(&shared);
                }
            }
        })?;

        Ok(())
    }

    fn listen<F>(
        &mut self,
        target: EventTarget,
        kind: &'static str,
        handler: F,
    ) -> Result<(), FieldError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(|e| {
                FieldError::Context(format!("addEventListener({}) failed: {:?}", kind, e))
            })?;
        self.listeners.push(Listener {
            target,
            kind,
            callback,
        });
        Ok(())
    }
}

impl Drop for ParticleFieldCanvas {
    fn drop(&mut self) {
        self.stop();
    }
}

fn with_shared<T>(weak: &Weak<RefCell<Shared>>, f: impl FnOnce(&mut Shared) -> T) -> Option<T> {
    let shared = weak.upgrade()?;
    let mut shared = shared.try_borrow_mut().ok()?;
    Some(f(&mut shared))
}

// Requests the next animation frame unless one is already pending
fn schedule(shared: &Rc<RefCell<Shared>>) {
    let mut inner = shared.borrow_mut();
    if inner.frame_id.is_some() || inner.animation.state() != AnimationState::Running {
        return;
    }
    if inner.frame.is_none() {
        let weak = Rc::downgrade(shared);
        inner.frame = Some(Closure::wrap(Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                run_frame(&shared);
            }
        }) as Box<dyn FnMut()>));
    }

    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let requested = match inner.frame.as_ref() {
        Some(frame) => window.request_animation_frame(frame.as_ref().unchecked_ref()),
        None => return,
    };
    match requested {
        Ok(id) => inner.frame_id = Some(id),
        Err(e) => console::error_1(&e),
    }
}

fn run_frame(shared: &Rc<RefCell<Shared>>) {
    let control = {
        let mut inner = shared.borrow_mut();
        inner.frame_id = None;
        let generation = inner.animation.field().generation();

        let Shared {
            animation,
            surface,
            profiling,
            ..
        } = &mut *inner;
        let control = {
            let _timer = if *profiling {
                Some(Timer::new("ParticleField::step"))
            } else {
                None
            };
            animation.tick(surface)
        };

        if animation.field().generation() != generation {
            log_seeded(animation.field());
        }
        let stopped = animation.state() == AnimationState::Stopped;
        if let Some(err) = animation.last_error().filter(|_| stopped) {
            console::error_1(&format!("particle field stopped: {}", err).into());
        }
        control
    };

    if control == FrameControl::Continue {
        schedule(shared);
    }
}

fn log_seeded(field: &ParticleField) {
    let size = field.size();
    console::log_1(
        &format!(
            "particle field: {} particles on {}x{}",
            field.particles().len(),
            size.width,
            size.height
        )
        .into(),
    );
}
