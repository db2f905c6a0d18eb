// Frame-by-frame driver for a particle field. The host calls `tick` from its
// repaint callback and requests another frame only while `tick` says so.

use crate::error::FieldError;
use crate::field::ParticleField;
use crate::surface::{Surface, SurfaceSize};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Stop,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnimationState {
    Running,
    Paused,
    Stopped,
}

pub struct Animation {
    field: ParticleField,
    state: AnimationState,
    pending_size: Option<SurfaceSize>,
    frames: u64,
    last_error: Option<FieldError>,
}

impl Animation {
    pub fn new(field: ParticleField) -> Self {
        Animation {
            field,
            state: AnimationState::Running,
            pending_size: None,
            frames: 0,
            last_error: None,
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_error(&self) -> Option<&FieldError> {
        self.last_error.as_ref()
    }

    /// Queues a resize for the start of the next frame. Only the latest size
    /// is kept, so a burst of resize events reseeds the field once.
    pub fn request_resize(&mut self, size: SurfaceSize) {
        self.pending_size = Some(size);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.field.pointer_move(x, y);
    }

    pub fn pointer_leave(&mut self) {
        self.field.pointer_leave();
    }

    /// Returns true if the caller has to schedule a frame to get going again.
    pub fn resume(&mut self) -> bool {
        if self.state == AnimationState::Paused {
            self.state = AnimationState::Running;
            true
        } else {
            false
        }
    }

    pub fn pause(&mut self) {
        if self.state == AnimationState::Running {
            self.state = AnimationState::Paused;
        }
    }

    pub fn stop(&mut self) {
        self.state = AnimationState::Stopped;
    }

    /// Draws one frame whether running or paused. A queued resize is applied
    /// only once the surface is known to still be attached.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), FieldError> {
        if self.state == AnimationState::Stopped {
            return Err(FieldError::Stopped);
        }

        if let Some(size) = self.pending_size {
            surface.clear()?;
            self.pending_size = None;
            surface.set_size(size);
            self.field.resize(size);
        }

        self.field.step(surface)?;
        self.frames += 1;
        Ok(())
    }

    /// Runs one step if running, then reports whether another frame should be
    /// requested. Any step failure stops the animation for good.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameControl {
        if self.state != AnimationState::Running {
            return FrameControl::Stop;
        }

        match self.step(surface) {
            Ok(()) => FrameControl::Continue,
            Err(err) => {
                self.last_error = Some(err);
                self.state = AnimationState::Stopped;
                FrameControl::Stop
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;
    use crate::error::SurfaceError;
    use crate::surface::testing::RecordingSurface;

    fn animation(width: u32, height: u32) -> Animation {
        let size = SurfaceSize::new(width, height);
        Animation::new(ParticleField::new(FieldConfig::default(), size))
    }

    #[test]
    fn runs_until_stopped() {
        let mut anim = animation(300, 300);
        let mut surface = RecordingSurface::new(300, 300);
        for _ in 0..10 {
            assert_eq!(anim.tick(&mut surface), FrameControl::Continue);
        }
        assert_eq!(anim.frames(), 10);
        anim.stop();
        assert_eq!(anim.tick(&mut surface), FrameControl::Stop);
        assert!(!anim.resume());
        assert_eq!(anim.frames(), 10);
    }

    #[test]
    fn paused_animation_requests_no_frames() {
        let mut anim = animation(300, 300);
        let mut surface = RecordingSurface::new(300, 300);
        anim.pause();
        assert_eq!(anim.tick(&mut surface), FrameControl::Stop);
        assert_eq!(anim.frames(), 0);
        assert!(anim.resume());
        assert!(!anim.resume());
        assert_eq!(anim.tick(&mut surface), FrameControl::Continue);
    }

    #[test]
    fn resize_bursts_reseed_once() {
        let mut anim = animation(300, 300);
        let mut surface = RecordingSurface::new(300, 300);
        let generation = anim.field().generation();
        anim.request_resize(SurfaceSize::new(100, 100));
        anim.request_resize(SurfaceSize::new(200, 200));
        anim.request_resize(SurfaceSize::new(600, 300));
        anim.tick(&mut surface);

        assert_eq!(anim.field().generation(), generation + 1);
        assert_eq!(anim.field().particles().len(), 12);
        assert_eq!(surface.size, SurfaceSize::new(600, 300));
    }

    #[test]
    fn detached_surface_ends_the_loop() {
        let mut anim = animation(300, 300);
        let mut surface = RecordingSurface::new(300, 300);
        surface.detached = true;
        assert_eq!(anim.tick(&mut surface), FrameControl::Stop);
        assert_eq!(anim.state(), AnimationState::Stopped);
        let detached = FieldError::Surface(SurfaceError::Detached);
        assert_eq!(anim.last_error(), Some(&detached));

        surface.detached = false;
        assert_eq!(anim.tick(&mut surface), FrameControl::Stop);
        assert_eq!(anim.step(&mut surface), Err(FieldError::Stopped));
    }

    #[test]
    fn detached_surface_keeps_the_queued_resize() {
        let mut anim = animation(300, 300);
        let mut surface = RecordingSurface::new(300, 300);
        let generation = anim.field().generation();
        anim.request_resize(SurfaceSize::new(600, 300));
        surface.detached = true;

        assert_eq!(anim.tick(&mut surface), FrameControl::Stop);
        assert_eq!(anim.field().generation(), generation);
        assert_eq!(anim.field().size(), SurfaceSize::new(300, 300));
        assert_eq!(surface.size, SurfaceSize::new(300, 300));
    }

    #[test]
    fn manual_step_applies_the_queued_resize() {
        let mut anim = animation(300, 300);
        let mut surface = RecordingSurface::new(300, 300);
        anim.pause();
        anim.request_resize(SurfaceSize::new(600, 300));

        anim.step(&mut surface).unwrap();
        assert_eq!(anim.field().particles().len(), 12);
        assert_eq!(surface.size, SurfaceSize::new(600, 300));
        assert_eq!(anim.frames(), 1);
        assert_eq!(anim.state(), AnimationState::Paused);
    }
}
