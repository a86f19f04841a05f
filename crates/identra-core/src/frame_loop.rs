//! Lifecycle of a repaint-driven animation loop.
//!
//! [`FrameLoop`] owns the one pending frame request. The platform callback
//! calls [`FrameLoop::on_frame`] first; it returns `false` once the loop has
//! been torn down, and otherwise schedules the next frame. Teardown cancels
//! the pending request so a detached surface is never drawn again.

/// Opaque id returned by the platform scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Request/cancel primitive (`requestAnimationFrame` on the web).
pub trait FrameScheduler {
    /// `None` when the platform refused the request.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    TornDown,
}

pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<FrameHandle>,
    state: LoopState,
    frames: u64,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
            state: LoopState::Idle,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn start(&mut self) {
        if self.state != LoopState::Idle {
            return;
        }
        self.state = LoopState::Running;
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("[loop] frame request refused; animation stays static");
        }
    }

    /// Call at the top of every scheduled callback. Returns whether the
    /// frame's work should run.
    pub fn on_frame(&mut self) -> bool {
        self.pending = None;
        if self.state != LoopState::Running {
            return false;
        }
        self.frames += 1;
        self.pending = self.scheduler.request_frame();
        true
    }

    /// Cancels the pending request and stops rescheduling. Idempotent.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if self.state != LoopState::TornDown {
            log::debug!("[loop] torn down after {} frames", self.frames);
        }
        self.state = LoopState::TornDown;
    }
}

impl<S: FrameScheduler> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
