//! DOM event wiring. Handlers only record values; the frame tick reads them.

use crate::input::PointerState;
use std::cell::{Cell, RefCell};

pub mod pointer;
pub mod scroll;

/// Values written by event handlers and consumed by the next frame.
#[derive(Default)]
pub struct SharedInput {
    pub pointer: RefCell<PointerState>,
    pub scroll_y: Cell<f32>,
    /// Set on resize; the frame re-measures canvases and section regions.
    pub layout_dirty: Cell<bool>,
}
