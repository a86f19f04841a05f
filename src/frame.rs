use crate::constants::MAX_FRAME_DT_SEC;
use crate::dom;
use crate::events::SharedInput;
use crate::input::{self, HeightWatch};
use crate::magnetic::Magnet;
use crate::render::CanvasSurface;
use crate::reveal::Reveal;
use crate::sections::SectionBinding;
use identra_core::{
    DrawSurface, FrameHandle, FrameLoop, FrameScheduler, ParticleField, WaveField,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickCell = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` behind [`FrameScheduler`].
pub struct RafScheduler {
    tick: TickCell,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let window = web::window()?;
        let tick = self.tick.borrow();
        let closure = tick.as_ref()?;
        window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .ok()
            .map(FrameHandle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(window) = web::window() {
            _ = window.cancel_animation_frame(handle.0);
        }
    }
}

pub struct FieldLayer {
    pub field: ParticleField,
    pub surface: CanvasSurface,
}

pub struct WaveLayer {
    pub waves: WaveField,
    pub surface: CanvasSurface,
}

pub struct FrameContext {
    pub window: web::Window,
    pub input: Rc<SharedInput>,
    pub field: Option<FieldLayer>,
    pub waves: Option<WaveLayer>,
    pub sections: Vec<SectionBinding>,
    pub magnets: Vec<Magnet>,
    pub reveals: Vec<Reveal>,
    pub layout: HeightWatch,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let shifted = self.layout.changed(dom::document_height(&self.window));
        if self.input.layout_dirty.replace(false) || shifted {
            self.relayout();
        }

        let scroll_y = self.input.scroll_y.get();
        for section in &mut self.sections {
            section.update(scroll_y, dt_sec);
        }

        let client = self.input.pointer.borrow().client;
        for magnet in &mut self.magnets {
            magnet.update(client, dt_sec);
        }
        let viewport_height = dom::viewport_height(&self.window);
        for reveal in &mut self.reveals {
            reveal.update(viewport_height, dt_sec);
        }

        if let Some(layer) = &mut self.field {
            let canvas = layer.surface.canvas();
            let (origin, size) = dom::rect_origin_size(canvas);
            let pointer = client.and_then(|c| {
                input::client_to_canvas_px(c, origin, size, layer.surface.size())
            });
            layer.field.set_pointer(pointer);
            layer.field.step();
            layer.field.render(&mut layer.surface);
        }

        if let Some(layer) = &mut self.waves {
            layer.waves.step();
            layer.waves.render(&mut layer.surface);
        }
    }

    fn relayout(&mut self) {
        if let Some(layer) = &mut self.field {
            let size = dom::sync_canvas_backing_size(layer.surface.canvas());
            layer.field.resize(size);
        }
        if let Some(layer) = &mut self.waves {
            dom::sync_canvas_backing_size(layer.surface.canvas());
        }
        for section in &mut self.sections {
            section.measure(&self.window);
        }
        log::debug!("[frame] relayout");
    }
}

/// A running animation loop. Dropping it does not stop the loop; call
/// [`AnimationLoop::teardown`].
pub struct AnimationLoop {
    frame_loop: Rc<RefCell<FrameLoop<RafScheduler>>>,
    tick: TickCell,
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> AnimationLoop {
    let tick: TickCell = Rc::new(RefCell::new(None));
    let frame_loop = Rc::new(RefCell::new(FrameLoop::new(RafScheduler { tick: tick.clone() })));
    let frame_loop_tick = frame_loop.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        if frame_loop_tick.borrow_mut().on_frame() {
            frame_ctx.borrow_mut().frame();
        }
    }) as Box<dyn FnMut(f64)>));
    frame_loop.borrow_mut().start();
    AnimationLoop { frame_loop, tick }
}

impl AnimationLoop {
    /// Cancel the pending frame and release the tick closure. Must not be
    /// called from inside a frame.
    pub fn teardown(&self) {
        self.frame_loop.borrow_mut().teardown();
        self.tick.borrow_mut().take();
    }
}
