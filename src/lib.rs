#![cfg(target_arch = "wasm32")]
use identra_core::{ParticleField, WaveConfig, WaveField};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod listeners;
mod magnetic;
mod render;
mod reveal;
mod sections;
mod style;

use constants::{FIELD_CANVAS_ID, WAVES_CANVAS_ID};

struct App {
    animation: frame::AnimationLoop,
    listeners: listeners::Listeners,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("identra-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Stop the animation loop and detach every listener. Safe to call twice.
#[wasm_bindgen]
pub fn stop() {
    APP.with(|app| {
        if let Some(app) = app.borrow_mut().take() {
            app.animation.teardown();
            drop(app.listeners);
            log::info!("identra-web stopped");
        }
    });
}

fn init() -> anyhow::Result<()> {
    if APP.with(|app| app.borrow().is_some()) {
        log::warn!("already running");
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let field = mount_field(&document);
    let waves = mount_waves(&document);
    let sections = sections::mount_sections(&window, &document);
    let magnets = magnetic::mount_magnets(&document);
    let reveals = reveal::mount_reveals(&document);
    log::info!(
        "[init] field={} waves={} sections={} magnets={} reveals={}",
        field.is_some(),
        waves.is_some(),
        sections.len(),
        magnets.len(),
        reveals.len()
    );

    let shared = Rc::new(events::SharedInput::default());
    let mut listeners = listeners::Listeners::default();
    events::pointer::wire_pointer(&window, &document, &shared, &mut listeners);
    events::scroll::wire_scroll_and_resize(&window, &shared, &mut listeners);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        window,
        input: shared,
        field,
        waves,
        sections,
        magnets,
        reveals,
        layout: input::HeightWatch::default(),
        last_instant: Instant::now(),
    }));
    let animation = frame::start_loop(frame_ctx);

    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            animation,
            listeners,
        })
    });
    Ok(())
}

fn mount_field(document: &web::Document) -> Option<frame::FieldLayer> {
    let canvas = dom::canvas_by_id(document, FIELD_CANVAS_ID)?;
    let Some(surface) = render::CanvasSurface::new(&canvas) else {
        log::warn!("[field] no 2d context on #{}", FIELD_CANVAS_ID);
        return None;
    };
    let size = dom::sync_canvas_backing_size(&canvas);
    let config = config::field_config_from_attrs(|name| canvas.get_attribute(name));
    match ParticleField::new(config, size, rand::random::<u64>()) {
        Ok(field) => Some(frame::FieldLayer { field, surface }),
        Err(e) => {
            log::error!("[field] {}", e);
            None
        }
    }
}

fn mount_waves(document: &web::Document) -> Option<frame::WaveLayer> {
    let canvas = dom::canvas_by_id(document, WAVES_CANVAS_ID)?;
    let Some(surface) = render::CanvasSurface::new(&canvas) else {
        log::warn!("[waves] no 2d context on #{}", WAVES_CANVAS_ID);
        return None;
    };
    dom::sync_canvas_backing_size(&canvas);
    Some(frame::WaveLayer {
        waves: WaveField::new(WaveConfig::default()),
        surface,
    })
}
