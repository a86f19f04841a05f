use crate::events::SharedInput;
use crate::listeners::Listeners;
use glam::Vec2;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer in viewport coordinates; forget it when it leaves the page.
pub fn wire_pointer(
    window: &web::Window,
    document: &web::Document,
    shared: &Rc<SharedInput>,
    listeners: &mut Listeners,
) {
    let s = shared.clone();
    listeners.add(window, "pointermove", move |ev| {
        if let Some(me) = ev.dyn_ref::<web::MouseEvent>() {
            s.pointer.borrow_mut().client =
                Some(Vec2::new(me.client_x() as f32, me.client_y() as f32));
        }
    });

    if let Some(root) = document.document_element() {
        let s = shared.clone();
        listeners.add(&root, "pointerleave", move |_| {
            s.pointer.borrow_mut().client = None;
        });
    }

    let s = shared.clone();
    listeners.add(window, "blur", move |_| {
        s.pointer.borrow_mut().client = None;
    });
}
