use crate::dom;
use crate::events::SharedInput;
use crate::listeners::Listeners;
use std::rc::Rc;
use web_sys as web;

/// Record the scroll offset and flag layout changes. `load` covers images
/// and fonts that arrive after start.
pub fn wire_scroll_and_resize(window: &web::Window, shared: &Rc<SharedInput>, listeners: &mut Listeners) {
    shared.scroll_y.set(dom::scroll_y(window));

    let s = shared.clone();
    let w = window.clone();
    listeners.add(window, "scroll", move |_| {
        s.scroll_y.set(dom::scroll_y(&w));
    });

    let s = shared.clone();
    let w = window.clone();
    listeners.add(window, "resize", move |_| {
        s.scroll_y.set(dom::scroll_y(&w));
        s.layout_dirty.set(true);
    });

    let s = shared.clone();
    listeners.add(window, "load", move |_| {
        s.layout_dirty.set(true);
    });
}
