use glam::Vec2;
use identra_core::ScrollRegion;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up a canvas by id; `None` if absent or not a canvas.
pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()
}

/// Match the canvas backing store to its CSS box so one unit is one CSS px.
/// Returns the new size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() as u32).max(1);
    let h_px = (rect.height() as u32).max(1);
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    Vec2::new(w_px as f32, h_px as f32)
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

#[inline]
pub fn viewport_height(window: &web::Window) -> f32 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

/// Scroll region of a tall sticky container, in document coordinates.
pub fn element_region(window: &web::Window, el: &web::Element) -> ScrollRegion {
    let rect = el.get_bounding_client_rect();
    let top = rect.top() as f32 + scroll_y(window);
    ScrollRegion::from_bounds(top, rect.height() as f32, viewport_height(window))
}

/// Horizontal overflow of an element (scroll width beyond its viewport box).
#[inline]
pub fn overflow_x(window: &web::Window, el: &web::Element) -> f32 {
    let inner_width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    (el.scroll_width() as f32 - inner_width).max(0.0)
}

#[inline]
pub fn rect_origin_size(el: &web::Element) -> (Vec2, Vec2) {
    let rect = el.get_bounding_client_rect();
    (
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
    )
}

/// Set inline style declarations, ignoring elements without a style object.
pub fn set_styles(el: &web::Element, declarations: &[(&'static str, String)]) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        let style = html.style();
        for (name, value) in declarations {
            _ = style.set_property(name, value);
        }
    }
}

/// All elements matching `selector` under `root`.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = root.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

/// Full scrollable height of the document.
#[inline]
pub fn document_height(window: &web::Window) -> f32 {
    window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f32)
        .unwrap_or(0.0)
}
