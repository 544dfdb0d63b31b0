use crate::constants::{HEIGHT_PER_VIEWPORT, HEIGHT_PER_WIDTH};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Size the canvas responsively: CSS width tracks the parent container,
/// CSS height = min(width * 0.65, viewport height * 0.55), and the backing
/// store is scaled by devicePixelRatio. Leaves the canvas untouched when the
/// window or parent is unavailable.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(parent) = canvas.parent_element() else {
        return;
    };

    let w_css = parent.get_bounding_client_rect().width();
    let viewport_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h_css = (w_css * HEIGHT_PER_WIDTH).min(viewport_h * HEIGHT_PER_VIEWPORT);

    let dpr = window.device_pixel_ratio();
    canvas.set_width(((w_css * dpr) as u32).max(1));
    canvas.set_height(((h_css * dpr) as u32).max(1));
    // Set only the two size properties; the host may own other inline styles.
    let style = canvas.style();
    _ = style.set_property("width", &format!("{w_css}px"));
    _ = style.set_property("height", &format!("{h_css}px"));
}
