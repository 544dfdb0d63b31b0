use glam::Vec2;
use web_sys as web;

/// Convert CSS-pixel coordinates relative to a surface of size `w` x `h`
/// into normalized device coordinates (x right, y up, both in [-1, 1]).
/// Degenerate sizes map to the centre rather than dividing by zero.
#[inline]
pub fn ndc_from_css(x_css: f32, y_css: f32, w: f32, h: f32) -> Vec2 {
    if w <= 0.0 || h <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new((x_css / w) * 2.0 - 1.0, -((y_css / h) * 2.0 - 1.0))
}

#[inline]
pub fn pointer_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    ndc_from_css(x_css, y_css, rect.width() as f32, rect.height() as f32)
}
