use crate::core::interact::InteractionState;
use crate::{dom, input};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Event closures for one mount, kept alive so they can be removed again at
/// dispose. Handlers overwrite the shared interaction snapshot in place;
/// last value wins and the frame loop reads it once per frame.
pub struct ListenerSet {
    canvas: web::HtmlCanvasElement,
    on_pointer_move: Closure<dyn FnMut(web::PointerEvent)>,
    on_pointer_leave: Closure<dyn FnMut(web::PointerEvent)>,
    on_click: Closure<dyn FnMut(web::MouseEvent)>,
    on_resize: Closure<dyn FnMut()>,
}

/// Attach pointer/click handlers to the canvas and a resize handler to the
/// window. Registration is best-effort: a listener that fails to attach
/// degrades to "no deformation" / "fixed size" rather than an error.
pub fn wire(
    canvas: &web::HtmlCanvasElement,
    interaction: Rc<RefCell<InteractionState>>,
    epoch: Instant,
) -> ListenerSet {
    let move_canvas = canvas.clone();
    let move_state = interaction.clone();
    let on_pointer_move = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let ndc = input::pointer_ndc(&ev, &move_canvas);
        move_state.borrow_mut().pointer_moved(ndc.x, ndc.y);
    }) as Box<dyn FnMut(_)>);

    let leave_state = interaction.clone();
    let on_pointer_leave = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        leave_state.borrow_mut().pointer_left();
    }) as Box<dyn FnMut(_)>);

    let click_state = interaction;
    let on_click = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        click_state
            .borrow_mut()
            .clicked(epoch.elapsed().as_secs_f32());
    }) as Box<dyn FnMut(_)>);

    let resize_canvas = canvas.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        dom::sync_canvas_size(&resize_canvas);
    }) as Box<dyn FnMut()>);

    _ = canvas
        .add_event_listener_with_callback("pointermove", on_pointer_move.as_ref().unchecked_ref());
    _ = canvas.add_event_listener_with_callback(
        "pointerleave",
        on_pointer_leave.as_ref().unchecked_ref(),
    );
    _ = canvas.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }

    ListenerSet {
        canvas: canvas.clone(),
        on_pointer_move,
        on_pointer_leave,
        on_click,
        on_resize,
    }
}

impl ListenerSet {
    /// Remove every listener this mount attached. Safe to call more than
    /// once; removing an already-removed listener is a no-op.
    pub fn detach(&self) {
        _ = self.canvas.remove_event_listener_with_callback(
            "pointermove",
            self.on_pointer_move.as_ref().unchecked_ref(),
        );
        _ = self.canvas.remove_event_listener_with_callback(
            "pointerleave",
            self.on_pointer_leave.as_ref().unchecked_ref(),
        );
        _ = self
            .canvas
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref());
        if let Some(window) = web::window() {
            _ = window.remove_event_listener_with_callback(
                "resize",
                self.on_resize.as_ref().unchecked_ref(),
            );
        }
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        // The closures die with this struct; make sure the DOM stops
        // referencing them first.
        self.detach();
    }
}
