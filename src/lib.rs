#![cfg(target_arch = "wasm32")]
//! Body-fat visualization: two spheres (estimated fat volume vs. a familiar
//! reference object) rendered with WebGPU into a host-page canvas, with
//! pointer-driven deformation and a click-triggered ripple.
//!
//! The host page mounts one visualization per canvas via [`mount`] and tears
//! it down with `dispose()`. Changing the input mass means dispose + mount:
//! there is deliberately no incremental mesh-update path.

use crate::core::interact::InteractionState;
use crate::core::lifecycle::LoopHandle;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fatviz-web loaded");
    Ok(())
}

/// Handle for one mounted visualization. Owns the loop lifecycle (flag plus
/// GPU resources) and the DOM listeners, so teardown is all-or-nothing.
#[wasm_bindgen]
pub struct FatViz {
    gpu: LoopHandle<render::GpuState<'static>>,
    listeners: Option<events::ListenerSet>,
}

#[wasm_bindgen]
impl FatViz {
    /// Stop the frame loop, release GPU resources and remove all listeners,
    /// all in this call; nothing is deferred to a later frame callback.
    /// Idempotent; the canvas is left blank and can be remounted.
    pub fn dispose(&mut self) {
        self.gpu.dispose();
        self.listeners.take();
        log::info!("[viz] disposed");
    }
}

/// Mount the visualization onto the canvas with the given element id, sized
/// from the estimated fat mass in pounds. Degenerate mass (negative, NaN) is
/// coerced to the minimum sphere rather than rejected.
///
/// Errors only when the canvas element itself is missing (a host wiring
/// bug). An unavailable GPU or a failed program build is logged for the
/// operator and degrades to an empty canvas; remounting retries from
/// scratch.
#[wasm_bindgen]
pub async fn mount(canvas_id: String, fat_mass_lbs: f64) -> Result<FatViz, JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(&canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{canvas_id}")))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("#{canvas_id} is not a canvas")))?;

    // Size the backing store before the surface is created so the first
    // configure sees real dimensions.
    dom::sync_canvas_size(&canvas);

    let epoch = Instant::now();
    let interaction = Rc::new(RefCell::new(InteractionState::default()));
    let listeners = events::wire(&canvas, interaction.clone(), epoch);

    let gpu = LoopHandle::new(frame::init_gpu(&canvas, fat_mass_lbs as f32).await);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        gpu: gpu.clone(),
        interaction,
        epoch,
    }));
    frame::start_loop(frame_ctx);

    Ok(FatViz {
        gpu,
        listeners: Some(listeners),
    })
}

/// Pure helper for the results-page legend: the reference object a given fat
/// mass maps to, as `{ name, itemMassLbs, radiusCm, color }`. Independent of
/// whether any visualization is mounted.
#[wasm_bindgen(js_name = selectReference)]
pub fn select_reference_js(fat_mass_lbs: f64) -> JsValue {
    let entry = crate::core::reference::select_reference(fat_mass_lbs as f32);
    let obj = js_sys::Object::new();
    _ = js_sys::Reflect::set(&obj, &"name".into(), &entry.name.into());
    _ = js_sys::Reflect::set(&obj, &"itemMassLbs".into(), &entry.item_mass_lbs.into());
    _ = js_sys::Reflect::set(&obj, &"radiusCm".into(), &entry.radius_cm.into());
    let color = js_sys::Array::of3(
        &entry.color[0].into(),
        &entry.color[1].into(),
        &entry.color[2].into(),
    );
    _ = js_sys::Reflect::set(&obj, &"color".into(), &color);
    obj.into()
}
