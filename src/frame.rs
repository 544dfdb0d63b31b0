use crate::core::interact::InteractionState;
use crate::core::lifecycle::LoopHandle;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one frame tick needs. Pointer/click handlers mutate
/// `interaction` between ticks; the tick reads it exactly once. Nothing here
/// runs concurrently, so plain Rc/RefCell sharing is safe.
pub struct FrameContext<'a> {
    pub canvas: web::HtmlCanvasElement,
    pub gpu: LoopHandle<render::GpuState<'a>>,
    pub interaction: Rc<RefCell<InteractionState>>,
    /// Mount instant; frame time and click timestamps share this epoch.
    pub epoch: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let t = self.epoch.elapsed().as_secs_f32();

        // Advance pointer smoothing once per frame, then snapshot it for the
        // draw so the handlers can keep mutating the raw state.
        let snapshot = {
            let mut state = self.interaction.borrow_mut();
            state.step();
            *state
        };

        self.gpu.with(|g| {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(t, &snapshot) {
                log::error!("render error: {:?}", e);
            }
        });
    }
}

/// Initialize WebGPU for a canvas. A missing adapter or failed program build
/// is reported to the operator log and yields `None`; the caller keeps
/// running with an inert (never-drawing) loop per the degradation contract.
pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    fat_mass_lbs: f32,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, fat_mass_lbs).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {e}");
            None
        }
    }
}

/// Drive the frame loop with requestAnimationFrame. The closure re-arms
/// itself only while the lifecycle handle holds; `dispose` lowers the flag
/// and drops the GPU state (buffers, pipeline, surface) in the same call, so
/// the pending callback finds nothing to draw and exits without re-arming.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow().gpu.is_running() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
