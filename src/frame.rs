use crate::core::{FrameDriver, OrbitCamera, SceneConfig};
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub driver: FrameDriver,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub started: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        config: &SceneConfig,
        camera: Rc<RefCell<OrbitCamera>>,
        canvas: web::HtmlCanvasElement,
        gpu: Option<render::GpuState<'a>>,
    ) -> Self {
        Self {
            driver: FrameDriver::new(config),
            camera,
            canvas,
            gpu,
            started: Instant::now(),
        }
    }

    /// One display refresh: advance the scene, then draw it.
    pub fn frame(&mut self) {
        let now = self.started.elapsed().as_secs_f64();
        let w = self.canvas.width();
        let h = self.canvas.height();

        let Some(g) = &mut self.gpu else {
            return;
        };
        g.resize_if_needed(w, h);
        let (w, h) = g.size();
        self.camera.borrow_mut().set_viewport(w, h);

        let out = self.driver.step(now, w, h);
        let camera = *self.camera.borrow();
        if let Err(e) = g.render(&camera, &out) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    config: &SceneConfig,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, config.particle_count, config.seed).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
