#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, HIDDEN_CLASS, LOADER_ID};
use crate::core::{OrbitCamera, SceneConfig, Translator};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod page;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Scene settings from the page URL; rejected values are logged and left at defaults.
fn config_from_location(window: &web::Window) -> SceneConfig {
    let query = window.location().search().unwrap_or_default();
    let (config, rejected) = SceneConfig::from_query(&query);
    for key in rejected {
        log::warn!("[config] ignoring invalid value for '{}'", key);
    }
    config
}

fn wire_page(window: &web::Window, document: &web::Document, translator: Rc<RefCell<Translator>>) {
    page::apply_language(document, &translator.borrow());
    events::wire_language_switch(document, translator);
    events::wire_nav_scroll(window, document);
    events::wire_mobile_menu(document);
    events::wire_contact_submit(document);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("afriplan-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = config_from_location(&window);

    // Page text works even when WebGPU is unavailable
    let translator = Rc::new(RefCell::new(Translator::new(
        config.language.unwrap_or_default(),
    )));
    wire_page(&window, &document, translator);

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let camera = Rc::new(RefCell::new(OrbitCamera::default()));
    events::wire_orbit_drag(&canvas, camera.clone());

    let gpu = frame::init_gpu(&canvas, &config).await;
    if let Some(loader) = document.get_element_by_id(LOADER_ID) {
        dom::set_class(&loader, HIDDEN_CLASS, true);
    }
    if gpu.is_none() {
        log::warn!("[render] no WebGPU; page runs without the animated background");
        return Ok(());
    }
    log::info!(
        "[scene] particles={} seed={} spin={:?} jitter={:?}",
        config.particle_count,
        config.seed,
        config.rotation,
        config.jitter
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        &config, camera, canvas, gpu,
    )));
    // Start RAF loop
    frame::start_loop(frame_ctx);
    Ok(())
}
