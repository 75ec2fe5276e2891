use crate::core::OrbitCamera;
use crate::input::{self, DragState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drag on the canvas orbits the camera around the orb.
pub fn wire_orbit_drag(canvas: &web::HtmlCanvasElement, camera: Rc<RefCell<OrbitCamera>>) {
    let drag = Rc::new(RefCell::new(DragState::default()));

    // pointerdown
    {
        let drag_d = drag.clone();
        let canvas_d = canvas.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = input::pointer_canvas_px(&ev, &canvas_d);
            drag_d.borrow_mut().begin(ev.pointer_id(), pos);
            _ = canvas_d.set_pointer_capture(ev.pointer_id());
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove
    {
        let drag_m = drag.clone();
        let canvas_m = canvas.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = input::pointer_canvas_px(&ev, &canvas_m);
            let delta = drag_m.borrow_mut().step(ev.pointer_id(), pos);
            if let Some(d) = delta {
                let h = canvas_m.height() as f32;
                camera.borrow_mut().orbit_by_pixels(d.x, d.y, h);
            }
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerup / pointercancel
    {
        let drag_u = drag;
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            drag_u.borrow_mut().end(ev.pointer_id());
        }) as Box<dyn FnMut(_)>);
        for kind in ["pointerup", "pointercancel"] {
            _ = canvas.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}
