use crate::constants::{CURSOR_HOVER, CURSOR_IDLE};
use crate::context::SceneContext;
use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: Rc<RefCell<SceneContext>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let viewport = input::canvas_viewport(&w.canvas);

        let mut ctx = w.ctx.borrow_mut();
        let hovered = match ctx.picker.pick(pos, &viewport, &ctx.camera, &ctx.scene) {
            Ok(hit) => hit.map(|h| h.object),
            Err(e) => {
                log::warn!("[pick] hover: {}", e);
                None
            }
        };
        if hovered != ctx.hovered {
            ctx.hovered = hovered;
            dom::set_cursor(
                &w.canvas,
                if hovered.is_some() {
                    CURSOR_HOVER
                } else {
                    CURSOR_IDLE
                },
            );
        }
    }) as Box<dyn FnMut(_)>);

    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        ev.prevent_default();
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let viewport = input::canvas_viewport(&w.canvas);

        let mut guard = w.ctx.borrow_mut();
        let SceneContext {
            scene,
            camera,
            picker,
            ..
        } = &mut *guard;
        match picker.handle_pointer_down(pos, &viewport, camera, scene) {
            Ok(Some(hit)) => {
                log::info!("[pick] hit {:?} at distance {:.3}", hit.object, hit.distance)
            }
            Ok(None) => log::debug!("[pick] miss at ({:.1},{:.1})", pos.x, pos.y),
            Err(e) => log::error!("[pick] {}", e),
        }
    }) as Box<dyn FnMut(_)>);

    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}
