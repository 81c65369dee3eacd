#![cfg(target_arch = "wasm32")]
use cube_core::DEFAULT_CUBE_URL;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod context;
mod dom;
mod events;
mod frame;
mod input;
mod navigate;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cube-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let ctx = Rc::new(RefCell::new(context::SceneContext::with_linked_cube(
        DEFAULT_CUBE_URL,
        canvas.width(),
        canvas.height(),
    )));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        ctx: ctx.clone(),
    });

    // Picking keeps working without a GPU; only drawing is skipped
    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext { ctx, canvas, gpu }));
    frame::start_loop(frame_ctx);
    Ok(())
}
