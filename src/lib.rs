#![cfg(target_arch = "wasm32")]
use crate::core::models::stage_library;
use crate::core::{CueTrack, OrbitCamera, StageParams, StageScene, Transport};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
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

/// Defaults plus any `?seed=..&pose=..&rate=..` overrides from the page URL.
/// A malformed override is logged and the defaults are kept.
fn params_from_location(window: &web::Window) -> StageParams {
    let search = window.location().search().unwrap_or_default();
    let mut params = StageParams::default();
    if let Err(e) = params.apply_query(&search) {
        log::warn!("[params] {}; using defaults", e);
        return StageParams::default();
    }
    params
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("stage-web starting");

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

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let params = params_from_location(&window);
    let seed = params
        .seed
        .unwrap_or_else(|| (js_sys::Math::random() * u32::MAX as f64) as u64);
    log::info!("[notes] seed={}", seed);

    let transport = Rc::new(RefCell::new(Transport::default()));
    let stage = StageScene::new(
        &params,
        &stage_library(),
        StdRng::seed_from_u64(seed),
        transport.borrow().is_playing(),
    )?;

    let (w, h) = dom::css_size(&canvas);
    let camera = Rc::new(RefCell::new(OrbitCamera::for_viewport(w, h)));

    let player = audio::TrackPlayer::new(transport.clone());
    events::wire_controls(&document, player.clone(), transport.clone());
    events::wire_global_keydown(player);
    events::wire_orbit_controls(&canvas, camera.clone());

    let gpu = frame::init_gpu(&canvas).await;

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        stage,
        transport,
        cues: CueTrack::default(),
        camera,
        notes: overlay::NoteOverlay::new(&document),
        controls: overlay::Controls::default(),
        document,
        canvas,
        gpu,
        draws: Vec::new(),
        started: now,
        last_instant: now,
        viewport: (w, h),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
