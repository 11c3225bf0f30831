use crate::core::*;
use crate::dom;
use crate::overlay::{Controls, NoteOverlay};
use crate::render;
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub stage: StageScene<StdRng>,
    pub transport: Rc<RefCell<Transport>>,
    pub cues: CueTrack,
    pub camera: Rc<RefCell<OrbitCamera>>,

    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub notes: NoteOverlay,
    pub controls: Controls,

    pub gpu: Option<render::GpuState<'a>>,
    pub draws: Vec<DrawItem>,

    pub started: Instant,
    pub last_instant: Instant,
    pub viewport: (f32, f32),
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed = (now - self.started).as_secs_f64();

        let (playing, track_time) = {
            let t = self.transport.borrow();
            (t.is_playing(), t.current_time())
        };
        let out = self.stage.update(FrameInput {
            elapsed,
            dt: dt_sec,
            playing,
        });
        if playing {
            self.cues.observe(track_time, elapsed);
        }

        let (w, h) = dom::css_size(&self.canvas);
        if (w, h) != self.viewport && w > 0.0 && h > 0.0 {
            self.camera.borrow_mut().set_viewport(w, h);
            self.viewport = (w, h);
        }
        let camera = self.camera.borrow();

        self.notes
            .set_anchor(camera.project(NOTE_OVERLAY_ANCHOR, w, h));
        if !out.notes.is_empty() {
            self.notes
                .apply(&self.document, &out.notes, self.stage.emitter());
        }
        self.controls.update(
            &self.document,
            &self.transport.borrow(),
            self.cues.is_visible(elapsed, out.curtain_open),
        );

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            self.stage.collect_draws(&mut self.draws);
            let aspect = self.canvas.width() as f32 / self.canvas.height().max(1) as f32;
            if let Err(e) = g.render(camera.view_proj(aspect), &self.draws) {
                log::error!("[gpu] render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
