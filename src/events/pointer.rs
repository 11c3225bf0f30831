use crate::core::OrbitCamera;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Per-event cap on wheel delta; a mouse notch reports ~100
const WHEEL_DELTA_MAX: f32 = 10.0;

// MouseEvent.button for the secondary (right) button
const SECONDARY_BUTTON: i16 = 2;

#[derive(Clone, Copy, Default, PartialEq)]
enum DragMode {
    #[default]
    Orbit,
    Pan,
}

#[derive(Default)]
struct DragState {
    pointer: Option<i32>,
    last: Vec2,
    mode: DragMode,
}

/// Drag to orbit, right-drag or shift-drag to pan, wheel to zoom.
pub fn wire_orbit_controls(canvas: &web::HtmlCanvasElement, camera: Rc<RefCell<OrbitCamera>>) {
    let drag = Rc::new(RefCell::new(DragState::default()));

    let drag_down = drag.clone();
    let canvas_down = canvas.clone();
    add_pointer_listener(canvas, "pointerdown", move |ev| {
        let mut d = drag_down.borrow_mut();
        d.pointer = Some(ev.pointer_id());
        d.last = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        d.mode = if ev.button() == SECONDARY_BUTTON || ev.shift_key() {
            DragMode::Pan
        } else {
            DragMode::Orbit
        };
        _ = canvas_down.set_pointer_capture(ev.pointer_id());
    });

    let drag_move = drag.clone();
    let camera_move = camera.clone();
    let canvas_move = canvas.clone();
    add_pointer_listener(canvas, "pointermove", move |ev| {
        let mut d = drag_move.borrow_mut();
        if d.pointer != Some(ev.pointer_id()) {
            return;
        }
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let delta = pos - d.last;
        d.last = pos;
        let mut cam = camera_move.borrow_mut();
        match d.mode {
            DragMode::Orbit => cam.rotate(delta.x, delta.y),
            DragMode::Pan => cam.pan(delta.x, delta.y, canvas_move.client_height() as f32),
        }
    });

    for event in ["pointerup", "pointercancel"] {
        let drag_up = drag.clone();
        add_pointer_listener(canvas, event, move |ev| {
            let mut d = drag_up.borrow_mut();
            if d.pointer == Some(ev.pointer_id()) {
                d.pointer = None;
            }
        });
    }

    // right-drag pans, so keep the context menu off the canvas
    let context_menu = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas
        .add_event_listener_with_callback("contextmenu", context_menu.as_ref().unchecked_ref());
    context_menu.forget();

    let wheel = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        let delta = (ev.delta_y() as f32).clamp(-WHEEL_DELTA_MAX, WHEEL_DELTA_MAX);
        camera.borrow_mut().zoom(delta);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("wheel", wheel.as_ref().unchecked_ref());
    wheel.forget();
}

fn add_pointer_listener(
    canvas: &web::HtmlCanvasElement,
    event: &str,
    mut handler: impl FnMut(&web::PointerEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| handler(&ev))
        as Box<dyn FnMut(web::PointerEvent)>);
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
