use crate::audio::TrackPlayer;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Space toggles playback, like the on-screen button.
pub fn wire_global_keydown(player: Rc<TrackPlayer>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.repeat() || ev.code() != "Space" {
            return;
        }
        // keep the page from scrolling and buttons from double-firing
        ev.prevent_default();
        log::info!("[keys] space");
        player.toggle();
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
