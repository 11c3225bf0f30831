use crate::audio::TrackPlayer;
use crate::constants::{PLAY_BUTTON_ID, PROGRESS_BAR_ID};
use crate::core::{format_time, Transport};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

mod keyboard;
mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::wire_orbit_controls;

/// Play/pause button plus the click-to-seek progress bar.
pub fn wire_controls(
    document: &web::Document,
    player: Rc<TrackPlayer>,
    transport: Rc<RefCell<Transport>>,
) {
    let player_play = player.clone();
    dom::add_click_listener(document, PLAY_BUTTON_ID, move || player_play.toggle());

    let Some(bar) = dom::html_element(document, PROGRESS_BAR_ID) else {
        log::warn!("[controls] missing #{}", PROGRESS_BAR_ID);
        return;
    };

    let bar_click = bar.clone();
    let click = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if let Some(f) = bar_fraction(&bar_click, &ev) {
            player.seek_fraction(f);
        }
    }) as Box<dyn FnMut(_)>);
    _ = bar.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
    click.forget();

    let bar_hover = bar.clone();
    let hover = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if let Some(f) = bar_fraction(&bar_hover, &ev) {
            let t = f * transport.borrow().duration();
            bar_hover.set_title(&format!("Seek to {}", format_time(t)));
        }
    }) as Box<dyn FnMut(_)>);
    _ = bar.add_event_listener_with_callback("mousemove", hover.as_ref().unchecked_ref());
    hover.forget();
}

fn bar_fraction(bar: &web::HtmlElement, ev: &web::MouseEvent) -> Option<f64> {
    let rect = bar.get_bounding_client_rect();
    if rect.width() <= 0.0 {
        return None;
    }
    Some(((ev.client_x() as f64 - rect.left()) / rect.width()).clamp(0.0, 1.0))
}
