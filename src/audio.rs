use crate::constants::{AUDIO_URL, AUDIO_VOLUME};
use crate::core::{Transport, TransportCommand};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Owns the looping track element and keeps the shared transport in sync
/// with what the element actually does.
pub struct TrackPlayer {
    transport: Rc<RefCell<Transport>>,
    element: RefCell<Option<web::HtmlAudioElement>>,
}

impl TrackPlayer {
    pub fn new(transport: Rc<RefCell<Transport>>) -> Rc<Self> {
        Rc::new(Self {
            transport,
            element: RefCell::new(None),
        })
    }

    /// Play/pause button. The element is created on the first press so the
    /// browser sees playback start from a user gesture.
    pub fn toggle(&self) {
        let command = self.transport.borrow_mut().toggle();
        let Some(el) = self.element() else {
            self.transport.borrow_mut().play_failed();
            return;
        };
        match command {
            TransportCommand::Play => {
                log::info!("[audio] play requested");
                match el.play() {
                    Ok(promise) => {
                        let transport = self.transport.clone();
                        spawn_local(async move {
                            if let Err(e) = JsFuture::from(promise).await {
                                log::error!("[audio] play rejected: {:?}", e);
                                transport.borrow_mut().play_failed();
                            }
                        });
                    }
                    Err(e) => {
                        log::error!("[audio] play error: {:?}", e);
                        self.transport.borrow_mut().play_failed();
                    }
                }
            }
            TransportCommand::Pause => {
                log::info!("[audio] pause");
                if let Err(e) = el.pause() {
                    log::warn!("[audio] pause error: {:?}", e);
                }
            }
        }
    }

    /// Jump to a fraction of the track. No-op until the element exists.
    pub fn seek_fraction(&self, fraction: f64) {
        let Some(t) = self.transport.borrow_mut().seek_fraction(fraction) else {
            return;
        };
        if let Some(el) = self.element.borrow().as_ref() {
            el.set_current_time(t);
        }
    }

    fn element(&self) -> Option<web::HtmlAudioElement> {
        if let Some(el) = self.element.borrow().as_ref() {
            return Some(el.clone());
        }
        let el = match web::HtmlAudioElement::new_with_src(AUDIO_URL) {
            Ok(el) => el,
            Err(e) => {
                log::error!("[audio] HtmlAudioElement error: {:?}", e);
                return None;
            }
        };
        el.set_loop(true);
        el.set_volume(AUDIO_VOLUME);
        self.wire_media_events(&el);
        *self.element.borrow_mut() = Some(el.clone());
        Some(el)
    }

    fn wire_media_events(&self, el: &web::HtmlAudioElement) {
        let transport = self.transport.clone();
        on_media_event(el, "playing", move |_| {
            transport.borrow_mut().confirm_playing();
            log::info!("[audio] playing");
        });
        let transport = self.transport.clone();
        on_media_event(el, "pause", move |_| {
            transport.borrow_mut().paused_externally();
        });
        let transport = self.transport.clone();
        on_media_event(el, "timeupdate", move |el| {
            transport.borrow_mut().set_current_time(el.current_time());
        });
        let transport = self.transport.clone();
        on_media_event(el, "loadedmetadata", move |el| {
            transport.borrow_mut().set_duration(el.duration());
            log::info!("[audio] duration {:.1}s", el.duration());
        });
    }
}

fn on_media_event(
    el: &web::HtmlAudioElement,
    event: &str,
    mut handler: impl FnMut(&web::HtmlAudioElement) + 'static,
) {
    let target = el.clone();
    let closure = Closure::wrap(Box::new(move || handler(&target)) as Box<dyn FnMut()>);
    if let Err(e) = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("[audio] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}
