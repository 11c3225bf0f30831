use crate::constants::*;
use crate::core::{
    format_time, EmitterFrame, LastWritten, MotionCurve, NoteEmitter, ParticleId, PlaybackStatus,
    Transport,
};
use crate::dom;
use fnv::FnvHashMap;
use glam::Vec2;
use rand::Rng;
use web_sys as web;

/// DOM mirror of the note pool: one absolutely positioned glyph per live
/// particle, added and removed from the emitter's per-frame deltas.
pub struct NoteOverlay {
    layer: Option<web::HtmlElement>,
    nodes: FnvHashMap<ParticleId, web::Element>,
    // last anchor written, in whole pixels; `None` means hidden
    anchor_px: LastWritten<Option<(i32, i32)>>,
}

impl NoteOverlay {
    pub fn new(document: &web::Document) -> Self {
        let layer = dom::html_element(document, NOTES_LAYER_ID);
        match &layer {
            Some(layer) => {
                inject_keyframes(document, layer);
                let (w, h) = NOTES_LAYER_SIZE_PX;
                dom::set_style(layer, "position", "absolute");
                dom::set_style(layer, "pointer-events", "none");
                dom::set_style(layer, "width", &format!("{}px", w));
                dom::set_style(layer, "height", &format!("{}px", h));
                dom::set_style(layer, "transform", "translate(-50%, -50%)");
            }
            None => log::warn!("[notes] missing #{}", NOTES_LAYER_ID),
        }
        Self {
            layer,
            nodes: FnvHashMap::default(),
            anchor_px: LastWritten::default(),
        }
    }

    /// Centre the layer on the projected anchor point. `None` hides it.
    /// Only touches the DOM when the rounded position changes.
    pub fn set_anchor(&mut self, anchor: Option<Vec2>) {
        let px = anchor.map(|p| (p.x.round() as i32, p.y.round() as i32));
        if !self.anchor_px.set(px) {
            return;
        }
        let Some(layer) = &self.layer else { return };
        match px {
            Some((x, y)) => {
                dom::set_style(layer, "display", "block");
                dom::set_style(layer, "left", &format!("{}px", x));
                dom::set_style(layer, "top", &format!("{}px", y));
            }
            None => dom::set_style(layer, "display", "none"),
        }
    }

    pub fn apply<R: Rng>(
        &mut self,
        document: &web::Document,
        frame: &EmitterFrame,
        emitter: &NoteEmitter<R>,
    ) {
        for id in &frame.expired {
            if let Some(node) = self.nodes.remove(id) {
                node.remove();
            }
        }
        let Some(layer) = &self.layer else { return };
        for id in &frame.spawned {
            let Some(p) = emitter.get(*id) else { continue };
            let Ok(el) = document.create_element("span") else {
                continue;
            };
            el.set_text_content(Some(p.glyph.symbol()));
            let style = format!(
                "position:absolute;left:{:.1}px;top:{:.1}px;color:{};font:{};\
                 text-shadow:{};opacity:0;animation:{} {:.2}s ease-out {:.2}s forwards",
                p.position.x - NOTE_GLYPH_OFFSET_X,
                p.position.y,
                p.color.css(),
                NOTE_FONT,
                NOTE_SHADOW,
                p.curve.css_name(),
                p.curve_duration_sec,
                p.curve_delay_sec,
            );
            _ = el.set_attribute("style", &style);
            if layer.append_child(&el).is_ok() {
                self.nodes.insert(*id, el);
            }
        }
    }
}

fn inject_keyframes(document: &web::Document, layer: &web::HtmlElement) {
    let css: String = MotionCurve::ALL
        .iter()
        .map(|curve| curve.css_keyframes())
        .collect::<Vec<_>>()
        .join("\n");
    if let Ok(style) = document.create_element("style") {
        style.set_text_content(Some(&css));
        _ = layer.append_child(&style);
    }
}

/// Play button, time labels, progress fill and the cue images. Only touches
/// the DOM when a displayed value changes.
#[derive(Default)]
pub struct Controls {
    status: LastWritten<PlaybackStatus>,
    seconds: LastWritten<(u64, u64)>,
    fill_permille: LastWritten<u32>,
    cue_visible: LastWritten<bool>,
}

impl Controls {
    pub fn update(&mut self, document: &web::Document, transport: &Transport, cue_visible: bool) {
        let status = transport.status();
        if self.status.set(status) {
            let icon = match status {
                PlaybackStatus::Stopped => PLAY_ICON,
                PlaybackStatus::Pending | PlaybackStatus::Playing => PAUSE_ICON,
            };
            dom::set_text(document, PLAY_BUTTON_ID, icon);
        }

        let seconds = (
            transport.current_time() as u64,
            transport.duration() as u64,
        );
        if self.seconds.set(seconds) {
            dom::set_text(document, TIME_CURRENT_ID, &format_time(transport.current_time()));
            dom::set_text(document, TIME_TOTAL_ID, &format_time(transport.duration()));
        }

        let permille = (transport.progress_fraction() * 1000.0).round() as u32;
        if self.fill_permille.set(permille) {
            if let Some(fill) = dom::html_element(document, PROGRESS_FILL_ID) {
                dom::set_style(&fill, "width", &format!("{:.1}%", permille as f64 / 10.0));
            }
        }

        if self.cue_visible.set(cue_visible) {
            for id in CUE_IMAGE_IDS {
                dom::set_visible(document, id, cue_visible);
            }
        }
    }
}
