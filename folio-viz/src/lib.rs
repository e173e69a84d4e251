//! Canvas animations and label layout for folio portfolio pages.
//!
//! This crate is the page's animation core, compiled to WASM: an ambient
//! particle field behind the hero section, a one-shot floating-label layout
//! pass, a typewriter headline, and a radar chart of self-rated skills. The
//! simulation and geometry modules are pure Rust and unit tested natively;
//! only the canvas/DOM layers and the entry points below touch the browser.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlCanvasElement, Window};

pub mod canvas;
pub mod chart;
pub mod dom;
pub mod layout;
pub mod particles;
pub mod typing;
pub mod viewport;

use canvas::CanvasLayer;
use chart::RadarChart;
use layout::{LayoutParams, SkillLabel};
use particles::{FieldConfig, ParticleField};
use typing::Typewriter;

/// Install the panic hook for readable browser error messages.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))
}

fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document available"))
}

fn element_by_id(id: &str) -> Result<Element, JsValue> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("element #{id} not found")))
}

fn js_err(message: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&message.to_string())
}

/// Page-load RNG: fresh seed per visit, so layouts and reveal offsets vary
/// between loads but every draw flows through the seedable core functions.
fn page_rng() -> SmallRng {
    SmallRng::seed_from_u64(js_sys::Date::now() as u64)
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> Result<(), JsValue> {
    window()?.request_animation_frame(callback.as_ref().unchecked_ref())?;
    Ok(())
}

/// Run `frame` once per animation frame until it returns false.
///
/// The closure holds itself through the Rc slot so it stays alive for the
/// page lifetime.
fn start_frame_loop(mut frame: impl FnMut() -> bool + 'static) -> Result<(), JsValue> {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_slot = slot.clone();

    *slot.borrow_mut() = Some(Closure::new(move || {
        if !frame() {
            return;
        }
        if let Some(callback) = tick_slot.borrow().as_ref() {
            let _ = request_frame(callback);
        }
    }));

    if let Some(callback) = slot.borrow().as_ref() {
        request_frame(callback)?;
    }
    Ok(())
}

/// Attach a window resize listener that lives for the page lifetime.
fn on_resize(handler: impl FnMut() + 'static) -> Result<(), JsValue> {
    let listener = Closure::<dyn FnMut()>::new(handler);
    window()?.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())?;
    listener.forget();
    Ok(())
}

/// Start the perpetual background particle animation inside the host element.
///
/// The canvas tracks the viewport on resize; particle positions are not
/// renormalized, they drift back in through the normal reflection rule.
#[wasm_bindgen]
pub fn start_particle_field(host_id: &str) -> Result<(), JsValue> {
    let document = document()?;
    let host = element_by_id(host_id)?;
    let layer = CanvasLayer::attach(&document, &host).map_err(js_err)?;

    let win = window()?;
    let (width, height) = viewport::window_size(&win).map_err(js_err)?;
    layer.set_size(width as u32, height as u32);

    let mut rng = page_rng();
    let field = Rc::new(RefCell::new(ParticleField::new(
        width,
        height,
        FieldConfig::default(),
        &mut rng,
    )));

    {
        let field = field.clone();
        let layer = layer.clone();
        on_resize(move || {
            let Ok(win) = window() else { return };
            let Ok((w, h)) = viewport::window_size(&win) else {
                return;
            };
            layer.set_size(w as u32, h as u32);
            field.borrow_mut().resize(w, h);
        })?;
    }

    start_frame_loop(move || {
        let mut field = field.borrow_mut();
        field.step();
        layer.draw_field(&field);
        true
    })
}

/// Resolve final label positions for a set of authored skill labels.
///
/// `labels_json` is an array of `{name, x, y}` objects with positions in
/// viewport percentages; the result uses the same shape. One-shot and pure
/// apart from the per-load random jitter.
#[wasm_bindgen]
pub fn resolve_label_layout(
    labels_json: &str,
    viewport_width: f32,
    viewport_height: f32,
    compact_viewport: bool,
) -> Result<String, JsValue> {
    let labels: Vec<SkillLabel> = serde_json::from_str(labels_json).map_err(js_err)?;
    let params = LayoutParams::for_viewport(compact_viewport);
    let mut rng = page_rng();

    let placed = layout::resolve_layout(&labels, viewport_width, viewport_height, &params, &mut rng);
    serde_json::to_string(&placed).map_err(js_err)
}

/// Resolve the label layout for the current viewport and stage the skill
/// nodes into the layer element with staggered reveals.
#[wasm_bindgen]
pub fn start_skill_nodes(layer_id: &str, labels_json: &str) -> Result<(), JsValue> {
    let labels: Vec<SkillLabel> = serde_json::from_str(labels_json).map_err(js_err)?;
    let document = document()?;
    let layer = element_by_id(layer_id)?;

    let win = window()?;
    let (width, height) = viewport::window_size(&win).map_err(js_err)?;
    let user_agent = viewport::user_agent(&win).map_err(js_err)?;
    let params = LayoutParams::for_viewport(viewport::is_compact(width, &user_agent));

    let mut rng = page_rng();
    let placed = layout::resolve_layout(&labels, width, height, &params, &mut rng);
    let delays = dom::reveal_delays(placed.len(), &mut rng);

    dom::spawn_skill_nodes(&document, &layer, &placed, &delays)
}

/// Start the typewriter effect on the target element.
///
/// `texts_json` is an array of strings cycled through indefinitely.
#[wasm_bindgen]
pub fn start_typing(target_id: &str, texts_json: &str) -> Result<(), JsValue> {
    let texts: Vec<String> = serde_json::from_str(texts_json).map_err(js_err)?;
    if texts.is_empty() {
        return Ok(());
    }

    let target = element_by_id(target_id)?;
    schedule_typing_tick(target, Typewriter::new(texts), typing::TYPE_DELAY_MS)
}

/// Arm one timer tick; each tick advances the machine and hands it to the next.
fn schedule_typing_tick(
    target: Element,
    mut machine: Typewriter,
    delay_ms: u32,
) -> Result<(), JsValue> {
    let tick = Closure::once_into_js(move || {
        let frame = machine.tick();
        target.set_text_content(Some(&frame.text));
        let _ = schedule_typing_tick(target, machine, frame.delay_ms);
    });

    window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(tick.unchecked_ref(), delay_ms as i32)?;
    Ok(())
}

/// Draw the radar chart on the target canvas, growing it in over the
/// animation window, and keep it sized to its container afterwards.
///
/// `axes_json` is an array of `{name, score}` objects, scores out of 100.
#[wasm_bindgen]
pub fn start_radar_chart(canvas_id: &str, axes_json: &str) -> Result<(), JsValue> {
    let axes: Vec<chart::RadarAxis> = serde_json::from_str(axes_json).map_err(js_err)?;
    let canvas = element_by_id(canvas_id)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("target element is not a canvas"))?;
    let layer = CanvasLayer::from_canvas(canvas).map_err(js_err)?;
    let chart_data = Rc::new(RadarChart::new(axes));

    let (width, height) = layer.client_size();
    layer.set_size(width, height);

    {
        let layer = layer.clone();
        let chart_data = chart_data.clone();
        on_resize(move || {
            let (width, height) = layer.client_size();
            layer.set_size(width, height);
            layer.draw_radar(&chart_data, 1.0);
        })?;
    }

    let started_at = js_sys::Date::now();
    start_frame_loop(move || {
        let elapsed = (js_sys::Date::now() - started_at) as f32;
        let progress = chart::animation_progress(elapsed);
        layer.draw_radar(&chart_data, progress);
        progress < 1.0
    })
}
