//! Skill-node presentation: one positioned DOM element per resolved label,
//! revealed with staggered delays.
//!
//! The delay schedule is pure so the ordering guarantee is testable; the DOM
//! side only creates elements and arms one timer per node. The pop-in and
//! hover transitions belong to the generated page's CSS; revealing a node
//! just toggles a class.

use rand::Rng;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::JsValue;
use web_sys::{Document, Element, HtmlElement};

use crate::layout::PlacedLabel;

/// Delay before the first node reveals.
pub const REVEAL_BASE_MS: u32 = 800;
/// Additional delay per node index.
pub const REVEAL_STEP_MS: u32 = 200;
/// Upper bound (exclusive) of the per-node random offset.
pub const REVEAL_JITTER_MS: u32 = 200;

/// Reveal delay for each node: base + index step + a random offset.
///
/// The jitter range never exceeds the index step, so nodes always reveal in
/// input order even though each delay is randomized.
pub fn reveal_delays(count: usize, rng: &mut impl Rng) -> Vec<u32> {
    (0..count as u32)
        .map(|i| REVEAL_BASE_MS + i * REVEAL_STEP_MS + rng.random_range(0..REVEAL_JITTER_MS))
        .collect()
}

/// Create one element per placed label under `layer` and arm its reveal timer.
pub fn spawn_skill_nodes(
    document: &Document,
    layer: &Element,
    labels: &[PlacedLabel],
    delays: &[u32],
) -> Result<(), JsValue> {
    for (label, delay_ms) in labels.iter().zip(delays) {
        let node = create_skill_node(document, label)?;
        layer.append_child(&node)?;
        schedule_reveal(&node, *delay_ms)?;
    }
    Ok(())
}

fn create_skill_node(document: &Document, label: &PlacedLabel) -> Result<HtmlElement, JsValue> {
    let node = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str("created element is not an HtmlElement"))?;

    node.set_class_name("skill-node");
    node.set_text_content(Some(&label.name));

    let style = node.style();
    style.set_property("left", &format!("{:.3}%", label.x))?;
    style.set_property("top", &format!("{:.3}%", label.y))?;

    Ok(node)
}

fn schedule_reveal(node: &HtmlElement, delay_ms: u32) -> Result<(), JsValue> {
    let class_list = node.class_list();
    let reveal = Closure::once_into_js(move || {
        let _ = class_list.add_1("is-visible");
    });

    crate::window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            reveal.unchecked_ref(),
            delay_ms as i32,
        )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn delays_start_at_the_base_and_stay_in_their_slot() {
        let mut rng = SmallRng::seed_from_u64(3);
        let delays = reveal_delays(13, &mut rng);

        assert_eq!(delays.len(), 13);
        for (i, delay) in delays.iter().enumerate() {
            let slot_start = REVEAL_BASE_MS + i as u32 * REVEAL_STEP_MS;
            assert!((slot_start..slot_start + REVEAL_JITTER_MS).contains(delay));
        }
    }

    #[test]
    fn delays_are_strictly_ordered_by_index() {
        for seed in 0..16 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let delays = reveal_delays(8, &mut rng);
            for pair in delays.windows(2) {
                assert!(pair[0] < pair[1]);
            }
        }
    }

    #[test]
    fn empty_input_produces_no_delays() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(reveal_delays(0, &mut rng).is_empty());
    }
}
