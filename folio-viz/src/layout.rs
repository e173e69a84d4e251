//! Floating skill-label layout.
//!
//! Labels are authored as rough viewport-percentage positions. One synchronous
//! pass per page load turns them into a de-overlapped, bounded, slightly
//! randomized final layout: project to pixels, relax pairwise overlaps, clamp
//! to the viewport, jitter, convert back to percentages.
//!
//! The pass is intentionally not deterministic: the jitter draws fresh random
//! offsets every load so the layout varies a little between visits. The RNG is
//! a parameter so tests can seed it.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A label with its authored approximate position, in viewport percentages.
///
/// Mirrors the skill pin type in the folio content model; kept separate so
/// this crate compiles for WASM without the generator's native dependencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillLabel {
    pub name: String,
    /// Authored horizontal position in [0, 100].
    pub x: f32,
    /// Authored vertical position in [0, 100].
    pub y: f32,
}

/// A label annotated with its resolved position, in viewport percentages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedLabel {
    pub name: String,
    pub x: f32,
    pub y: f32,
}

/// Tuning constants for one layout pass.
#[derive(Debug, Clone)]
pub struct LayoutParams {
    /// Pairwise separation the relaxation works toward, in pixels.
    /// Separation is encouraged, not guaranteed: the pass runs a fixed number
    /// of iterations, it does not iterate to convergence.
    pub min_distance: f32,
    /// Number of relaxation passes.
    pub iterations: usize,
    /// Nominal label diameter in pixels, used for edge clamping.
    pub label_size: f32,
    /// Clamp margin from the viewport edge, in pixels.
    pub margin: f32,
    /// Post-clamp jitter amplitude: each axis moves by a uniform draw from
    /// [-jitter, jitter). Applied after clamping, so a jittered label can sit
    /// marginally outside the clamp bounds.
    pub jitter: f32,
}

impl LayoutParams {
    /// Constants for the current viewport class.
    ///
    /// Compact viewports pack labels tighter; everything else matches the
    /// desktop layout.
    pub fn for_viewport(compact: bool) -> Self {
        Self {
            min_distance: if compact { 60.0 } else { 120.0 },
            iterations: 5,
            label_size: 100.0,
            margin: 30.0,
            jitter: 10.0,
        }
    }
}

/// Resolve the final layout for a set of authored labels.
///
/// Viewport dimensions are captured by the caller once and used for both the
/// projection and the conversion back to percentages.
pub fn resolve_layout(
    labels: &[SkillLabel],
    width: f32,
    height: f32,
    params: &LayoutParams,
    rng: &mut impl Rng,
) -> Vec<PlacedLabel> {
    let mut points = project(labels, width, height);

    for _ in 0..params.iterations {
        relax_pass(&mut points, params.min_distance);
    }
    clamp_to_bounds(&mut points, width, height, params);

    if params.jitter > 0.0 {
        for point in &mut points {
            point.0 += rng.random_range(-params.jitter..params.jitter);
            point.1 += rng.random_range(-params.jitter..params.jitter);
        }
    }

    labels
        .iter()
        .zip(points)
        .map(|(label, (x, y))| PlacedLabel {
            name: label.name.clone(),
            x: x / width * 100.0,
            y: y / height * 100.0,
        })
        .collect()
}

/// Convert authored percentages to absolute pixel coordinates.
fn project(labels: &[SkillLabel], width: f32, height: f32) -> Vec<(f32, f32)> {
    labels
        .iter()
        .map(|label| (label.x / 100.0 * width, label.y / 100.0 * height))
        .collect()
}

/// One repulsion pass over every unordered pair.
///
/// Displacements apply immediately, so later pairs in the same pass see
/// earlier adjustments. Pairs at distance zero have no defined direction and
/// are skipped: coincident labels stay coincident.
fn relax_pass(points: &mut [(f32, f32)], min_distance: f32) {
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let dx = points[j].0 - points[i].0;
            let dy = points[j].1 - points[i].1;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance <= 0.0 || distance >= min_distance {
                continue;
            }

            let force = (min_distance - distance) / distance;
            let fx = dx * force * 0.5;
            let fy = dy * force * 0.5;

            points[i].0 -= fx;
            points[i].1 -= fy;
            points[j].0 += fx;
            points[j].1 += fy;
        }
    }
}

/// Clamp every point per axis to the viewport minus label extent and margin.
fn clamp_to_bounds(points: &mut [(f32, f32)], width: f32, height: f32, params: &LayoutParams) {
    let half = params.label_size / 2.0;
    let low = half + params.margin;

    for point in points {
        point.0 = point.0.clamp(low, width - half - params.margin);
        point.1 = point.1.clamp(low, height - half - params.margin);
    }
}
