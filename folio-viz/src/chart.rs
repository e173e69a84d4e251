//! Radar chart geometry for the self-rated skill panel.
//!
//! Pure polygon math; the canvas layer turns it into strokes and fills. Axes
//! fan out from 12 o'clock, the value polygon grows from the center over the
//! animation window with a cubic ease-out.

use std::f32::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

/// Grow-in animation length in milliseconds.
pub const ANIMATION_MS: f32 = 2000.0;
/// Number of concentric grid polygons behind the data.
pub const GRID_RINGS: usize = 4;

/// One chart axis: a skill name and its self-rated score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarAxis {
    pub name: String,
    pub score: f32,
}

/// An N-axis polygon radar chart.
#[derive(Debug, Clone)]
pub struct RadarChart {
    pub axes: Vec<RadarAxis>,
    /// Score corresponding to the outer ring.
    pub max_score: f32,
}

impl RadarChart {
    pub fn new(axes: Vec<RadarAxis>) -> Self {
        Self {
            axes,
            max_score: 100.0,
        }
    }

    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    /// Angle of axis `i` in radians; axis 0 points straight up and the rest
    /// proceed clockwise.
    pub fn axis_angle(&self, i: usize) -> f32 {
        -FRAC_PI_2 + TAU * i as f32 / self.axis_count() as f32
    }

    /// Endpoint of axis `i` on a circle of `radius` around the origin.
    pub fn axis_point(&self, i: usize, radius: f32) -> (f32, f32) {
        let angle = self.axis_angle(i);
        (radius * angle.cos(), radius * angle.sin())
    }

    /// Vertex of the value polygon for axis `i` at animation `progress`
    /// (eased, in [0, 1]).
    pub fn value_point(&self, i: usize, radius: f32, progress: f32) -> (f32, f32) {
        let score = (self.axes[i].score / self.max_score).clamp(0.0, 1.0);
        self.axis_point(i, radius * score * progress)
    }

    /// Vertices of grid ring `ring` (1 = innermost, [`GRID_RINGS`] = outer).
    pub fn ring_points(&self, ring: usize, radius: f32) -> Vec<(f32, f32)> {
        let fraction = ring as f32 / GRID_RINGS as f32;
        (0..self.axis_count())
            .map(|i| self.axis_point(i, radius * fraction))
            .collect()
    }
}

/// Cubic ease-out: fast start settling into the final shape.
pub fn ease_out_cubic(t: f32) -> f32 {
    let x = 1.0 - t.clamp(0.0, 1.0);
    1.0 - x * x * x
}

/// Eased animation progress for an elapsed time since the chart started.
pub fn animation_progress(elapsed_ms: f32) -> f32 {
    ease_out_cubic(elapsed_ms / ANIMATION_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_axis_chart() -> RadarChart {
        RadarChart::new(
            ["n", "e", "s", "w"]
                .iter()
                .map(|name| RadarAxis {
                    name: name.to_string(),
                    score: 50.0,
                })
                .collect(),
        )
    }

    fn assert_close(actual: (f32, f32), expected: (f32, f32)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-4 && (actual.1 - expected.1).abs() < 1e-4,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn four_axes_land_on_the_compass_points() {
        let chart = four_axis_chart();

        assert_close(chart.axis_point(0, 100.0), (0.0, -100.0));
        assert_close(chart.axis_point(1, 100.0), (100.0, 0.0));
        assert_close(chart.axis_point(2, 100.0), (0.0, 100.0));
        assert_close(chart.axis_point(3, 100.0), (-100.0, 0.0));
    }

    #[test]
    fn value_points_scale_with_score_and_progress() {
        let chart = four_axis_chart();

        // Score 50 of 100 at full progress: half the radius.
        assert_close(chart.value_point(0, 100.0, 1.0), (0.0, -50.0));
        // Half progress halves it again.
        assert_close(chart.value_point(0, 100.0, 0.5), (0.0, -25.0));
        // Zero progress collapses to the center.
        assert_close(chart.value_point(0, 100.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn scores_above_max_are_capped_at_the_outer_ring() {
        let mut chart = four_axis_chart();
        chart.axes[1].score = 250.0;

        assert_close(chart.value_point(1, 100.0, 1.0), (100.0, 0.0));
    }

    #[test]
    fn rings_divide_the_radius_evenly() {
        let chart = four_axis_chart();

        let inner = chart.ring_points(1, 100.0);
        let outer = chart.ring_points(GRID_RINGS, 100.0);

        assert_eq!(inner.len(), 4);
        assert_close(inner[0], (0.0, -25.0));
        assert_close(outer[0], (0.0, -100.0));
    }

    #[test]
    fn ease_out_cubic_is_anchored_and_monotonic() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        // Clamped outside the window.
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);

        let mut previous = 0.0;
        for step in 1..=20 {
            let value = ease_out_cubic(step as f32 / 20.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn animation_finishes_at_the_window_end() {
        assert!(animation_progress(0.0) < 0.01);
        assert!(animation_progress(ANIMATION_MS / 2.0) > 0.5);
        assert_eq!(animation_progress(ANIMATION_MS), 1.0);
        assert_eq!(animation_progress(ANIMATION_MS * 2.0), 1.0);
    }
}
