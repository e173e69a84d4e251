//! 2D canvas drawing for the particle field and the radar chart.
//!
//! Thin presentation layer over the pure simulation/geometry modules. All
//! errors surface as strings for the WASM boundary to wrap.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement};

use crate::chart::{GRID_RINGS, RadarChart};
use crate::particles::ParticleField;

/// Accent color shared by the particle field and the chart.
const ACCENT_SOLID: &str = "#ff6b35";

fn accent(alpha: f32) -> String {
    format!("rgba(255, 107, 53, {alpha})")
}

/// A canvas element and its 2D context.
#[derive(Clone)]
pub struct CanvasLayer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasLayer {
    /// Wrap an existing canvas element.
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("failed to get 2d context: {e:?}"))?
            .ok_or("2d context not available")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "failed to cast to CanvasRenderingContext2d")?;

        Ok(Self { canvas, ctx })
    }

    /// Create a canvas, append it to the host element, and wrap it.
    pub fn attach(document: &Document, host: &Element) -> Result<Self, String> {
        let canvas = document
            .create_element("canvas")
            .map_err(|e| format!("failed to create canvas: {e:?}"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| "created element is not a canvas")?;
        host.append_child(&canvas)
            .map_err(|e| format!("failed to attach canvas: {e:?}"))?;
        Self::from_canvas(canvas)
    }

    /// Update the canvas backing-store dimensions.
    pub fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    pub fn width(&self) -> f32 {
        self.canvas.width() as f32
    }

    pub fn height(&self) -> f32 {
        self.canvas.height() as f32
    }

    /// Width of the element's CSS box, for canvases sized by the page layout.
    pub fn client_size(&self) -> (u32, u32) {
        (
            self.canvas.client_width().max(1) as u32,
            self.canvas.client_height().max(1) as u32,
        )
    }

    pub fn clear(&self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width() as f64, self.height() as f64);
    }

    /// Draw one frame of the particle field: links first, dots on top.
    pub fn draw_field(&self, field: &ParticleField) {
        self.clear();

        self.ctx.set_stroke_style_str(&accent(0.12));
        self.ctx.set_line_width(1.0);
        for (i, j) in field.links() {
            let a = field.particles[i];
            let b = field.particles[j];
            self.ctx.begin_path();
            self.ctx.move_to(a.x as f64, a.y as f64);
            self.ctx.line_to(b.x as f64, b.y as f64);
            self.ctx.stroke();
        }

        self.ctx.set_fill_style_str(&accent(0.39));
        for p in &field.particles {
            self.ctx.begin_path();
            self.ctx
                .arc(
                    p.x as f64,
                    p.y as f64,
                    (p.size / 2.0) as f64,
                    0.0,
                    std::f64::consts::TAU,
                )
                .ok();
            self.ctx.fill();
        }
    }

    /// Draw the radar chart at the given eased animation progress.
    pub fn draw_radar(&self, chart: &RadarChart, progress: f32) {
        self.clear();
        if chart.axis_count() == 0 {
            return;
        }

        let cx = self.width() / 2.0;
        let cy = self.height() / 2.0;
        // Leave room around the outer ring for the axis names.
        let radius = (self.width().min(self.height()) / 2.0 - 28.0).max(10.0);

        // Grid rings.
        self.ctx.set_stroke_style_str(&accent(0.3));
        self.ctx.set_line_width(1.0);
        for ring in 1..=GRID_RINGS {
            self.trace_polygon(&chart.ring_points(ring, radius), cx, cy);
            self.ctx.stroke();
        }

        // Axis spokes.
        self.ctx.set_stroke_style_str(&accent(0.5));
        for i in 0..chart.axis_count() {
            let (x, y) = chart.axis_point(i, radius);
            self.ctx.begin_path();
            self.ctx.move_to(cx as f64, cy as f64);
            self.ctx.line_to((cx + x) as f64, (cy + y) as f64);
            self.ctx.stroke();
        }

        // Axis names just past the outer ring.
        self.ctx
            .set_font("12px -apple-system, BlinkMacSystemFont, sans-serif");
        self.ctx.set_fill_style_str("#ffffff");
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        for (i, axis) in chart.axes.iter().enumerate() {
            let (x, y) = chart.axis_point(i, radius + 16.0);
            let _ = self.ctx.fill_text(&axis.name, (cx + x) as f64, (cy + y) as f64);
        }

        // Value polygon, grown by the animation progress.
        let values: Vec<(f32, f32)> = (0..chart.axis_count())
            .map(|i| chart.value_point(i, radius, progress))
            .collect();
        self.trace_polygon(&values, cx, cy);
        self.ctx.set_fill_style_str(&accent(0.3));
        self.ctx.fill();
        self.ctx.set_stroke_style_str(ACCENT_SOLID);
        self.ctx.set_line_width(2.0);
        self.ctx.stroke();

        // Vertex dots.
        self.ctx.set_fill_style_str(ACCENT_SOLID);
        for (x, y) in values {
            self.ctx.begin_path();
            self.ctx
                .arc((cx + x) as f64, (cy + y) as f64, 3.0, 0.0, std::f64::consts::TAU)
                .ok();
            self.ctx.fill();
        }
    }

    fn trace_polygon(&self, points: &[(f32, f32)], cx: f32, cy: f32) {
        self.ctx.begin_path();
        for (k, (x, y)) in points.iter().enumerate() {
            let px = (cx + x) as f64;
            let py = (cy + y) as f64;
            if k == 0 {
                self.ctx.move_to(px, py);
            } else {
                self.ctx.line_to(px, py);
            }
        }
        self.ctx.close_path();
    }
}
