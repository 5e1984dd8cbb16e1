//! Line Chart
//!
//! Actual-vs-predicted line chart rendered on HTML5 Canvas.
//!
//! A [`LineChart`] is bound to one canvas element. Exactly one instance
//! is live per canvas at a time: callers must [`LineChart::destroy`] the
//! previous instance before drawing a replacement, so stale pixels never
//! survive a redraw.

pub mod scale;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use self::scale::{x_position, ValueBounds};

/// Solid series color (actual readings)
pub const ACTUAL_COLOR: &str = "#1f77b4";
/// Dashed series color (predicted readings)
pub const PREDICTED_COLOR: &str = "#ff7f0e";

/// Light gridline color for both axes
const GRID_COLOR: &str = "rgba(200, 200, 200, 0.4)";
/// Axis tick label color
const TICK_COLOR: &str = "#4b5563";
/// Chart background
const BACKGROUND_COLOR: &str = "#ffffff";

/// One plotted series.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub label: &'static str,
    pub color: &'static str,
    pub dashed: bool,
    pub values: Vec<f64>,
}

impl Dataset {
    /// The measured readings: solid line.
    pub fn actual(values: Vec<f64>) -> Self {
        Self {
            label: "Actual Glucose",
            color: ACTUAL_COLOR,
            dashed: false,
            values,
        }
    }

    /// The forecast: dashed line.
    pub fn predicted(values: Vec<f64>) -> Self {
        Self {
            label: "Predicted Glucose",
            color: PREDICTED_COLOR,
            dashed: true,
            values,
        }
    }
}

/// A line chart instance bound to a canvas element.
pub struct LineChart {
    canvas: HtmlCanvasElement,
    labels: Vec<&'static str>,
    datasets: Vec<Dataset>,
}

impl LineChart {
    pub fn new(
        canvas: &HtmlCanvasElement,
        labels: Vec<&'static str>,
        datasets: Vec<Dataset>,
    ) -> Self {
        Self {
            canvas: canvas.clone(),
            labels,
            datasets,
        }
    }

    /// Render the full chart: background, grid, tick labels, series.
    pub fn draw(&self) {
        let Some(ctx) = context_2d(&self.canvas) else {
            return;
        };

        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;

        // Margins
        let margin_left = 60.0;
        let margin_right = 20.0;
        let margin_top = 20.0;
        let margin_bottom = 40.0;

        let chart_width = width - margin_left - margin_right;
        let chart_height = height - margin_top - margin_bottom;

        // Clear canvas
        ctx.set_fill_style(&BACKGROUND_COLOR.into());
        ctx.fill_rect(0.0, 0.0, width, height);

        let bounds = ValueBounds::from_series(self.datasets.iter().map(|d| d.values.as_slice()));

        // Horizontal grid lines with y-axis tick labels (5 divisions)
        ctx.set_stroke_style(&GRID_COLOR.into());
        ctx.set_line_width(1.0);

        for i in 0..=5 {
            let y = margin_top + (i as f64 / 5.0) * chart_height;
            ctx.begin_path();
            ctx.move_to(margin_left, y);
            ctx.line_to(width - margin_right, y);
            ctx.stroke();

            ctx.set_fill_style(&TICK_COLOR.into());
            ctx.set_font("12px sans-serif");
            let _ = ctx.fill_text(&format!("{:.1}", bounds.tick_value(i, 5)), 5.0, y + 4.0);
        }

        // Vertical grid lines, one per time step
        ctx.set_stroke_style(&GRID_COLOR.into());
        for i in 0..self.labels.len() {
            let x = x_position(i, self.labels.len(), margin_left, chart_width);
            ctx.begin_path();
            ctx.move_to(x, margin_top);
            ctx.line_to(x, height - margin_bottom);
            ctx.stroke();
        }

        // Series lines and point markers
        for dataset in &self.datasets {
            if dataset.values.is_empty() {
                continue;
            }

            self.set_dash(&ctx, dataset.dashed);
            ctx.set_stroke_style(&dataset.color.into());
            ctx.set_line_width(3.0);
            ctx.begin_path();

            // Values are positional against the label window; anything
            // past it has no time step to land on.
            let plotted = dataset.values.iter().take(self.labels.len());

            for (i, &value) in plotted.clone().enumerate() {
                let x = x_position(i, self.labels.len(), margin_left, chart_width);
                let y = bounds.y_position(value, margin_top, chart_height);

                if i == 0 {
                    ctx.move_to(x, y);
                } else {
                    ctx.line_to(x, y);
                }
            }

            ctx.stroke();
            self.set_dash(&ctx, false);

            // Filled markers with a white border ring
            for (i, &value) in plotted.enumerate() {
                let x = x_position(i, self.labels.len(), margin_left, chart_width);
                let y = bounds.y_position(value, margin_top, chart_height);

                ctx.begin_path();
                let _ = ctx.arc(x, y, 5.0, 0.0, std::f64::consts::PI * 2.0);
                ctx.set_fill_style(&dataset.color.into());
                ctx.fill();
                ctx.set_stroke_style(&"#ffffff".into());
                ctx.set_line_width(1.5);
                ctx.stroke();
            }
        }

        // X-axis time step labels
        ctx.set_fill_style(&TICK_COLOR.into());
        ctx.set_font("12px sans-serif");
        for (i, label) in self.labels.iter().enumerate() {
            let x = x_position(i, self.labels.len(), margin_left, chart_width);
            let _ = ctx.fill_text(label, x - 12.0, height - 10.0);
        }
    }

    /// Release the instance, clearing everything it drew.
    pub fn destroy(self) {
        if let Some(ctx) = context_2d(&self.canvas) {
            ctx.clear_rect(
                0.0,
                0.0,
                self.canvas.width() as f64,
                self.canvas.height() as f64,
            );
        }
    }

    fn set_dash(&self, ctx: &CanvasRenderingContext2d, dashed: bool) {
        let segments = js_sys::Array::new();
        if dashed {
            segments.push(&JsValue::from_f64(5.0));
            segments.push(&JsValue::from_f64(5.0));
        }
        let _ = ctx.set_line_dash(&segments);
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actual_dataset_is_solid() {
        let dataset = Dataset::actual(vec![100.0, 110.0]);
        assert_eq!(dataset.color, ACTUAL_COLOR);
        assert!(!dataset.dashed);
        assert_eq!(dataset.label, "Actual Glucose");
    }

    #[test]
    fn predicted_dataset_is_dashed() {
        let dataset = Dataset::predicted(vec![120.0, 125.0]);
        assert_eq!(dataset.color, PREDICTED_COLOR);
        assert!(dataset.dashed);
        assert_eq!(dataset.label, "Predicted Glucose");
    }

    #[test]
    fn series_colors_differ() {
        assert_ne!(ACTUAL_COLOR, PREDICTED_COLOR);
    }
}
