//! Chart Component
//!
//! Owns the live [`LineChart`] instance and redraws it whenever a new
//! prediction arrives. The previous instance is always destroyed before
//! its replacement is created, so the canvas never accumulates overlapping
//! renders.

use leptos::*;

use crate::chart::{Dataset, LineChart, ACTUAL_COLOR, PREDICTED_COLOR};
use crate::readings::TIME_LABELS;
use crate::state::global::GlobalState;

/// Actual-vs-predicted chart component
#[component]
pub fn PredictionChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Single owner of the chart handle. None until the first successful
    // prediction; replaced, never mutated in place, on each one after.
    let chart_handle: StoredValue<Option<LineChart>> = store_value(None);

    create_effect(move |_| {
        let Some(prediction) = state.prediction.get() else {
            return;
        };

        if let Some(canvas) = canvas_ref.get() {
            chart_handle.update_value(|handle| {
                // Release the previous instance before binding a new one
                // to the same canvas.
                if let Some(previous) = handle.take() {
                    previous.destroy();
                }

                let chart = LineChart::new(
                    &canvas,
                    TIME_LABELS.to_vec(),
                    vec![
                        Dataset::actual(prediction.readings.clone()),
                        Dataset::predicted(prediction.predicted.clone()),
                    ],
                );
                chart.draw();
                *handle = Some(chart);
            });
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg bg-white"
            />

            // Legend
            <ChartLegend />
        </div>
    }
}

/// Chart legend showing series colors; dark fixed-size text on the
/// light chart card.
#[component]
fn ChartLegend() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {move || {
                if state.prediction.get().is_none() {
                    return view! {}.into_view();
                }

                [("Actual Glucose", ACTUAL_COLOR), ("Predicted Glucose", PREDICTED_COLOR)]
                    .into_iter()
                    .map(|(label, color)| {
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", color)
                                />
                                <span class="text-sm text-gray-900">{label}</span>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_view()
            }}
        </div>
    }
}
