//! Prediction Result Component
//!
//! Renders the outcome of the latest prediction: the forecast values on
//! success, the service's message on an application-level error, or an
//! idle hint before the first run.

use leptos::*;

use crate::components::Loading;
use crate::state::global::GlobalState;

/// Result area component
#[component]
pub fn PredictionResult() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="min-h-[6rem]">
            {move || {
                if state.loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                if let Some(message) = state.service_error.get() {
                    return view! {
                        <p class="text-red-400 font-medium">{message}</p>
                    }.into_view();
                }

                match state.prediction.get() {
                    Some(prediction) => view! {
                        <div class="space-y-2">
                            <h3 class="text-lg font-semibold text-green-400">
                                "Predicted Glucose Levels"
                            </h3>
                            <p class="font-mono text-white">
                                {format_values(&prediction.predicted)}
                            </p>
                        </div>
                    }.into_view(),
                    None => view! {
                        <p class="text-gray-400 text-sm">
                            "Enter your readings above and press Predict."
                        </p>
                    }.into_view(),
                }
            }}
        </div>
    }
}

/// Join a value series for display, in order, one decimal place each.
fn format_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{:.1}", v))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_values_in_order() {
        assert_eq!(
            format_values(&[128.0, 130.5, 132.25]),
            "128.0, 130.5, 132.2"
        );
    }

    #[test]
    fn formats_empty_series() {
        assert_eq!(format_values(&[]), "");
    }

    #[test]
    fn formats_full_window() {
        let values: Vec<f64> = (0..10).map(|i| 128.0 + i as f64).collect();
        let rendered = format_values(&values);
        assert_eq!(rendered.matches(", ").count(), 9);
        assert!(rendered.starts_with("128.0"));
        assert!(rendered.ends_with("137.0"));
    }
}
