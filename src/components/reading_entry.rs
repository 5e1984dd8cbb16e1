//! Reading Entry Component
//!
//! Form for submitting the last 10 glucose readings.
//!
//! Validation happens here, before anything touches the network: bad
//! input gets a blocking alert and the request is never built. Transport
//! failures are logged to the console only; application-level errors
//! from the service land in the result area.

use leptos::*;

use crate::api;
use crate::api::PredictError;
use crate::readings::{ReadingSequence, WINDOW};
use crate::state::global::GlobalState;

/// Reading entry form component
#[component]
pub fn ReadingEntry() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (input, set_input) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let readings = match input.get().parse::<ReadingSequence>() {
            Ok(readings) => readings,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };

        set_submitting.set(true);
        state.loading.set(true);

        // No cancellation: if two requests overlap, the last response to
        // arrive determines the final state.
        let state_clone = state.clone();
        spawn_local(async move {
            match api::predict(&readings).await {
                Ok(predicted) => {
                    state_clone.set_prediction(readings.into_values(), predicted);
                }
                Err(PredictError::Service(message)) => {
                    state_clone.set_service_error(message);
                }
                Err(PredictError::Transport(e)) => {
                    web_sys::console::error_1(
                        &format!("Prediction request failed: {}", e).into(),
                    );
                }
            }
            state_clone.loading.set(false);
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div>
                <label class="block text-sm text-gray-400 mb-2">
                    {format!("Last {} readings (mg/dL, oldest first, comma separated)", WINDOW)}
                </label>
                <input
                    type="text"
                    placeholder="80,85,90,95,100,105,110,115,120,125"
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white font-mono
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors flex items-center justify-center space-x-2"
            >
                {move || if submitting.get() {
                    view! {
                        <div class="loading-spinner w-5 h-5" />
                        <span>"Predicting..."</span>
                    }.into_view()
                } else {
                    view! {
                        <span>"Predict"</span>
                    }.into_view()
                }}
            </button>
        </form>
    }
}

/// Blocking browser alert for validation failures.
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
