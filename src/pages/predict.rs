//! Predict Page
//!
//! Main view: reading entry, prediction result, and the chart.

use leptos::*;

use crate::components::{PredictionChart, PredictionResult, ReadingEntry};

/// Predict page component
#[component]
pub fn Predict() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Glucose Prediction"</h1>
                <p class="text-gray-400 mt-1">
                    "Forecast the next readings from your last ten"
                </p>
            </div>

            // Entry section
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Readings"</h2>
                <ReadingEntry />
            </section>

            // Result section
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Result"</h2>
                <PredictionResult />
            </section>

            // Chart section, light card so the series and legend read
            // the way the clinic printouts do
            <section class="bg-white rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4 text-gray-900">"Actual vs. Predicted"</h2>
                <PredictionChart />
            </section>
        </div>
    }
}
