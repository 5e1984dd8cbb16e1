//! Glucast Dashboard
//!
//! Short-horizon glucose forecasting UI built with Leptos (WASM).
//!
//! # Features
//!
//! - Comma-separated entry of the last 10 glucose readings
//! - One-click prediction via the forecasting service
//! - Actual vs. predicted chart rendered on canvas
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the prediction service via HTTP.

use leptos::*;

mod api;
mod app;
mod chart;
mod components;
mod pages;
mod readings;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
