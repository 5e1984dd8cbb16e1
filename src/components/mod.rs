//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod loading;
pub mod nav;
pub mod prediction_result;
pub mod reading_entry;
pub mod toast;

pub use chart::PredictionChart;
pub use loading::Loading;
pub use nav::Nav;
pub use prediction_result::PredictionResult;
pub use reading_entry::ReadingEntry;
pub use toast::Toast;
