//! Pages
//!
//! Top-level page components for each route.

pub mod predict;
pub mod settings;

pub use predict::Predict;
pub use settings::Settings;
