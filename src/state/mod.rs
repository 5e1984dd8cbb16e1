//! State Management
//!
//! Global application state shared across components.

pub mod global;

pub use global::{provide_global_state, GlobalState, Prediction};
