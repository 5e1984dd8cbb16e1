//! HTTP API
//!
//! Client for the glucose prediction service.

pub mod client;

pub use client::*;
