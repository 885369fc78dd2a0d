//! Shared Dioxus components and state for zonal anomaly chart apps.
//!
//! This crate provides:
//! - `dataset`: embedded CSV datasets, aligned once and kept immutable
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, legend, containers, etc.)

pub mod components;
pub mod dataset;
pub mod state;
