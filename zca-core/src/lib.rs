//! Core types for zonal climate anomaly overlays.
//!
//! - `table`: the observation table loaded from CSV
//! - `calendar`: day-of-year index and leap-day-free alignment
//! - `region`: latitude band definitions for the reference map
//! - `config`: year range, region selection and labels

pub mod calendar;
pub mod color;
pub mod config;
pub mod date_range;
pub mod error;
pub mod region;
pub mod table;

pub use error::{Result, ZonalError};
