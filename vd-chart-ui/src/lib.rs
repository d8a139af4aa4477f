//! Dioxus components for the visualization dashboard.
//!
//! This crate provides:
//! - `platform`: browser helpers (random numbers, timers, file reading) via `web-sys`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: charts, forms and layout pieces rendered with RSX

pub mod components;
pub mod platform;
pub mod state;
