//! Shared Dioxus components and D3.js bridge for the chart apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js chart functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (controls, containers, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
