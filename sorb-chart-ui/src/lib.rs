//! Shared Dioxus components and D3.js bridge for the sorbent explorer.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js scatter charts via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals around the control panel
//! - `components`: Reusable RSX components (gas-pair group, pressure slider, etc.)

pub mod js_bridge;
pub mod state;
pub mod components;
