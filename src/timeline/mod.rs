//! Dioxus view over the headless timeline engine.

mod panel;
mod ruler;

pub use panel::{now_ms, TimelineView};
