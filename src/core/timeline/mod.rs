//! Headless timeline engine: layout, viewport math, interaction state, and
//! selection synchronization. No UI types live here; the Dioxus view in
//! `crate::timeline` drives it with timestamps and pixel coordinates and
//! renders whatever geometry it reports.

pub mod animation;
pub mod engine;
pub mod item;
pub mod layout;
pub mod scroll_sync;
pub mod selection;
pub mod ticks;
pub mod viewport;

pub use engine::{EngineConfig, StepKey, TimelineEngine};
pub use item::{AccentKey, DatedEntry, EntryRef, TimeFrameItem};
pub use layout::{LabelPlacement, TimelineLayout, VisibleTimeFrame};
pub use scroll_sync::ScrollSync;
pub use ticks::TickMark;
