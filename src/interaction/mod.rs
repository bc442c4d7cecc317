//! Pointer-driven interaction: hover intent and drag-to-resize.
//!
//! Controllers in this module only compute intents and widths; the coordinator
//! applies them to the store so every write still goes through one place.
//!
//! # Modules
//!
//! - [`geometry`]: Points, rectangles, sensor dead zones, zone classification
//! - [`hover`]: Per-edge hover-intent state machine
//! - [`resize`]: Drag gesture to clamped width

pub mod geometry;
pub mod hover;
pub mod resize;

pub use geometry::{
    classify_pointer, DeadZone, EdgeGeometry, Point, PointerZone, Rect, SensorGeometry,
};
pub use hover::{HoverIntent, HoverIntentController, HoverPhase, HoverTiming};
pub use resize::{DragSession, ResizeController};
