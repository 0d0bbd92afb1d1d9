//! Core preview-state data structures and logic.
//!
//! This crate provides the toolkit-agnostic pieces of the font preview
//! engine: pixel geometry, the ordered list of preview sizes, the zoom
//! state machine over that list, and pointer hit testing against the last
//! laid-out glyphs. It contains no font parsing, shaping, I/O, or
//! platform-specific code.

pub mod geometry;
pub mod hit;
pub mod sizes;
pub mod zoom;

pub use geometry::{Point, Rect};
pub use hit::{GlyphLayout, GlyphPlacement, HitTester};
pub use sizes::{SCALABLE_SIZES, SizeList};
pub use zoom::{ZoomController, ZoomDirection};
