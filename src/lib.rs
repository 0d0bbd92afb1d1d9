//! Font preview engine.
//!
//! Given a font file or installed family, works out which sizes are worth
//! showing, builds a sample string from the font's own coverage, shapes
//! every view into positioned glyph runs, and serves zoom, resize and
//! pointer queries against the result. Pixel compositing is left to the
//! host.

pub mod config;
pub mod coverage;
pub mod error;
pub mod font;
pub mod preview;
pub mod sizes;
pub mod view;

#[cfg(test)]
mod test_fonts;

pub use config::Config;
pub use error::PreviewError;
pub use font::{FontLibrary, FontSource, GlyphRun, StyleFlags};
pub use preview::{DisplayMode, PreviewModel, PreviewState, SizedRuns};
pub use view::{GlyphTip, InputEvent, PreviewView, Signal};
