//! Locates installed fonts for tests that need real font data.
//!
//! Tests call these and return early when the font is missing, so the suite
//! still passes on machines without the usual system fonts.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::font::discovery::{build_font_index, font_dirs};

/// Common Latin sans-serif fonts, most likely first.
const LATIN_SANS: &[&str] = &[
    "DejaVuSans.ttf",
    "LiberationSans-Regular.ttf",
    "NotoSans-Regular.ttf",
    "Arial.ttf",
    "arial.ttf",
];

/// Monospace fonts with narrower coverage than `LATIN_SANS`.
const MONO: &[&str] = &[
    "DejaVuSansMono.ttf",
    "LiberationMono-Regular.ttf",
    "NotoSansMono-Regular.ttf",
    "consola.ttf",
];

fn index() -> &'static HashMap<String, PathBuf> {
    static INDEX: OnceLock<HashMap<String, PathBuf>> = OnceLock::new();
    INDEX.get_or_init(|| build_font_index(&font_dirs(&[])))
}

/// First installed font among `names`.
pub fn find(names: &[&str]) -> Option<PathBuf> {
    let found = names.iter().find_map(|name| index().get(*name).cloned());
    if found.is_none() {
        eprintln!("skipping: none of {names:?} installed");
    }
    found
}

pub fn latin_sans() -> Option<PathBuf> {
    find(LATIN_SANS)
}

pub fn mono() -> Option<PathBuf> {
    find(MONO)
}

/// Bitmap-only face checked into `tests/fonts`: a single 8ppem EBLC/EBDT
/// strike, no outlines, mapping `"`, `-`, `A`-`D` and `a`-`d`.
pub fn bitmap() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fonts/bitmap-8px.otb")
}
