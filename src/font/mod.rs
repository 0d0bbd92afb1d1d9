//! Font resources, face loading, discovery, and text shaping.
//!
//! Provides `FontSource` (what the caller asked for), `LoadedFace` (font
//! bytes plus swash/rustybuzz views over them), `FontLibrary` (the per-engine
//! font context: directory and family indices) and `GlyphShaper`
//! (rustybuzz-based shaping into attributed `GlyphRun`s).

pub(crate) mod discovery;
mod face;
mod library;
mod shaper;

pub use face::LoadedFace;
pub use library::FontLibrary;
pub use shaper::{GlyphShaper, parse_features};

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bitflags::bitflags;

bitflags! {
    /// Requested style for family-name resources.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct StyleFlags: u8 {
        const BOLD   = 0b01;
        const ITALIC = 0b10;
    }
}

/// File extensions treated as font files.
const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc", "otc"];

/// Identifies a font to preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A font file, selecting one face of a collection.
    File { path: PathBuf, face_index: u32 },
    /// An installed family, resolved through the font library.
    Family { name: String, style: StyleFlags },
}

impl FontSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File {
            path: path.into(),
            face_index: 0,
        }
    }

    pub fn family(name: impl Into<String>, style: StyleFlags) -> Self {
        Self::Family {
            name: name.into(),
            style,
        }
    }

    /// Interpret `name` as either a font file or a family name.
    ///
    /// Existing paths and names with a font file extension are files;
    /// anything else is a family name.
    pub fn from_name(name: &str, style: StyleFlags, face_index: u32) -> Self {
        let path = Path::new(name);
        if path.exists() || has_font_extension(path) {
            Self::File {
                path: path.to_path_buf(),
                face_index,
            }
        } else {
            Self::family(name, style)
        }
    }

    /// The same resource with a different face selected. Family sources are
    /// returned unchanged.
    #[must_use]
    pub fn with_face(&self, face_index: u32) -> Self {
        match self {
            Self::File { path, .. } => Self::File {
                path: path.clone(),
                face_index,
            },
            Self::Family { .. } => self.clone(),
        }
    }
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File { path, face_index: 0 } => write!(f, "{}", path.display()),
            Self::File { path, face_index } => write!(f, "{}#{face_index}", path.display()),
            Self::Family { name, style } if style.is_empty() => write!(f, "{name:?}"),
            Self::Family { name, style } => write!(f, "{name:?} ({style:?})"),
        }
    }
}

pub(crate) fn has_font_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| FONT_EXTENSIONS.iter().any(|x| x.eq_ignore_ascii_case(e)))
}

/// Identity of one face: the file it was loaded from and its index within it.
///
/// Two runs belong to the same font exactly when their keys are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceKey {
    path: Arc<Path>,
    index: u32,
}

impl FaceKey {
    pub fn new(path: &Path, index: u32) -> Self {
        Self {
            path: Arc::from(path),
            index,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn index(&self) -> u32 {
        self.index
    }
}

/// A shaped glyph positioned along its line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedGlyph {
    /// Glyph ID within the face (not a Unicode codepoint).
    pub glyph_id: u16,
    /// First character of the cluster the glyph came from.
    pub ch: char,
    /// Byte offset of that cluster in the shaped text.
    pub cluster: u32,
    /// Pen position (pixels from the line start) before this glyph.
    pub x: f32,
    /// Horizontal advance in pixels.
    pub advance: f32,
    /// X pixel offset from the pen position (from shaper positioning).
    pub x_offset: f32,
    /// Y pixel offset from the baseline (from shaper positioning).
    pub y_offset: f32,
}

/// Shaped glyphs from one face at one size.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRun {
    /// Face every glyph in this run comes from.
    pub face: FaceKey,
    pub size_px: u32,
    /// Distance from the baseline to the top of the line (pixels).
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the line (pixels, positive).
    pub descent: f32,
    pub glyphs: Vec<PositionedGlyph>,
}

impl GlyphRun {
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Line height of the run.
    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }

    /// Pen position where the run starts.
    pub fn start_x(&self) -> f32 {
        self.glyphs.first().map_or(0.0, |g| g.x)
    }

    /// Pen position after the last glyph.
    pub fn end_x(&self) -> f32 {
        self.glyphs.last().map_or(0.0, |g| g.x + g.advance)
    }

    /// The characters this run renders, one per glyph cluster start.
    pub fn text(&self) -> String {
        let mut out = String::new();
        let mut last = None;
        for g in &self.glyphs {
            if last != Some(g.cluster) {
                out.push(g.ch);
            }
            last = Some(g.cluster);
        }
        out
    }
}
