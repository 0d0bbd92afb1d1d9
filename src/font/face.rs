//! A loaded font face: owns raw bytes and exposes swash/rustybuzz views.

use std::path::Path;
use std::sync::Arc;

use swash::{FontDataRef, FontRef, StringId, tag_from_bytes};

use super::FaceKey;
use crate::error::PreviewError;

/// Tables holding glyph outlines. Any of them makes a face scalable.
const OUTLINE_TABLES: [&[u8; 4]; 3] = [b"glyf", b"CFF ", b"CFF2"];

/// Tables holding embedded bitmaps.
const BITMAP_TABLES: [&[u8; 4]; 4] = [b"EBDT", b"CBDT", b"sbix", b"bdat"];

/// Byte offset of `ulUnicodeRange1` in the OS/2 table.
const OS2_UNICODE_RANGE: usize = 42;

/// OS/2 Unicode range bits that declare support for a script.
const SCRIPT_RANGE_BITS: &[(&[u8; 4], &[u32])] = &[
    (b"latn", &[0, 1]),
    (b"grek", &[7]),
    (b"cyrl", &[9]),
    (b"armn", &[10]),
    (b"hebr", &[11]),
    (b"arab", &[13]),
    (b"deva", &[15]),
    (b"thai", &[24]),
    (b"geor", &[26]),
    (b"hang", &[56]),
    (b"hani", &[59]),
    (b"kana", &[49, 50]),
];

/// A single face loaded from disk.
///
/// Raw bytes are kept in an `Arc<Vec<u8>>` so swash and rustybuzz views can
/// borrow them transiently.
#[derive(Clone)]
pub struct LoadedFace {
    bytes: Arc<Vec<u8>>,
    /// Offset of the face's table directory within `bytes`.
    offset: u32,
    cache_key: swash::CacheKey,
    key: FaceKey,
}

impl std::fmt::Debug for LoadedFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedFace")
            .field("key", &self.key)
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

impl LoadedFace {
    /// Read `path` and select face `index`.
    pub fn open(path: &Path, index: u32) -> Result<Self, PreviewError> {
        let name = path.display().to_string();
        let bytes =
            std::fs::read(path).map_err(|e| PreviewError::unavailable(&name, e.to_string()))?;
        Self::from_bytes(bytes, FaceKey::new(path, index), &name)
    }

    fn from_bytes(bytes: Vec<u8>, key: FaceKey, name: &str) -> Result<Self, PreviewError> {
        let index = key.index();
        let data = FontDataRef::new(&bytes)
            .ok_or_else(|| PreviewError::unavailable(name, "unsupported font format"))?;
        let count = data.len();
        let font = data.get(index as usize).ok_or_else(|| {
            PreviewError::unavailable(name, format!("face {index} out of range ({count} faces)"))
        })?;
        let (offset, cache_key) = (font.offset, font.key);

        // Shaping needs the same face; reject data rustybuzz can't parse.
        if rustybuzz::Face::from_slice(&bytes, index).is_none() {
            return Err(PreviewError::unavailable(name, "face cannot be shaped"));
        }

        Ok(Self {
            bytes: Arc::new(bytes),
            offset,
            cache_key,
            key,
        })
    }

    /// Number of faces in a font file (1 for plain files, N for collections).
    pub fn face_count(path: &Path) -> usize {
        std::fs::read(path)
            .ok()
            .and_then(|bytes| FontDataRef::new(&bytes).map(|d| d.len()))
            .unwrap_or(0)
    }

    pub fn key(&self) -> &FaceKey {
        &self.key
    }

    /// Borrowed swash view of the face.
    pub fn font_ref(&self) -> FontRef<'_> {
        FontRef {
            data: &self.bytes,
            offset: self.offset,
            key: self.cache_key,
        }
    }

    /// Transient rustybuzz face borrowing the stored bytes.
    pub fn shaping_face(&self) -> Option<rustybuzz::Face<'_>> {
        rustybuzz::Face::from_slice(&self.bytes, self.key.index())
    }

    /// Family name from the naming table.
    pub fn family_name(&self) -> Option<String> {
        self.name_string(StringId::Family)
    }

    /// Style (subfamily) name from the naming table.
    pub fn style_name(&self) -> Option<String> {
        self.name_string(StringId::SubFamily)
    }

    fn name_string(&self, id: StringId) -> Option<String> {
        let font = self.font_ref();
        let name = font
            .localized_strings()
            .find_by_id(id, Some("en"))
            .or_else(|| font.localized_strings().find_by_id(id, None))?;
        let s: String = name.chars().collect();
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_owned())
    }

    /// Caption label: family name, plus the style name when it adds something.
    pub fn display_label(&self) -> String {
        let family = self.family_name().unwrap_or_else(|| {
            self.key
                .path()
                .file_stem()
                .map_or_else(String::new, |s| s.to_string_lossy().into_owned())
        });
        match self.style_name() {
            Some(style)
                if !style.eq_ignore_ascii_case("regular")
                    && !style.eq_ignore_ascii_case(&family) =>
            {
                format!("{family} {style}")
            }
            _ => family,
        }
    }

    /// Glyph ID for `ch` (0 = `.notdef`).
    pub fn glyph_id(&self, ch: char) -> u16 {
        self.font_ref().charmap().map(ch)
    }

    /// Whether the face has a real glyph for `ch`.
    pub fn maps(&self, ch: char) -> bool {
        self.glyph_id(ch) != 0
    }

    /// Advance width of `ch` in pixels at `px` pixels per em.
    pub fn advance(&self, ch: char, px: f32) -> f32 {
        let font = self.font_ref();
        let id = font.charmap().map(ch);
        font.glyph_metrics(&[]).scale(px).advance_width(id)
    }

    /// Ascent and descent (both positive) in pixels at `px` pixels per em.
    pub fn line_metrics(&self, px: f32) -> (f32, f32) {
        let m = self.font_ref().metrics(&[]).scale(px);
        (m.ascent.abs(), m.descent.abs())
    }

    /// Whether outlines can be rendered at any size.
    ///
    /// Decided from the table directory, not by parsing glyph data: outline
    /// tables mean scalable, bitmap tables alone mean fixed-size. `None` when
    /// the face has neither.
    pub fn scalability(&self) -> Option<bool> {
        let font = self.font_ref();
        let has = |tag: &[u8; 4]| font.table(tag_from_bytes(tag)).is_some();
        if OUTLINE_TABLES.into_iter().any(has) {
            Some(true)
        } else if BITMAP_TABLES.into_iter().any(has) {
            Some(false)
        } else {
            None
        }
    }

    /// Pixels-per-em of every embedded bitmap strike (alpha and color).
    pub fn strike_sizes(&self) -> Vec<u16> {
        let font = self.font_ref();
        font.alpha_strikes()
            .chain(font.color_strikes())
            .map(|strike| strike.ppem())
            .collect()
    }

    /// OpenType script tags listed in the face's layout tables.
    pub fn layout_scripts(&self) -> Vec<[u8; 4]> {
        let mut tags: Vec<[u8; 4]> = self
            .font_ref()
            .writing_systems()
            .map(|ws| ws.script_tag().to_be_bytes())
            .collect();
        tags.sort_unstable();
        tags.dedup();
        tags
    }

    /// The four `ulUnicodeRange` words of the OS/2 table.
    fn unicode_ranges(&self) -> Option<[u32; 4]> {
        let os2 = self.font_ref().table(tag_from_bytes(b"OS/2"))?;
        let bytes = os2.get(OS2_UNICODE_RANGE..OS2_UNICODE_RANGE + 16)?;
        let mut ranges = [0u32; 4];
        for (range, word) in ranges.iter_mut().zip(bytes.chunks_exact(4)) {
            *range = u32::from_be_bytes([word[0], word[1], word[2], word[3]]);
        }
        Some(ranges)
    }

    /// Scripts the face declares support for, from its layout tables and its
    /// OS/2 Unicode ranges.
    pub fn declared_scripts(&self) -> Vec<[u8; 4]> {
        let mut tags = self.layout_scripts();
        if let Some(ranges) = self.unicode_ranges() {
            let has_bit = |bit: u32| ranges[(bit / 32) as usize] & (1 << (bit % 32)) != 0;
            for (tag, bits) in SCRIPT_RANGE_BITS {
                if bits.iter().any(|&b| has_bit(b)) && !tags.contains(*tag) {
                    tags.push(**tag);
                }
            }
        }
        tags
    }

    /// Every character with a real glyph, in code point order.
    pub fn codepoints(&self) -> Vec<char> {
        let mut chars = Vec::new();
        self.font_ref().charmap().enumerate(|cp, id| {
            if let Some(ch) = char::from_u32(cp).filter(|_| id != 0) {
                chars.push(ch);
            }
        });
        chars.sort_unstable();
        chars.dedup();
        chars
    }
}
