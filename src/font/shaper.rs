//! Text shaping via `rustybuzz`: segments a line into per-face runs, shapes
//! each run, and keeps only the runs that came from the requested face.
//!
//! Characters the requested face cannot render are attributed to the first
//! configured fallback face that can, or left unmapped. Either way those runs
//! are dropped before anything is returned: a preview never shows glyphs from
//! another font.

use std::cell::OnceCell;
use std::path::PathBuf;

use super::{GlyphRun, LoadedFace, PositionedGlyph};
use crate::config::ShapingConfig;
use crate::error::PreviewError;

/// Which face a segment of text is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunFace {
    Requested,
    Fallback(usize),
    /// No available face maps these characters.
    Unmapped,
}

/// A contiguous slice of the input sharing one face.
#[derive(Debug)]
struct ShapingRun {
    face: RunFace,
    /// Byte range of the run within the shaped text.
    start: usize,
    end: usize,
}

/// All runs of one line before substitution filtering.
struct ShapedLine {
    kept: Vec<GlyphRun>,
    /// Runs dropped because a fallback face produced them.
    substituted: usize,
    /// Runs dropped because no face maps their characters.
    unmapped: usize,
}

/// Single-line shaper with configured features and fallback faces.
pub struct GlyphShaper {
    /// OpenType features to apply during shaping.
    features: Vec<rustybuzz::Feature>,
    /// File paths for deferred loading of fallback faces.
    fallback_paths: Vec<PathBuf>,
    fallbacks: OnceCell<Vec<LoadedFace>>,
}

impl std::fmt::Debug for GlyphShaper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphShaper")
            .field("features", &self.features.len())
            .field("fallback_paths", &self.fallback_paths)
            .finish_non_exhaustive()
    }
}

impl GlyphShaper {
    pub fn new(config: &ShapingConfig) -> Self {
        Self {
            features: parse_features(&config.features),
            fallback_paths: config.fallback_fonts.clone(),
            fallbacks: OnceCell::new(),
        }
    }

    /// Fallback faces, loaded on first use. Unloadable files are skipped.
    fn fallbacks(&self) -> &[LoadedFace] {
        self.fallbacks.get_or_init(|| {
            self.fallback_paths
                .iter()
                .filter_map(|path| match LoadedFace::open(path, 0) {
                    Ok(face) => Some(face),
                    Err(e) => {
                        log::warn!("shaper: skipping fallback font: {e}");
                        None
                    }
                })
                .collect()
        })
    }

    /// Shape `text` as one line of `face` at `size_px` pixels per em.
    ///
    /// Returns only runs attributed to `face`. Empty text, a zero size, or
    /// text `face` cannot render at all give an empty list.
    pub fn shape(&self, text: &str, face: &LoadedFace, size_px: u32) -> Vec<GlyphRun> {
        self.shape_checked(text, face, size_px).unwrap_or_default()
    }

    /// Like [`shape`](Self::shape), but reports why nothing was kept.
    ///
    /// `NoCoverage` when there was nothing the face could render;
    /// `ShapingMismatch` when every shaped run came from a fallback face.
    pub fn shape_checked(
        &self,
        text: &str,
        face: &LoadedFace,
        size_px: u32,
    ) -> Result<Vec<GlyphRun>, PreviewError> {
        let no_coverage = || PreviewError::NoCoverage {
            source_name: face.key().path().display().to_string(),
        };
        if text.is_empty() || size_px == 0 {
            return Err(no_coverage());
        }

        let line = self.shape_line(text, face, size_px);
        if line.substituted + line.unmapped > 0 {
            log::debug!(
                "shaper: discarded {} substituted and {} unmapped runs of {:?}",
                line.substituted,
                line.unmapped,
                text
            );
        }
        if !line.kept.is_empty() {
            Ok(line.kept)
        } else if line.substituted > 0 {
            Err(PreviewError::ShapingMismatch {
                discarded: line.substituted,
            })
        } else {
            Err(no_coverage())
        }
    }

    fn shape_line(&self, text: &str, face: &LoadedFace, size_px: u32) -> ShapedLine {
        let fallbacks = self.fallbacks();
        let runs = segment_runs(text, face, fallbacks);

        let mut line = ShapedLine {
            kept: Vec::new(),
            substituted: 0,
            unmapped: 0,
        };
        // Pen position carries across runs so kept runs sit where they
        // would in the full line.
        let mut pen = 0.0;
        for run in &runs {
            let backing = match run.face {
                RunFace::Requested => face,
                RunFace::Fallback(i) => &fallbacks[i],
                RunFace::Unmapped => {
                    pen += text[run.start..run.end]
                        .chars()
                        .map(|ch| face.advance(ch, size_px as f32))
                        .sum::<f32>();
                    line.unmapped += 1;
                    continue;
                }
            };
            let Some(glyph_run) = self.shape_run(text, run, backing, size_px, pen) else {
                continue;
            };
            pen = glyph_run.end_x();
            if run.face == RunFace::Requested {
                // A run of bare spaces shows nothing of the face.
                if glyph_run.text().chars().any(|c| !c.is_whitespace()) {
                    line.kept.push(glyph_run);
                }
            } else {
                line.substituted += 1;
            }
        }
        line
    }

    /// Shape a single run starting at pen position `pen`.
    fn shape_run(
        &self,
        text: &str,
        run: &ShapingRun,
        face: &LoadedFace,
        size_px: u32,
        pen: f32,
    ) -> Option<GlyphRun> {
        let shaping_face = face.shaping_face()?;
        let slice = &text[run.start..run.end];

        let mut buffer = rustybuzz::UnicodeBuffer::new();
        buffer.push_str(slice);
        buffer.guess_segment_properties();

        let glyph_buffer = rustybuzz::shape(&shaping_face, &self.features, buffer);
        let infos = glyph_buffer.glyph_infos();
        let positions = glyph_buffer.glyph_positions();

        let upem = shaping_face.units_per_em() as f32;
        let scale = size_px as f32 / upem;
        let (ascent, descent) = face.line_metrics(size_px as f32);

        let mut x = pen;
        let mut glyphs = Vec::with_capacity(infos.len());
        for (info, pos) in infos.iter().zip(positions.iter()) {
            let cluster = run.start + info.cluster as usize;
            let ch = text
                .get(cluster..)
                .and_then(|s| s.chars().next())
                .unwrap_or('\u{FFFD}');
            let advance = pos.x_advance as f32 * scale;
            glyphs.push(PositionedGlyph {
                glyph_id: info.glyph_id as u16,
                ch,
                cluster: cluster as u32,
                x,
                advance,
                x_offset: pos.x_offset as f32 * scale,
                y_offset: pos.y_offset as f32 * scale,
            });
            x += advance;
        }

        Some(GlyphRun {
            face: face.key().clone(),
            size_px,
            ascent,
            descent,
            glyphs,
        })
    }
}

/// Segment `text` into runs by which face renders each character.
///
/// Whitespace joins the run in progress, so spaces between words never split
/// a run.
fn segment_runs(text: &str, face: &LoadedFace, fallbacks: &[LoadedFace]) -> Vec<ShapingRun> {
    let mut runs: Vec<ShapingRun> = Vec::new();

    for (start, ch) in text.char_indices() {
        let end = start + ch.len_utf8();
        let run_face = if face.maps(ch) {
            RunFace::Requested
        } else if let Some(i) = fallbacks.iter().position(|f| f.maps(ch)) {
            RunFace::Fallback(i)
        } else {
            RunFace::Unmapped
        };

        match runs.last_mut() {
            Some(run) if run.face == run_face || ch.is_whitespace() => run.end = end,
            _ => runs.push(ShapingRun {
                face: run_face,
                start,
                end,
            }),
        }
    }

    runs
}

/// Parse feature strings into rustybuzz features.
///
/// Each string is a 4-char OpenType tag, optionally prefixed with `-` to
/// disable. Examples: `"kern"` (enable), `"-liga"` (disable).
pub fn parse_features(strings: &[String]) -> Vec<rustybuzz::Feature> {
    strings
        .iter()
        .filter_map(|s| {
            let (tag_str, value) = match s.strip_prefix('-') {
                Some(rest) => (rest, 0),
                None => (s.strip_prefix('+').unwrap_or(s), 1),
            };
            let Ok(bytes) = <[u8; 4]>::try_from(tag_str.as_bytes()) else {
                log::warn!("shaper: ignoring invalid feature tag: {s}");
                return None;
            };
            let tag = rustybuzz::ttf_parser::Tag::from_bytes(&bytes);
            Some(rustybuzz::Feature::new(tag, value, ..))
        })
        .collect()
}
