//! Builds the font-specific sample string.
//!
//! Curated per-script samples are preferred: for each script the face
//! declares, the sample's characters the face can render are appended once.
//! Faces that declare nothing usable fall back to walking their character
//! map in code point order until the available width is used up.

use std::collections::HashSet;

use crate::config::SampleConfig;
use crate::font::LoadedFace;

/// Font data a `CoverageStringBuilder` needs.
pub trait CoverageSource {
    /// OpenType script tags the face declares support for.
    fn declared_scripts(&self) -> Vec<[u8; 4]>;

    /// Whether the face has a real glyph for `ch`.
    fn maps(&self, ch: char) -> bool;

    /// Every mapped character, in ascending code point order.
    fn codepoints(&self) -> Vec<char>;

    /// Advance width of `ch` in pixels at the measuring size.
    fn advance(&self, ch: char) -> f32;
}

/// A face measured at a fixed pixel size.
#[derive(Debug, Clone, Copy)]
pub struct ScaledFace<'a> {
    pub face: &'a LoadedFace,
    pub size_px: u32,
}

impl CoverageSource for ScaledFace<'_> {
    fn declared_scripts(&self) -> Vec<[u8; 4]> {
        self.face.declared_scripts()
    }

    fn maps(&self, ch: char) -> bool {
        self.face.maps(ch)
    }

    fn codepoints(&self) -> Vec<char> {
        self.face.codepoints()
    }

    fn advance(&self, ch: char) -> f32 {
        self.face.advance(ch, self.size_px as f32)
    }
}

/// Script tag → sample string table.
#[derive(Debug, Clone)]
pub struct CoverageStringBuilder {
    samples: Vec<([u8; 4], String)>,
}

impl CoverageStringBuilder {
    /// Build from the configured script samples. Entries whose tag is not
    /// four ASCII bytes are skipped.
    pub fn new(config: &SampleConfig) -> Self {
        let samples = config
            .scripts
            .iter()
            .filter_map(|entry| match <[u8; 4]>::try_from(entry.script.as_bytes()) {
                Ok(tag) if tag.is_ascii() => Some((tag, entry.sample.clone())),
                _ => {
                    log::warn!("coverage: ignoring invalid script tag {:?}", entry.script);
                    None
                }
            })
            .collect();
        Self { samples }
    }

    /// Sample string for `font`, at most `max_width` pixels wide when it
    /// comes from the raw coverage walk. Empty when the face renders nothing.
    pub fn build(&self, font: &impl CoverageSource, max_width: f32) -> String {
        let curated = self.curated(font);
        if !curated.is_empty() {
            return curated;
        }
        log::debug!("coverage: no declared script sample, walking character map");
        raw_coverage(font, max_width)
    }

    /// Characters of every declared script's sample the face maps, each once.
    fn curated(&self, font: &impl CoverageSource) -> String {
        let declared = font.declared_scripts();
        let mut seen = HashSet::new();
        let mut out = String::new();
        for (tag, sample) in &self.samples {
            if !declared.contains(tag) {
                continue;
            }
            for ch in sample.chars() {
                if !ch.is_whitespace() && font.maps(ch) && seen.insert(ch) {
                    out.push(ch);
                }
            }
        }
        out
    }
}

/// Mapped characters in code point order, stopping before the summed
/// advances would exceed `max_width`.
fn raw_coverage(font: &impl CoverageSource, max_width: f32) -> String {
    let mut width = 0.0;
    let mut out = String::new();
    for ch in font.codepoints() {
        if ch.is_control() {
            continue;
        }
        width += font.advance(ch);
        if width > max_width {
            break;
        }
        out.push(ch);
    }
    out
}
