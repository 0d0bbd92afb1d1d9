//! Platform-specific font discovery: finding font files on disk.
//!
//! Handles DirectWrite family resolution on Windows and directory scanning
//! elsewhere. Pure discovery: no shaping, metrics, or caching of face data.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use swash::{FontDataRef, FontRef, StringId};

use super::{StyleFlags, has_font_extension};

/// CSS weight requested for `StyleFlags::BOLD`.
const BOLD_WEIGHT: u16 = 700;
const REGULAR_WEIGHT: u16 = 400;

/// Cost of a slant mismatch, relative to weight distance.
const SLANT_PENALTY: u32 = 1000;

/// Cost of a condensed or expanded width.
const STRETCH_PENALTY: u32 = 50;

/// System font directories, followed by `extra` (from config).
pub(crate) fn font_dirs(extra: &[PathBuf]) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    #[cfg(target_os = "windows")]
    {
        let windir = std::env::var_os("WINDIR")
            .map_or_else(|| PathBuf::from(r"C:\Windows"), PathBuf::from);
        dirs.push(windir.join("Fonts"));
        if let Some(local) = std::env::var_os("LOCALAPPDATA") {
            dirs.push(PathBuf::from(local).join(r"Microsoft\Windows\Fonts"));
        }
    }
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            dirs.push(PathBuf::from(home).join("Library/Fonts"));
        }
        dirs.push(PathBuf::from("/Library/Fonts"));
        dirs.push(PathBuf::from("/System/Library/Fonts"));
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(data) = std::env::var_os("XDG_DATA_HOME") {
            dirs.push(PathBuf::from(data).join("fonts"));
        }
        if let Some(home) = std::env::var_os("HOME") {
            dirs.push(PathBuf::from(&home).join(".local/share/fonts"));
            dirs.push(PathBuf::from(home).join(".fonts"));
        }
        dirs.push(PathBuf::from("/usr/share/fonts"));
        dirs.push(PathBuf::from("/usr/local/share/fonts"));
    }
    dirs.extend(extra.iter().cloned());
    dirs
}

/// Build a filename → full path index by scanning `dirs` once.
///
/// The first directory to contain a filename wins.
pub(crate) fn build_font_index(dirs: &[PathBuf]) -> HashMap<String, PathBuf> {
    let mut index = HashMap::new();
    for dir in dirs {
        index_font_dir(dir, &mut index);
    }
    log::debug!("font discovery: indexed {} files", index.len());
    index
}

fn index_font_dir(dir: &Path, index: &mut HashMap<String, PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            index_font_dir(&path, index);
        } else if !has_font_extension(&path) {
            // Not a font (fonts.dir, metadata, etc.)
        } else if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            index.entry(name.to_owned()).or_insert(path);
        } else {
            // Non-UTF-8 filename: skip
        }
    }
}

/// One installed face, as seen by family lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct FamilyFace {
    pub path: PathBuf,
    pub face_index: u32,
    pub weight: u16,
    pub italic: bool,
    /// Normal width (not condensed or expanded).
    pub normal_width: bool,
}

impl FamilyFace {
    /// Distance from the requested style. Lower is better.
    fn distance(&self, style: StyleFlags) -> u32 {
        let target = if style.contains(StyleFlags::BOLD) {
            BOLD_WEIGHT
        } else {
            REGULAR_WEIGHT
        };
        let slant = if self.italic == style.contains(StyleFlags::ITALIC) {
            0
        } else {
            SLANT_PENALTY
        };
        let stretch = if self.normal_width { 0 } else { STRETCH_PENALTY };
        u32::from(self.weight.abs_diff(target)) + slant + stretch
    }
}

/// Family name (lowercased) → installed faces.
#[derive(Debug, Default)]
pub(super) struct FamilyIndex {
    families: HashMap<String, Vec<FamilyFace>>,
}

impl FamilyIndex {
    /// Parse the naming tables of every file in `files`.
    ///
    /// Unreadable or unparseable files are skipped.
    pub fn build<'a>(files: impl IntoIterator<Item = &'a PathBuf>) -> Self {
        let mut index = Self::default();
        for path in files {
            let Ok(bytes) = std::fs::read(path) else {
                continue;
            };
            let Some(data) = FontDataRef::new(&bytes) else {
                continue;
            };
            for (i, font) in data.fonts().enumerate() {
                let Ok(face_index) = u32::try_from(i) else {
                    break;
                };
                index.insert_face(path, face_index, &font);
            }
        }
        log::debug!("font discovery: {} families", index.families.len());
        index
    }

    fn insert_face(&mut self, path: &Path, face_index: u32, font: &FontRef<'_>) {
        let attrs = font.attributes();
        let face = FamilyFace {
            path: path.to_path_buf(),
            face_index,
            weight: attrs.weight().0,
            italic: !matches!(attrs.style(), swash::Style::Normal),
            normal_width: attrs.stretch() == swash::Stretch::NORMAL,
        };
        let mut names = family_names(font);
        names.dedup();
        for name in names {
            self.insert(&name, face.clone());
        }
    }

    pub fn insert(&mut self, family: &str, face: FamilyFace) {
        self.families
            .entry(family.to_lowercase())
            .or_default()
            .push(face);
    }

    /// Closest face of `family` to the requested style.
    ///
    /// Family names compare case-insensitively. Ties keep the first face
    /// indexed.
    pub fn best_match(&self, family: &str, style: StyleFlags) -> Option<&FamilyFace> {
        self.families
            .get(&family.to_lowercase())?
            .iter()
            .min_by_key(|f| f.distance(style))
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }
}

/// Typographic and legacy family names of `font`, typographic first.
pub(super) fn family_names(font: &FontRef<'_>) -> Vec<String> {
    [StringId::TypographicFamily, StringId::Family]
        .into_iter()
        .filter_map(|id| {
            let s: String = font.localized_strings().find_by_id(id, None)?.chars().collect();
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_owned())
        })
        .collect()
}

/// Resolve a family + style via DirectWrite to a font file path.
#[cfg(target_os = "windows")]
pub(super) fn resolve_font_dwrite(family_name: &str, style: StyleFlags) -> Option<PathBuf> {
    let weight = if style.contains(StyleFlags::BOLD) {
        dwrote::FontWeight::Bold
    } else {
        dwrote::FontWeight::Regular
    };
    let slant = if style.contains(StyleFlags::ITALIC) {
        dwrote::FontStyle::Italic
    } else {
        dwrote::FontStyle::Normal
    };
    let collection = dwrote::FontCollection::system();
    let descriptor = dwrote::FontDescriptor {
        family_name: family_name.to_string(),
        weight,
        stretch: dwrote::FontStretch::Normal,
        style: slant,
    };
    let font = collection
        .font_from_descriptor(&descriptor)
        .ok()
        .flatten()?;
    let face = font.create_font_face();
    let files = face.files().ok()?;
    let file = files.first()?;
    file.font_file_path().ok()
}
