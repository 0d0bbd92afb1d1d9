//! Per-engine font context: resolves `FontSource`s to loaded faces.
//!
//! Directory and family indices are built lazily on the first lookup that
//! needs them, then reused for the life of the library.

use std::cell::OnceCell;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use super::discovery::{self, FamilyIndex};
use super::{FontSource, LoadedFace, StyleFlags};
use crate::error::PreviewError;

/// Font lookup context owned by one preview engine.
#[derive(Debug)]
pub struct FontLibrary {
    dirs: Vec<PathBuf>,
    /// Filename → path, from a recursive scan of `dirs`.
    files: OnceCell<HashMap<String, PathBuf>>,
    /// Family name → faces, from the naming tables of every indexed file.
    families: OnceCell<FamilyIndex>,
}

impl FontLibrary {
    /// Library scanning the system font directories plus `extra_dirs`.
    pub fn new(extra_dirs: &[PathBuf]) -> Self {
        Self::with_dirs(discovery::font_dirs(extra_dirs))
    }

    /// Library scanning exactly `dirs`.
    pub fn with_dirs(dirs: Vec<PathBuf>) -> Self {
        Self {
            dirs,
            files: OnceCell::new(),
            families: OnceCell::new(),
        }
    }

    fn files(&self) -> &HashMap<String, PathBuf> {
        self.files.get_or_init(|| discovery::build_font_index(&self.dirs))
    }

    fn families(&self) -> &FamilyIndex {
        self.families.get_or_init(|| {
            let index = FamilyIndex::build(self.files().values());
            log::info!("font library: {} families installed", index.len());
            index
        })
    }

    /// Resolve `source` to a file path and face index without loading it.
    pub fn resolve(&self, source: &FontSource) -> Result<(PathBuf, u32), PreviewError> {
        match source {
            FontSource::File { path, face_index } => {
                self.find_file(path).map(|p| (p, *face_index)).ok_or_else(|| {
                    PreviewError::unavailable(source.to_string(), "file not found")
                })
            }
            FontSource::Family { name, style } => self.find_family(name, *style),
        }
    }

    /// Resolve and load `source`.
    pub fn open(&self, source: &FontSource) -> Result<LoadedFace, PreviewError> {
        let (path, index) = self.resolve(source)?;
        log::debug!("font library: {source} -> {}#{index}", path.display());
        LoadedFace::open(&path, index)
    }

    /// Number of faces in the file `source` resolves to (0 if unresolvable).
    pub fn face_count(&self, source: &FontSource) -> usize {
        self.resolve(source)
            .map_or(0, |(path, _)| LoadedFace::face_count(&path))
    }

    /// Existing paths are used as-is. Bare filenames are looked up in the
    /// font directories.
    fn find_file(&self, path: &Path) -> Option<PathBuf> {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        let mut components = path.components();
        let bare = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !bare {
            return None;
        }
        let name = path.to_str()?;
        self.files().get(name).cloned()
    }

    #[cfg(target_os = "windows")]
    fn find_family(&self, name: &str, style: StyleFlags) -> Result<(PathBuf, u32), PreviewError> {
        if let Some(path) = discovery::resolve_font_dwrite(name, style) {
            let index = face_index_for_family(&path, name).unwrap_or(0);
            return Ok((path, index));
        }
        self.find_indexed_family(name, style)
    }

    #[cfg(not(target_os = "windows"))]
    fn find_family(&self, name: &str, style: StyleFlags) -> Result<(PathBuf, u32), PreviewError> {
        self.find_indexed_family(name, style)
    }

    fn find_indexed_family(
        &self,
        name: &str,
        style: StyleFlags,
    ) -> Result<(PathBuf, u32), PreviewError> {
        self.families()
            .best_match(name, style)
            .map(|f| (f.path.clone(), f.face_index))
            .ok_or_else(|| PreviewError::FamilyNotFound {
                family: name.to_owned(),
            })
    }
}

/// Index of the face in `path` whose family is `family`.
///
/// DirectWrite returns a file, not a face; collections need the index.
#[cfg(target_os = "windows")]
fn face_index_for_family(path: &Path, family: &str) -> Option<u32> {
    let bytes = std::fs::read(path).ok()?;
    let data = swash::FontDataRef::new(&bytes)?;
    let i = data.fonts().position(|font| {
        discovery::family_names(&font)
            .iter()
            .any(|n| n.eq_ignore_ascii_case(family))
    })?;
    u32::try_from(i).ok()
}
