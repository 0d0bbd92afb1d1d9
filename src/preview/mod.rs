//! Preview orchestration: builds the per-size glyph runs for a font and
//! drives zoom, resize and override-text updates.
//!
//! `PreviewModel::show_font` runs the whole pipeline (resolve sizes, build
//! the derived sample, shape every view) and either replaces the preview
//! state wholesale or clears it. Zoom only moves an index into the
//! precomputed runs; resize and override text re-shape the derived-sample
//! view alone.

mod layout;

pub use layout::{DisplayMode, layout_preview};

use fontpreview_core::sizes::points_to_pixels;
use fontpreview_core::{SizeList, ZoomController};

use crate::config::Config;
use crate::coverage::{CoverageStringBuilder, ScaledFace};
use crate::error::PreviewError;
use crate::font::{FontLibrary, FontSource, GlyphRun, GlyphShaper, LoadedFace};
use crate::sizes::SizeResolver;

/// Surface size assumed until the host reports one.
const DEFAULT_SURFACE: (u32, u32) = (640, 480);

/// The runs of one string shaped at one size.
#[derive(Debug, Clone, PartialEq)]
pub struct SizedRuns {
    pub size_px: u32,
    pub runs: Vec<GlyphRun>,
}

impl SizedRuns {
    /// Line height: the tallest run's ascent plus descent.
    pub fn height(&self) -> f32 {
        self.runs.iter().map(GlyphRun::height).fold(0.0, f32::max)
    }

    /// Tallest ascent among the runs.
    pub fn ascent(&self) -> f32 {
        self.runs.iter().map(|r| r.ascent).fold(0.0, f32::max)
    }

    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(GlyphRun::is_empty)
    }
}

/// Everything the painting surface needs for one loaded font.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewState {
    /// Family name, plus the style name when it adds something.
    pub label: String,
    /// The resource that was shown.
    pub source: FontSource,
    pub sizes: SizeList,
    /// Size used for the curated strings.
    pub body_px: u32,
    /// Coverage-derived sample, before any override.
    pub derived: String,
    /// Text of the sample view: the override if set, else `derived`.
    pub sample: String,
    /// Surface width the derived sample was built for.
    pub sample_width: u32,
    /// `sample` at every size in `sizes`.
    pub sample_runs: Vec<SizedRuns>,
    /// Each curated string at `body_px`.
    pub curated_runs: Vec<SizedRuns>,
    /// The pangram at every size in `sizes`.
    pub pangram_runs: Vec<SizedRuns>,
}

/// The preview engine for one host surface.
#[derive(Debug)]
pub struct PreviewModel {
    config: Config,
    library: FontLibrary,
    shaper: GlyphShaper,
    resolver: SizeResolver,
    coverage: CoverageStringBuilder,
    zoom: ZoomController,
    /// Last resource requested, kept across failures for `show_face`.
    source: Option<FontSource>,
    face: Option<LoadedFace>,
    state: Option<PreviewState>,
    last_error: Option<PreviewError>,
    override_text: Option<String>,
    width: u32,
    height: u32,
}

impl PreviewModel {
    pub fn new(config: Config) -> Self {
        let library = FontLibrary::new(&config.fonts.extra_dirs);
        Self::with_library(config, library)
    }

    /// Engine using an explicit font library.
    pub fn with_library(config: Config, library: FontLibrary) -> Self {
        Self {
            shaper: GlyphShaper::new(&config.shaping),
            resolver: SizeResolver::new(&config.sizes),
            coverage: CoverageStringBuilder::new(&config.samples),
            config,
            library,
            zoom: ZoomController::new(),
            source: None,
            face: None,
            state: None,
            last_error: None,
            override_text: None,
            width: DEFAULT_SURFACE.0,
            height: DEFAULT_SURFACE.1,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load `source` and rebuild the whole preview.
    ///
    /// Returns the "usable" status. On failure the state is cleared, both
    /// zoom bounds report `true` and the reason is kept in `last_error`.
    pub fn show_font(&mut self, source: &FontSource) -> bool {
        self.source = Some(source.clone());
        // Nothing from the previous font may survive a reload.
        self.state = None;
        self.face = None;
        self.zoom.clear();

        match self.build(source) {
            Ok((face, state)) => {
                let body = state.sizes.body_index(state.body_px);
                self.zoom.reset(state.sizes.len(), body);
                log::info!(
                    "preview: showing {} ({} sizes, sample {:?})",
                    state.label,
                    state.sizes.len(),
                    state.sample
                );
                self.face = Some(face);
                self.state = Some(state);
                self.last_error = None;
                true
            }
            Err(e) => {
                log::warn!("preview: cannot show {source}: {e}");
                self.last_error = Some(e);
                false
            }
        }
    }

    /// Re-show the current resource with face `index` of its file.
    pub fn show_face(&mut self, index: u32) -> bool {
        let Some(source) = self.source.clone() else {
            return false;
        };
        let target = match &source {
            FontSource::File { .. } => source.with_face(index),
            FontSource::Family { .. } => match self.library.resolve(&source) {
                Ok((path, _)) => FontSource::File {
                    path,
                    face_index: index,
                },
                Err(e) => {
                    log::warn!("preview: cannot switch face of {source}: {e}");
                    self.last_error = Some(e);
                    return false;
                }
            },
        };
        self.show_font(&target)
    }

    /// Number of faces in the current resource's file.
    pub fn face_count(&self) -> usize {
        self.source
            .as_ref()
            .map_or(0, |source| self.library.face_count(source))
    }

    fn build(&self, source: &FontSource) -> Result<(LoadedFace, PreviewState), PreviewError> {
        let face = self.library.open(source)?;
        let source_name = source.to_string();

        let sizes = self.resolver.resolve(&face);
        let Some(smallest) = sizes.first() else {
            return Err(PreviewError::NoSizesAvailable { source_name });
        };

        // The face must produce metrics at the smallest size to be usable.
        let (ascent, descent) = face.line_metrics(smallest as f32);
        if !(ascent + descent).is_finite() || ascent + descent <= 0.0 {
            return Err(PreviewError::unavailable(
                source_name,
                format!("no line metrics at {smallest}px"),
            ));
        }

        let derived = self.derive_sample(&face, smallest, self.width);
        let sample = self.override_text.clone().unwrap_or_else(|| derived.clone());
        if sample.is_empty() {
            return Err(PreviewError::NoCoverage { source_name });
        }

        let body_px = self.body_px(&face, &sizes).unwrap_or(smallest);
        let sample_runs = self.shape_all_sizes(&face, &sizes, &sample);
        let curated_runs = self
            .config
            .samples
            .curated
            .iter()
            .map(|text| self.shape_sized(&face, body_px, text))
            .collect();
        let pangram_runs = self.shape_all_sizes(&face, &sizes, &self.config.samples.pangram);

        let state = PreviewState {
            label: face.display_label(),
            source: source.clone(),
            sizes,
            body_px,
            derived,
            sample,
            sample_width: self.width,
            sample_runs,
            curated_runs,
            pangram_runs,
        };
        Ok((face, state))
    }

    /// Derived sample measured at `size_px`, bounded by the drawable part of
    /// a `width`-pixel surface.
    fn derive_sample(&self, face: &LoadedFace, size_px: u32, width: u32) -> String {
        let max_width = width as f32 - self.config.layout.horizontal_margin();
        self.coverage.build(&ScaledFace { face, size_px }, max_width.max(0.0))
    }

    /// Body size in pixels: the configured size, converted like the
    /// reference list for scalable faces, then snapped down to a size in
    /// `sizes` so bitmap faces are only shaped at their strikes.
    fn body_px(&self, face: &LoadedFace, sizes: &SizeList) -> Option<u32> {
        let body = self.config.sizes.body_size;
        let body = match (self.config.sizes.dpi, face.scalability()) {
            (Some(dpi), Some(true) | None) => points_to_pixels(body, dpi),
            _ => body,
        };
        sizes.body_size(body)
    }

    fn shape_sized(&self, face: &LoadedFace, size_px: u32, text: &str) -> SizedRuns {
        let runs = match self.shaper.shape_checked(text, face, size_px) {
            Ok(runs) => runs,
            Err(e) => {
                log::debug!("preview: {text:?} at {size_px}px: {e}");
                Vec::new()
            }
        };
        SizedRuns { size_px, runs }
    }

    fn shape_all_sizes(&self, face: &LoadedFace, sizes: &SizeList, text: &str) -> Vec<SizedRuns> {
        sizes
            .iter()
            .map(|size| self.shape_sized(face, size, text))
            .collect()
    }

    /// Re-shape the sample view if `sample` differs from what is shown.
    fn reshape_sample(&mut self, sample: String) -> bool {
        let (Some(face), Some(state)) = (self.face.as_ref(), self.state.as_ref()) else {
            return false;
        };
        if sample.is_empty() || sample == state.sample {
            return false;
        }
        let runs = self.shape_all_sizes(face, &state.sizes, &sample);
        if let Some(state) = self.state.as_mut() {
            state.sample = sample;
            state.sample_runs = runs;
        }
        true
    }

    /// Step to the next larger size. Returns `true` if the index moved.
    pub fn zoom_in(&mut self) -> bool {
        self.zoom.zoom_in()
    }

    /// Step to the next smaller size. Returns `true` if the index moved.
    pub fn zoom_out(&mut self) -> bool {
        self.zoom.zoom_out()
    }

    pub fn at_min(&self) -> bool {
        self.zoom.at_min()
    }

    pub fn at_max(&self) -> bool {
        self.zoom.at_max()
    }

    pub fn zoom_index(&self) -> usize {
        self.zoom.index()
    }

    /// Size at the current zoom position.
    pub fn current_size(&self) -> Option<u32> {
        self.state.as_ref()?.sizes.get(self.zoom.index())
    }

    /// Sample-view runs at the current zoom position.
    pub fn current_sample_runs(&self) -> Option<&SizedRuns> {
        self.state.as_ref()?.sample_runs.get(self.zoom.index())
    }

    /// Pangram runs at the current zoom position.
    pub fn current_pangram_runs(&self) -> Option<&SizedRuns> {
        self.state.as_ref()?.pangram_runs.get(self.zoom.index())
    }

    /// Surface resized.
    ///
    /// When the width moved more than the configured threshold away from
    /// the width the derived sample was built for, the sample is rebuilt and
    /// the sample view re-shaped if it changed. Returns `true` when runs
    /// changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        self.width = width;
        self.height = height;

        let Some(state) = self.state.as_ref() else {
            return false;
        };
        if width.abs_diff(state.sample_width) <= self.config.layout.resize_threshold {
            return false;
        }
        let Some(face) = self.face.as_ref() else {
            return false;
        };
        let smallest = state.sizes.first().unwrap_or_default();
        let derived = self.derive_sample(face, smallest, width);
        if derived.is_empty() {
            log::debug!("preview: no sample fits {width}px, keeping previous");
            return false;
        }

        if let Some(state) = self.state.as_mut() {
            state.sample_width = width;
            state.derived.clone_from(&derived);
        }
        if self.override_text.is_some() {
            return false;
        }
        self.reshape_sample(derived)
    }

    pub fn surface_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Replace the derived sample with `text`. `None` or an empty string
    /// restores the derived sample. Returns `true` when runs changed.
    pub fn set_preview_text(&mut self, text: Option<&str>) -> bool {
        self.override_text = text.filter(|t| !t.is_empty()).map(str::to_owned);
        let Some(state) = self.state.as_ref() else {
            return false;
        };
        let sample = self
            .override_text
            .clone()
            .unwrap_or_else(|| state.derived.clone());
        self.reshape_sample(sample)
    }

    pub fn preview_text(&self) -> Option<&str> {
        self.override_text.as_deref()
    }

    pub fn state(&self) -> Option<&PreviewState> {
        self.state.as_ref()
    }

    /// Why the last `show_font` failed, if it did.
    pub fn last_error(&self) -> Option<&PreviewError> {
        self.last_error.as_ref()
    }

    pub fn label(&self) -> Option<&str> {
        self.state.as_ref().map(|s| s.label.as_str())
    }

    /// Glyph geometry of the current state in `mode`.
    pub fn layout(&self, mode: DisplayMode) -> fontpreview_core::GlyphLayout {
        self.state.as_ref().map_or_else(Default::default, |state| {
            layout_preview(state, mode, self.zoom.index(), &self.config.layout)
        })
    }
}

#[cfg(test)]
mod tests;
