//! Stacked line layout of a `PreviewState` into glyph boxes.
//!
//! Lines are stacked top to bottom: the first baseline sits one line height
//! plus two steps below `2 * border`, and each following line moves down by
//! its own height plus two steps. Every glyph gets a box of its advance by
//! its line's height, which is what the hit tester scans.

use fontpreview_core::{GlyphLayout, GlyphPlacement, Rect};

use super::{PreviewState, SizedRuns};
use crate::config::LayoutConfig;

/// Which views of the preview are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// The sample and the pangram at the current zoom size.
    #[default]
    Zoom,
    /// The sample at every size, the curated strings at the body size,
    /// then the pangram at every size.
    Blocks,
}

/// Lay out `state` for painting and hit testing.
///
/// `zoom_index` selects the size in `Zoom` mode and is ignored in `Blocks`
/// mode. An out-of-range index lays out nothing for the zoomed lines.
pub fn layout_preview(
    state: &PreviewState,
    mode: DisplayMode,
    zoom_index: usize,
    config: &LayoutConfig,
) -> GlyphLayout {
    let lines: Vec<&SizedRuns> = match mode {
        DisplayMode::Zoom => [&state.sample_runs, &state.pangram_runs]
            .into_iter()
            .filter_map(|view| view.get(zoom_index))
            .collect(),
        DisplayMode::Blocks => state
            .sample_runs
            .iter()
            .chain(&state.curated_runs)
            .chain(&state.pangram_runs)
            .collect(),
    };

    let mut layout = GlyphLayout::new();
    let left = config.border * 2.0;
    let mut offset = config.border * 2.0;
    for line in lines {
        if line.is_empty() {
            continue;
        }
        // The baseline of this line is the bottom of the space it takes.
        let height = line.height();
        offset += height + config.step * 2.0;
        let top = offset - line.ascent();
        for run in &line.runs {
            for g in &run.glyphs {
                layout.push(GlyphPlacement {
                    glyph_id: g.glyph_id,
                    ch: g.ch,
                    size_px: run.size_px,
                    bounds: Rect::new(left + g.x + g.x_offset, top, g.advance, height),
                });
            }
        }
    }
    layout
}
