//! Pointer hit testing against the last laid-out glyphs.
//!
//! The host lays out a preview into a `GlyphLayout` (one `GlyphPlacement`
//! per painted glyph, in paint order). `HitTester` answers "which glyph is
//! under the pointer" and remembers the last hit, so pointer motion that
//! stays inside the same glyph box does not report it again.

use crate::geometry::{Point, Rect};

/// One painted glyph and its bounding box on the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphPlacement {
    /// Glyph ID within the previewed face.
    pub glyph_id: u16,
    /// First character of the cluster this glyph was shaped from.
    pub ch: char,
    /// Pixel size the glyph was shaped at.
    pub size_px: u32,
    /// Box used for hit testing (advance width by line height).
    pub bounds: Rect,
}

/// Glyph placements in paint order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphLayout {
    placements: Vec<GlyphPlacement>,
}

impl GlyphLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, placement: GlyphPlacement) {
        self.placements.push(placement);
    }

    pub fn placements(&self) -> &[GlyphPlacement] {
        &self.placements
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// First placement (in paint order) whose box contains `pos`.
    pub fn glyph_at(&self, pos: Point) -> Option<&GlyphPlacement> {
        self.placements.iter().find(|g| g.bounds.contains(pos))
    }
}

/// Stateful pointer hit tester.
#[derive(Debug, Clone, Default)]
pub struct HitTester {
    last: Option<GlyphPlacement>,
}

impl HitTester {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle pointer motion.
    ///
    /// Returns the glyph under `pos` only when it is a new hit; motion that
    /// stays inside the last hit glyph returns `None` without scanning.
    /// Moving over empty space also returns `None` and keeps the last hit.
    pub fn pointer_moved<'a>(
        &mut self,
        pos: Point,
        layout: &'a GlyphLayout,
    ) -> Option<&'a GlyphPlacement> {
        if self
            .last
            .as_ref()
            .is_some_and(|g| g.bounds.contains(pos))
        {
            return None;
        }
        let hit = layout.glyph_at(pos)?;
        self.last = Some(hit.clone());
        Some(hit)
    }

    /// The most recent hit, if any.
    pub fn last_hit(&self) -> Option<&GlyphPlacement> {
        self.last.as_ref()
    }

    /// Forget the last hit. Call whenever the layout is rebuilt.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
