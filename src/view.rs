//! Host adapter: turns surface events into engine calls and outward signals.
//!
//! `PreviewView` owns the engine, the glyph layout last handed to the
//! painter, and the hit tester scanning it. Hosts feed it `InputEvent`s and
//! react to the returned `Signal`s; painting itself stays with the host.

use std::fmt;

use fontpreview_core::{GlyphLayout, GlyphPlacement, HitTester, Point, Rect, ZoomDirection};

use crate::font::FontSource;
use crate::preview::{DisplayMode, PreviewModel};

/// Input from the host surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMoved { x: f32, y: f32 },
    /// Vertical wheel motion. Positive zooms in.
    Wheel { delta_y: f32 },
    Resized { width: u32, height: u32 },
}

/// The glyph under the pointer, for the tooltip popup.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphTip {
    pub ch: char,
    /// `U+XXXX` label of `ch`.
    pub code_point: String,
    pub glyph_id: u16,
    pub size_px: u32,
    /// Where the glyph was laid out, for positioning the popup.
    pub bounds: Rect,
}

impl GlyphTip {
    fn from_placement(p: &GlyphPlacement) -> Self {
        Self {
            ch: p.ch,
            code_point: format!("U+{:04X}", u32::from(p.ch)),
            glyph_id: p.glyph_id,
            size_px: p.size_px,
            bounds: p.bounds,
        }
    }
}

impl fmt::Display for GlyphTip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} glyph {} at {}px",
            self.code_point, self.ch, self.glyph_id, self.size_px
        )
    }
}

/// Notification for the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// Whether the last load produced a usable preview.
    Status(bool),
    AtMin(bool),
    AtMax(bool),
    Tooltip(GlyphTip),
    /// The layout changed; the surface should redraw.
    Repaint,
}

/// Engine plus the state needed to serve one host surface.
#[derive(Debug)]
pub struct PreviewView {
    model: PreviewModel,
    mode: DisplayMode,
    layout: GlyphLayout,
    hits: HitTester,
}

impl PreviewView {
    pub fn new(model: PreviewModel, mode: DisplayMode) -> Self {
        Self {
            model,
            mode,
            layout: GlyphLayout::new(),
            hits: HitTester::new(),
        }
    }

    pub fn model(&self) -> &PreviewModel {
        &self.model
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Glyph geometry as last laid out, for painting.
    pub fn layout(&self) -> &GlyphLayout {
        &self.layout
    }

    pub fn set_mode(&mut self, mode: DisplayMode) -> Vec<Signal> {
        if mode == self.mode {
            return Vec::new();
        }
        self.mode = mode;
        self.relayout();
        vec![Signal::Repaint]
    }

    pub fn show_font(&mut self, source: &FontSource) -> Vec<Signal> {
        let usable = self.model.show_font(source);
        self.loaded(usable)
    }

    pub fn show_face(&mut self, index: u32) -> Vec<Signal> {
        let usable = self.model.show_face(index);
        self.loaded(usable)
    }

    fn loaded(&mut self, usable: bool) -> Vec<Signal> {
        self.relayout();
        vec![
            Signal::Status(usable),
            Signal::AtMax(self.model.at_max()),
            Signal::AtMin(self.model.at_min()),
            Signal::Repaint,
        ]
    }

    pub fn zoom(&mut self, direction: ZoomDirection) -> Vec<Signal> {
        let moved = match direction {
            ZoomDirection::In => self.model.zoom_in(),
            ZoomDirection::Out => self.model.zoom_out(),
        };
        let mut signals = vec![
            Signal::AtMax(self.model.at_max()),
            Signal::AtMin(self.model.at_min()),
        ];
        // Only the zoomed mode depends on the index.
        if moved && self.mode == DisplayMode::Zoom {
            self.relayout();
            signals.push(Signal::Repaint);
        }
        signals
    }

    pub fn set_preview_text(&mut self, text: Option<&str>) -> Vec<Signal> {
        if self.model.set_preview_text(text) {
            self.relayout();
            vec![Signal::Repaint]
        } else {
            Vec::new()
        }
    }

    /// Dispatch one host event.
    pub fn handle(&mut self, event: InputEvent) -> Vec<Signal> {
        match event {
            InputEvent::PointerMoved { x, y } => self
                .hits
                .pointer_moved(Point::new(x, y), &self.layout)
                .map(|hit| vec![Signal::Tooltip(GlyphTip::from_placement(hit))])
                .unwrap_or_default(),
            InputEvent::Wheel { delta_y } => match ZoomDirection::from_wheel(delta_y) {
                Some(direction) => self.zoom(direction),
                None => Vec::new(),
            },
            InputEvent::Resized { width, height } => {
                if self.model.resize(width, height) {
                    self.relayout();
                    vec![Signal::Repaint]
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn relayout(&mut self) {
        self.layout = self.model.layout(self.mode);
        self.hits.invalidate();
    }
}
