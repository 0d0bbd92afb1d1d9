//! Preview size discovery.
//!
//! Scalable fonts get the configured reference list; bitmap fonts get their
//! embedded strike sizes.

use fontpreview_core::SizeList;

use crate::config::SizeConfig;
use crate::font::LoadedFace;

/// Font data a `SizeResolver` needs.
pub trait SizeSource {
    /// Whether outlines can be drawn at any size. `None` when unknown.
    fn scalability(&self) -> Option<bool>;

    /// Pixels-per-em of each embedded bitmap strike.
    fn strike_sizes(&self) -> Vec<u16>;
}

impl SizeSource for LoadedFace {
    fn scalability(&self) -> Option<bool> {
        Self::scalability(self)
    }

    fn strike_sizes(&self) -> Vec<u16> {
        Self::strike_sizes(self)
    }
}

/// Computes the sizes worth previewing for a face.
#[derive(Debug, Clone)]
pub struct SizeResolver {
    reference: Vec<u32>,
    dpi: Option<u32>,
}

impl SizeResolver {
    pub fn new(config: &SizeConfig) -> Self {
        Self {
            reference: config.scalable.clone(),
            dpi: config.dpi,
        }
    }

    /// Ascending, duplicate-free preview sizes for `face`.
    ///
    /// Unknown scalability counts as scalable. A bitmap face without strikes
    /// yields an empty list.
    pub fn resolve(&self, face: &impl SizeSource) -> SizeList {
        match face.scalability() {
            Some(false) => SizeList::from_strikes(face.strike_sizes()),
            Some(true) => SizeList::scalable(&self.reference, self.dpi),
            None => {
                log::debug!("sizes: scalability unknown, assuming scalable");
                SizeList::scalable(&self.reference, self.dpi)
            }
        }
    }
}
