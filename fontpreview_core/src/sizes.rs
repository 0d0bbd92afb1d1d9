//! Ordered list of preview sizes.
//!
//! A `SizeList` is always ascending, duplicate-free, and holds only positive
//! pixel sizes. Scalable fonts get a curated reference list (optionally
//! converted from points to device pixels); bitmap fonts get one entry per
//! embedded strike.

/// Reference sizes (in points) shown for scalable fonts.
pub const SCALABLE_SIZES: [u32; 9] = [8, 10, 12, 24, 36, 48, 64, 72, 96];

/// Points per inch, used for point-to-pixel conversion.
const POINTS_PER_INCH: u32 = 72;

/// Ascending, unique, positive pixel sizes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeList(Vec<u32>);

impl SizeList {
    /// Build a list from arbitrary sizes: zeros are dropped, the rest sorted
    /// and deduplicated.
    pub fn from_sizes<I: IntoIterator<Item = u32>>(sizes: I) -> Self {
        let mut v: Vec<u32> = sizes.into_iter().filter(|&s| s > 0).collect();
        v.sort_unstable();
        v.dedup();
        Self(v)
    }

    /// Sizes for a scalable font.
    ///
    /// With `dpi` set, each point size is converted to pixels with rounding
    /// (`(pt * dpi + 36) / 72`). Without it the surface is pixel-exact and the
    /// reference values are used as-is.
    pub fn scalable(reference: &[u32], dpi: Option<u32>) -> Self {
        Self::from_sizes(reference.iter().map(|&pt| match dpi {
            Some(dpi) => points_to_pixels(pt, dpi),
            None => pt,
        }))
    }

    /// Sizes for a bitmap font: one entry per strike's pixels-per-em.
    pub fn from_strikes<I: IntoIterator<Item = u16>>(ppems: I) -> Self {
        Self::from_sizes(ppems.into_iter().map(u32::from))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<u32> {
        self.0.get(index).copied()
    }

    /// Smallest size.
    pub fn first(&self) -> Option<u32> {
        self.0.first().copied()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    /// Index of the largest size not exceeding `body_px`.
    ///
    /// Falls back to 0 when every size is larger (or the list is empty).
    pub fn body_index(&self, body_px: u32) -> usize {
        self.0
            .iter()
            .rposition(|&s| s <= body_px)
            .unwrap_or(0)
    }

    /// The size at `body_index(body_px)`, so the body size is always one
    /// the list offers. `None` only for an empty list.
    pub fn body_size(&self, body_px: u32) -> Option<u32> {
        self.get(self.body_index(body_px))
    }
}

impl<'a> IntoIterator for &'a SizeList {
    type Item = u32;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

/// Convert a point size to device pixels at `dpi`, rounding to nearest.
pub fn points_to_pixels(pt: u32, dpi: u32) -> u32 {
    (pt * dpi + POINTS_PER_INCH / 2) / POINTS_PER_INCH
}

#[cfg(test)]
mod tests;
