//! Zoom state machine over a `SizeList`.
//!
//! The controller holds an index into the resolved size list. Zooming moves
//! the index one step and clamps at the ends; it never touches the size list
//! itself. Reloading a font resets the index to a default "body" position.

/// Direction of a single zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Map a vertical wheel delta to a zoom step. Zero means no step.
    pub fn from_wheel(delta_y: f32) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Self::In)
        } else if delta_y < 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }
}

/// Index into the size list with boundary flags.
///
/// Invariant: `index < len` whenever `len > 0`, and `index == 0` otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoomController {
    index: usize,
    len: usize,
}

impl ZoomController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for a freshly loaded size list of `len` entries, starting at
    /// `default_index` (clamped into range).
    pub fn reset(&mut self, len: usize, default_index: usize) {
        self.len = len;
        self.index = default_index.min(len.saturating_sub(1));
    }

    /// Forget the size list (no font loaded).
    pub fn clear(&mut self) {
        self.reset(0, 0);
    }

    /// Step toward larger sizes. Returns `true` if the index changed.
    pub fn zoom_in(&mut self) -> bool {
        if self.at_max() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Step toward smaller sizes. Returns `true` if the index changed.
    pub fn zoom_out(&mut self) -> bool {
        if self.at_min() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Apply a step in the given direction.
    pub fn step(&mut self, direction: ZoomDirection) -> bool {
        match direction {
            ZoomDirection::In => self.zoom_in(),
            ZoomDirection::Out => self.zoom_out(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// At the smallest size (always true for lists of 0 or 1 entries).
    pub fn at_min(&self) -> bool {
        self.index == 0
    }

    /// At the largest size (always true for lists of 0 or 1 entries).
    pub fn at_max(&self) -> bool {
        self.index + 1 >= self.len
    }
}

#[cfg(test)]
mod tests;
