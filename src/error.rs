//! Error taxonomy for preview construction.
//!
//! Every variant is local to one `show_font` call: the model resets its
//! state, records the error, and reports `usable = false`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    /// The font cannot be opened at all (missing file, corrupt data,
    /// unsupported format, face index out of range).
    #[error("font {source_name} is unavailable: {reason}")]
    ResourceUnavailable { source_name: String, reason: String },

    /// A family name did not resolve to any installed face.
    #[error("no installed font matches family {family:?}")]
    FamilyNotFound { family: String },

    /// Size discovery produced an empty list (e.g. a bitmap font without strikes).
    #[error("font {source_name} has no usable preview sizes")]
    NoSizesAvailable { source_name: String },

    /// Neither curated samples nor the raw coverage walk produced any text.
    #[error("font {source_name} has no renderable characters")]
    NoCoverage { source_name: String },

    /// Every run of a shaped string came from a substituted face.
    #[error("all {discarded} shaped runs came from substituted fonts")]
    ShapingMismatch { discarded: usize },
}

impl PreviewError {
    pub(crate) fn unavailable(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ResourceUnavailable {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}
