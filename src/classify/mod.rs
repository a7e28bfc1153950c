//! Address classification.
//!
//! - [`classifier`] - class band and category rules
//! - [`lesson`] - showcase labels and the per-octet lesson

mod classifier;
mod lesson;

pub use classifier::{classify, Category, ClassificationResult, NetworkClass};
pub use lesson::{audience_label, lesson, OctetRole, SHOWCASE_ADDRESSES};
