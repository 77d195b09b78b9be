//! Labeled detections and their suppression.
//!
//! A `Detection` is produced once by the decoder and never mutated; the
//! suppressor only decides which detections survive.

use crate::geometry::BoundingBox;
use std::cmp::Ordering;

pub(crate) mod nms;

/// A labeled box with the score of its winning class.
#[derive(Clone, Debug, PartialEq)]
pub struct Detection {
    /// Box in normalized corner form.
    pub bbox: BoundingBox,
    /// Class name taken from the label set.
    pub label: String,
    /// Index of the winning class.
    pub class_id: usize,
    /// Winning class score, strictly above the confidence threshold.
    pub score: f32,
}

/// Orders `(candidate index, detection)` pairs by descending score.
///
/// Equal scores fall back to ascending candidate index so the order is
/// reproducible across runs.
pub(crate) fn indexed_cmp_desc(a: (usize, &Detection), b: (usize, &Detection)) -> Ordering {
    b.1.score.total_cmp(&a.1.score).then_with(|| a.0.cmp(&b.0))
}
