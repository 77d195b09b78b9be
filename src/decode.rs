//! Decoding raw detector output into candidate detections.

use crate::candidate::Detection;
use crate::geometry::BoundingBox;
use crate::labels::LabelSet;
use crate::tensor::{OutputView, BOX_CHANNELS};
use crate::util::{PostError, PostResult};

/// Starting value of the per-box argmax scan.
const SCORE_SENTINEL: f32 = -1.0;

/// Extracts every box whose best class score is strictly above
/// `confidence_threshold`.
///
/// The best class is the first one holding the maximum score; a later class
/// only replaces it with a strictly greater score. Boxes are converted from
/// center/size to corner form without clamping. Candidates are returned in
/// ascending box index order.
///
/// `confidence_threshold` must be non-negative so every emitted score is
/// positive; `PostProcessConfig::validate` enforces this for the pipeline. A
/// NaN threshold admits nothing.
///
/// Fails with `LabelsTooShort` if `labels` cannot name every class, before
/// any box is inspected.
pub fn decode(
    output: OutputView<'_>,
    labels: &LabelSet,
    confidence_threshold: f32,
) -> PostResult<Vec<Detection>> {
    labels.ensure_covers(output.num_classes())?;

    let num_boxes = output.num_boxes();
    let data = output.as_slice();
    let mut candidates = Vec::new();

    for i in 0..num_boxes {
        let mut max_score = SCORE_SENTINEL;
        let mut best_class = None;
        for class in 0..output.num_classes() {
            let score = data[(BOX_CHANNELS + class) * num_boxes + i];
            if score > max_score {
                max_score = score;
                best_class = Some(class);
            }
        }

        let Some(class_id) = best_class else {
            continue;
        };
        if !(max_score > confidence_threshold) {
            continue;
        }

        let (cx, cy, w, h) = output
            .box_geometry(i)
            .ok_or(PostError::IndexOutOfBounds {
                index: i,
                len: num_boxes,
                context: "box",
            })?;
        candidates.push(Detection {
            bbox: BoundingBox::from_center(cx, cy, w, h),
            label: labels.get(class_id)?.to_string(),
            class_id,
            score: max_score,
        });
    }

    Ok(candidates)
}
