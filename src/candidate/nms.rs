//! Class-aware non-maximum suppression.

use crate::candidate::{indexed_cmp_desc, Detection};
use std::collections::HashMap;

/// Applies greedy non-maximum suppression independently per label.
///
/// Candidates are grouped by exact label equality. Within a group they are
/// visited in descending score order (ties by candidate index) and kept if
/// their IoU with every previously kept box of the group is at most
/// `iou_threshold`. Boxes at exactly the threshold survive.
///
/// Groups are emitted in order of their label's first appearance; each
/// group's survivors are in descending score order.
pub fn suppress(candidates: &[Detection], iou_threshold: f32) -> Vec<Detection> {
    let mut group_of: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for (idx, det) in candidates.iter().enumerate() {
        let slot = *group_of.entry(det.label.as_str()).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(idx);
    }

    let mut result = Vec::with_capacity(candidates.len());
    for mut group in groups {
        group.sort_by(|&a, &b| indexed_cmp_desc((a, &candidates[a]), (b, &candidates[b])));

        let mut kept: Vec<&Detection> = Vec::new();
        'outer: for idx in group {
            let det = &candidates[idx];
            for kept_det in kept.iter() {
                if kept_det.bbox.iou(&det.bbox) > iou_threshold {
                    continue 'outer;
                }
            }
            kept.push(det);
        }
        result.extend(kept.into_iter().cloned());
    }

    result
}
