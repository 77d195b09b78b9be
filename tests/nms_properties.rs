use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use yolopost::lowlevel::suppress;
use yolopost::{BoundingBox, Detection};

fn det(label: &str, score: f32, bbox: BoundingBox) -> Detection {
    Detection {
        bbox,
        label: label.to_string(),
        class_id: 0,
        score,
    }
}

#[test]
fn greedy_suppression_keeps_disjoint_low_score_box() {
    let box1 = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
    let box2 = BoundingBox::new(0.0, 0.0, 0.6, 1.0);
    let box3 = BoundingBox::new(2.0, 2.0, 3.0, 3.0);
    assert!((box1.iou(&box2) - 0.6).abs() < 1e-6);

    let out = suppress(
        &[det("a", 0.9, box1), det("a", 0.8, box2), det("a", 0.3, box3)],
        0.5,
    );
    assert_eq!(out, vec![det("a", 0.9, box1), det("a", 0.3, box3)]);
}

#[test]
fn different_labels_never_suppress_each_other() {
    let bbox = BoundingBox::new(0.2, 0.2, 0.6, 0.6);
    let out = suppress(&[det("cat", 0.9, bbox), det("dog", 0.5, bbox)], 0.5);
    assert_eq!(out.len(), 2);
}

#[test]
fn suppression_chain_only_compares_against_kept_boxes() {
    // b overlaps a and c, but a and c do not overlap each other.
    let a = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
    let b = BoundingBox::new(0.3, 0.0, 1.3, 1.0);
    let c = BoundingBox::new(0.6, 0.0, 1.6, 1.0);
    assert!(a.iou(&b) > 0.5 && b.iou(&c) > 0.5 && a.iou(&c) <= 0.5);

    let out = suppress(&[det("a", 0.9, a), det("a", 0.8, b), det("a", 0.7, c)], 0.5);
    let scores: Vec<f32> = out.iter().map(|d| d.score).collect();
    assert_eq!(scores, [0.9, 0.7]);
}

#[test]
fn empty_candidates_yield_empty() {
    assert!(suppress(&[], 0.5).is_empty());
}

fn random_detections(rng: &mut StdRng, count: usize) -> Vec<Detection> {
    let labels = ["person", "car", "bike"];
    (0..count)
        .map(|_| {
            let cx: f32 = rng.random_range(0.0..1.0);
            let cy: f32 = rng.random_range(0.0..1.0);
            let w: f32 = rng.random_range(0.01..0.4);
            let h: f32 = rng.random_range(0.01..0.4);
            let label = labels[rng.random_range(0..labels.len())];
            let score: f32 = rng.random_range(0.4..1.0);
            det(label, score, BoundingBox::from_center(cx, cy, w, h))
        })
        .collect()
}

#[test]
fn suppression_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..20 {
        let candidates = random_detections(&mut rng, 200);
        let once = suppress(&candidates, 0.5);
        let twice = suppress(&once, 0.5);
        assert_eq!(once, twice);
    }
}

#[test]
fn survivors_do_not_overlap_within_a_label() {
    let mut rng = StdRng::seed_from_u64(42);
    let candidates = random_detections(&mut rng, 300);
    let out = suppress(&candidates, 0.45);
    for (i, a) in out.iter().enumerate() {
        for b in out.iter().skip(i + 1) {
            if a.label == b.label {
                assert!(a.bbox.iou(&b.bbox) <= 0.45);
            }
        }
    }
}
