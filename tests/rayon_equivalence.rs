#![cfg(feature = "rayon")]

use yolopost::{LabelSet, PostProcessConfig, PostProcessor};

fn make_frame(seed: usize, num_boxes: usize, num_classes: usize) -> Vec<f32> {
    let mut data = vec![0.0f32; (4 + num_classes) * num_boxes];
    for i in 0..num_boxes {
        let v = (i * 31 + seed * 17) % 97;
        data[i] = (v % 10) as f32 / 10.0 + 0.05;
        data[num_boxes + i] = (v / 10) as f32 / 10.0 + 0.05;
        data[2 * num_boxes + i] = 0.08;
        data[3 * num_boxes + i] = 0.12;
        for c in 0..num_classes {
            data[(4 + c) * num_boxes + i] = ((v + c * 13) % 100) as f32 / 100.0;
        }
    }
    data
}

#[test]
fn parallel_batch_matches_sequential() {
    let cfg = PostProcessConfig {
        num_boxes: 500,
        ..PostProcessConfig::default()
    };
    let processor = PostProcessor::new(cfg, LabelSet::new(["a", "b", "c"])).unwrap();

    let frames: Vec<Vec<f32>> = (0..16).map(|seed| make_frame(seed, 500, 3)).collect();
    let refs: Vec<&[f32]> = frames.iter().map(Vec::as_slice).collect();

    let batch = processor.process_batch(&refs).unwrap();
    for (frame, result) in frames.iter().zip(batch.iter()) {
        assert_eq!(result, &processor.process(frame).unwrap());
    }
}
