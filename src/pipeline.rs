//! End-to-end post-processing: decode, suppress, optionally clamp.
//!
//! `PostProcessor` bundles a validated configuration with the label set so
//! that each frame only needs its raw output buffer. A single `process` call
//! is synchronous and touches no shared mutable state; the processor can be
//! shared across threads by reference.

use crate::candidate::nms::suppress;
use crate::candidate::Detection;
use crate::decode::decode;
use crate::labels::LabelSet;
use crate::tensor::OutputView;
use crate::trace::{trace_event, trace_span};
use crate::util::{PostError, PostResult};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Tunable parameters for one detector deployment.
#[derive(Clone, Debug, PartialEq)]
pub struct PostProcessConfig {
    /// Number of candidate boxes `N` in the output tensor.
    pub num_boxes: usize,
    /// Number of classes `C` in the output tensor.
    pub num_classes: usize,
    /// Minimum best-class score; a box must score strictly above it.
    /// Must be finite and non-negative.
    pub confidence_threshold: f32,
    /// Same-label boxes overlapping strictly above this IoU are duplicates.
    pub iou_threshold: f32,
    /// Clamp surviving boxes to the unit square after suppression.
    pub clamp_boxes: bool,
}

impl Default for PostProcessConfig {
    fn default() -> Self {
        Self {
            num_boxes: 8400,
            num_classes: 3,
            confidence_threshold: 0.4,
            iou_threshold: 0.5,
            clamp_boxes: false,
        }
    }
}

impl PostProcessConfig {
    /// Checks that the configuration can describe a tensor and has usable thresholds.
    pub fn validate(&self) -> PostResult<()> {
        if self.num_boxes == 0 {
            return Err(PostError::InvalidInput("num_boxes must be at least 1"));
        }
        if !self.confidence_threshold.is_finite() {
            return Err(PostError::InvalidInput(
                "confidence_threshold must be finite",
            ));
        }
        if self.confidence_threshold < 0.0 {
            return Err(PostError::InvalidInput(
                "confidence_threshold must be non-negative",
            ));
        }
        if !self.iou_threshold.is_finite() {
            return Err(PostError::InvalidInput("iou_threshold must be finite"));
        }
        Ok(())
    }
}

/// Reusable post-processor bound to a configuration and label set.
#[derive(Clone, Debug)]
pub struct PostProcessor {
    cfg: PostProcessConfig,
    labels: LabelSet,
}

impl PostProcessor {
    /// Creates a processor, validating the config and the label count.
    pub fn new(cfg: PostProcessConfig, labels: LabelSet) -> PostResult<Self> {
        cfg.validate()?;
        labels.ensure_covers(cfg.num_classes)?;
        Ok(Self { cfg, labels })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &PostProcessConfig {
        &self.cfg
    }

    /// Returns the label set.
    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// Turns one raw output buffer into the final detections.
    pub fn process(&self, output: &[f32]) -> PostResult<Vec<Detection>> {
        let _span = trace_span!(
            "process",
            num_boxes = self.cfg.num_boxes,
            num_classes = self.cfg.num_classes
        )
        .entered();

        let view = OutputView::new(output, self.cfg.num_boxes, self.cfg.num_classes)?;
        let candidates = decode(view, &self.labels, self.cfg.confidence_threshold)?;
        let mut detections = suppress(&candidates, self.cfg.iou_threshold);
        if self.cfg.clamp_boxes {
            for det in detections.iter_mut() {
                det.bbox = det.bbox.clamp_unit();
            }
        }

        trace_event!(
            "process_done",
            candidates = candidates.len(),
            kept = detections.len()
        );
        Ok(detections)
    }

    /// Processes independent frames, returning results in input order.
    ///
    /// Frames run in parallel when the `rayon` feature is enabled; each frame
    /// is still processed by a single `process` call. The first failing frame
    /// aborts the batch.
    pub fn process_batch(&self, outputs: &[&[f32]]) -> PostResult<Vec<Vec<Detection>>> {
        #[cfg(feature = "rayon")]
        {
            outputs
                .par_iter()
                .map(|output| self.process(output))
                .collect()
        }
        #[cfg(not(feature = "rayon"))]
        {
            outputs.iter().map(|output| self.process(output)).collect()
        }
    }
}
