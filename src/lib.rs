//! Yolopost turns raw YOLO-family detector output into labeled boxes.
//!
//! The detector emits a channel-major `[1, 4 + C, N]` float tensor. This
//! crate decodes boxes whose best class score clears a confidence threshold,
//! then removes same-label duplicates with greedy non-maximum suppression.
//! Label loading and a frame-rate throttle are included for camera loops;
//! batch processing can run in parallel via the `rayon` feature.

pub mod candidate;
pub mod decode;
pub mod geometry;
pub mod labels;
pub mod lowlevel;
pub mod pipeline;
pub mod tensor;
pub mod throttle;
mod trace;
pub mod util;

pub use candidate::Detection;
pub use geometry::BoundingBox;
pub use labels::LabelSet;
pub use pipeline::{PostProcessConfig, PostProcessor};
pub use tensor::OutputView;
pub use throttle::FrameThrottle;
pub use util::{PostError, PostResult};
