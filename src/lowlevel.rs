//! Low-level building blocks for custom post-processing pipelines.
//!
//! These expose the decoder and suppressor as free functions for callers
//! that need to insert their own steps between them. Most users should prefer
//! `PostProcessor`.

pub use crate::candidate::nms::suppress;
pub use crate::decode::decode;
pub use crate::tensor::{OutputView, BOX_CHANNELS};
