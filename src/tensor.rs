//! Borrowed view over the raw detector output tensor.
//!
//! The detector emits a `[1, 4 + C, N]` tensor laid out channel-major: the
//! value for channel `k` and box `i` lives at flat index `k * N + i`.
//! Channels 0..4 hold center-x, center-y, width and height; channels
//! `4..4 + C` hold per-class scores. The view validates the buffer length once
//! so the accessors can index without further checks.

use crate::util::{PostError, PostResult};

/// Number of box-geometry channels preceding the class scores.
pub const BOX_CHANNELS: usize = 4;

/// Borrowed, shape-checked view of a flat `[1, 4 + C, N]` buffer.
#[derive(Copy, Clone, Debug)]
pub struct OutputView<'a> {
    data: &'a [f32],
    num_boxes: usize,
    num_classes: usize,
}

impl<'a> OutputView<'a> {
    /// Creates a view, requiring `data.len() == (4 + num_classes) * num_boxes`.
    pub fn new(data: &'a [f32], num_boxes: usize, num_classes: usize) -> PostResult<Self> {
        let needed = required_len(num_boxes, num_classes)?;
        if data.len() != needed {
            return Err(PostError::BufferSizeMismatch {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            num_boxes,
            num_classes,
        })
    }

    /// Number of candidate boxes `N`.
    pub fn num_boxes(&self) -> usize {
        self.num_boxes
    }

    /// Number of classes `C`.
    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Number of channels, `4 + C`.
    pub fn num_channels(&self) -> usize {
        BOX_CHANNELS + self.num_classes
    }

    /// Returns the backing slice.
    pub fn as_slice(&self) -> &'a [f32] {
        self.data
    }

    /// Returns the value at `(channel, index)` if both are in range.
    pub fn get(&self, channel: usize, index: usize) -> Option<f32> {
        if channel >= self.num_channels() || index >= self.num_boxes {
            return None;
        }
        self.data.get(channel * self.num_boxes + index).copied()
    }

    /// Returns the contiguous slice holding one channel for every box.
    pub fn channel(&self, channel: usize) -> Option<&'a [f32]> {
        if channel >= self.num_channels() {
            return None;
        }
        let start = channel * self.num_boxes;
        self.data.get(start..start + self.num_boxes)
    }

    /// Returns the class score of class `class` for box `index`.
    pub fn class_score(&self, class: usize, index: usize) -> Option<f32> {
        if class >= self.num_classes {
            return None;
        }
        self.get(BOX_CHANNELS + class, index)
    }

    /// Returns `(cx, cy, w, h)` for box `index`.
    pub fn box_geometry(&self, index: usize) -> Option<(f32, f32, f32, f32)> {
        Some((
            self.get(0, index)?,
            self.get(1, index)?,
            self.get(2, index)?,
            self.get(3, index)?,
        ))
    }
}

fn required_len(num_boxes: usize, num_classes: usize) -> PostResult<usize> {
    if num_boxes == 0 {
        return Err(PostError::InvalidShape {
            num_boxes,
            num_classes,
        });
    }
    BOX_CHANNELS
        .checked_add(num_classes)
        .and_then(|channels| channels.checked_mul(num_boxes))
        .ok_or(PostError::InvalidShape {
            num_boxes,
            num_classes,
        })
}

#[cfg(test)]
mod tests {
    use super::OutputView;

    #[test]
    fn strided_access_matches_channel_major_layout() {
        // N = 3, C = 1: five channels of three values each.
        let data: Vec<f32> = (0..15).map(|v| v as f32).collect();
        let view = OutputView::new(&data, 3, 1).unwrap();
        assert_eq!(view.num_channels(), 5);
        assert_eq!(view.get(2, 1), Some(7.0));
        assert_eq!(view.class_score(0, 2), Some(14.0));
        assert_eq!(view.channel(1).unwrap(), &[3.0, 4.0, 5.0]);
        assert_eq!(view.box_geometry(0), Some((0.0, 3.0, 6.0, 9.0)));
    }

    #[test]
    fn out_of_range_access_returns_none() {
        let data = [0.0f32; 10];
        let view = OutputView::new(&data, 2, 1).unwrap();
        assert!(view.get(5, 0).is_none());
        assert!(view.get(0, 2).is_none());
        assert!(view.class_score(1, 0).is_none());
        assert!(view.channel(5).is_none());
    }
}
