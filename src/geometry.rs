//! Axis-aligned boxes in normalized image coordinates.
//!
//! Boxes are stored in corner form `(left, top, right, bottom)`. Nothing here
//! clamps coordinates to the unit square unless [`BoundingBox::clamp_unit`]
//! is called explicitly. Degenerate boxes (zero or negative extent) have an
//! area of zero, never a negative one.

/// Box in corner form, normalized to `[0, 1]` relative to the model input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl BoundingBox {
    /// Creates a box from corner coordinates.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Converts a center/size box into corner form.
    pub fn from_center(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        Self {
            left: cx - half_w,
            top: cy - half_h,
            right: cx + half_w,
            bottom: cy + half_h,
        }
    }

    /// Horizontal extent, clamped to zero for inverted boxes.
    pub fn width(&self) -> f32 {
        (self.right - self.left).max(0.0)
    }

    /// Vertical extent, clamped to zero for inverted boxes.
    pub fn height(&self) -> f32 {
        (self.bottom - self.top).max(0.0)
    }

    /// Box area; zero for degenerate boxes.
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Area of the overlap with `other`; zero when they do not overlap.
    pub fn intersection_area(&self, other: &BoundingBox) -> f32 {
        let x_a = self.left.max(other.left);
        let y_a = self.top.max(other.top);
        let x_b = self.right.min(other.right);
        let y_b = self.bottom.min(other.bottom);
        (x_b - x_a).max(0.0) * (y_b - y_a).max(0.0)
    }

    /// Intersection over union with `other`.
    ///
    /// Returns 0 when the union area is not positive, so two zero-area boxes
    /// compare as non-overlapping instead of producing NaN.
    pub fn iou(&self, other: &BoundingBox) -> f32 {
        let inter = self.intersection_area(other);
        let union = self.area() + other.area() - inter;
        if union > 0.0 {
            inter / union
        } else {
            0.0
        }
    }

    /// Returns a copy with every coordinate clamped to `[0, 1]`.
    pub fn clamp_unit(&self) -> Self {
        Self {
            left: self.left.clamp(0.0, 1.0),
            top: self.top.clamp(0.0, 1.0),
            right: self.right.clamp(0.0, 1.0),
            bottom: self.bottom.clamp(0.0, 1.0),
        }
    }
}
