/// A parametric t-range for intersection queries.
///
/// Hits are accepted strictly inside the range, so a caller that
/// shrinks `max` to its nearest hit so far automatically prunes
/// anything at or beyond that point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// True if x lies strictly between min and max.
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }
}
