mod overlap;
mod split;

pub use overlap::{multiple_overlaps, overlaps, segments_diff};
pub use split::split;

use std::fmt;

/// A run of interior (non-wall) text on one line.
///
/// `start` is the char column where the run begins. Two segments are the
/// same segment iff both `start` and `content` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    start: usize,
    content: String,
    width: usize,
}

impl Segment {
    /// Creates a segment starting at char column `start`.
    #[must_use]
    pub fn new(start: usize, content: impl Into<String>) -> Self {
        let content = content.into();
        let width = content.chars().count();
        Self {
            start,
            content,
            width,
        }
    }

    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of columns the segment covers.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// First column past the segment.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.width
    }

    /// Returns `true` if the column spans of `self` and `other` intersect.
    #[must_use]
    pub fn intersects(&self, other: &Segment) -> bool {
        spans_intersect(self.start, self.width, other)
    }

    /// Returns the segments of `set` that intersect this one.
    #[must_use]
    pub fn overlaps<'a>(&self, set: &'a [Segment]) -> Vec<&'a Segment> {
        overlaps(self.start, self.width, set)
    }

    /// Returns `true` if a structurally identical segment is in `set`.
    #[must_use]
    pub fn is_in(&self, set: &[Segment]) -> bool {
        set.iter().any(|s| s == self)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}: '{}']", self.start, self.content)
    }
}

/// Half-open span test: `[start, start + length)` against `segment`.
/// Empty spans intersect nothing.
pub(crate) fn spans_intersect(start: usize, length: usize, segment: &Segment) -> bool {
    if length == 0 || segment.width == 0 {
        return false;
    }
    !(segment.end() <= start || start + length <= segment.start)
}
