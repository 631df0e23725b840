use super::{spans_intersect, Segment};

/// Returns the segments of `set` whose span intersects `[start, start + length)`.
///
/// Order of `set` is preserved.
#[must_use]
pub fn overlaps(start: usize, length: usize, set: &[Segment]) -> Vec<&Segment> {
    set.iter()
        .filter(|segment| spans_intersect(start, length, segment))
        .collect()
}

/// Finds the segments of `set_b` that overlap any segment of `set_a`.
///
/// A `set_b` segment spanning several `set_a` segments is reported once per
/// match, so `overlapping` may hold duplicates when walls merge. The second
/// element holds everything else from `set_b`.
#[must_use]
pub fn multiple_overlaps(set_a: &[Segment], set_b: &[Segment]) -> (Vec<Segment>, Vec<Segment>) {
    let mut overlapping = Vec::new();
    for b in set_b {
        for a in set_a {
            overlapping.extend(a.overlaps(std::slice::from_ref(b)).into_iter().cloned());
        }
    }
    let non_overlapping = segments_diff(set_b, &overlapping);
    (overlapping, non_overlapping)
}

/// `set_a` minus every segment structurally present in `set_b`.
#[must_use]
pub fn segments_diff(set_a: &[Segment], set_b: &[Segment]) -> Vec<Segment> {
    set_a
        .iter()
        .filter(|segment| !segment.is_in(set_b))
        .cloned()
        .collect()
}
