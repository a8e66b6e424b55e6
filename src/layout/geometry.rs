// Segment-level geometry shared by the overlap tests.

use crate::ir::Segment;

/// Slope of a segment. Vertical segments divide by zero and come out as
/// IEEE-754 infinity; zero-length segments come out as NaN. Both flow
/// through the parallel comparison in `segments_intersect` unharmed:
/// two verticals compare equal, NaN compares equal to nothing.
pub(crate) fn slope(segment: &Segment) -> f64 {
    (segment.end.y - segment.start.y) / (segment.end.x - segment.start.x)
}

/// Whether two segments cross or touch.
///
/// Equal-slope segments count as intersecting when one segment's x- and
/// y-ranges sit inside the other's (non-strict bounds, both orderings of
/// start/end). Everything else goes through the determinant solution,
/// where only interior crossings count: `0 < lambda < 1` and
/// `0 < gamma < 1`, so endpoint contact stays out on this path.
pub(crate) fn segments_intersect(a: &Segment, b: &Segment) -> bool {
    if slope(a) == slope(b)
        && ((a.start.x >= b.start.x && a.end.x <= b.end.x)
            || (a.start.x <= b.start.x && a.end.x >= b.end.x))
        && ((a.start.y >= b.start.y && a.end.y <= b.end.y)
            || (a.start.y <= b.start.y && a.end.y >= b.end.y))
    {
        return true;
    }

    let det = (a.end.x - a.start.x) * (b.end.y - b.start.y)
        - (b.end.x - b.start.x) * (a.end.y - a.start.y);
    if det == 0.0 {
        return false;
    }
    let lambda = ((b.end.y - b.start.y) * (b.end.x - a.start.x)
        + (b.start.x - b.end.x) * (b.end.y - a.start.y))
        / det;
    let gamma = ((a.start.y - a.end.y) * (b.end.x - a.start.x)
        + (a.end.x - a.start.x) * (b.end.y - a.start.y))
        / det;
    0.0 < lambda && lambda < 1.0 && 0.0 < gamma && gamma < 1.0
}
