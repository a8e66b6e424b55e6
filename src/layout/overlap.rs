// Obstruction tests for a candidate label rectangle. The rectangle is
// always the bounding box of an anchor point and the diagonally opposite
// corner, so both tests take the pair in either order.

use crate::config::PlacementConfig;
use crate::ir::{Label, LabelPosition, Point, Route, Segment};

use super::geometry::segments_intersect;

/// The four corners of a committed label's rectangle, anchored per its
/// position: top-left, top-right, bottom-left, bottom-right.
pub(crate) fn label_corners(label: &Label, config: &PlacementConfig) -> [Point; 4] {
    let w = config.label_width;
    let h = config.label_height;
    let p = label.point;
    match label.position {
        LabelPosition::TopLeft => [
            Point::new(p.x - w, p.y - h),
            Point::new(p.x, p.y - h),
            Point::new(p.x - w, p.y),
            p,
        ],
        LabelPosition::TopRight => [
            Point::new(p.x, p.y - h),
            Point::new(p.x + w, p.y - h),
            p,
            Point::new(p.x + w, p.y),
        ],
        LabelPosition::BottomLeft => [
            Point::new(p.x - w, p.y),
            p,
            Point::new(p.x - w, p.y + h),
            Point::new(p.x, p.y + h),
        ],
        LabelPosition::BottomRight => [
            p,
            Point::new(p.x + w, p.y),
            Point::new(p.x, p.y + h),
            Point::new(p.x + w, p.y + h),
        ],
    }
}

/// Whether any route point or committed label corner falls within the
/// closed bounds of the rectangle spanned by `anchor` and `corner`.
///
/// A route point sharing the anchor's x or y coordinate is exempt, so a
/// rectangle anchored on a route's own point does not block itself.
/// Committed label corners get no such exemption.
pub(crate) fn rectangle_has_point(
    routes: &[Route],
    corner: Point,
    anchor: Point,
    config: &PlacementConfig,
) -> bool {
    let min_x = anchor.x.min(corner.x);
    let min_y = anchor.y.min(corner.y);
    let max_x = anchor.x.max(corner.x);
    let max_y = anchor.y.max(corner.y);

    let inside = |point: &Point| {
        point.x >= min_x && point.x <= max_x && point.y >= min_y && point.y <= max_y
    };

    for route in routes {
        for point in &route.points {
            if inside(point) && point.x != anchor.x && point.y != anchor.y {
                return true;
            }
        }

        let Some(label) = &route.label else {
            continue;
        };
        if label_corners(label, config).iter().any(inside) {
            return true;
        }
    }

    false
}

/// Whether any of the rectangle's four border segments crosses any
/// route segment.
pub(crate) fn rectangle_intersects(routes: &[Route], corner: Point, anchor: Point) -> bool {
    let min_x = anchor.x.min(corner.x);
    let min_y = anchor.y.min(corner.y);
    let max_x = anchor.x.max(corner.x);
    let max_y = anchor.y.max(corner.y);

    let borders = [
        // top
        Segment {
            start: Point::new(min_x, min_y),
            end: Point::new(max_x, min_y),
        },
        // right
        Segment {
            start: Point::new(max_x, min_y),
            end: Point::new(max_x, max_y),
        },
        // bottom
        Segment {
            start: Point::new(min_x, max_y),
            end: Point::new(max_x, max_y),
        },
        // left
        Segment {
            start: Point::new(min_x, min_y),
            end: Point::new(min_x, max_y),
        },
    ];

    for border in &borders {
        for route in routes {
            for segment in &route.segments {
                if segments_intersect(border, segment) {
                    return true;
                }
            }
        }
    }

    false
}
