// Candidate evaluation and the bisection-style walk that picks an
// anchor point along a route.

use crate::config::PlacementConfig;
use crate::ir::{Label, LabelPosition, Point, Route};

use super::overlap::{rectangle_has_point, rectangle_intersects};

/// Placements are tried in this order; the first legal one wins, which
/// keeps output reproducible across runs.
const POSITION_PRIORITY: [LabelPosition; 4] = [
    LabelPosition::TopLeft,
    LabelPosition::TopRight,
    LabelPosition::BottomLeft,
    LabelPosition::BottomRight,
];

/// Route point selected by the normalized arc-position ratio:
/// `points[floor(len * t)]`, clamped onto the last point at `t = 1`.
pub(crate) fn point_at_ratio(route: &Route, ratio: f64) -> Point {
    let index = (route.points.len() as f64 * ratio) as usize;
    route.points[index.min(route.points.len() - 1)]
}

fn opposite_corner(position: LabelPosition, anchor: Point, config: &PlacementConfig) -> Point {
    let w = config.label_width;
    let h = config.label_height;
    match position {
        LabelPosition::TopLeft => Point::new(anchor.x - w, anchor.y - h),
        LabelPosition::TopRight => Point::new(anchor.x + w, anchor.y - h),
        LabelPosition::BottomLeft => Point::new(anchor.x - w, anchor.y + h),
        LabelPosition::BottomRight => Point::new(anchor.x + w, anchor.y + h),
    }
}

/// Tries the four placements around `candidate` in priority order and
/// returns the first whose rectangle neither contains a foreign point
/// nor crosses a route segment. Pure: committing the label is the
/// caller's business.
pub(crate) fn evaluate_candidate(
    routes: &[Route],
    candidate: Point,
    config: &PlacementConfig,
) -> Option<Label> {
    for position in POSITION_PRIORITY {
        let corner = opposite_corner(position, candidate, config);
        if !rectangle_has_point(routes, corner, candidate, config)
            && !rectangle_intersects(routes, corner, candidate)
        {
            return Some(Label {
                position,
                point: candidate,
            });
        }
    }
    None
}

/// Searches `routes[index]` for an anchor point admitting a legal label.
///
/// Probes the middle of the route first, then walks a shrinking interval
/// `[min, max]`: each round tries the interval's lower and upper quarter
/// points, plus one probe below `min` and one above `max` once those
/// bounds have moved off 0 and 1. The interval narrows toward the center
/// until floating-point precision stops distinguishing successive
/// midpoints; central placements are found early, outer ones late.
pub fn find_label_position(
    routes: &[Route],
    index: usize,
    config: &PlacementConfig,
) -> Option<Label> {
    let route = &routes[index];
    if route.points.is_empty() {
        return None;
    }

    let label = evaluate_candidate(routes, point_at_ratio(route, 0.5), config);
    if label.is_some() {
        return label;
    }

    let mut min = 0.0f64;
    let mut max = 1.0f64;
    while min < max {
        let mid = (min + max) / 2.0;

        let min_mid = (min + mid) / 2.0;
        let label = evaluate_candidate(routes, point_at_ratio(route, min_mid), config);
        if label.is_some() {
            return label;
        }

        let max_mid = (max + mid) / 2.0;
        let label = evaluate_candidate(routes, point_at_ratio(route, max_mid), config);
        if label.is_some() {
            return label;
        }

        if min != 0.0 {
            let label = evaluate_candidate(routes, point_at_ratio(route, min / 2.0), config);
            if label.is_some() {
                return label;
            }
        }

        if max != 1.0 {
            let label =
                evaluate_candidate(routes, point_at_ratio(route, (max + 1.0) / 2.0), config);
            if label.is_some() {
                return label;
            }
        }

        min = min_mid;
        max = max_mid;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::overlap::{rectangle_has_point, rectangle_intersects};

    fn route(points: &[(f64, f64)]) -> Route {
        Route::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[test]
    fn point_at_ratio_floors_the_index() {
        let r = route(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (30.0, 0.0)]);
        assert_eq!(point_at_ratio(&r, 0.0), Point::new(0.0, 0.0));
        assert_eq!(point_at_ratio(&r, 0.5), Point::new(20.0, 0.0));
        assert_eq!(point_at_ratio(&r, 0.74), Point::new(20.0, 0.0));
        assert_eq!(point_at_ratio(&r, 0.75), Point::new(30.0, 0.0));
    }

    #[test]
    fn point_at_ratio_clamps_at_the_end() {
        let r = route(&[(0.0, 0.0), (10.0, 0.0)]);
        assert_eq!(point_at_ratio(&r, 1.0), Point::new(10.0, 0.0));
    }

    #[test]
    fn unobstructed_candidate_takes_top_left() {
        // A lone point has no segments and nothing nearby, so the first
        // position in the priority order wins.
        let routes = vec![route(&[(5.0, 5.0)])];
        let label = evaluate_candidate(&routes, Point::new(5.0, 5.0), &PlacementConfig::default())
            .expect("open plane placement");
        assert_eq!(label.position, LabelPosition::TopLeft);
        assert_eq!(label.point, Point::new(5.0, 5.0));
    }

    #[test]
    fn blocked_top_left_falls_through_in_priority_order() {
        // The route's first point sits inside the top-left rectangle of
        // a candidate anchored at its last point and differs from the
        // anchor in both coordinates, pushing the label to top-right.
        let routes = vec![route(&[(0.0, 0.0), (10.0, 10.0)])];
        let label = evaluate_candidate(
            &routes,
            Point::new(10.0, 10.0),
            &PlacementConfig::default(),
        )
        .expect("placement");
        assert_eq!(label.position, LabelPosition::TopRight);
    }

    #[test]
    fn fully_blocked_candidate_yields_none() {
        // One blocker point strictly inside each of the four rectangles
        // around the anchor.
        let anchor = Point::new(0.0, 0.0);
        let blockers = route(&[(-50.0, -25.0), (50.0, -25.0), (-50.0, 25.0), (50.0, 25.0)]);
        let routes = vec![route(&[(0.0, 0.0)]), blockers];
        assert!(evaluate_candidate(&routes, anchor, &PlacementConfig::default()).is_none());
    }

    #[test]
    fn search_returns_none_when_every_probe_is_blocked() {
        let config = PlacementConfig::default();
        // Both points of the route under search are surrounded on all
        // four quadrants.
        let blockers = route(&[
            (-50.0, -25.0),
            (50.0, -25.0),
            (-50.0, 25.0),
            (50.0, 25.0),
            (150.0, -25.0),
            (150.0, 25.0),
        ]);
        let routes = vec![route(&[(0.0, 0.0), (100.0, 0.0)]), blockers];
        assert!(find_label_position(&routes, 0, &config).is_none());
    }

    #[test]
    fn search_prefers_the_midpoint_probe() {
        let config = PlacementConfig::default();
        let routes = vec![route(&[
            (0.0, 0.0),
            (50.0, 40.0),
            (100.0, 0.0),
            (150.0, 40.0),
            (200.0, 0.0),
        ])];
        let label = find_label_position(&routes, 0, &config).expect("placement");
        // floor(5 * 0.5) selects the third point.
        assert_eq!(label.point, Point::new(100.0, 0.0));
        assert_eq!(label.position, LabelPosition::TopLeft);
    }

    #[test]
    fn search_walks_outward_when_the_middle_is_blocked() {
        let config = PlacementConfig::default();
        let mut blocker = route(&[(0.0, 0.0), (100.0, 0.0)]);
        blocker.label = Some(Label {
            position: LabelPosition::TopRight,
            point: Point::new(100.0, 0.0),
        });
        let routes = vec![blocker, route(&[(0.0, 0.0), (100.0, 0.0)])];
        let label = find_label_position(&routes, 1, &config).expect("placement");
        assert_eq!(label.point, Point::new(0.0, 0.0));
        assert_eq!(label.position, LabelPosition::TopLeft);
    }

    #[test]
    fn returned_placement_rechecks_as_legal() {
        let config = PlacementConfig::default();
        let mut blocker = route(&[(0.0, 0.0), (100.0, 0.0)]);
        blocker.label = Some(Label {
            position: LabelPosition::TopRight,
            point: Point::new(100.0, 0.0),
        });
        let routes = vec![blocker, route(&[(0.0, 0.0), (100.0, 0.0)])];
        let label = find_label_position(&routes, 1, &config).expect("placement");

        let corner = opposite_corner(label.position, label.point, &config);
        assert!(!rectangle_has_point(&routes, corner, label.point, &config));
        assert!(!rectangle_intersects(&routes, corner, label.point));
    }
}
