mod geometry;
mod overlap;
mod placement;

pub use placement::find_label_position;

use crate::config::PlacementConfig;
use crate::ir::{Label, Route};

/// Resolve a label for every route, in input order.
///
/// Each route's search sees the whole route list, so every committed
/// label becomes an obstacle for the routes that follow; earlier routes
/// never move for later ones. A route whose search comes up empty is
/// left unlabeled.
pub fn place_labels(routes: &mut [Route], config: &PlacementConfig) {
    for index in 0..routes.len() {
        if let Some(label) = find_label_position(routes, index, config) {
            let route = &mut routes[index];
            if route.label.is_none() {
                route.label = Some(label);
            }
        }
    }
}

/// Committed labels in route order; unlabeled routes are skipped.
pub fn committed_labels(routes: &[Route]) -> Vec<Label> {
    routes.iter().filter_map(|route| route.label).collect()
}
