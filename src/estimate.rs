use tracing::debug;

use crate::catalog::TollCatalog;
use crate::cost::total_cost;
use crate::geo::polyline_length;
use crate::matcher::{MatchedToll, MatcherConfig, match_tolls};
use crate::{Coordinate, Length, VehicleClass};

/// Everything the pricing consumer needs for one route: the ordered toll
/// list, the route length and the toll total for the chosen class.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEstimate<'a> {
    pub tolls: Vec<MatchedToll<'a>>,
    pub distance: Length,
    pub toll_total: f64,
}

/// Matches the route against the catalog and reduces the result to a
/// single estimate for the given vehicle class.
pub fn estimate_route<'a>(
    config: &MatcherConfig,
    catalog: &'a TollCatalog,
    route_geometry: &[Coordinate],
    toll_hints: &[Coordinate],
    vehicle_class: VehicleClass,
) -> RouteEstimate<'a> {
    let tolls = match_tolls(config, catalog, route_geometry, toll_hints);
    let distance = polyline_length(route_geometry);
    let toll_total = total_cost(&tolls, vehicle_class);

    debug!(
        "Estimated route of {:.0} m with {} tolls, {toll_total:.2} total for {vehicle_class}",
        distance.meters(),
        tolls.len()
    );

    RouteEstimate {
        tolls,
        distance,
        toll_total,
    }
}
