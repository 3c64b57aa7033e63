use rustc_hash::FxHashMap;
use strum::IntoEnumIterator;

use crate::VehicleClass;
use crate::matcher::{MatchSource, MatchedToll};

/// Total fee for the class across all matched tolls resolved from the
/// catalog. Plazas without a price for the class charge nothing.
pub fn total_cost(tolls: &[MatchedToll<'_>], class: VehicleClass) -> f64 {
    tolls
        .iter()
        .filter(|toll| toll.source == MatchSource::Catalog)
        .map(|toll| toll.plaza.prices.amount(class))
        .sum()
}

/// Total fee per vehicle class for the matched tolls.
pub fn cost_breakdown(tolls: &[MatchedToll<'_>]) -> FxHashMap<VehicleClass, f64> {
    VehicleClass::iter()
        .map(|class| (class, total_cost(tolls, class)))
        .collect()
}
