#![doc = include_str!("../README.md")]

mod catalog;
mod cost;
mod estimate;
mod geo;
mod matcher;
mod model;

pub use catalog::{CatalogError, TollCatalog, TollPlaza};
pub use cost::{cost_breakdown, total_cost};
pub use estimate::{RouteEstimate, estimate_route};
pub use geo::{haversine_distance, polyline_length};
pub use matcher::{MatchSource, MatchedToll, MatcherConfig, match_tolls};
pub use model::{Coordinate, Length, PriceTable, VehicleClass};
