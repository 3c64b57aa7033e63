use tracing::{debug, trace};

use crate::catalog::{TollCatalog, TollPlaza};
use crate::geo::haversine_distance;
use crate::{Coordinate, Length};

/// Matching thresholds. The defaults balance false positives (plazas on
/// overpasses near but not on the route) against false negatives (coarse
/// route geometry missing a plaza by a few meters).
#[derive(Debug, Clone, Copy)]
pub struct MatcherConfig {
    /// Maximum distance from a route point to a plaza for the plaza to
    /// count as lying on the route.
    pub proximity_radius: Length,
    /// Maximum distance from a provider toll hint to the plaza it
    /// resolves to.
    pub hint_radius: Length,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            proximity_radius: Length::from_meters(150.0),
            hint_radius: Length::from_meters(3000.0),
        }
    }
}

/// Origin of a matched toll. Every match currently resolves to a catalog
/// entry; the cost aggregation filters on this so that unverified entries
/// from external sources never price a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchSource {
    Catalog,
}

/// A catalog plaza determined to lie on a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchedToll<'a> {
    pub plaza: &'a TollPlaza,
    pub source: MatchSource,
    /// True if the match originated from a provider toll hint rather than
    /// the proximity scan of the route geometry.
    pub api_detected: bool,
}

/// Determines which catalog plazas the route passes through, in travel
/// order, without duplicates.
///
/// 1. Each toll hint resolves to the closest plaza within `hint_radius`;
///    those matches are flagged `api_detected`.
/// 2. Every plaza not yet matched is tested against the route points in
///    order, and matches on the first point within `proximity_radius`.
/// 3. Matches are sorted ascending by distance from the route origin,
///    ties broken by plaza id. Straight-line distance from the origin
///    approximates travel order; routes with sharp detours or loops can
///    misorder plazas.
///
/// Empty inputs yield an empty list. Coordinates are assumed to be
/// well-formed decimal degrees; validating them is the caller's concern.
pub fn match_tolls<'a>(
    config: &MatcherConfig,
    catalog: &'a TollCatalog,
    route_geometry: &[Coordinate],
    toll_hints: &[Coordinate],
) -> Vec<MatchedToll<'a>> {
    debug!(
        "Matching {} hints and {} route points against {} plazas",
        toll_hints.len(),
        route_geometry.len(),
        catalog.len()
    );

    let mut matched = resolve_hints(config, catalog, toll_hints);
    scan_geometry(config, catalog, route_geometry, &mut matched);

    if let Some(&origin) = route_geometry.first() {
        // breaking distance ties by plaza id keeps the order reproducible
        matched.sort_by_key(|toll| {
            (
                haversine_distance(origin, toll.plaza.location),
                toll.plaza.id,
            )
        });
    }

    matched
}

/// Resolves each provider hint to the closest catalog plaza within the
/// hint radius, skipping plazas that already matched an earlier hint.
fn resolve_hints<'a>(
    config: &MatcherConfig,
    catalog: &'a TollCatalog,
    toll_hints: &[Coordinate],
) -> Vec<MatchedToll<'a>> {
    let mut matched: Vec<MatchedToll<'a>> = Vec::new();

    for &hint in toll_hints {
        let Some(plaza) = catalog.nearest_within(hint, config.hint_radius) else {
            trace!("No plaza within {:?} of hint {hint:?}", config.hint_radius);
            continue;
        };

        if matched.iter().any(|toll| toll.plaza.id == plaza.id) {
            trace!("Plaza {} already matched, skipping {hint:?}", plaza.id);
            continue;
        }

        debug!("Hint {hint:?} resolved to plaza {} ({})", plaza.id, plaza.name);
        matched.push(MatchedToll {
            plaza,
            source: MatchSource::Catalog,
            api_detected: true,
        });
    }

    matched
}

/// Scans the remaining plazas against the route geometry. A single route
/// point within the proximity radius is sufficient evidence that the
/// plaza is on the route, the geometry being denser than the radius.
fn scan_geometry<'a>(
    config: &MatcherConfig,
    catalog: &'a TollCatalog,
    route_geometry: &[Coordinate],
    matched: &mut Vec<MatchedToll<'a>>,
) {
    for plaza in catalog.all() {
        if matched.iter().any(|toll| toll.plaza.id == plaza.id) {
            continue;
        }

        let on_route = route_geometry
            .iter()
            .any(|&point| haversine_distance(point, plaza.location) <= config.proximity_radius);

        if on_route {
            debug!("Plaza {} ({}) is on the route", plaza.id, plaza.name);
            matched.push(MatchedToll {
                plaza,
                source: MatchSource::Catalog,
                api_detected: false,
            });
        }
    }
}
