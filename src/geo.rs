use crate::{Coordinate, Length};

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle (Haversine) distance between two coordinates.
/// Pure and deterministic; identical points yield zero.
pub fn haversine_distance(a: Coordinate, b: Coordinate) -> Length {
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (delta_lon / 2.0).sin().powi(2);

    Length::from_meters(2.0 * EARTH_RADIUS_METERS * h.sqrt().atan2((1.0 - h).sqrt()))
}

/// Total length of a polyline as the sum of its consecutive legs.
/// Polylines with fewer than two points have zero length.
pub fn polyline_length(geometry: &[Coordinate]) -> Length {
    geometry
        .windows(2)
        .map(|leg| haversine_distance(leg[0], leg[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use geo::{Distance, Haversine, Point};
    use test_log::test;

    use super::*;

    fn reference_distance(a: Coordinate, b: Coordinate) -> f64 {
        Haversine.distance(Point::new(a.lon, a.lat), Point::new(b.lon, b.lat))
    }

    #[test]
    fn haversine_identical_points() {
        let point = Coordinate::new(-23.1864, -46.8842);
        assert_eq!(haversine_distance(point, point), Length::ZERO);
    }

    #[test]
    fn haversine_is_symmetric() {
        let a = Coordinate::new(-23.1864, -46.8842);
        let b = Coordinate::new(-22.5645, -47.4018);
        assert_eq!(haversine_distance(a, b), haversine_distance(b, a));
    }

    #[test]
    fn haversine_matches_reference_implementation() {
        let a = Coordinate::new(-23.1864, -46.8842);
        let b = Coordinate::new(-22.5645, -47.4018);

        // geo uses the mean earth radius, ours is the 6371 km sphere
        assert_relative_eq!(
            haversine_distance(a, b).meters(),
            reference_distance(a, b),
            max_relative = 1e-4
        );
    }

    #[test]
    fn one_longitude_degree_at_equator() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);
        assert_relative_eq!(
            haversine_distance(a, b).meters(),
            111_194.93,
            max_relative = 1e-6
        );
    }

    #[test]
    fn polyline_length_sums_legs() {
        let geometry = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 0.5),
            Coordinate::new(0.0, 1.0),
        ];

        let legs = haversine_distance(geometry[0], geometry[1])
            + haversine_distance(geometry[1], geometry[2]);

        assert_eq!(polyline_length(&geometry), legs);
    }

    #[test]
    fn polyline_length_degenerate() {
        assert_eq!(polyline_length(&[]), Length::ZERO);
        assert_eq!(polyline_length(&[Coordinate::new(0.0, 0.0)]), Length::ZERO);
    }
}
