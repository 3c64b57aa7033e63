use std::iter::Sum;
use std::ops::Add;

use approx::abs_diff_eq;
use ordered_float::OrderedFloat;
use rustc_hash::FxHashMap;
use strum::{Display, EnumIter, EnumString};

/// Coordinate pair stands for a pair of WGS84 latitude (lat) and longitude
/// (lon) values in decimal degrees. Route geometries are ordered sequences
/// of coordinates; their order encodes travel direction from origin to
/// destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        const EPSILON: f64 = 1e-6;
        abs_diff_eq!(self.lat, other.lat, epsilon = EPSILON)
            && abs_diff_eq!(self.lon, other.lon, epsilon = EPSILON)
    }
}

/// Distance in meters with a total ordering, so distances can serve as
/// sort and minimum keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Length(OrderedFloat<f64>);

impl Length {
    pub const MAX: Self = Self(OrderedFloat(f64::MAX));
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    pub const fn from_meters(meters: f64) -> Self {
        Self(OrderedFloat(meters))
    }

    pub const fn meters(&self) -> f64 {
        self.0.0
    }
}

impl Add for Length {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sum for Length {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// The fee category determining which price applies at a toll plaza.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum VehicleClass {
    Car,
    Truck,
}

/// Mapping from vehicle class to the fee charged at a plaza, in the
/// catalog's native currency unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceTable(FxHashMap<VehicleClass, f64>);

impl PriceTable {
    pub fn new(car: f64, truck: f64) -> Self {
        Self::default()
            .with_amount(VehicleClass::Car, car)
            .with_amount(VehicleClass::Truck, truck)
    }

    pub fn with_amount(mut self, class: VehicleClass, amount: f64) -> Self {
        self.0.insert(class, amount);
        self
    }

    /// Fee for the class. A class without a price charges nothing.
    pub fn amount(&self, class: VehicleClass) -> f64 {
        self.get(class).unwrap_or_default()
    }

    pub fn get(&self, class: VehicleClass) -> Option<f64> {
        self.0.get(&class).copied()
    }
}
