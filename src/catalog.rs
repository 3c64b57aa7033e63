use rustc_hash::FxHashSet;
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::geo::haversine_distance;
use crate::{Coordinate, Length, PriceTable, VehicleClass};

/// A fixed point on the road network where a road-use fee is charged.
/// Plazas are reference data: loaded once per catalog, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct TollPlaza {
    pub id: u32,
    pub name: String,
    pub location: Coordinate,
    /// Route designation of the highway the plaza sits on, e.g. "SP-348".
    pub highway: String,
    pub city: String,
    pub state: String,
    /// Concessionaire operating the plaza.
    pub operator: String,
    pub prices: PriceTable,
}

#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("duplicate toll plaza id {0}")]
    DuplicateId(u32),
    #[error("toll plaza {id} has no {class} price")]
    MissingPrice { id: u32, class: VehicleClass },
    #[error("toll plaza {id} has a negative {class} price: {amount}")]
    NegativePrice {
        id: u32,
        class: VehicleClass,
        amount: f64,
    },
}

/// Immutable table of known toll plazas.
///
/// A catalog is constructed once and injected wherever matching needs it.
/// Lookups never mutate it, so a shared reference is safe across threads.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TollCatalog {
    plazas: Vec<TollPlaza>,
}

impl TollCatalog {
    /// Builds a catalog, checking that plaza ids are unique and that every
    /// plaza prices every vehicle class with a non-negative amount.
    pub fn new(plazas: Vec<TollPlaza>) -> Result<Self, CatalogError> {
        let mut ids = FxHashSet::default();

        for plaza in &plazas {
            if !ids.insert(plaza.id) {
                return Err(CatalogError::DuplicateId(plaza.id));
            }

            for class in VehicleClass::iter() {
                match plaza.prices.get(class) {
                    None => return Err(CatalogError::MissingPrice { id: plaza.id, class }),
                    Some(amount) if amount < 0.0 => {
                        return Err(CatalogError::NegativePrice {
                            id: plaza.id,
                            class,
                            amount,
                        });
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(Self { plazas })
    }

    /// The catalog bundled with the crate: the São Paulo highway corridor
    /// plazas. Known valid by construction.
    pub fn reference() -> Self {
        Self {
            plazas: reference_plazas(),
        }
    }

    pub fn all(&self) -> &[TollPlaza] {
        &self.plazas
    }

    pub fn len(&self) -> usize {
        self.plazas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plazas.is_empty()
    }

    /// Closest plaza within `radius` of `point`, or `None` when the whole
    /// catalog is farther away. Linear scan; ties keep the first plaza in
    /// catalog order.
    pub fn nearest_within(&self, point: Coordinate, radius: Length) -> Option<&TollPlaza> {
        let mut nearest: Option<(&TollPlaza, Length)> = None;

        for plaza in &self.plazas {
            let distance = haversine_distance(point, plaza.location);
            if distance > radius {
                continue;
            }

            // strict less keeps the first of equally distant plazas
            if nearest.is_none_or(|(_, best)| distance < best) {
                nearest = Some((plaza, distance));
            }
        }

        nearest.map(|(plaza, _)| plaza)
    }
}

#[rustfmt::skip]
fn reference_plazas() -> Vec<TollPlaza> {
    [
        (1, "Pedágio Jundiaí", "SP-348", "Jundiaí", -23.1864, -46.8842, "AutoBAn", 10.65, 21.30),
        (2, "Pedágio Itupeva", "SP-348", "Itupeva", -23.1530, -47.0487, "AutoBAn", 9.80, 19.60),
        (3, "Pedágio Valinhos", "SP-348", "Valinhos", -22.9698, -46.9974, "AutoBAn", 8.90, 17.80),
        (4, "Pedágio Campinas", "SP-330", "Campinas", -22.8911, -47.0045, "AutoBAn", 11.20, 22.40),
        (5, "Pedágio Sumaré", "SP-330", "Sumaré", -22.8152, -47.2330, "AutoBAn", 7.40, 14.80),
        (6, "Pedágio Limeira", "SP-330", "Limeira", -22.5645, -47.4018, "AutoBAn", 9.30, 18.60),
        (7, "Pedágio Araras", "SP-330", "Araras", -22.3569, -47.3871, "Intervias", 8.10, 16.20),
        (8, "Pedágio Leme", "SP-330", "Leme", -22.2185, -47.3750, "Intervias", 6.90, 13.80),
        (9, "Pedágio Pirassununga", "SP-330", "Pirassununga", -21.9960, -47.4257, "Intervias", 7.80, 15.60),
        (10, "Pedágio Porto Ferreira", "SP-330", "Porto Ferreira", -21.8538, -47.4869, "Intervias", 6.50, 13.00),
    ]
    .into_iter()
    .map(|(id, name, highway, city, lat, lon, operator, car, truck)| TollPlaza {
        id,
        name: name.to_owned(),
        location: Coordinate::new(lat, lon),
        highway: highway.to_owned(),
        city: city.to_owned(),
        state: "SP".to_owned(),
        operator: operator.to_owned(),
        prices: PriceTable::new(car, truck),
    })
    .collect()
}
