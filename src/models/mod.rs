use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// The five amenity flags a listing can carry.
///
/// Source data stores these under Spanish keys with sentinel values
/// ("Si" / "x"); normalization converts them to booleans once, and this
/// enum is the handle used everywhere after that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Amenity {
    #[serde(rename = "pileta")]
    Pool,
    #[serde(rename = "cochera")]
    Garage,
    #[serde(rename = "balcon")]
    Balcony,
    #[serde(rename = "aire_acondicionado")]
    AirConditioning,
    #[serde(rename = "acepta_mascotas")]
    PetsAllowed,
}

impl Amenity {
    pub const ALL: [Amenity; 5] = [
        Amenity::Pool,
        Amenity::Garage,
        Amenity::Balcony,
        Amenity::AirConditioning,
        Amenity::PetsAllowed,
    ];

    /// Spanish wire key, as it appears in catalog documents and queries.
    pub fn key(&self) -> &'static str {
        match self {
            Amenity::Pool => "pileta",
            Amenity::Garage => "cochera",
            Amenity::Balcony => "balcon",
            Amenity::AirConditioning => "aire_acondicionado",
            Amenity::PetsAllowed => "acepta_mascotas",
        }
    }
}

/// One normalized real-estate listing.
///
/// Field names stay Spanish on the wire for compatibility with existing
/// `propiedades.json` data files; amenity flags are serialized as real
/// booleans rather than the source's sentinel strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "id_temporal")]
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "barrio")]
    pub neighborhood: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "tipo")]
    pub property_type: String,
    #[serde(rename = "operacion")]
    pub operation: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "moneda_precio")]
    pub price_currency: String,
    #[serde(rename = "expensas")]
    pub expenses: f64,
    #[serde(rename = "moneda_expensas")]
    pub expenses_currency: String,
    #[serde(rename = "ambientes")]
    pub rooms: u32,
    #[serde(rename = "metros_cuadrados")]
    pub area_sqm: f64,
    #[serde(rename = "pileta")]
    pub pool: bool,
    #[serde(rename = "cochera")]
    pub garage: bool,
    #[serde(rename = "balcon")]
    pub balcony: bool,
    #[serde(rename = "aire_acondicionado")]
    pub air_conditioning: bool,
    #[serde(rename = "acepta_mascotas")]
    pub pets_allowed: bool,
    #[serde(rename = "fotos")]
    pub photos: Vec<String>,
    #[serde(rename = "documentos")]
    pub documents: Vec<String>,
}

impl Property {
    pub fn has_amenity(&self, amenity: Amenity) -> bool {
        match amenity {
            Amenity::Pool => self.pool,
            Amenity::Garage => self.garage,
            Amenity::Balcony => self.balcony,
            Amenity::AirConditioning => self.air_conditioning,
            Amenity::PetsAllowed => self.pets_allowed,
        }
    }
}

/// Distinct filterable values observed across a catalog.
///
/// Regenerated in full after every load; never patched incrementally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterFacets {
    pub neighborhoods: BTreeSet<String>,
    pub property_types: BTreeSet<String>,
    pub operations: BTreeSet<String>,
    pub amenities: Vec<Amenity>,
}

/// Structured search constraints, built either from form fields or from
/// free-text interpretation.
///
/// Empty vectors and `None` bounds impose no constraint. Within a set
/// field matches are OR'd; across fields everything is AND'd.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryFilter {
    pub neighborhoods: Vec<String>,
    pub property_types: Vec<String>,
    pub operations: Vec<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub min_rooms: Option<u32>,
    pub amenities: Vec<Amenity>,
}

impl QueryFilter {
    /// True when no field constrains anything.
    pub fn is_unconstrained(&self) -> bool {
        self.neighborhoods.is_empty()
            && self.property_types.is_empty()
            && self.operations.is_empty()
            && self.price_min.is_none()
            && self.price_max.is_none()
            && self.min_rooms.is_none()
            && self.amenities.is_empty()
    }
}

/// The full normalized catalog for one load.
///
/// Immutable after construction: a refresh produces a new `Catalog`
/// value rather than mutating this one in place, so repeated searches
/// always run over the original loaded set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub properties: Vec<Property>,
    pub facets: FilterFacets,
    pub loaded_at: DateTime<Utc>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn property_by_id(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn properties_by_type(&self, property_type: &str) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|p| p.property_type.eq_ignore_ascii_case(property_type))
            .collect()
    }

    pub fn properties_by_neighborhood(&self, neighborhood: &str) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|p| p.neighborhood == neighborhood)
            .collect()
    }

    pub fn properties_by_price_range(&self, min: f64, max: f64) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|p| p.price >= min && p.price <= max)
            .collect()
    }

    /// Inventory summary: counts per facet value and simple averages.
    pub fn stats(&self) -> CatalogStats {
        let total = self.properties.len();
        let mut stats = CatalogStats {
            total,
            ..CatalogStats::default()
        };

        let mut price_sum = 0.0;
        let mut rooms_sum = 0u64;
        let mut sqm_sum = 0.0;

        for property in &self.properties {
            *stats
                .by_type
                .entry(property.property_type.clone())
                .or_insert(0) += 1;
            *stats
                .by_neighborhood
                .entry(property.neighborhood.clone())
                .or_insert(0) += 1;
            *stats
                .by_operation
                .entry(property.operation.clone())
                .or_insert(0) += 1;

            price_sum += property.price;
            rooms_sum += u64::from(property.rooms);
            sqm_sum += property.area_sqm;
        }

        if total > 0 {
            stats.avg_price = price_sum / total as f64;
            stats.avg_rooms = rooms_sum as f64 / total as f64;
            stats.avg_sqm = sqm_sum / total as f64;
        }

        stats
    }
}

/// Aggregate inventory figures for a loaded catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total: usize,
    pub by_type: BTreeMap<String, usize>,
    pub by_neighborhood: BTreeMap<String, usize>,
    pub by_operation: BTreeMap<String, usize>,
    pub avg_price: f64,
    pub avg_rooms: f64,
    pub avg_sqm: f64,
}
