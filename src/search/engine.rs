use crate::models::{Property, QueryFilter};
use tracing::debug;

/// Apply a structured filter to the catalog.
///
/// Pure boolean filtering: constraints AND across fields, OR within a
/// set field, inclusive numeric bounds, all requested amenities
/// required. The result preserves catalog order and an unconstrained
/// filter returns the whole catalog. No ranking, no fuzzy matching.
pub fn search(properties: &[Property], filter: &QueryFilter) -> Vec<Property> {
    let results: Vec<Property> = properties
        .iter()
        .filter(|property| matches(property, filter))
        .cloned()
        .collect();

    debug!(
        "Search matched {} of {} properties",
        results.len(),
        properties.len()
    );

    results
}

fn matches(property: &Property, filter: &QueryFilter) -> bool {
    if !filter.neighborhoods.is_empty() && !filter.neighborhoods.contains(&property.neighborhood) {
        return false;
    }

    if !filter.property_types.is_empty() && !filter.property_types.contains(&property.property_type)
    {
        return false;
    }

    if !filter.operations.is_empty() && !filter.operations.contains(&property.operation) {
        return false;
    }

    if let Some(min) = filter.price_min {
        if property.price < min {
            return false;
        }
    }

    if let Some(max) = filter.price_max {
        if property.price > max {
            return false;
        }
    }

    if let Some(min_rooms) = filter.min_rooms {
        if property.rooms < min_rooms {
            return false;
        }
    }

    filter
        .amenities
        .iter()
        .all(|amenity| property.has_amenity(*amenity))
}
