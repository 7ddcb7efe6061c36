use crate::models::{Amenity, FilterFacets, Property};

/// Derive the distinct filterable values present in a catalog.
///
/// Pure over its input: shuffling the catalog yields identical facets
/// since the categorical sets are sorted. Called in full after every
/// load, never patched incrementally.
pub fn generate_facets(properties: &[Property]) -> FilterFacets {
    let neighborhoods = properties
        .iter()
        .map(|p| p.neighborhood.clone())
        .filter(|v| !v.is_empty())
        .collect();

    let property_types = properties
        .iter()
        .map(|p| p.property_type.clone())
        .filter(|v| !v.is_empty())
        .collect();

    let operations = properties
        .iter()
        .map(|p| p.operation.clone())
        .filter(|v| !v.is_empty())
        .collect();

    let amenities = Amenity::ALL
        .into_iter()
        .filter(|amenity| properties.iter().any(|p| p.has_amenity(*amenity)))
        .collect();

    FilterFacets {
        neighborhoods,
        property_types,
        operations,
        amenities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(id: &str, neighborhood: &str, property_type: &str, operation: &str) -> Property {
        Property {
            id: id.to_string(),
            title: "Sin título".to_string(),
            neighborhood: neighborhood.to_string(),
            address: String::new(),
            description: String::new(),
            property_type: property_type.to_string(),
            operation: operation.to_string(),
            price: 0.0,
            price_currency: "USD".to_string(),
            expenses: 0.0,
            expenses_currency: "ARS".to_string(),
            rooms: 0,
            area_sqm: 0.0,
            pool: false,
            garage: false,
            balcony: false,
            air_conditioning: false,
            pets_allowed: false,
            photos: vec![],
            documents: vec![],
        }
    }

    #[test]
    fn facets_are_distinct_and_sorted() {
        let catalog = vec![
            property("1", "Palermo", "departamento", "venta"),
            property("2", "Belgrano", "casa", "alquiler"),
            property("3", "Palermo", "casa", "venta"),
        ];

        let facets = generate_facets(&catalog);
        let neighborhoods: Vec<&String> = facets.neighborhoods.iter().collect();
        assert_eq!(neighborhoods, ["Belgrano", "Palermo"]);
        let types: Vec<&String> = facets.property_types.iter().collect();
        assert_eq!(types, ["casa", "departamento"]);
    }

    #[test]
    fn facets_are_order_independent() {
        let mut catalog = vec![
            property("1", "Palermo", "departamento", "venta"),
            property("2", "Belgrano", "casa", "alquiler"),
            property("3", "Caballito", "ph", "venta"),
        ];

        let forward = generate_facets(&catalog);
        catalog.reverse();
        let backward = generate_facets(&catalog);

        assert_eq!(forward, backward);
    }

    #[test]
    fn amenity_facet_requires_at_least_one_carrier() {
        let mut with_pool = property("1", "Palermo", "casa", "venta");
        with_pool.pool = true;
        let catalog = vec![with_pool, property("2", "Palermo", "casa", "venta")];

        let facets = generate_facets(&catalog);
        assert_eq!(facets.amenities, vec![Amenity::Pool]);
    }

    #[test]
    fn empty_catalog_yields_empty_facets() {
        let facets = generate_facets(&[]);
        assert!(facets.neighborhoods.is_empty());
        assert!(facets.amenities.is_empty());
    }
}
