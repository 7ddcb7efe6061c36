use crate::models::{FilterFacets, QueryFilter};
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("number pattern"));
static ROOMS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*ambiente").expect("rooms pattern"));

/// Map a free-text query onto a structured filter using the facets of
/// the currently loaded catalog.
///
/// This is a fixed rule table over keyword and substring containment,
/// not a grammar. Rules are independent of each other; in particular
/// "venta" and "alquiler" detection can both fire on one query. A blank
/// query yields the unconstrained filter and interpretation never fails.
pub fn interpret_query(query: &str, facets: &FilterFacets) -> QueryFilter {
    let mut filter = QueryFilter::default();

    if query.trim().is_empty() {
        return filter;
    }

    let lower = query.to_lowercase();

    for neighborhood in &facets.neighborhoods {
        if lower.contains(&neighborhood.to_lowercase()) {
            filter.neighborhoods.push(neighborhood.clone());
        }
    }

    for property_type in &facets.property_types {
        if lower.contains(&property_type.to_lowercase()) {
            filter.property_types.push(property_type.clone());
        }
    }

    if lower.contains("venta") || lower.contains("comprar") {
        filter.operations.push("venta".to_string());
    }
    if lower.contains("alquiler") || lower.contains("alquilar") {
        filter.operations.push("alquiler".to_string());
    }

    apply_price_rules(&lower, query, &mut filter);

    if let Some(caps) = ROOMS.captures(query) {
        filter.min_rooms = caps[1].parse().ok();
    }

    for amenity in &facets.amenities {
        let spaced = amenity.key().replace('_', " ");
        let joined = amenity.key().replace('_', "");
        if lower.contains(&spaced) || lower.contains(&joined) {
            filter.amenities.push(*amenity);
        }
    }

    filter
}

/// Price extraction: all integers in the query, direction decided by
/// bound keywords. Two or more numbers with no keyword infer a range.
/// A single bare number stays unconstrained, the intent is ambiguous
/// and guessing a direction would be worse than ignoring it.
fn apply_price_rules(lower: &str, raw: &str, filter: &mut QueryFilter) {
    let numbers: Vec<f64> = NUMBERS
        .find_iter(raw)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();

    if numbers.is_empty() {
        return;
    }

    let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
    let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if lower.contains("hasta") || lower.contains("menor") || lower.contains("máximo") {
        filter.price_max = Some(max);
    } else if lower.contains("desde") || lower.contains("más") {
        filter.price_min = Some(min);
    } else if numbers.len() >= 2 {
        filter.price_min = Some(min);
        filter.price_max = Some(max);
    }
}
