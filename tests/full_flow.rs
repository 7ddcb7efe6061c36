use listing_scout::catalog::{load_catalog, FileCatalogSource};
use listing_scout::models::Amenity;
use listing_scout::search::{generate_facets, interpret_query, search};
use std::io::Write;

const CATALOG_JSON: &str = r#"[
    {"id_temporal": "UF001", "titulo": "Casa en Palermo", "barrio": "Palermo",
     "tipo": "casa", "operacion": "venta", "precio": 250000, "ambientes": 4,
     "metros_cuadrados": 180, "pileta": "Si", "cochera": "x",
     "fotos": ["imgs/UF001-1.jpg", "imgs/UF001-2.JPEG", "plano.pdf"]},
    {"id_temporal": "UF002", "titulo": "Casa en Belgrano", "barrio": "Belgrano",
     "tipo": "casa", "operacion": "venta", "precio": 180000, "ambientes": 3},
    {"id_temporal": "UF003", "titulo": "Casa económica", "barrio": "Caballito",
     "tipo": "casa", "operacion": "venta", "precio": "abc", "ambientes": 2},
    {"id_temporal": "UF004", "titulo": "Depto luminoso", "barrio": "Palermo",
     "tipo": "departamento", "operacion": "alquiler", "precio": 900, "ambientes": 2,
     "aire_acondicionado": "Si"},
    {"id_temporal": "UF005", "titulo": "Depto a estrenar", "barrio": "Belgrano",
     "tipo": "departamento", "operacion": "venta", "precio": 150000, "ambientes": 3}
]"#;

fn write_catalog() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(CATALOG_JSON.as_bytes()).expect("write");
    file
}

#[tokio::test]
async fn load_facet_interpret_search_flow() {
    let file = write_catalog();
    let catalog = load_catalog(&FileCatalogSource::new(file.path()))
        .await
        .expect("load");

    assert_eq!(catalog.len(), 5);

    // normalization: bad price collapsed, absent photos got a placeholder
    let cheap = catalog.property_by_id("UF003").expect("UF003");
    assert_eq!(cheap.price, 0.0);
    let depto = catalog.property_by_id("UF004").expect("UF004");
    assert_eq!(depto.photos, vec!["imgs/departamento_palermo.jpg"]);
    let casa = catalog.property_by_id("UF001").expect("UF001");
    assert_eq!(casa.photos, vec!["imgs/UF001-1.jpg", "imgs/UF001-2.JPEG"]);
    assert!(casa.pool && casa.garage);

    // facets cover everything observed
    let neighborhoods: Vec<&String> = catalog.facets.neighborhoods.iter().collect();
    assert_eq!(neighborhoods, ["Belgrano", "Caballito", "Palermo"]);
    assert!(catalog.facets.amenities.contains(&Amenity::Pool));
    assert!(catalog.facets.amenities.contains(&Amenity::AirConditioning));
    assert!(!catalog.facets.amenities.contains(&Amenity::Balcony));

    // free text through the interpreter, then the engine
    let filter = interpret_query("casas en venta hasta 200000", &catalog.facets);
    assert_eq!(filter.property_types, vec!["casa"]);
    assert_eq!(filter.operations, vec!["venta"]);
    assert_eq!(filter.price_max, Some(200000.0));

    let results = search(&catalog.properties, &filter);
    let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["UF002", "UF003"]);
}

#[tokio::test]
async fn reload_produces_identical_facets() {
    let file = write_catalog();
    let source = FileCatalogSource::new(file.path());

    let first = load_catalog(&source).await.expect("first load");
    let second = load_catalog(&source).await.expect("second load");

    assert_eq!(first.facets, second.facets);
    assert_eq!(first.facets, generate_facets(&second.properties));
}

#[tokio::test]
async fn end_to_end_type_scenario_preserves_order() {
    let file = write_catalog();
    let catalog = load_catalog(&FileCatalogSource::new(file.path()))
        .await
        .expect("load");

    let filter = interpret_query("casa", &catalog.facets);
    let results = search(&catalog.properties, &filter);
    let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["UF001", "UF002", "UF003"]);
}

#[tokio::test]
async fn interpreted_amenity_filter_narrows_results() {
    let file = write_catalog();
    let catalog = load_catalog(&FileCatalogSource::new(file.path()))
        .await
        .expect("load");

    let filter = interpret_query("departamento con aire acondicionado", &catalog.facets);
    let results = search(&catalog.properties, &filter);
    let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["UF004"]);
}
