use anyhow::Context;
use listing_scout::catalog::{load_catalog, FileCatalogSource, HttpCatalogSource};
use listing_scout::models::Catalog;
use listing_scout::search::{interpret_query, search};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Listing Scout - Property Catalog Search");
    info!("==========================================");
    info!("");

    let mut args = std::env::args().skip(1);
    let location = args.next().unwrap_or_else(|| "propiedades.json".to_string());
    let query = args.collect::<Vec<_>>().join(" ");

    let catalog = load_from(&location)
        .await
        .context("catalog unavailable")?;

    let stats = catalog.stats();
    info!(
        "Loaded {} properties ({} neighborhoods, {} types, {} operations)",
        stats.total,
        catalog.facets.neighborhoods.len(),
        catalog.facets.property_types.len(),
        catalog.facets.operations.len()
    );

    let filter = interpret_query(&query, &catalog.facets);
    if !query.is_empty() {
        info!("Query: \"{}\"", query);
        info!("Interpreted filter: {:?}", filter);
    }

    let results = search(&catalog.properties, &filter);
    info!("\n✅ {} matching properties\n", results.len());

    for (i, property) in results.iter().enumerate() {
        println!(
            "{}. {} ({} {})",
            i + 1,
            property.title,
            property.price,
            property.price_currency
        );
        println!(
            "   {} | {} | {}",
            property.neighborhood, property.property_type, property.operation
        );
        println!("   {} ambientes, {} m²", property.rooms, property.area_sqm);
        println!("   ID: {}", property.id);
        println!();
    }

    // Save matching properties to JSON file
    let json = serde_json::to_string_pretty(&results)?;
    tokio::fs::write("search_results.json", json).await?;
    info!("💾 Saved {} results to search_results.json", results.len());

    Ok(())
}

async fn load_from(location: &str) -> Result<Catalog, anyhow::Error> {
    if location.starts_with("http://") || location.starts_with("https://") {
        let source = HttpCatalogSource::new(location)?;
        Ok(load_catalog(&source).await?)
    } else {
        let source = FileCatalogSource::new(location);
        Ok(load_catalog(&source).await?)
    }
}
