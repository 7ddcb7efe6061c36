pub mod engine;
pub mod facets;
pub mod query;

pub use engine::search;
pub use facets::generate_facets;
pub use query::interpret_query;
