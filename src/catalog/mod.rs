//! Catalog records and the session snapshot that holds them.

pub mod model;
pub mod snapshot;

pub use model::{Ingredient, Product, ScoreBand, Status};
pub use snapshot::{category_options, distinct_categories, find_product, Catalog, ALL};
