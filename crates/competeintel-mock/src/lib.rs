//! In-memory competitor data standing in for live business listings.
//!
//! [`MockCatalog`] is generated once from a seed and then only read.

pub mod catalog;
pub mod generator;
pub mod search;

pub use catalog::MockCatalog;
pub use generator::{generate_segment, random_cnpj};
pub use search::{run_search, SearchResponse};
