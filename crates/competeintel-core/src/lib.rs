//! Domain model shared by every `competeintel` crate.
//!
//! Holds the competitor record, the fixed category and city reference tables,
//! search-request validation, CNPJ handling and environment configuration.

pub mod app_config;
pub mod catalog;
pub mod cnpj;
pub mod competitor;
pub mod config;
pub mod search;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use catalog::{BusinessCategory, City, CATEGORIES, CITIES};
pub use cnpj::{format_cnpj, lookup_cnpj, validate_cnpj, CnpjError, CnpjRecord};
pub use competitor::{Address, Competitor, Coordinates, OnlinePresence};
pub use config::{load_app_config, load_app_config_from_env};
pub use search::{
    SearchQuery, SearchRequest, TargetBusiness, ValidationError, DEFAULT_MAX_RESULTS,
    DEFAULT_RADIUS_KM, MAX_RADIUS_KM, MIN_RADIUS_KM,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
