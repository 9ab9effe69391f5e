//! Competitor search request and its validation.
//!
//! [`SearchRequest`] is the raw wire shape; [`SearchRequest::validate`] turns it
//! into a [`SearchQuery`] whose fields are guaranteed in-domain, so nothing
//! downstream re-checks them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{BusinessCategory, City};
use crate::competitor::{Coordinates, OnlinePresence};

pub const DEFAULT_RADIUS_KM: f64 = 5.0;
pub const MIN_RADIUS_KM: f64 = 0.5;
pub const MAX_RADIUS_KM: f64 = 50.0;
pub const DEFAULT_MAX_RESULTS: i64 = 10;
pub const MAX_RESULTS_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("unsupported category: {0}")]
    UnknownCategory(String),

    #[error("unsupported city: {0}")]
    UnknownCity(String),

    #[error("invalid CEP {0:?}: expected 8 digits (XXXXX-XXX or 12345678)")]
    InvalidCep(String),

    #[error("invalid state {0:?}: expected a two-letter code such as SP or RJ")]
    InvalidState(String),

    #[error("coordinates out of range: latitude must be in [-90, 90] and longitude in [-180, 180]")]
    InvalidCoordinates,
}

/// Metrics of the business being benchmarked against its competitors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetBusiness {
    #[serde(default)]
    pub name: String,
    pub rating: f64,
    pub review_count: u32,
    #[serde(default)]
    pub online_presence: OnlinePresence,
    #[serde(default)]
    pub has_delivery: bool,
    #[serde(default)]
    pub accepts_pix: bool,
    #[serde(default)]
    pub estimated_monthly_revenue: u64,
}

impl TargetBusiness {
    /// Stand-in profile used when a request names its business but sends no
    /// metrics.
    #[must_use]
    pub fn demonstration(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rating: 4.2,
            review_count: 87,
            online_presence: OnlinePresence {
                has_instagram: true,
                has_facebook: true,
                has_website: false,
                instagram_followers: 1_500,
                facebook_likes: 800,
            },
            has_delivery: true,
            accepts_pix: true,
            estimated_monthly_revenue: 45_000,
        }
    }
}

fn default_radius_km() -> f64 {
    DEFAULT_RADIUS_KM
}

fn default_max_results() -> i64 {
    DEFAULT_MAX_RESULTS
}

/// Competitor search as received from a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,
    #[serde(default = "default_max_results")]
    pub max_results: i64,
    #[serde(default)]
    pub your_business: Option<TargetBusiness>,
}

impl SearchRequest {
    /// Minimal request for `category` in `city` with every optional field at
    /// its default.
    #[must_use]
    pub fn new(category: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            business_name: None,
            category: category.into(),
            city: city.into(),
            state: None,
            neighborhood: None,
            cep: None,
            coordinates: None,
            radius_km: DEFAULT_RADIUS_KM,
            max_results: DEFAULT_MAX_RESULTS,
            your_business: None,
        }
    }

    /// Check every field and resolve category and city against the
    /// reference tables.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered, in field order.
    pub fn validate(&self) -> Result<SearchQuery, ValidationError> {
        if self.category.trim().is_empty() {
            return Err(ValidationError::MissingField("category"));
        }
        if self.city.trim().is_empty() {
            return Err(ValidationError::MissingField("city"));
        }

        let category = BusinessCategory::from_name(&self.category)
            .ok_or_else(|| ValidationError::UnknownCategory(self.category.trim().to_string()))?;
        let city = City::find(&self.city)
            .ok_or_else(|| ValidationError::UnknownCity(self.city.trim().to_string()))?;

        let state = non_blank(self.state.as_deref())
            .map(|s| {
                if s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()) {
                    Ok(s.to_ascii_uppercase())
                } else {
                    Err(ValidationError::InvalidState(s.to_string()))
                }
            })
            .transpose()?;

        let cep = non_blank(self.cep.as_deref())
            .map(|raw| normalize_cep(raw).ok_or_else(|| ValidationError::InvalidCep(raw.to_string())))
            .transpose()?;

        if !self.radius_km.is_finite() || !(MIN_RADIUS_KM..=MAX_RADIUS_KM).contains(&self.radius_km)
        {
            return Err(ValidationError::OutOfRange {
                field: "radius_km",
                min: MIN_RADIUS_KM,
                max: MAX_RADIUS_KM,
                value: self.radius_km,
            });
        }

        let max_results = usize::try_from(self.max_results)
            .ok()
            .filter(|n| (1..=MAX_RESULTS_LIMIT).contains(n))
            .ok_or_else(|| max_results_out_of_range(self.max_results))?;

        let origin = match self.coordinates {
            Some(coords) if !coords.is_valid() => return Err(ValidationError::InvalidCoordinates),
            Some(coords) => coords,
            None => city.center(),
        };

        let business_name = non_blank(self.business_name.as_deref()).map(ToOwned::to_owned);

        let target = match (&self.your_business, &business_name) {
            (Some(profile), _) => {
                if !profile.rating.is_finite() || !(0.0..=5.0).contains(&profile.rating) {
                    return Err(ValidationError::OutOfRange {
                        field: "your_business.rating",
                        min: 0.0,
                        max: 5.0,
                        value: profile.rating,
                    });
                }
                let mut profile = profile.clone();
                if profile.name.trim().is_empty() {
                    profile.name = business_name.clone().unwrap_or_default();
                }
                Some(profile)
            }
            (None, Some(name)) => Some(TargetBusiness::demonstration(name.clone())),
            (None, None) => None,
        };

        Ok(SearchQuery {
            category,
            city,
            state,
            neighborhood: non_blank(self.neighborhood.as_deref()).map(ToOwned::to_owned),
            cep,
            business_name,
            origin,
            radius_km: self.radius_km,
            max_results,
            target,
        })
    }
}

/// A validated search. Every field is in-domain.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub category: BusinessCategory,
    pub city: &'static City,
    pub state: Option<String>,
    pub neighborhood: Option<String>,
    /// CEP reduced to its 8 digits.
    pub cep: Option<String>,
    pub business_name: Option<String>,
    /// Point distances are measured from: the request coordinates, or the
    /// city centre when none were sent.
    pub origin: Coordinates,
    pub radius_km: f64,
    pub max_results: usize,
    pub target: Option<TargetBusiness>,
}

#[allow(clippy::cast_precision_loss)]
fn max_results_out_of_range(value: i64) -> ValidationError {
    ValidationError::OutOfRange {
        field: "max_results",
        min: 1.0,
        max: MAX_RESULTS_LIMIT as f64,
        value: value as f64,
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Strip CEP punctuation; `None` unless exactly 8 digits remain.
#[must_use]
pub fn normalize_cep(raw: &str) -> Option<String> {
    let digits: String = raw
        .chars()
        .filter(|c| !matches!(c, '-' | '.' | ' '))
        .collect();
    (digits.len() == 8 && digits.chars().all(|c| c.is_ascii_digit())).then_some(digits)
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
