//! Monthly revenue estimate for a competitor.
//!
//! `base(category) × rating/5 × (1 + min(reviews, 1000)/1000)`. The review
//! factor saturates at 2× so social proof cannot grow the figure unbounded.
//! [`estimate_with_variance`] adds ±15 % noise for mock generation and takes
//! its random source explicitly; [`estimate_monthly_revenue`] is deterministic.

use competeintel_core::BusinessCategory;
use rand::Rng;

/// Base used for categories outside the reference table.
pub const DEFAULT_BASE_REVENUE: f64 = 30_000.0;

/// Review count at which the review factor stops growing.
pub const REVIEW_SATURATION: u32 = 1_000;

/// Half-width of the multiplicative noise band applied to mock figures.
pub const VARIANCE: f64 = 0.15;

/// Monthly revenue baseline, in BRL, for a category name.
#[must_use]
pub fn base_monthly_revenue(category: &str) -> f64 {
    match BusinessCategory::from_name(category) {
        Some(BusinessCategory::Padaria) => 30_000.0,
        Some(BusinessCategory::Restaurante) => 50_000.0,
        Some(BusinessCategory::Farmacia) => 80_000.0,
        Some(BusinessCategory::Supermercado) => 150_000.0,
        Some(BusinessCategory::Cafeteria) => 25_000.0,
        Some(BusinessCategory::Academia) => 40_000.0,
        Some(BusinessCategory::PetShop) => 35_000.0,
        Some(BusinessCategory::Lanchonete) => 20_000.0,
        None => DEFAULT_BASE_REVENUE,
    }
}

#[must_use]
pub fn rating_factor(rating: f64) -> f64 {
    rating.clamp(0.0, 5.0) / 5.0
}

#[must_use]
pub fn review_factor(review_count: u32) -> f64 {
    1.0 + f64::from(review_count.min(REVIEW_SATURATION)) / f64::from(REVIEW_SATURATION)
}

/// Deterministic estimate; use when re-deriving a figure for display.
#[must_use]
pub fn estimate_monthly_revenue(category: &str, rating: f64, review_count: u32) -> f64 {
    base_monthly_revenue(category) * rating_factor(rating) * review_factor(review_count)
}

/// Estimate with multiplicative noise drawn uniformly from `[0.85, 1.15]`.
///
/// Pass a seeded generator to get reproducible output.
pub fn estimate_with_variance<R: Rng + ?Sized>(
    category: &str,
    rating: f64,
    review_count: u32,
    rng: &mut R,
) -> f64 {
    let noise = rng.random_range((1.0 - VARIANCE)..=(1.0 + VARIANCE));
    estimate_monthly_revenue(category, rating, review_count) * noise
}
