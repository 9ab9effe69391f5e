//! Market density and saturation for a set of competitors inside a circle.

use std::f64::consts::PI;

use competeintel_core::Competitor;
use serde::Serialize;

use crate::geo::distance_km;

/// Upper bounds (exclusive), in competitors per km², for Low, Medium and High.
pub const LOW_DENSITY_MAX: f64 = 0.5;
pub const MEDIUM_DENSITY_MAX: f64 = 1.5;
pub const HIGH_DENSITY_MAX: f64 = 3.0;

/// Competitor count at which the count component of the saturation score
/// is maxed out.
pub const SATURATION_COUNT_CAP: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum DensityLevel {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl DensityLevel {
    #[must_use]
    pub fn classify(competitors_per_km2: f64) -> Self {
        if competitors_per_km2 < LOW_DENSITY_MAX {
            Self::Low
        } else if competitors_per_km2 < MEDIUM_DENSITY_MAX {
            Self::Medium
        } else if competitors_per_km2 < HIGH_DENSITY_MAX {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    /// Portuguese label used in summaries.
    #[must_use]
    pub fn label_pt(self) -> &'static str {
        match self {
            Self::Low => "Baixa",
            Self::Medium => "Média",
            Self::High => "Alta",
            Self::VeryHigh => "Muito Alta",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketDensity {
    pub total_competitors: usize,
    pub competitors_per_km2: f64,
    pub density_level: DensityLevel,
    /// 0–100, one decimal place.
    pub market_saturation_score: f64,
    /// Mean pairwise distance in km, or `2 × radius` with fewer than two
    /// competitors.
    pub avg_distance_between_competitors: f64,
}

/// Piecewise density contribution, non-decreasing in `d` and capped at 100.
fn density_component(d: f64) -> f64 {
    match DensityLevel::classify(d) {
        DensityLevel::Low => (d * 40.0).min(25.0),
        DensityLevel::Medium => 25.0 + ((d - LOW_DENSITY_MAX) * 30.0).min(25.0),
        DensityLevel::High => 50.0 + ((d - MEDIUM_DENSITY_MAX) * 20.0).min(30.0),
        DensityLevel::VeryHigh => (80.0 + (d - HIGH_DENSITY_MAX) * 5.0).min(100.0),
    }
}

/// Saturation score in `[0, 100]`, increasing in both density and count.
#[must_use]
pub fn saturation_score(competitors_per_km2: f64, total_competitors: usize) -> f64 {
    if total_competitors == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let count_share =
        total_competitors.min(SATURATION_COUNT_CAP) as f64 / SATURATION_COUNT_CAP as f64;
    let raw = 0.9 * density_component(competitors_per_km2) + 10.0 * count_share;
    (raw.clamp(0.0, 100.0) * 10.0).round() / 10.0
}

fn average_pairwise_distance(competitors: &[Competitor]) -> Option<f64> {
    let mut total = 0.0;
    let mut pairs = 0_u32;
    for (i, a) in competitors.iter().enumerate() {
        for b in &competitors[i + 1..] {
            total += distance_km(a.coordinates, b.coordinates);
            pairs += 1;
        }
    }
    (pairs > 0).then(|| total / f64::from(pairs))
}

/// Density analysis for `competitors` found within `radius_km`.
///
/// `radius_km` is at least 0.5 once a request is validated, so the area is
/// never zero.
#[must_use]
pub fn analyze_market_density(competitors: &[Competitor], radius_km: f64) -> MarketDensity {
    let total_competitors = competitors.len();
    let area_km2 = PI * radius_km * radius_km;
    #[allow(clippy::cast_precision_loss)]
    let competitors_per_km2 = if area_km2 > 0.0 {
        total_competitors as f64 / area_km2
    } else {
        0.0
    };

    MarketDensity {
        total_competitors,
        competitors_per_km2,
        density_level: DensityLevel::classify(competitors_per_km2),
        market_saturation_score: saturation_score(competitors_per_km2, total_competitors),
        avg_distance_between_competitors: average_pairwise_distance(competitors)
            .unwrap_or(radius_km * 2.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::competitor_at;

    #[test]
    fn empty_market_is_low_and_unsaturated() {
        let density = analyze_market_density(&[], 5.0);
        assert_eq!(density.total_competitors, 0);
        assert_eq!(density.density_level, DensityLevel::Low);
        assert!(density.competitors_per_km2.abs() < f64::EPSILON);
        assert!(density.market_saturation_score.abs() < f64::EPSILON);
        assert!((density.avg_distance_between_competitors - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn per_km2_is_count_over_circle_area() {
        let peers: Vec<_> = (0..7).map(|i| competitor_at(i, -23.55, -46.63)).collect();
        let density = analyze_market_density(&peers, 2.0);
        let expected = 7.0 / (PI * 4.0);
        assert!((density.competitors_per_km2 - expected).abs() < 1e-12);
    }

    #[test]
    fn thresholds_classify_boundaries_upward() {
        assert_eq!(DensityLevel::classify(0.49), DensityLevel::Low);
        assert_eq!(DensityLevel::classify(0.5), DensityLevel::Medium);
        assert_eq!(DensityLevel::classify(1.5), DensityLevel::High);
        assert_eq!(DensityLevel::classify(3.0), DensityLevel::VeryHigh);
    }

    #[test]
    fn saturation_caps_at_100() {
        assert!((saturation_score(500.0, 5_000) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn saturation_grows_with_count_at_fixed_density() {
        assert!(saturation_score(1.0, 20) > saturation_score(1.0, 5));
    }

    #[test]
    fn co_located_competitors_average_zero_distance() {
        let peers: Vec<_> = (0..3).map(|i| competitor_at(i, -23.55, -46.63)).collect();
        let density = analyze_market_density(&peers, 5.0);
        assert!(density.avg_distance_between_competitors.abs() < 1e-9);
    }

    #[test]
    fn very_high_serializes_with_space() {
        let json = serde_json::to_string(&DensityLevel::VeryHigh).expect("serialize");
        assert_eq!(json, "\"Very High\"");
    }
}
