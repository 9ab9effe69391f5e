//! Composes the per-search analyses into one result with a Portuguese summary.

use competeintel_core::{Competitor, TargetBusiness};
use serde::Serialize;

use crate::density::{analyze_market_density, MarketDensity};
use crate::kpi::{recommend, KpiRecommendation};
use crate::market_share::{estimate_market_share, MarketShareEstimate};
use crate::positioning::{analyze_positioning, CompetitivePositioning};

/// Everything the analytics core derives from one search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsResult {
    pub market_density: MarketDensity,
    pub competitive_positioning: Option<CompetitivePositioning>,
    pub market_share_estimate: Option<MarketShareEstimate>,
    pub kpi_recommendations: Vec<KpiRecommendation>,
    pub summary: String,
}

/// Single pass over `competitors` found within `radius_km`.
///
/// Positioning needs a target; the market share estimate needs at least one
/// competitor. Both are `None` otherwise.
#[must_use]
pub fn build_analytics(
    radius_km: f64,
    target: Option<&TargetBusiness>,
    competitors: &[Competitor],
) -> AnalyticsResult {
    let market_density = analyze_market_density(competitors, radius_km);
    let competitive_positioning = target.map(|t| analyze_positioning(t, competitors));
    let market_share_estimate = estimate_market_share(target, competitors);
    let kpi_recommendations = recommend(target, competitors, &market_density);

    let summary = summarize(
        radius_km,
        &market_density,
        competitive_positioning.as_ref(),
        market_share_estimate.as_ref(),
        kpi_recommendations.first(),
    );

    AnalyticsResult {
        market_density,
        competitive_positioning,
        market_share_estimate,
        kpi_recommendations,
        summary,
    }
}

fn summarize(
    radius_km: f64,
    density: &MarketDensity,
    positioning: Option<&CompetitivePositioning>,
    share: Option<&MarketShareEstimate>,
    top: Option<&KpiRecommendation>,
) -> String {
    let mut parts = vec![
        // Debug keeps the radius exactly as requested: 5.0 stays "5.0", 2.25 stays "2.25".
        format!(
            "Encontramos {} concorrentes em um raio de {radius_km:?}km.",
            density.total_competitors
        ),
        format!(
            "Densidade de mercado: {} ({:.1} concorrentes/km²).",
            density.density_level.label_pt(),
            density.competitors_per_km2
        ),
    ];

    if let Some(share) = share {
        parts.push(format!(
            "Estrutura de mercado: {}.",
            share.market_structure.label_pt()
        ));
    }

    if let Some(pos) = positioning.filter(|p| p.percentile >= 50.0) {
        parts.push(format!(
            "Você está no top {:.0}% em avaliações.",
            100.0 - pos.percentile
        ));
    }

    if let Some(top) = top {
        parts.push(format!("Prioridade: {}.", top.metric));
    }

    parts.join(" ")
}
