//! Revenue-based market share and concentration.

use competeintel_core::{Competitor, TargetBusiness};
use serde::Serialize;

/// CR3 below which a market is fragmented, and below which it is moderate.
pub const CR3_FRAGMENTED_MAX: f64 = 40.0;
pub const CR3_MODERATE_MAX: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarketStructure {
    Fragmented,
    Moderate,
    Concentrated,
}

impl MarketStructure {
    #[must_use]
    pub fn from_cr3(cr3: f64) -> Self {
        if cr3 < CR3_FRAGMENTED_MAX {
            Self::Fragmented
        } else if cr3 < CR3_MODERATE_MAX {
            Self::Moderate
        } else {
            Self::Concentrated
        }
    }

    #[must_use]
    pub fn label_pt(self) -> &'static str {
        match self {
            Self::Fragmented => "Fragmentada",
            Self::Moderate => "Moderada",
            Self::Concentrated => "Concentrada",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderShare {
    pub name: String,
    pub estimated_revenue: u64,
    pub market_share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketShareEstimate {
    pub your_estimated_share: f64,
    pub top_3_competitors: Vec<LeaderShare>,
    /// CR3: combined share of the three largest competitors, in percent.
    pub concentration_ratio: f64,
    pub market_structure: MarketStructure,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[allow(clippy::cast_precision_loss)]
fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Share estimate over peers plus the optional target. `None` without peers.
#[must_use]
pub fn estimate_market_share(
    target: Option<&TargetBusiness>,
    peers: &[Competitor],
) -> Option<MarketShareEstimate> {
    if peers.is_empty() {
        return None;
    }

    let mut by_revenue: Vec<&Competitor> = peers.iter().collect();
    by_revenue.sort_by(|a, b| b.estimated_monthly_revenue.cmp(&a.estimated_monthly_revenue));

    let your_revenue = target.map_or(0, |t| t.estimated_monthly_revenue);
    let total: u64 = peers
        .iter()
        .map(|c| c.estimated_monthly_revenue)
        .sum::<u64>()
        + your_revenue;

    let leaders = &by_revenue[..by_revenue.len().min(3)];
    let top_3_competitors = leaders
        .iter()
        .map(|c| LeaderShare {
            name: c.name.clone(),
            estimated_revenue: c.estimated_monthly_revenue,
            market_share: round1(percent(c.estimated_monthly_revenue, total)),
        })
        .collect();

    let cr3 = percent(
        leaders.iter().map(|c| c.estimated_monthly_revenue).sum(),
        total,
    );

    Some(MarketShareEstimate {
        your_estimated_share: round1(percent(your_revenue, total)),
        top_3_competitors,
        concentration_ratio: round1(cr3),
        market_structure: MarketStructure::from_cr3(cr3),
    })
}
