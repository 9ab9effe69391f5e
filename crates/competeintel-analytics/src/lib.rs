//! Market analytics for a set of nearby competitors: distance, revenue,
//! density and saturation, positioning, market share and KPI recommendations.
//!
//! Every function here is pure and total over validated input.

pub mod density;
pub mod geo;
pub mod kpi;
pub mod market_share;
pub mod orchestrator;
pub mod positioning;
pub mod revenue;

pub use density::{analyze_market_density, DensityLevel, MarketDensity};
pub use geo::distance_km;
pub use kpi::{recommend, Benchmarks, KpiMetric, KpiRecommendation, Priority};
pub use market_share::{estimate_market_share, LeaderShare, MarketShareEstimate, MarketStructure};
pub use orchestrator::{build_analytics, AnalyticsResult};
pub use positioning::{analyze_positioning, online_presence_score, CompetitivePositioning};
pub use revenue::{estimate_monthly_revenue, estimate_with_variance};
