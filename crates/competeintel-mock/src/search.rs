use competeintel_analytics::{build_analytics, AnalyticsResult};
use competeintel_core::{Competitor, SearchQuery};
use serde::Serialize;

use crate::catalog::MockCatalog;

/// Body of a completed competitor search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    pub competitors: Vec<Competitor>,
    pub analytics: AnalyticsResult,
    pub total_found: usize,
    pub search_radius_km: f64,
}

/// Look up competitors for `query` and analyse the returned set.
///
/// Analytics run over exactly the competitors in the response, after
/// truncation to `max_results`.
#[must_use]
pub fn run_search(catalog: &MockCatalog, query: &SearchQuery) -> SearchResponse {
    let competitors = catalog.search(query);
    let analytics = build_analytics(query.radius_km, query.target.as_ref(), &competitors);

    SearchResponse {
        total_found: competitors.len(),
        competitors,
        analytics,
        search_radius_km: query.radius_km,
    }
}
