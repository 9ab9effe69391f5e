use std::collections::HashMap;

use competeintel_analytics::distance_km;
use competeintel_core::{BusinessCategory, City, Competitor, SearchQuery, CATEGORIES, CITIES};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::generator::{generate_segment, DEFAULT_SPREAD_KM};

type SegmentKey = (BusinessCategory, &'static str);

/// Read-only competitor table, keyed by (category, city).
///
/// Built once at startup and shared by reference afterwards. Nothing mutates
/// it after construction, so concurrent readers need no locking.
#[derive(Debug, Clone, Default)]
pub struct MockCatalog {
    segments: HashMap<SegmentKey, Vec<Competitor>>,
}

impl MockCatalog {
    /// Generate `segment_size` competitors for every supported city and
    /// category. Each segment draws from its own generator derived from
    /// `seed`, so segments do not depend on one another.
    #[must_use]
    pub fn generate(seed: u64, segment_size: usize) -> Self {
        let mut segments = HashMap::with_capacity(CITIES.len() * CATEGORIES.len());
        for (city_idx, city) in CITIES.iter().enumerate() {
            for (cat_idx, category) in CATEGORIES.into_iter().enumerate() {
                let stream = (city_idx * CATEGORIES.len() + cat_idx) as u64;
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(stream));
                let competitors =
                    generate_segment(city, category, segment_size, DEFAULT_SPREAD_KM, &mut rng);
                segments.insert((category, city.name), competitors);
            }
        }

        let catalog = Self { segments };
        tracing::debug!(
            seed,
            segment_size,
            competitors = catalog.len(),
            "mock catalog generated"
        );
        catalog
    }

    /// Build a catalog from fixed records. Records whose category or city is
    /// not in the reference tables are dropped.
    #[must_use]
    pub fn from_competitors(competitors: impl IntoIterator<Item = Competitor>) -> Self {
        let mut segments: HashMap<SegmentKey, Vec<Competitor>> = HashMap::new();
        for competitor in competitors {
            let key = BusinessCategory::from_name(&competitor.category)
                .zip(City::find(&competitor.address.city).map(|c| c.name));
            if let Some(key) = key {
                segments.entry(key).or_default().push(competitor);
            } else {
                tracing::warn!(id = %competitor.id, "skipping competitor outside the reference tables");
            }
        }
        Self { segments }
    }

    /// All competitors of `category` in `city`, in catalog order.
    #[must_use]
    pub fn segment(&self, category: BusinessCategory, city: &City) -> &[Competitor] {
        self.segments
            .get(&(category, city.name))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Competitors matching `query`, nearest first.
    ///
    /// Keeps those within `radius_km` of the query origin that pass the
    /// state, neighborhood and CEP filters, then truncates to `max_results`.
    /// Each returned record carries `distance_km` rounded to 2 decimals.
    #[must_use]
    pub fn search(&self, query: &SearchQuery) -> Vec<Competitor> {
        let neighborhood = query.neighborhood.as_deref().map(str::to_lowercase);
        let cep_prefix = query.cep.as_deref().map(|cep| &cep[..5]);

        let mut hits: Vec<(f64, &Competitor)> = self
            .segment(query.category, query.city)
            .iter()
            .filter(|c| {
                query
                    .state
                    .as_deref()
                    .is_none_or(|s| c.address.state.eq_ignore_ascii_case(s))
            })
            .filter(|c| {
                neighborhood
                    .as_deref()
                    .is_none_or(|n| c.address.neighborhood.to_lowercase().contains(n))
            })
            .filter(|c| cep_prefix.is_none_or(|prefix| postal_prefix(&c.address.postal_code) == prefix))
            .map(|c| (distance_km(query.origin, c.coordinates), c))
            .filter(|(d, _)| *d <= query.radius_km)
            .collect();

        hits.sort_by(|a, b| a.0.total_cmp(&b.0));
        hits.truncate(query.max_results);

        hits.into_iter()
            .map(|(d, c)| {
                let mut found = c.clone();
                found.distance_km = Some((d * 100.0).round() / 100.0);
                found
            })
            .collect()
    }
}

/// First five digits of a CEP, ignoring punctuation.
fn postal_prefix(postal_code: &str) -> String {
    postal_code
        .chars()
        .filter(char::is_ascii_digit)
        .take(5)
        .collect()
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
