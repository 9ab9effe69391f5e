use serde::{Deserialize, Serialize};

/// WGS-84 coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Returns `true` when both components are finite and inside the
    /// latitude/longitude domain.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    /// CEP, formatted `XXXXX-XXX`.
    pub postal_code: String,
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_country() -> String {
    "Brasil".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnlinePresence {
    pub has_instagram: bool,
    pub has_facebook: bool,
    pub has_website: bool,
    #[serde(default)]
    pub instagram_followers: u32,
    #[serde(default)]
    pub facebook_likes: u32,
}

/// A business competing in the searched segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: String,
    pub name: String,
    pub category: String,
    pub cnae_code: String,
    pub cnae_description: String,
    pub cnpj: String,
    pub coordinates: Coordinates,
    pub address: Address,
    pub phone: String,
    /// Google rating in `[0.0, 5.0]`.
    pub rating: f64,
    pub review_count: u32,
    /// Kilometres from the search origin. `None` until a search computes it.
    pub distance_km: Option<f64>,
    pub online_presence: OnlinePresence,
    pub is_verified: bool,
    pub opening_year: u16,
    /// Bucketed headcount, e.g. `"6-10"`.
    pub employee_count_estimate: String,
    /// Estimated monthly revenue in BRL.
    pub estimated_monthly_revenue: u64,
    pub has_delivery: bool,
    pub accepts_pix: bool,
    pub accepts_cards: bool,
}
