//! Synthetic competitors for one (city, category) segment.

use competeintel_analytics::estimate_with_variance;
use competeintel_core::cnpj::check_digits;
use competeintel_core::{
    format_cnpj, Address, BusinessCategory, City, Competitor, Coordinates, OnlinePresence,
};
use rand::Rng;

/// Half-width, in km, of the square around the city centre that generated
/// competitors are scattered over.
pub const DEFAULT_SPREAD_KM: f64 = 5.0;

const KM_PER_DEGREE: f64 = 111.0;

const LOCATION_WORDS: [&str; 5] = ["Central", "Norte", "Sul", "Leste", "Oeste"];
const STREET_PREFIXES: [&str; 5] = ["Rua", "Avenida", "Travessa", "Alameda", "Praça"];
const STREET_NAMES: [&str; 17] = [
    "das Flores",
    "do Comércio",
    "Central",
    "Principal",
    "Paulista",
    "Getúlio Vargas",
    "Santos Dumont",
    "Dom Pedro",
    "XV de Novembro",
    "Sete de Setembro",
    "da Independência",
    "Rio Branco",
    "Tiradentes",
    "São João",
    "da República",
    "do Mercado",
    "das Palmeiras",
];
const NEIGHBORHOODS: [&str; 5] = ["Centro", "Vila Nova", "Jardim das Flores", "Bairro Alto", "Zona Sul"];
/// Weighted: small businesses dominate.
const EMPLOYEE_BUCKETS: [&str; 7] = ["1-5", "1-5", "6-10", "6-10", "11-25", "26-50", "50+"];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// Telephone area code for the state a city is in.
fn area_code(state: &str) -> u8 {
    match state {
        "RJ" => 21,
        "MG" => 31,
        "PR" => 41,
        "RS" => 51,
        "DF" => 61,
        "BA" => 71,
        "PE" => 81,
        "CE" => 85,
        "AM" => 92,
        _ => 11,
    }
}

fn slug(value: &str) -> String {
    value.to_lowercase().replace(' ', "_")
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

fn scatter<R: Rng + ?Sized>(rng: &mut R, center: Coordinates, spread_km: f64) -> Coordinates {
    let max_deg = spread_km / KM_PER_DEGREE;
    Coordinates {
        latitude: round_to(center.latitude + rng.random_range(-max_deg..=max_deg), 6),
        longitude: round_to(center.longitude + rng.random_range(-max_deg..=max_deg), 6),
    }
}

/// A check-digit-valid headquarters CNPJ (`XX.XXX.XXX/0001-XX`).
pub fn random_cnpj<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut base = [0_u32; 12];
    for digit in &mut base[..8] {
        *digit = rng.random_range(0..=9);
    }
    base[11] = 1;
    let (first, second) = check_digits(&base);

    let digits: String = base
        .iter()
        .chain([first, second].iter())
        .filter_map(|d| char::from_digit(*d, 10))
        .collect();
    format_cnpj(&digits).unwrap_or(digits)
}

fn random_phone<R: Rng + ?Sized>(rng: &mut R, state: &str) -> String {
    let head: u32 = rng.random_range(0..10_000);
    let tail: u32 = rng.random_range(0..10_000);
    format!("({}) 9{head:04}-{tail:04}", area_code(state))
}

fn random_address<R: Rng + ?Sized>(rng: &mut R, city: &City) -> Address {
    let street = format!(
        "{} {}, {}",
        pick(rng, &STREET_PREFIXES),
        pick(rng, &STREET_NAMES),
        rng.random_range(1..=999)
    );
    let cep_head: u32 = rng.random_range(10_000..=99_999);
    let cep_tail: u32 = rng.random_range(100..=999);
    Address {
        street,
        neighborhood: pick(rng, &NEIGHBORHOODS).to_string(),
        city: city.name.to_string(),
        state: city.state.to_string(),
        postal_code: format!("{cep_head:05}-{cep_tail:03}"),
        country: "Brasil".to_string(),
    }
}

/// Established businesses get a richer social footprint.
fn random_presence<R: Rng + ?Sized>(rng: &mut R, rating: f64, review_count: u32) -> OnlinePresence {
    if rating >= 4.5 && review_count > 200 {
        OnlinePresence {
            has_instagram: true,
            has_facebook: true,
            has_website: true,
            instagram_followers: rng.random_range(5_000..=50_000),
            facebook_likes: rng.random_range(3_000..=30_000),
        }
    } else if rating >= 4.0 && review_count > 100 {
        OnlinePresence {
            has_instagram: true,
            has_facebook: true,
            has_website: false,
            instagram_followers: rng.random_range(500..=5_000),
            facebook_likes: rng.random_range(300..=3_000),
        }
    } else {
        OnlinePresence {
            has_instagram: false,
            has_facebook: true,
            has_website: false,
            instagram_followers: 0,
            facebook_likes: rng.random_range(50..=500),
        }
    }
}

/// Generate `count` competitors of `category` around `city`'s centre,
/// sorted by rating, best first.
///
/// All randomness comes from `rng`; the same seed yields the same segment.
pub fn generate_segment<R: Rng + ?Sized>(
    city: &City,
    category: BusinessCategory,
    count: usize,
    spread_km: f64,
    rng: &mut R,
) -> Vec<Competitor> {
    let templates = category.name_templates();
    let mut competitors: Vec<Competitor> = (0..count)
        .map(|i| {
            let coordinates = scatter(rng, city.center(), spread_km);

            let location = if rng.random_range(0..=LOCATION_WORDS.len()) == LOCATION_WORDS.len() {
                city.name
            } else {
                pick(rng, &LOCATION_WORDS)
            };
            let name = pick(rng, templates).replace("{}", location);

            let rating = round_to(rng.random_range(3.5..=5.0), 1);
            let review_count: u32 = rng.random_range(10..=500);
            let online_presence = random_presence(rng, rating, review_count);

            let revenue = estimate_with_variance(category.name(), rating, review_count, rng);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let estimated_monthly_revenue = revenue.max(0.0).round() as u64;

            Competitor {
                id: format!("mock_{}_{}_{}", slug(category.name()), slug(city.name), i + 1),
                name,
                category: category.name().to_string(),
                cnae_code: category.cnae_code().to_string(),
                cnae_description: category.description().to_string(),
                cnpj: random_cnpj(rng),
                coordinates,
                address: random_address(rng, city),
                phone: random_phone(rng, city.state),
                rating,
                review_count,
                distance_km: None,
                online_presence,
                is_verified: rng.random_bool(0.75),
                opening_year: rng.random_range(2010..=2024),
                employee_count_estimate: pick(rng, &EMPLOYEE_BUCKETS).to_string(),
                estimated_monthly_revenue,
                has_delivery: rng.random_bool(0.5),
                accepts_pix: rng.random_bool(0.75),
                accepts_cards: rng.random_bool(0.8),
            }
        })
        .collect();

    competitors.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    competitors
}
