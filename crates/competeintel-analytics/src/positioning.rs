//! Where the target business stands among its competitors.

use competeintel_core::{Competitor, OnlinePresence, TargetBusiness};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitivePositioning {
    /// 1-based rank by rating among competitors plus the target.
    pub your_ranking: usize,
    pub total_competitors: usize,
    pub percentile: f64,
    pub above_average_rating: bool,
    pub above_average_reviews: bool,
    pub online_presence_score: f64,
}

/// Rating and review averages assumed when there are no peers to compare.
const FALLBACK_AVG_RATING: f64 = 4.0;
const FALLBACK_AVG_REVIEWS: f64 = 100.0;

/// 0–100: website 40, Instagram 30 plus up to 20 for followers, Facebook 10.
#[must_use]
pub fn online_presence_score(presence: &OnlinePresence) -> f64 {
    let mut score = 0.0;
    if presence.has_website {
        score += 40.0;
    }
    if presence.has_instagram {
        score += 30.0 + (f64::from(presence.instagram_followers) / 1_000.0).min(20.0);
    }
    if presence.has_facebook {
        score += 10.0;
    }
    f64::min(score, 100.0)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[must_use]
pub fn analyze_positioning(
    target: &TargetBusiness,
    peers: &[Competitor],
) -> CompetitivePositioning {
    // Ties resolve in the target's favour: rank = 1 + peers rated strictly higher.
    let your_ranking = 1 + peers.iter().filter(|c| c.rating > target.rating).count();
    let total = peers.len() + 1;
    #[allow(clippy::cast_precision_loss)]
    let percentile = (total - your_ranking) as f64 / total as f64 * 100.0;

    #[allow(clippy::cast_precision_loss)]
    let (avg_rating, avg_reviews) = if peers.is_empty() {
        (FALLBACK_AVG_RATING, FALLBACK_AVG_REVIEWS)
    } else {
        let n = peers.len() as f64;
        (
            peers.iter().map(|c| c.rating).sum::<f64>() / n,
            peers.iter().map(|c| f64::from(c.review_count)).sum::<f64>() / n,
        )
    };

    CompetitivePositioning {
        your_ranking,
        total_competitors: total,
        percentile: round1(percentile),
        above_average_rating: target.rating > avg_rating,
        above_average_reviews: f64::from(target.review_count) > avg_reviews,
        online_presence_score: round1(online_presence_score(&target.online_presence)),
    }
}
