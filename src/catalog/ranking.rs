// src/catalog/ranking.rs

use crate::domain::{Category, Listing};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Display orders offered on category pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Tier, then composite score, then name.
    #[default]
    Default,
    /// Name only.
    Alpha,
    /// Tier, then raw rating, then review count, then name.
    Google,
    /// Numeric hygiene rating, then composite score, then name.
    Hygiene,
}

impl SortMode {
    /// Unknown keys fall back to `Default`.
    pub fn parse(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "alpha" => SortMode::Alpha,
            "google" => SortMode::Google,
            "hygiene" => SortMode::Hygiene,
            _ => SortMode::Default,
        }
    }

    /// Hygiene ratings only exist for food and drink, so other pages get `Default`.
    pub fn for_category(self, category: &Category) -> Self {
        match self {
            SortMode::Hygiene if !category.is_food() => SortMode::Default,
            mode => mode,
        }
    }
}

/// `rating × ln(reviews + 1)`, with absent values treated as zero.
pub fn composite_score(listing: &Listing) -> f64 {
    let rating = listing.rating.unwrap_or(0.0);
    let reviews = listing.review_count.unwrap_or(0).max(0) as f64;
    rating * (reviews + 1.0).ln()
}

/// Food-safety score, -1 when missing or not a plain number.
pub fn hygiene_score(listing: &Listing) -> i64 {
    listing
        .hygiene_rating
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|s| s.parse().ok())
        .unwrap_or(-1)
}

fn by_tier(a: &Listing, b: &Listing) -> Ordering {
    a.listing_tier.rank().cmp(&b.listing_tier.rank())
}

fn by_score_desc(a: &Listing, b: &Listing) -> Ordering {
    composite_score(b).total_cmp(&composite_score(a))
}

/// Code-point order on the name, then slug so equal names still order totally.
fn by_name(a: &Listing, b: &Listing) -> Ordering {
    a.name.cmp(&b.name).then_with(|| a.slug.cmp(&b.slug))
}

pub fn compare(mode: SortMode, a: &Listing, b: &Listing) -> Ordering {
    match mode {
        SortMode::Default => by_tier(a, b)
            .then_with(|| by_score_desc(a, b))
            .then_with(|| by_name(a, b)),
        SortMode::Alpha => by_name(a, b),
        SortMode::Google => by_tier(a, b)
            .then_with(|| {
                b.rating
                    .unwrap_or(0.0)
                    .total_cmp(&a.rating.unwrap_or(0.0))
            })
            .then_with(|| b.review_count.unwrap_or(0).cmp(&a.review_count.unwrap_or(0)))
            .then_with(|| by_name(a, b)),
        SortMode::Hygiene => hygiene_score(b)
            .cmp(&hygiene_score(a))
            .then_with(|| by_score_desc(a, b))
            .then_with(|| by_name(a, b)),
    }
}

/// Display order: tier first, composite score within a tier, then name.
///
/// Stable, so re-ranking a ranked collection leaves it unchanged.
pub fn rank(listings: Vec<Listing>) -> Vec<Listing> {
    sort_by_mode(listings, SortMode::Default)
}

pub fn sort_by_mode(mut listings: Vec<Listing>, mode: SortMode) -> Vec<Listing> {
    listings.sort_by(|a, b| compare(mode, a, b));
    listings
}
