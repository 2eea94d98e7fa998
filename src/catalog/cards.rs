// src/catalog/cards.rs

use crate::domain::{extract_area, Listing, ListingTier};
use serde::Serialize;

const SNIPPET_MAX_CHARS: usize = 140;

/// What the presentation layer receives for each listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingCard {
    pub slug: String,
    pub name: String,
    pub category: String,
    pub tier: ListingTier,
    pub area: &'static str,
    pub rating_badge: Option<String>,
    pub price_badge: Option<&'static str>,
    pub snippet: Option<String>,
}

impl From<&Listing> for ListingCard {
    fn from(l: &Listing) -> Self {
        Self {
            slug: l.slug.clone(),
            name: l.name.clone(),
            category: l.category.slug().to_string(),
            tier: l.listing_tier,
            area: extract_area(&l.address).label(),
            rating_badge: rating_badge(l.rating, l.review_count),
            price_badge: l.price_range.map(|p| p.symbol()),
            snippet: snippet(l),
        }
    }
}

/// e.g. `"4.6 ★ (620)"`, or `"4.6 ★"` without a review count.
pub fn rating_badge(rating: Option<f64>, review_count: Option<i64>) -> Option<String> {
    let rating = rating?;
    Some(match review_count {
        Some(n) if n > 0 => format!("{rating:.1} ★ ({n})"),
        _ => format!("{rating:.1} ★"),
    })
}

/// The short description if there is one, otherwise the first sentence of
/// the generated text, cut to 140 characters.
pub fn snippet(listing: &Listing) -> Option<String> {
    if let Some(short) = listing
        .seed_description
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        return Some(short.to_string());
    }

    let text = listing.generated_description.as_deref()?.trim();
    if text.is_empty() {
        return None;
    }
    let first = first_sentence(text);
    if first.chars().count() > SNIPPET_MAX_CHARS {
        let cut: String = first.chars().take(SNIPPET_MAX_CHARS - 3).collect();
        Some(format!("{cut}…"))
    } else {
        Some(first.to_string())
    }
}

/// Up to and including the first `.`, `!` or `?` that is followed by whitespace.
fn first_sentence(text: &str) -> &str {
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            if let Some((_, next)) = chars.peek() {
                if next.is_whitespace() {
                    return &text[..i + c.len_utf8()];
                }
            }
        }
    }
    text
}
