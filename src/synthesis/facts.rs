// src/synthesis/facts.rs

//! Pure helpers that turn raw listing fields into display-ready fragments.
//!
//! Threshold rules live in ordered tables evaluated top to bottom, first
//! match wins.

use crate::domain::{extract_area, Area, Listing, OpeningHours, PriceRange};

/// Rating floor → descriptor.
const RATING_PHRASES: &[(f64, &str)] = &[
    (4.8, "one of the highest-rated in Formby"),
    (4.5, "consistently highly rated"),
    (4.2, "very well regarded by visitors and locals"),
    (3.8, "well established and popular"),
];

const DEFAULT_RATING_PHRASE: &str = "a well-known local choice";

/// Review count bands. Counts of 20 or fewer get no phrase.
const REVIEW_BANDS: &[(fn(i64) -> bool, fn(i64) -> String)] = &[
    (
        |n| n >= 500,
        |n| format!("over {} Google reviews", n / 100 * 100),
    ),
    (|n| n >= 100, |n| format!("{n} Google reviews")),
    (|n| n > 20, |_| "dozens of Google reviews".to_string()),
];

/// (rating floor, needs a review phrase, template). `{r}` is the rating to one
/// decimal place and `{mag}` the review magnitude phrase.
const RATING_INTROS: &[(f64, bool, &str)] = &[
    (4.5, true, "With {mag} averaging {r} out of 5"),
    (4.0, true, "Rated {r}/5 across {mag}"),
    (4.0, false, "Rated {r}/5 on Google"),
];

pub fn rating_descriptor(rating: Option<f64>) -> &'static str {
    let Some(rating) = rating else {
        return "";
    };
    RATING_PHRASES
        .iter()
        .find(|(floor, _)| rating >= *floor)
        .map(|(_, phrase)| *phrase)
        .unwrap_or(DEFAULT_RATING_PHRASE)
}

pub fn review_magnitude(review_count: Option<i64>) -> Option<String> {
    let n = review_count?;
    REVIEW_BANDS
        .iter()
        .find(|(applies, _)| applies(n))
        .map(|(_, render)| render(n))
}

/// Lead-in for the rating paragraph. Empty when the listing has no rating
/// worth quoting, which also means the rating paragraph is skipped.
pub fn rating_intro(rating: Option<f64>, review_count: Option<i64>) -> String {
    let Some(rating) = rating else {
        return String::new();
    };
    let magnitude = review_magnitude(review_count);

    RATING_INTROS
        .iter()
        .find(|(floor, needs_mag, _)| rating >= *floor && (!needs_mag || magnitude.is_some()))
        .map(|(_, _, template)| {
            template
                .replace("{r}", &format!("{rating:.1}"))
                .replace("{mag}", magnitude.as_deref().unwrap_or(""))
        })
        .unwrap_or_default()
}

pub fn price_descriptor(price: Option<PriceRange>) -> &'static str {
    match price {
        None => "",
        Some(PriceRange::Budget) => "budget-friendly prices",
        Some(PriceRange::Moderate) => "mid-range prices that represent excellent value",
        Some(PriceRange::Upscale) => "a premium experience at upscale prices",
        Some(PriceRange::Luxury) => "a luxury, fine-dining price point",
    }
}

pub const HOURS_CONTINUOUS: &str = "Open every day, around the clock";
pub const HOURS_WEEKDAYS: &str = "Open throughout the week";
pub const HOURS_CHECK: &str = "Check the opening hours above before visiting";

pub fn hours_summary(hours: Option<&OpeningHours>) -> &'static str {
    let lines = match hours {
        Some(h) if !h.weekday_text.is_empty() => &h.weekday_text,
        _ => return "",
    };

    if lines.iter().any(|l| l.contains("Open 24 hours")) {
        return HOURS_CONTINUOUS;
    }
    match lines.iter().find(|l| l.starts_with("Monday")) {
        Some(monday) if !monday.contains("Closed") => HOURS_WEEKDAYS,
        _ => HOURS_CHECK,
    }
}

/// Seed description ready to be embedded mid-sentence: trimmed, with one
/// trailing full stop removed.
pub fn seed_sentence(seed: Option<&str>) -> Option<String> {
    let trimmed = seed?.trim();
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed).trim_end();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Everything a template fragment may reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Facts {
    pub name: String,
    pub area: Area,
    pub rating_intro: String,
    pub rating_text: &'static str,
    pub price: &'static str,
    pub hours: &'static str,
    pub seed: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

impl Facts {
    pub fn derive(listing: &Listing) -> Self {
        Self {
            name: listing.name.trim().to_string(),
            area: extract_area(&listing.address),
            rating_intro: rating_intro(listing.rating, listing.review_count),
            rating_text: rating_descriptor(listing.rating),
            price: price_descriptor(listing.price_range),
            hours: hours_summary(listing.opening_hours.as_ref()),
            seed: seed_sentence(listing.seed_description.as_deref()),
            phone: non_blank(listing.phone.as_deref()),
            website: non_blank(listing.website.as_deref()),
        }
    }

    pub fn area_name(&self) -> &'static str {
        self.area.label()
    }

    pub fn area_context(&self) -> &'static str {
        self.area.context()
    }

    /// Seed sentence, or "" when absent. Fragments that use it are only
    /// drawn when it is present.
    pub fn seed_text(&self) -> &str {
        self.seed.as_deref().unwrap_or("")
    }

    pub fn has_website(&self) -> bool {
        self.website.is_some()
    }
}

fn non_blank(s: Option<&str>) -> Option<String> {
    s.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}
