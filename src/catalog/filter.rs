// src/catalog/filter.rs

use crate::domain::{extract_area, Area, Listing};

/// Requested area on a category page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AreaFilter {
    #[default]
    All,
    Only(Area),
}

impl AreaFilter {
    /// `"all"`, an empty value and unknown keys all mean no filtering.
    pub fn parse(key: &str) -> Self {
        let key = key.trim();
        if key.is_empty() || key.eq_ignore_ascii_case("all") {
            return AreaFilter::All;
        }
        match Area::from_key(key) {
            Some(area) => AreaFilter::Only(area),
            None => {
                tracing::debug!(key, "unknown area key, showing all areas");
                AreaFilter::All
            }
        }
    }
}

pub fn filter_by_area(listings: Vec<Listing>, filter: AreaFilter) -> Vec<Listing> {
    match filter {
        AreaFilter::All => listings,
        AreaFilter::Only(area) => listings
            .into_iter()
            .filter(|l| extract_area(&l.address) == area)
            .collect(),
    }
}

/// Normalised search needle, or `None` when the query is blank.
pub fn normalize_query(query: &str) -> Option<String> {
    let q = query.trim().to_lowercase();
    (!q.is_empty()).then_some(q)
}

/// Case-insensitive substring match over name, short and long description.
pub fn matches_query(listing: &Listing, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(&listing.name)
        || listing.seed_description.as_deref().is_some_and(contains)
        || listing.generated_description.as_deref().is_some_and(contains)
}

/// Free-text search. A blank query returns the input untouched.
pub fn search(listings: Vec<Listing>, query: &str) -> Vec<Listing> {
    let Some(needle) = normalize_query(query) else {
        return listings;
    };
    listings
        .into_iter()
        .filter(|l| matches_query(l, &needle))
        .collect()
}
