use serde::{Deserialize, Serialize};
use std::fmt;

/// A business listing as read from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    // Identity
    pub id: String,
    pub slug: String, // also the seed for description synthesis

    pub name: String,
    pub category: Category,
    /// Extra category pages the listing also appears on.
    pub secondary_categories: Vec<Category>,

    pub address: String,
    pub postcode: String,

    // Reputation
    pub rating: Option<f64>,
    pub review_count: Option<i64>,
    pub price_range: Option<PriceRange>,
    pub opening_hours: Option<OpeningHours>,
    pub hygiene_rating: Option<String>,

    // Contact
    pub phone: Option<String>,
    pub website: Option<String>,

    pub listing_tier: ListingTier,

    /// Short human-authored snippet, folded into generated text when present.
    pub seed_description: Option<String>,
    /// Output of the generation batch. Overwritten on every run.
    pub generated_description: Option<String>,
}

impl Listing {
    /// Minimal listing with every optional field absent.
    pub fn new(
        id: impl Into<String>,
        slug: impl Into<String>,
        name: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            name: name.into(),
            category,
            secondary_categories: Vec::new(),
            address: String::new(),
            postcode: String::new(),
            rating: None,
            review_count: None,
            price_range: None,
            opening_hours: None,
            hygiene_rating: None,
            phone: None,
            website: None,
            listing_tier: ListingTier::Standard,
            seed_description: None,
            generated_description: None,
        }
    }

    /// Drop reputation values that break the data model invariants
    /// (rating outside [0,5], negative review counts).
    pub fn sanitized(mut self) -> Self {
        if let Some(r) = self.rating {
            if !r.is_finite() || !(0.0..=5.0).contains(&r) {
                tracing::warn!(slug = %self.slug, rating = r, "discarding out-of-range rating");
                self.rating = None;
            }
        }
        if let Some(n) = self.review_count {
            if n < 0 {
                tracing::warn!(slug = %self.slug, review_count = n, "discarding negative review count");
                self.review_count = None;
            }
        }
        self
    }
}

/// Directory category. Unknown slugs are kept in `Other` so they round-trip
/// through storage; synthesis treats them with the default generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Restaurants,
    Cafes,
    Pubs,
    Accommodation,
    Shopping,
    Activities,
    NatureWalks,
    Beaches,
    Other(String),
}

impl Category {
    pub fn from_slug(slug: &str) -> Self {
        match slug.trim() {
            "restaurants" => Category::Restaurants,
            "cafes" => Category::Cafes,
            "pubs" => Category::Pubs,
            "accommodation" => Category::Accommodation,
            "shopping" => Category::Shopping,
            "activities" => Category::Activities,
            "nature-walks" => Category::NatureWalks,
            "beaches" => Category::Beaches,
            other => Category::Other(other.to_string()),
        }
    }

    pub fn slug(&self) -> &str {
        match self {
            Category::Restaurants => "restaurants",
            Category::Cafes => "cafes",
            Category::Pubs => "pubs",
            Category::Accommodation => "accommodation",
            Category::Shopping => "shopping",
            Category::Activities => "activities",
            Category::NatureWalks => "nature-walks",
            Category::Beaches => "beaches",
            Category::Other(slug) => slug,
        }
    }

    /// Food and drink categories, the only ones with hygiene ratings.
    pub fn is_food(&self) -> bool {
        matches!(
            self,
            Category::Restaurants | Category::Cafes | Category::Pubs
        )
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::from_slug(&s)
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.slug().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Business-relationship tier. Controls display priority only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ListingTier {
    Premium,
    Featured,
    Standard,
    Unrecognized,
}

impl ListingTier {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "premium" => ListingTier::Premium,
            "featured" => ListingTier::Featured,
            "standard" => ListingTier::Standard,
            _ => ListingTier::Unrecognized,
        }
    }

    /// Lower ranks sort first.
    pub fn rank(self) -> u8 {
        match self {
            ListingTier::Premium => 1,
            ListingTier::Featured => 2,
            ListingTier::Standard => 3,
            ListingTier::Unrecognized => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ListingTier::Premium => "premium",
            ListingTier::Featured => "featured",
            ListingTier::Standard => "standard",
            ListingTier::Unrecognized => "unrecognized",
        }
    }
}

impl From<String> for ListingTier {
    fn from(s: String) -> Self {
        ListingTier::parse(&s)
    }
}

impl From<ListingTier> for String {
    fn from(t: ListingTier) -> Self {
        t.as_str().to_string()
    }
}

/// Price tiers, cheapest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "£")]
    Budget,
    #[serde(rename = "££")]
    Moderate,
    #[serde(rename = "£££")]
    Upscale,
    #[serde(rename = "££££")]
    Luxury,
}

impl PriceRange {
    pub fn from_symbol(raw: &str) -> Option<Self> {
        match raw.trim() {
            "£" => Some(PriceRange::Budget),
            "££" => Some(PriceRange::Moderate),
            "£££" => Some(PriceRange::Upscale),
            "££££" => Some(PriceRange::Luxury),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            PriceRange::Budget => "£",
            PriceRange::Moderate => "££",
            PriceRange::Upscale => "£££",
            PriceRange::Luxury => "££££",
        }
    }
}

/// Opening hours as supplied by the places provider, one line per day
/// (e.g. `"Monday: 9:00 AM – 5:00 PM"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    #[serde(default)]
    pub weekday_text: Vec<String>,
}
