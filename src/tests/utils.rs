use crate::db::connection::{init_db, Database};
use crate::db::listings::upsert_listing;
use crate::domain::{Category, Listing, ListingTier, OpeningHours, PriceRange};
use tempfile::TempDir;

/// Fresh on-disk database with the production schema. Keep the `TempDir`
/// alive for as long as the database is used.
pub fn init_test_db() -> (TempDir, Database) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("guide_test.sqlite3");
    let db = Database::new(path.to_string_lossy().into_owned());

    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    (dir, db)
}

pub fn seed_listings(db: &Database, listings: &[Listing]) {
    for l in listings {
        upsert_listing(db, l).unwrap_or_else(|e| panic!("insert {} failed: {e}", l.id));
    }
}

/// Listing with only the required fields.
pub fn bare(slug: &str, category: Category) -> Listing {
    Listing::new(format!("id-{slug}"), slug, title_case(slug), category)
}

/// Listing with every optional field filled in.
pub fn full(slug: &str, category: Category) -> Listing {
    Listing {
        address: "12 Victoria Road, Freshfield".to_string(),
        postcode: "L37 7AQ".to_string(),
        rating: Some(4.6),
        review_count: Some(620),
        price_range: Some(PriceRange::Moderate),
        opening_hours: Some(OpeningHours {
            weekday_text: vec![
                "Monday: 9:00 AM – 5:00 PM".to_string(),
                "Tuesday: 9:00 AM – 5:00 PM".to_string(),
            ],
        }),
        hygiene_rating: Some("5".to_string()),
        phone: Some("01704 000000".to_string()),
        website: Some("https://example.com".to_string()),
        listing_tier: ListingTier::Featured,
        seed_description: Some("Wood-fired pizza and local ales.".to_string()),
        ..bare(slug, category)
    }
}

pub fn ranked(name: &str, tier: ListingTier, rating: Option<f64>, reviews: Option<i64>) -> Listing {
    Listing {
        listing_tier: tier,
        rating,
        review_count: reviews,
        ..Listing::new(
            format!("id-{}", name.to_lowercase()),
            name.to_lowercase(),
            name,
            Category::Restaurants,
        )
    }
}

pub fn names(listings: &[Listing]) -> Vec<&str> {
    listings.iter().map(|l| l.name.as_str()).collect()
}

pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n").collect()
}

fn title_case(slug: &str) -> String {
    slug.split('-')
        .map(|w| {
            let mut c = w.chars();
            match c.next() {
                Some(first) => first.to_uppercase().chain(c).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
