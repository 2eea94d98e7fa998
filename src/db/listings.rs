use crate::db::connection::Database;
use crate::domain::{Category, Listing, ListingTier, OpeningHours, PriceRange};
use crate::errors::EngineError;
use rusqlite::{params, Row};

/// Every column except `description` is input to synthesis; `description` is
/// read too so search can see the current generated text.
const SELECT_LISTINGS: &str = r#"
    SELECT
        id,                 -- 0
        slug,               -- 1
        name,               -- 2
        category,           -- 3
        address,            -- 4
        postcode,           -- 5
        rating,             -- 6
        review_count,       -- 7
        price_range,        -- 8
        opening_hours,      -- 9
        hygiene_rating,     -- 10
        phone,              -- 11
        website,            -- 12
        listing_tier,       -- 13
        short_description,  -- 14
        description,        -- 15
        secondary_categories -- 16
    FROM listings
"#;

fn listing_from_row(row: &Row<'_>) -> rusqlite::Result<Listing> {
    let slug: String = row.get(1)?;
    let price_raw: Option<String> = row.get(8)?;
    let hours_raw: Option<String> = row.get(9)?;
    let tier_raw: String = row.get(13)?;
    let category_raw: String = row.get(3)?;
    let secondary_raw: String = row.get(16)?;

    Ok(Listing {
        id: row.get(0)?,
        name: row.get(2)?,
        category: Category::from_slug(&category_raw),
        secondary_categories: parse_secondary_categories(&slug, &secondary_raw),
        address: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        postcode: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
        rating: row.get(6)?,
        review_count: row.get(7)?,
        price_range: price_raw.as_deref().and_then(PriceRange::from_symbol),
        opening_hours: parse_opening_hours(&slug, hours_raw.as_deref()),
        hygiene_rating: row.get(10)?,
        phone: row.get(11)?,
        website: row.get(12)?,
        listing_tier: ListingTier::parse(&tier_raw),
        seed_description: row.get(14)?,
        generated_description: row.get(15)?,
        slug,
    }
    .sanitized())
}

/// Malformed JSON is treated as "no hours" rather than failing the read.
fn parse_opening_hours(slug: &str, raw: Option<&str>) -> Option<OpeningHours> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str::<OpeningHours>(raw) {
        Ok(hours) => Some(hours),
        Err(e) => {
            tracing::warn!(slug, error = %e, "ignoring malformed opening_hours");
            None
        }
    }
}

fn parse_secondary_categories(slug: &str, raw: &str) -> Vec<Category> {
    match serde_json::from_str::<Vec<Category>>(raw) {
        Ok(categories) => categories,
        Err(e) => {
            tracing::warn!(slug, error = %e, "ignoring malformed secondary_categories");
            Vec::new()
        }
    }
}

fn collect_rows(
    rows: impl Iterator<Item = rusqlite::Result<Listing>>,
) -> Result<Vec<Listing>, EngineError> {
    let mut out = Vec::new();
    for row in rows {
        out.push(row.map_err(|e| EngineError::DbError(e.to_string()))?);
    }
    Ok(out)
}

/// All listings, ordered by name.
pub fn get_all_listings(db: &Database) -> Result<Vec<Listing>, EngineError> {
    db.with_conn(|conn| {
        let sql = format!("{SELECT_LISTINGS} ORDER BY name ASC, slug ASC");
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| EngineError::DbError(e.to_string()))?;
        let rows = stmt
            .query_map([], listing_from_row)
            .map_err(|e| EngineError::DbError(e.to_string()))?;
        collect_rows(rows)
    })
}

/// Listings filed under `category`, either as their main category or as one
/// of their secondary ones, in storage order.
pub fn get_listings_by_category(
    db: &Database,
    category: &str,
) -> Result<Vec<Listing>, EngineError> {
    db.with_conn(|conn| {
        let sql = format!(
            "{SELECT_LISTINGS} WHERE category = ?1 \
             OR EXISTS (SELECT 1 FROM json_each(CASE WHEN json_valid(listings.secondary_categories) \
                 THEN listings.secondary_categories ELSE '[]' END) WHERE value = ?1)"
        );
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| EngineError::DbError(e.to_string()))?;
        let rows = stmt
            .query_map(params![category], listing_from_row)
            .map_err(|e| EngineError::DbError(e.to_string()))?;
        collect_rows(rows)
    })
}

/// Overwrite the generated description for one listing.
///
/// Idempotent. Updating an id that does not exist is an error so a lost
/// write is counted rather than silently ignored.
pub fn set_generated_description(
    db: &Database,
    id: &str,
    description: &str,
) -> Result<(), EngineError> {
    db.with_conn(|conn| {
        let changed = conn
            .execute(
                "UPDATE listings SET description = ?1 WHERE id = ?2",
                params![description, id],
            )
            .map_err(|e| EngineError::DbError(format!("update {id} failed: {e}")))?;
        if changed == 0 {
            return Err(EngineError::DbError(format!("no listing with id {id}")));
        }
        Ok(())
    })
}

/// Insert or replace a listing. Used by fixtures and imports.
pub fn upsert_listing(db: &Database, listing: &Listing) -> Result<(), EngineError> {
    let hours = listing
        .opening_hours
        .as_ref()
        .map(serde_json::to_string)
        .transpose()
        .map_err(|e| EngineError::DbError(format!("encode opening_hours: {e}")))?;
    let secondary = serde_json::to_string(&listing.secondary_categories)
        .map_err(|e| EngineError::DbError(format!("encode secondary_categories: {e}")))?;

    db.with_conn(|conn| {
        conn.execute(
            r#"
            INSERT INTO listings (
                id, slug, name, category, address, postcode,
                rating, review_count, price_range, opening_hours, hygiene_rating,
                phone, website, listing_tier, short_description, description,
                secondary_categories
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6,
                ?7, ?8, ?9, ?10, ?11,
                ?12, ?13, ?14, ?15, ?16,
                ?17
            )
            ON CONFLICT(id) DO UPDATE SET
                slug = excluded.slug,
                name = excluded.name,
                category = excluded.category,
                address = excluded.address,
                postcode = excluded.postcode,
                rating = excluded.rating,
                review_count = excluded.review_count,
                price_range = excluded.price_range,
                opening_hours = excluded.opening_hours,
                hygiene_rating = excluded.hygiene_rating,
                phone = excluded.phone,
                website = excluded.website,
                listing_tier = excluded.listing_tier,
                short_description = excluded.short_description,
                description = excluded.description,
                secondary_categories = excluded.secondary_categories
            "#,
            params![
                listing.id,
                listing.slug,
                listing.name,
                listing.category.slug(),
                listing.address,
                listing.postcode,
                listing.rating,
                listing.review_count,
                listing.price_range.map(|p| p.symbol()),
                hours,
                listing.hygiene_rating,
                listing.phone,
                listing.website,
                listing.listing_tier.as_str(),
                listing.seed_description,
                listing.generated_description,
                secondary,
            ],
        )
        .map_err(|e| EngineError::DbError(e.to_string()))?;
        Ok(())
    })
}
