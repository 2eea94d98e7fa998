use super::utils::{bare, full, init_test_db, seed_listings};
use crate::catalog::fetch_or_empty;
use crate::db::connection::{init_db, Database};
use crate::db::listings::{get_all_listings, set_generated_description};
use crate::db::store::ListingStore;
use crate::domain::{Category, ListingTier};
use crate::errors::EngineError;
use rusqlite::params;

#[test]
fn listing_round_trips_through_storage() {
    let (_dir, db) = init_test_db();
    let original = full("round-trip", Category::Accommodation);
    seed_listings(&db, &[original.clone()]);

    let loaded = db.fetch_listings().unwrap();
    assert_eq!(loaded, vec![original]);
}

#[test]
fn fetch_listings_orders_by_name() {
    let (_dir, db) = init_test_db();
    seed_listings(
        &db,
        &[
            bare("zephyr", Category::Pubs),
            bare("anchor", Category::Pubs),
            bare("marram", Category::Beaches),
        ],
    );
    let names: Vec<_> = db
        .fetch_listings()
        .unwrap()
        .into_iter()
        .map(|l| l.name)
        .collect();
    assert_eq!(names, vec!["Anchor", "Marram", "Zephyr"]);
}

#[test]
fn fetch_category_only_returns_that_category() {
    let (_dir, db) = init_test_db();
    seed_listings(
        &db,
        &[
            bare("one", Category::Pubs),
            bare("two", Category::Cafes),
            bare("three", Category::Pubs),
        ],
    );
    let pubs = db.fetch_category("pubs").unwrap();
    assert_eq!(pubs.len(), 2);
    assert!(pubs.iter().all(|l| l.category == Category::Pubs));
}

#[test]
fn raw_values_are_normalised_on_load() {
    let (_dir, db) = init_test_db();
    db.with_conn(|conn| {
        conn.execute(
            r#"
            INSERT INTO listings (id, slug, name, category, rating, review_count,
                                  price_range, opening_hours, listing_tier)
            VALUES ('x1', 'odd-one', 'Odd One', 'escape-rooms', 7.5, -3,
                    '$$$', '{not json', 'Gold')
            "#,
            [],
        )?;
        Ok(())
    })
    .unwrap();

    let l = get_all_listings(&db).unwrap().remove(0);
    assert_eq!(l.category, Category::Other("escape-rooms".to_string()));
    assert_eq!(l.rating, None);
    assert_eq!(l.review_count, None);
    assert_eq!(l.price_range, None);
    assert_eq!(l.opening_hours, None);
    assert_eq!(l.listing_tier, ListingTier::Unrecognized);
}

#[test]
fn update_overwrites_description_idempotently() {
    let (_dir, db) = init_test_db();
    seed_listings(&db, &[bare("writer", Category::Shopping)]);

    set_generated_description(&db, "id-writer", "first").unwrap();
    set_generated_description(&db, "id-writer", "second").unwrap();
    set_generated_description(&db, "id-writer", "second").unwrap();

    let stored: String = db
        .with_conn(|conn| {
            conn.query_row(
                "SELECT description FROM listings WHERE id = ?1",
                params!["id-writer"],
                |row| row.get(0),
            )
            .map_err(EngineError::from)
        })
        .unwrap();
    assert_eq!(stored, "second");
}

#[test]
fn update_of_unknown_id_is_an_error() {
    let (_dir, db) = init_test_db();
    let err = db.update_generated_description("missing", "text").unwrap_err();
    assert!(matches!(err, EngineError::DbError(_)));
}

#[test]
fn missing_schema_file_is_a_schema_error() {
    let (_dir, db) = init_test_db();
    let err = init_db(&db, "sql/does_not_exist.sql").unwrap_err();
    assert!(matches!(err, EngineError::SchemaError(_)));
}

#[test]
fn unreachable_database_fails_ping() {
    let db = Database::new("/nonexistent-dir/for/sure/guide.sqlite3");
    assert!(db.ping().is_err());
}

#[test]
fn read_failure_is_shown_as_empty_page() {
    let db = Database::new("/nonexistent-dir/for/sure/guide.sqlite3");
    assert!(fetch_or_empty(&db, "cafes").is_empty());
}

#[test]
fn separate_databases_on_one_thread_stay_separate() {
    let (_a_dir, a) = init_test_db();
    let (_b_dir, b) = init_test_db();
    seed_listings(&a, &[bare("only-in-a", Category::Cafes)]);

    assert_eq!(a.fetch_listings().unwrap().len(), 1);
    assert!(b.fetch_listings().unwrap().is_empty());
}

#[test]
fn secondary_categories_put_a_listing_on_extra_pages() {
    let (_dir, db) = init_test_db();
    let mut cafe_bar = bare("cafe-bar", Category::Cafes);
    cafe_bar.secondary_categories = vec![Category::Pubs, Category::from_slug("live-music")];
    seed_listings(&db, &[cafe_bar.clone(), bare("plain-pub", Category::Pubs)]);

    let mut pubs: Vec<_> = db
        .fetch_category("pubs")
        .unwrap()
        .into_iter()
        .map(|l| l.slug)
        .collect();
    pubs.sort();
    assert_eq!(pubs, vec!["cafe-bar", "plain-pub"]);

    let music = db.fetch_category("live-music").unwrap();
    assert_eq!(music, vec![cafe_bar.clone()]);
    assert!(db.fetch_category("beaches").unwrap().is_empty());
}

#[test]
fn malformed_secondary_categories_are_ignored_on_load() {
    let (_dir, db) = init_test_db();
    seed_listings(&db, &[bare("odd", Category::Shopping)]);
    db.with_conn(|conn| {
        conn.execute(
            "UPDATE listings SET secondary_categories = 'pubs,cafes' WHERE slug = 'odd'",
            [],
        )
        .map_err(EngineError::from)
    })
    .unwrap();

    let loaded = db.fetch_listings().unwrap();
    assert!(loaded[0].secondary_categories.is_empty());
    assert!(db.fetch_category("pubs").unwrap().is_empty());
}
