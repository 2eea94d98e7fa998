use crate::db::connection::Database;
use crate::db::listings;
use crate::domain::Listing;
use crate::errors::EngineError;

/// The narrow read/write surface the engine needs from storage.
///
/// `Sync` because the generation batch shares one store across worker threads.
pub trait ListingStore: Sync {
    /// Cheap round trip used to fail fast at startup.
    fn ping(&self) -> Result<(), EngineError>;

    /// Every listing, ordered by name.
    fn fetch_listings(&self) -> Result<Vec<Listing>, EngineError>;

    fn fetch_category(&self, category: &str) -> Result<Vec<Listing>, EngineError>;

    /// Idempotent overwrite of `generated_description`, keyed by id.
    fn update_generated_description(&self, id: &str, text: &str) -> Result<(), EngineError>;
}

impl ListingStore for Database {
    fn ping(&self) -> Result<(), EngineError> {
        self.with_conn(|conn| {
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
                .map_err(|e| EngineError::DbError(format!("ping failed: {e}")))?;
            Ok(())
        })
    }

    fn fetch_listings(&self) -> Result<Vec<Listing>, EngineError> {
        listings::get_all_listings(self)
    }

    fn fetch_category(&self, category: &str) -> Result<Vec<Listing>, EngineError> {
        listings::get_listings_by_category(self, category)
    }

    fn update_generated_description(&self, id: &str, text: &str) -> Result<(), EngineError> {
        listings::set_generated_description(self, id, text)
    }
}
