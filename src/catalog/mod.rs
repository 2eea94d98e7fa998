//! Read-time ranking and filtering over an already-fetched collection.
//!
//! Everything here is a pure function of its inputs. No caches.

pub mod cards;
pub mod filter;
pub mod ranking;

pub use cards::ListingCard;
pub use filter::{filter_by_area, search, AreaFilter};
pub use ranking::{rank, sort_by_mode, SortMode};

use crate::db::store::ListingStore;
use crate::domain::{Category, Listing};

/// Parameters of one category page request.
#[derive(Debug, Clone, Default)]
pub struct BrowseQuery {
    pub sort: SortMode,
    pub area: AreaFilter,
    pub query: String,
}

impl BrowseQuery {
    /// Request for one category page. Sort modes the page does not offer
    /// fall back to the default order.
    pub fn new(
        category: &Category,
        sort: SortMode,
        area: AreaFilter,
        query: impl Into<String>,
    ) -> Self {
        Self {
            sort: sort.for_category(category),
            area,
            query: query.into(),
        }
    }
}

/// Sort, narrow by area, then search, and turn the result into cards.
pub fn browse(listings: Vec<Listing>, q: &BrowseQuery) -> Vec<ListingCard> {
    let listings = sort_by_mode(listings, q.sort);
    let listings = filter_by_area(listings, q.area);
    search(listings, &q.query)
        .iter()
        .map(ListingCard::from)
        .collect()
}

/// Category fetch for display.
///
/// A failed read is shown as an empty page, which is indistinguishable from a
/// category with no listings for the visitor. The failure is logged at error
/// level so an outage still shows up.
pub fn fetch_or_empty<S: ListingStore + ?Sized>(store: &S, category: &str) -> Vec<Listing> {
    match store.fetch_category(category) {
        Ok(listings) => listings,
        Err(e) => {
            tracing::error!(category, error = %e, "category fetch failed, showing no listings");
            Vec::new()
        }
    }
}
