pub mod area;
pub mod listing;

pub use area::{extract_area, Area};
pub use listing::{Category, Listing, ListingTier, OpeningHours, PriceRange};
