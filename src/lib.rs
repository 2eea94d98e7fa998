//! Description synthesis and listing ranking for a local business guide.
//!
//! * [`synthesis`] turns a listing's own fields into a reproducible description.
//! * [`catalog`] ranks and filters an already-fetched collection for display.
//! * [`generator`] runs synthesis over the whole store and writes results back.

pub mod catalog;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod generator;
pub mod synthesis;

#[cfg(test)]
mod tests;
