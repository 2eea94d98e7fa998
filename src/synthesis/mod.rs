//! Deterministic description synthesis.
//!
//! `compose` is a pure function of one listing: the slug seeds a private
//! [`SeedStream`], facts are derived from the listing's own fields, and the
//! category picks a static [`TemplateBank`].

pub mod composer;
pub mod facts;
pub mod seed;
pub mod templates;

pub use composer::{compose, plan_for, CompositionPlan, DecisionPoint, Slot};
pub use facts::Facts;
pub use seed::{pick, SeedStream};
pub use templates::{bank_for, TemplateBank};
