// src/synthesis/composer.rs

use super::facts::Facts;
use super::seed::{pick, SeedStream};
use super::templates::{bank_for, Fragment, TemplateBank};
use crate::domain::Listing;

pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Composition slots, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Opener,
    Rating,
    Seed,
    Middle,
    Closer,
}

/// A slot resolved before any drawing happens. `Skip` consumes no draw.
#[derive(Clone, Copy)]
pub enum DecisionPoint {
    Skip,
    Draw(&'static [Fragment]),
}

impl DecisionPoint {
    fn when(present: bool, pool: &'static [Fragment]) -> Self {
        if present && !pool.is_empty() {
            DecisionPoint::Draw(pool)
        } else {
            DecisionPoint::Skip
        }
    }
}

/// The five decision points for one listing.
pub struct CompositionPlan {
    pub(crate) generator: &'static str,
    pub points: [(Slot, DecisionPoint); 5],
}

impl CompositionPlan {
    pub fn new(bank: &'static TemplateBank, facts: &Facts) -> Self {
        Self {
            generator: bank.generator,
            points: [
                (Slot::Opener, DecisionPoint::when(true, bank.openers)),
                (
                    Slot::Rating,
                    DecisionPoint::when(!facts.rating_intro.is_empty(), bank.rating),
                ),
                (Slot::Seed, DecisionPoint::when(facts.seed.is_some(), bank.seed)),
                (Slot::Middle, DecisionPoint::when(true, bank.middles)),
                (Slot::Closer, DecisionPoint::when(true, bank.closers)),
            ],
        }
    }

    /// How many values this plan takes from the stream.
    pub fn draws(&self) -> usize {
        self.points
            .iter()
            .filter(|(_, point)| matches!(point, DecisionPoint::Draw(_)))
            .count()
    }

    pub(crate) fn drawn_slots(&self) -> Vec<Slot> {
        self.points
            .iter()
            .filter(|(_, point)| matches!(point, DecisionPoint::Draw(_)))
            .map(|(slot, _)| *slot)
            .collect()
    }

    /// Draw in slot order and render. Each rendered paragraph is trimmed.
    pub fn render(&self, facts: &Facts, stream: &mut SeedStream) -> Vec<String> {
        self.points
            .iter()
            .filter_map(|(_, point)| match point {
                DecisionPoint::Skip => None,
                DecisionPoint::Draw(pool) => pick(*pool, stream),
            })
            .map(|fragment| fragment(facts).trim().to_string())
            .filter(|paragraph| !paragraph.is_empty())
            .collect()
    }
}

/// Plan for a listing without rendering it.
pub fn plan_for(listing: &Listing) -> CompositionPlan {
    let facts = Facts::derive(listing);
    CompositionPlan::new(bank_for(&listing.category), &facts)
}

/// Generate the description for one listing.
///
/// Depends only on the listing's own fields; the slug seeds the stream.
pub fn compose(listing: &Listing) -> String {
    let facts = Facts::derive(listing);
    let plan = CompositionPlan::new(bank_for(&listing.category), &facts);
    let mut stream = SeedStream::from_key(&listing.slug);

    plan.render(&facts, &mut stream).join(PARAGRAPH_SEPARATOR)
}
