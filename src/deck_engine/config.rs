//! Construction options for a question deck.

use serde::{Deserialize, Serialize};

use crate::deck_engine::models::Category;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Fixed seed for a reproducible draw order; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
    /// Category selected when the deck is created.
    pub initial_category: Category,
}

impl DeckConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.initial_category = category;
        self
    }
}
