//! Error types for the question deck.

use thiserror::Error;

use crate::deck_engine::models::Category;

/// Result type for deck operations.
pub type DeckResult<T> = Result<T, DeckError>;

/// Errors raised by the deck. A failed operation never changes deck state.
#[derive(Debug, Error)]
pub enum DeckError {
    /// Draw attempted on a category with nothing left.
    #[error("no prompts left in category {category}")]
    EmptyPool { category: Category },

    /// History index outside `0..len`.
    #[error("history index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Catalog document has no entry for a category.
    #[error("catalog is missing category {0}")]
    MissingCategory(Category),

    /// Category id that is not one of the known four.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Catalog document is not valid JSON of the expected shape.
    #[error("malformed catalog: {0}")]
    CatalogFormat(#[from] serde_json::Error),
}

impl DeckError {
    /// `true` for expected refusals the UI normally prevents (an empty pool),
    /// `false` for caller contract violations and bad input.
    pub fn is_refusal(&self) -> bool {
        matches!(self, DeckError::EmptyPool { .. })
    }
}
