//! # question_deck
//!
//! A question-draw deck: pick a category of prompts, draw prompts one at a
//! time without repeats until the category runs dry, reset a category, and
//! step backward and forward through what has been drawn so far.
//!
//! ## How it works
//!
//! 1. Build a [`Catalog`] (in code, from JSON, or the built-in sample) and a
//!    [`DeckConfig`] with an optional RNG seed and starting category.
//! 2. Create a [`QuestionDeck`]. Every category gets a full pool.
//! 3. Call [`QuestionDeck::draw`] to pull a random prompt out of the active
//!    pool. It lands at the end of the history and becomes the shown prompt.
//! 4. Move through the history with `previous`, `next`, and `jump_to`.
//!    Render with [`QuestionDeck::view`] or [`to_view_json`].
//!
//! ## Key behaviour
//!
//! - **No repeats**: a pool hands out each catalog slot at most once until
//!   that category is reset. Duplicate texts are separate slots.
//! - **Switching keeps pools**: changing category clears the history but a
//!   category's pool stays depleted until it is reset.
//! - **Deterministic**: pass `rng_seed` to reproduce a draw order, or plug in
//!   any [`IndexPicker`] (e.g. [`ScriptedPicker`]) via
//!   [`QuestionDeck::with_picker`].
//!
//! ## Quick start
//!
//! ```rust
//! use question_deck::{Catalog, Category, DeckConfig, QuestionDeck};
//!
//! let catalog = Catalog::new().with_category(Category::Part1, ["Q1", "Q2", "Q3"]);
//! let mut deck = QuestionDeck::new(catalog, DeckConfig::default().with_seed(42));
//!
//! while deck.can_draw() {
//!     let prompt = deck.draw().unwrap();
//!     println!("Q: {prompt}");
//! }
//! assert_eq!(deck.history().len(), 3);
//! assert!(deck.draw().unwrap_err().is_refusal());
//!
//! deck.previous();
//! assert_eq!(deck.cursor(), Some(1));
//!
//! deck.reset_active();
//! assert_eq!(deck.remaining_count(), 3);
//! ```

pub mod deck_engine;
pub mod view_adapter;

// Convenience re-exports so callers can use `question_deck::QuestionDeck`
// directly without reaching into `deck_engine::`.
pub use deck_engine::{
    Catalog, Category, DeckConfig, DeckError, DeckResult, DeckView, DrawnPrompt,
    HistoryLedger, IndexPicker, QuestionDeck, RandomPicker, ScriptedPicker,
};
pub use view_adapter::to_view_json;
