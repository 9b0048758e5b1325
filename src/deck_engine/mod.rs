//! Core deck engine: pools, history, navigation, and the draw session.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: categories, drawn prompts, the render snapshot |
//! | `catalog`    | Immutable prompt lists per category, JSON loading, built-in sample |
//! | `picker`     | Injectable randomness: seeded RNG picker and scripted picker |
//! | `pool`       | Per-category pools of undrawn prompts, removal by slot |
//! | `history`    | Append-only list of drawn prompts with a display cursor |
//! | `navigation` | Saturating cursor moves over the history |
//! | `engine`     | `QuestionDeck`, which owns all of the above |
//! | `config`     | `DeckConfig` construction options |
//! | `error`      | `DeckError` and `DeckResult` |

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod models;
pub mod navigation;
pub mod picker;
pub mod pool;

pub use catalog::Catalog;
pub use config::DeckConfig;
pub use engine::QuestionDeck;
pub use error::{DeckError, DeckResult};
pub use history::HistoryLedger;
pub use models::{Category, DeckView, DrawnPrompt};
pub use picker::{IndexPicker, RandomPicker, ScriptedPicker};
pub use pool::PoolManager;
