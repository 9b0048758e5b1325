use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::deck_engine::error::DeckError;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// One of the four fixed prompt buckets a player can pick from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "part1")]
    Part1,
    #[serde(rename = "part2")]
    Part2,
    #[serde(rename = "part3")]
    Part3,
    #[serde(rename = "part4")]
    Part4,
}

impl Category {
    /// Every category in selection order.
    pub const ALL: [Category; 4] = [
        Category::Part1,
        Category::Part2,
        Category::Part3,
        Category::Part4,
    ];

    /// Stable identifier, also used as the JSON key in catalog files.
    pub fn id(self) -> &'static str {
        match self {
            Category::Part1 => "part1",
            Category::Part2 => "part2",
            Category::Part3 => "part3",
            Category::Part4 => "part4",
        }
    }

    /// Short level text shown next to the deck header.
    pub fn level_label(self) -> &'static str {
        match self {
            Category::Part1 => "1 level",
            Category::Part2 => "2 level",
            Category::Part3 => "Boss level",
            Category::Part4 => "Incredible level",
        }
    }

    /// Slot of this category in per-category arrays.
    pub(crate) fn index(self) -> usize {
        match self {
            Category::Part1 => 0,
            Category::Part2 => 1,
            Category::Part3 => 2,
            Category::Part4 => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Category {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| DeckError::UnknownCategory(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Drawn prompts
// ---------------------------------------------------------------------------

/// A prompt taken out of a pool.
///
/// `slot` is the prompt's position in the catalog sequence for its category.
/// Two entries with equal text but different slots are different draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnPrompt {
    pub slot: usize,
    pub text: String,
}

impl fmt::Display for DrawnPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

// ---------------------------------------------------------------------------
// Presentation snapshot
// ---------------------------------------------------------------------------

/// Everything a front end needs to render the deck at one moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckView {
    pub category: Category,
    pub level_label: String,
    pub remaining: usize,
    pub current_prompt: Option<String>,
    pub cursor: Option<usize>,
    pub history: Vec<String>,
    /// Marker labels for the history list: "#1", "#2", ...
    pub markers: Vec<String>,
    pub can_draw: bool,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_ids_round_trip_through_from_str() {
        for c in Category::ALL {
            assert_eq!(c.id().parse::<Category>().unwrap(), c);
            assert_eq!(Category::ALL[c.index()], c);
        }
        assert!(matches!("part5".parse::<Category>(), Err(DeckError::UnknownCategory(_))));
    }

    #[test]
    fn category_serializes_as_its_id() {
        assert_eq!(serde_json::to_string(&Category::Part3).unwrap(), "\"part3\"");
    }
}
