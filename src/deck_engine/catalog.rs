//! The prompt catalog: every prompt that can ever be drawn, per category.
//!
//! A catalog is built once and handed to the deck, which never modifies it.
//! Prompt order matters only in that it fixes each prompt's slot number; two
//! prompts with identical text are still two separate slots.

use std::collections::BTreeMap;

use crate::deck_engine::{
    error::{DeckError, DeckResult},
    models::Category,
};

/// Ordered prompt lists for all four categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    prompts: [Vec<String>; 4],
}

impl Catalog {
    /// A catalog with every category empty.
    pub fn new() -> Self {
        Catalog { prompts: Default::default() }
    }

    /// Replace the prompt list for `category`.
    pub fn with_category<I, S>(mut self, category: Category, prompts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prompts[category.index()] = prompts.into_iter().map(Into::into).collect();
        self
    }

    /// Parse a JSON object keyed by category id (`"part1"` .. `"part4"`).
    ///
    /// Every category must be present; an empty list is allowed.
    pub fn from_json(json: &str) -> DeckResult<Self> {
        let mut raw: BTreeMap<Category, Vec<String>> = serde_json::from_str(json)?;
        let mut catalog = Catalog::new();
        for category in Category::ALL {
            let prompts = raw
                .remove(&category)
                .ok_or(DeckError::MissingCategory(category))?;
            catalog.prompts[category.index()] = prompts;
        }
        Ok(catalog)
    }

    pub fn prompts(&self, category: Category) -> &[String] {
        &self.prompts[category.index()]
    }

    pub fn len(&self, category: Category) -> usize {
        self.prompts[category.index()].len()
    }

    pub fn is_empty(&self, category: Category) -> bool {
        self.prompts[category.index()].is_empty()
    }
}

impl Default for Catalog {
    /// Small built-in catalog, handy for demos and smoke tests.
    fn default() -> Self {
        Catalog::new()
            .with_category(Category::Part1, [
                "What did you want to be when you were little?",
                "Which song have you had on repeat lately?",
                "What is your go-to comfort food?",
                "Where would you go tomorrow if you could travel anywhere?",
                "What small thing made you smile this week?",
            ])
            .with_category(Category::Part2, [
                "Who do you call first when something good happens?",
                "What is a promise you have kept for years?",
                "When do you feel most like yourself?",
                "What is something you are quietly proud of?",
            ])
            .with_category(Category::Part3, [
                "What is the most awkward thing you have said on a first date?",
                "Which habit of yours would you rather nobody noticed?",
                "What is an apology you still owe someone?",
                "When did you last pretend to understand something?",
            ])
            .with_category(Category::Part4, [
                "If you could know one truth about the universe, what would you ask?",
                "Does a life need a purpose to be a good one?",
                "What would you keep if you lost all your memories but one?",
                "Is it possible to truly know another person?",
            ])
    }
}
