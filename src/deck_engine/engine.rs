use rand::rngs::StdRng;
use tracing::debug;

use crate::deck_engine::{
    catalog::Catalog,
    config::DeckConfig,
    error::DeckResult,
    history::HistoryLedger,
    models::{Category, DeckView, DrawnPrompt},
    picker::{IndexPicker, RandomPicker},
    pool::PoolManager,
};

/// The whole draw session: pools for every category, the history of the
/// active category, and the picker that drives random selection.
///
/// Pools keep their depletion when the active category changes; history does
/// not. Every operation either completes or leaves the deck untouched.
#[derive(Debug, Clone)]
pub struct QuestionDeck<P: IndexPicker = RandomPicker<StdRng>> {
    pools: PoolManager,
    history: HistoryLedger,
    active: Category,
    picker: P,
}

impl QuestionDeck {
    /// Build a deck with a `StdRng` picker seeded from `config`.
    pub fn new(catalog: Catalog, config: DeckConfig) -> Self {
        let picker = RandomPicker::from_seed(config.rng_seed);
        QuestionDeck::with_picker(catalog, config.initial_category, picker)
    }
}

impl<P: IndexPicker> QuestionDeck<P> {
    /// Build a deck around any picker (e.g. a scripted one in tests).
    pub fn with_picker(catalog: Catalog, initial: Category, picker: P) -> Self {
        let sizes = Category::ALL.map(|c| catalog.len(c));
        debug!(category = %initial, ?sizes, "question deck created");
        QuestionDeck {
            pools: PoolManager::new(catalog),
            history: HistoryLedger::new(),
            active: initial,
            picker,
        }
    }

    // ── draw engine ─────────────────────────────────────────────────────────

    /// Draw a fresh prompt from `category` and show it.
    ///
    /// A category other than the active one becomes active first, so the
    /// history never mixes categories. An exhausted pool is reported as
    /// `DeckError::EmptyPool` with nothing changed, including the active
    /// category; callers can check [`can_draw`](Self::can_draw) first.
    pub fn draw_next(&mut self, category: Category) -> DeckResult<&DrawnPrompt> {
        let drawn = match self.pools.draw(category, &mut self.picker) {
            Ok(drawn) => drawn,
            Err(err) => {
                debug!(%category, "draw refused: pool is empty");
                return Err(err);
            }
        };
        if category != self.active {
            self.switch_category(category);
        }
        debug!(
            %category,
            slot = drawn.slot,
            remaining = self.pools.remaining_count(category),
            "prompt drawn"
        );
        Ok(self.history.append(drawn))
    }

    /// Draw from the active category.
    pub fn draw(&mut self) -> DeckResult<&DrawnPrompt> {
        self.draw_next(self.active)
    }

    /// Refill `category`. The history is cleared only when `category` is the
    /// active one; other categories have no history to clear.
    pub fn reset_category(&mut self, category: Category) {
        self.pools.reset(category);
        if category == self.active {
            self.history.clear();
        }
        debug!(%category, remaining = self.pools.remaining_count(category), "category reset");
    }

    /// Reset the active category.
    pub fn reset_active(&mut self) {
        self.reset_category(self.active);
    }

    /// Make `category` active and clear the history. Pools are untouched.
    pub fn switch_category(&mut self, category: Category) {
        debug!(from = %self.active, to = %category, "category switched");
        self.active = category;
        self.history.clear();
    }

    // ── navigation ──────────────────────────────────────────────────────────

    pub fn previous(&mut self) {
        self.history.previous();
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        self.history.next();
    }

    /// Show history entry `index`; fails on an index not in the history.
    pub fn jump_to(&mut self, index: usize) -> DeckResult<()> {
        self.history.jump_to(index)
    }

    // ── observable state ────────────────────────────────────────────────────

    pub fn active_category(&self) -> Category {
        self.active
    }

    pub fn catalog(&self) -> &Catalog {
        self.pools.catalog()
    }

    /// Prompts left in the active category.
    pub fn remaining_count(&self) -> usize {
        self.pools.remaining_count(self.active)
    }

    pub fn remaining_in(&self, category: Category) -> usize {
        self.pools.remaining_count(category)
    }

    /// Draws taken from `category` since it was last reset.
    pub fn draws_since_reset(&self, category: Category) -> usize {
        self.catalog().len(category) - self.pools.remaining_count(category)
    }

    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    pub fn cursor(&self) -> Option<usize> {
        self.history.cursor()
    }

    pub fn current_prompt(&self) -> Option<&DrawnPrompt> {
        self.history.current()
    }

    pub fn can_draw(&self) -> bool {
        self.remaining_count() > 0
    }

    pub fn can_go_previous(&self) -> bool {
        self.history.can_go_previous()
    }

    pub fn can_go_next(&self) -> bool {
        self.history.can_go_next()
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> DeckView {
        let history: Vec<String> = self.history.entries().iter().map(|p| p.text.clone()).collect();
        let markers = (1..=history.len()).map(|n| format!("#{n}")).collect();
        DeckView {
            category: self.active,
            level_label: self.active.level_label().to_string(),
            remaining: self.remaining_count(),
            current_prompt: self.current_prompt().map(|p| p.text.clone()),
            cursor: self.cursor(),
            history,
            markers,
            can_draw: self.can_draw(),
            can_go_previous: self.can_go_previous(),
            can_go_next: self.can_go_next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck_engine::{error::DeckError, picker::ScriptedPicker};

    fn two_categories() -> Catalog {
        Catalog::new()
            .with_category(Category::Part1, ["Q1", "Q2", "Q3"])
            .with_category(Category::Part2, ["B1", "B2"])
    }

    #[test]
    fn draw_appends_and_moves_cursor() {
        let mut deck = QuestionDeck::with_picker(two_categories(), Category::Part1, ScriptedPicker::new([1, 1]));
        assert_eq!(deck.draw().unwrap().text, "Q2");
        // pool [0,2] -> pick 1 -> Q3
        assert_eq!(deck.draw().unwrap().text, "Q3");
        assert_eq!(deck.cursor(), Some(1));
        assert_eq!(deck.remaining_count(), 1);
        assert_eq!(deck.draws_since_reset(Category::Part1), 2);
    }

    #[test]
    fn refused_draw_leaves_state_unchanged() {
        let mut deck = QuestionDeck::with_picker(two_categories(), Category::Part3, ScriptedPicker::default());
        assert!(!deck.can_draw());
        let err = deck.draw().unwrap_err();
        assert!(err.is_refusal());
        assert!(matches!(err, DeckError::EmptyPool { category: Category::Part3 }));
        assert!(deck.history().is_empty());
        assert_eq!(deck.cursor(), None);
    }

    #[test]
    fn reset_only_refills_its_category() {
        let mut deck = QuestionDeck::with_picker(two_categories(), Category::Part1, ScriptedPicker::default());
        deck.draw_next(Category::Part2).unwrap();
        deck.draw_next(Category::Part1).unwrap();
        deck.reset_category(Category::Part1);
        assert_eq!(deck.remaining_in(Category::Part1), 3);
        assert_eq!(deck.remaining_in(Category::Part2), 1);
        assert!(deck.history().is_empty());
    }

    #[test]
    fn drawing_from_another_category_makes_it_active() {
        let mut deck = QuestionDeck::with_picker(two_categories(), Category::Part1, ScriptedPicker::default());
        deck.draw().unwrap();
        assert_eq!(deck.draw_next(Category::Part2).unwrap().text, "B1");
        assert_eq!(deck.active_category(), Category::Part2);
        assert_eq!(deck.view().history, ["B1"]);
        assert_eq!(deck.current_prompt().map(|p| p.text.as_str()), Some("B1"));
        assert_eq!(deck.remaining_in(Category::Part1), 2);
    }

    #[test]
    fn refused_draw_from_another_category_keeps_active_view() {
        let mut deck = QuestionDeck::with_picker(two_categories(), Category::Part1, ScriptedPicker::default());
        deck.draw().unwrap();
        let before = deck.view();
        assert!(deck.draw_next(Category::Part3).unwrap_err().is_refusal());
        assert_eq!(deck.active_category(), Category::Part1);
        assert_eq!(deck.view(), before);
    }

    #[test]
    fn resetting_another_category_leaves_active_history() {
        let mut deck = QuestionDeck::with_picker(two_categories(), Category::Part2, ScriptedPicker::default());
        deck.draw().unwrap();
        deck.switch_category(Category::Part1);
        deck.draw().unwrap();
        deck.reset_category(Category::Part2);
        assert_eq!(deck.remaining_in(Category::Part2), 2);
        assert_eq!(deck.view().history, ["Q1"]);
        assert_eq!(deck.cursor(), Some(0));
        assert_eq!(deck.remaining_count(), 2);
    }

    #[test]
    fn switch_keeps_pools_but_clears_history() {
        let mut deck = QuestionDeck::with_picker(two_categories(), Category::Part1, ScriptedPicker::default());
        deck.draw().unwrap();
        deck.switch_category(Category::Part2);
        assert_eq!(deck.active_category(), Category::Part2);
        assert!(deck.history().is_empty());
        deck.switch_category(Category::Part1);
        assert!(deck.history().is_empty());
        assert_eq!(deck.cursor(), None);
        assert_eq!(deck.remaining_count(), 2);
    }

    #[test]
    fn switching_to_same_category_still_clears_history() {
        let mut deck = QuestionDeck::with_picker(two_categories(), Category::Part1, ScriptedPicker::default());
        deck.draw().unwrap();
        deck.switch_category(Category::Part1);
        assert!(deck.history().is_empty());
        assert_eq!(deck.remaining_count(), 2);
    }

    #[test]
    fn view_reflects_state() {
        let mut deck = QuestionDeck::with_picker(two_categories(), Category::Part1, ScriptedPicker::new([0, 0]));
        let empty = deck.view();
        assert_eq!(empty.current_prompt, None);
        assert!(empty.markers.is_empty());
        assert!(empty.can_draw);
        assert!(!empty.can_go_previous && !empty.can_go_next);

        deck.draw().unwrap();
        deck.draw().unwrap();
        deck.previous();
        let view = deck.view();
        assert_eq!(view.category, Category::Part1);
        assert_eq!(view.level_label, "1 level");
        assert_eq!(view.remaining, 1);
        assert_eq!(view.history, ["Q1", "Q3"]);
        assert_eq!(view.markers, ["#1", "#2"]);
        assert_eq!(view.cursor, Some(0));
        assert_eq!(view.current_prompt.as_deref(), Some("Q1"));
        assert!(!view.can_go_previous);
        assert!(view.can_go_next);
    }

    #[test]
    fn seeded_decks_draw_in_the_same_order() {
        let run = |seed: u64| -> Vec<usize> {
            let mut deck = QuestionDeck::new(Catalog::default(), DeckConfig::default().with_seed(seed));
            std::iter::from_fn(|| deck.draw().ok().map(|p| p.slot)).collect()
        };
        assert_eq!(run(42), run(42));
        assert_eq!(run(42).len(), Catalog::default().len(Category::Part1));
    }
}
