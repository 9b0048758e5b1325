use crate::deck_engine::{
    catalog::Catalog,
    error::{DeckError, DeckResult},
    models::{Category, DrawnPrompt},
    picker::IndexPicker,
};

/// Per-category pools of prompts not yet drawn.
///
/// A pool stores catalog slot numbers, not prompt text, so removal is by
/// position: duplicate texts in the catalog stay separate draws.
#[derive(Debug, Clone)]
pub struct PoolManager {
    catalog: Catalog,
    pools: [Vec<usize>; 4],
}

impl PoolManager {
    /// Seed every pool with a full copy of its catalog list.
    pub fn new(catalog: Catalog) -> Self {
        let mut manager = PoolManager { catalog, pools: Default::default() };
        for category in Category::ALL {
            manager.reset(category);
        }
        manager
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Prompts left in `category`.
    pub fn remaining_count(&self, category: Category) -> usize {
        self.pools[category.index()].len()
    }

    /// Remove one prompt uniformly at random and return it.
    pub fn draw<P: IndexPicker>(
        &mut self,
        category: Category,
        picker: &mut P,
    ) -> DeckResult<DrawnPrompt> {
        let pool = &mut self.pools[category.index()];
        if pool.is_empty() {
            return Err(DeckError::EmptyPool { category });
        }
        let index = picker.pick(pool.len());
        // swap_remove: O(1), order of the remainder is irrelevant.
        let slot = pool.swap_remove(index);
        let text = self.catalog.prompts(category)[slot].clone();
        Ok(DrawnPrompt { slot, text })
    }

    /// Refill `category` with its whole catalog list.
    pub fn reset(&mut self, category: Category) {
        self.pools[category.index()] = (0..self.catalog.len(category)).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck_engine::picker::{RandomPicker, ScriptedPicker};

    fn three_prompts() -> PoolManager {
        PoolManager::new(Catalog::new().with_category(Category::Part1, ["Q1", "Q2", "Q3"]))
    }

    #[test]
    fn pools_start_full() {
        let pools = PoolManager::new(Catalog::default());
        for c in Category::ALL {
            assert_eq!(pools.remaining_count(c), pools.catalog().len(c));
        }
    }

    #[test]
    fn draw_removes_exactly_one() {
        let mut pools = three_prompts();
        let mut picker = RandomPicker::from_seed(Some(1));
        pools.draw(Category::Part1, &mut picker).unwrap();
        assert_eq!(pools.remaining_count(Category::Part1), 2);
    }

    #[test]
    fn draw_from_empty_pool_fails() {
        let mut pools = three_prompts();
        let mut picker = ScriptedPicker::default();
        let err = pools.draw(Category::Part2, &mut picker).unwrap_err();
        assert!(matches!(err, DeckError::EmptyPool { category: Category::Part2 }));
        assert_eq!(pools.remaining_count(Category::Part2), 0);
    }

    #[test]
    fn scripted_picks_follow_swap_remove_order() {
        let mut pools = three_prompts();
        // [0,1,2] pick 0 -> Q1, pool [2,1]; pick 0 -> Q3, pool [1]; pick 0 -> Q2
        let mut picker = ScriptedPicker::new([0, 0, 0]);
        let order: Vec<String> = (0..3)
            .map(|_| pools.draw(Category::Part1, &mut picker).unwrap().text)
            .collect();
        assert_eq!(order, ["Q1", "Q3", "Q2"]);
    }

    #[test]
    fn duplicate_text_is_drawn_once_per_slot() {
        let catalog = Catalog::new().with_category(Category::Part4, ["same", "same", "other"]);
        let mut pools = PoolManager::new(catalog);
        let mut picker = RandomPicker::from_seed(Some(3));
        let mut slots: Vec<usize> = (0..3)
            .map(|_| pools.draw(Category::Part4, &mut picker).unwrap().slot)
            .collect();
        slots.sort_unstable();
        assert_eq!(slots, [0, 1, 2]);
    }

    #[test]
    fn reset_only_touches_one_category() {
        let catalog = Catalog::new()
            .with_category(Category::Part1, ["a", "b"])
            .with_category(Category::Part2, ["c", "d"]);
        let mut pools = PoolManager::new(catalog);
        let mut picker = ScriptedPicker::default();
        pools.draw(Category::Part1, &mut picker).unwrap();
        pools.draw(Category::Part2, &mut picker).unwrap();
        pools.reset(Category::Part1);
        assert_eq!(pools.remaining_count(Category::Part1), 2);
        assert_eq!(pools.remaining_count(Category::Part2), 1);
    }
}
