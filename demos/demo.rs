//! Walk through a full question-deck session.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Draw until empty**: prompts come out of the level-1 pool without
//!    repeats, then the deck refuses further draws.
//! 2. **Navigate**: step back and forward through the history, jump to a
//!    marker.
//! 3. **Switch and return**: the history clears but the pool stays depleted.
//! 4. **Reset**: the category pool is refilled.
//!
//! A fixed `rng_seed` keeps the output reproducible.

use question_deck::{to_view_json, Catalog, Category, DeckConfig, QuestionDeck};

/// Print the prompt under the cursor plus the remaining count.
fn print_state(deck: &QuestionDeck) {
    let view = deck.view();
    let shown = view.current_prompt.as_deref().unwrap_or("(nothing drawn yet)");
    let cursor = view.cursor.map_or("-".to_string(), |i| format!("#{}", i + 1));
    println!(
        "  [{} | {}]  left: {}  showing {}: {}",
        view.category, view.level_label, view.remaining, cursor, shown
    );
}

fn main() {
    let mut deck = QuestionDeck::new(Catalog::default(), DeckConfig::default().with_seed(2024));

    // ── Draw until the pool is empty ────────────────────────────────────────
    println!();
    println!("══ Draw until empty ══");
    while deck.can_draw() {
        if let Ok(prompt) = deck.draw() {
            println!("  Q: {prompt}");
        }
    }
    if let Err(err) = deck.draw() {
        println!("  refused: {err}");
    }

    // ── Navigate ────────────────────────────────────────────────────────────
    println!();
    println!("══ Navigate ══");
    deck.previous();
    print_state(&deck);
    deck.previous();
    print_state(&deck);
    deck.next();
    print_state(&deck);
    if deck.jump_to(0).is_ok() {
        print_state(&deck);
    }

    // ── Switch away and back ────────────────────────────────────────────────
    println!();
    println!("══ Switch away and back ══");
    deck.switch_category(Category::Part4);
    if let Ok(prompt) = deck.draw() {
        println!("  Q: {prompt}");
    }
    deck.switch_category(Category::Part1);
    print_state(&deck);

    // ── Reset ───────────────────────────────────────────────────────────────
    println!();
    println!("══ Reset ══");
    deck.reset_active();
    print_state(&deck);

    println!();
    println!("══ View JSON ══");
    if let Ok(prompt) = deck.draw() {
        println!("  Q: {prompt}");
    }
    match serde_json::to_string_pretty(&to_view_json(&deck.view())) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to render view: {err}"),
    }
}
