use serde_json::{json, Value};
use crate::deck_engine::models::DeckView;

/// Text shown in the prompt area before anything has been drawn.
const EMPTY_PROMPT_HINT: &str = "Press \"Draw a question\" to start";

/// Build one history marker entry.
fn marker(index: usize, label: &str, cursor: Option<usize>) -> Value {
    json!({
        "index": index,
        "label": label,
        "selected": cursor == Some(index)
    })
}

/// Build the prompt area block: either the current prompt or the start hint.
fn prompt_block(view: &DeckView) -> Value {
    match &view.current_prompt {
        Some(text) => json!({ "text": text, "placeholder": false }),
        None => json!({ "text": EMPTY_PROMPT_HINT, "placeholder": true }),
    }
}

/// Build the affordance flags for the draw/reset/arrow controls.
fn controls(view: &DeckView) -> Value {
    json!({
        "draw":     { "enabled": view.can_draw },
        "reset":    { "enabled": true },
        "previous": { "enabled": view.can_go_previous },
        "next":     { "enabled": view.can_go_next }
    })
}

/// Map a [`DeckView`] to the JSON document a front end renders from.
///
/// Markers carry their history index so a click can be forwarded straight to
/// `QuestionDeck::jump_to`.
pub fn to_view_json(view: &DeckView) -> Value {
    let markers: Vec<Value> = view
        .markers
        .iter()
        .enumerate()
        .map(|(i, label)| marker(i, label, view.cursor))
        .collect();

    json!({
        "category": {
            "id": view.category.id(),
            "level": view.level_label
        },
        "remaining": view.remaining,
        "prompt": prompt_block(view),
        "controls": controls(view),
        "history": {
            "entries": view.history,
            "markers": markers,
            "empty": view.history.is_empty()
        }
    })
}
