//! List Utilities
//!
//! Helper functions for list rendering and reordering.

use crate::models::Todo;
use leptos_dragdrop::move_to_slot;

/// Display order: incomplete rows first, server order kept within each group
pub fn render_order(mut todos: Vec<Todo>) -> Vec<Todo> {
    // `sort_by_key` is stable
    todos.sort_by_key(|todo| todo.completed);
    todos
}

/// DOM id of a row
pub fn row_dom_id(id: i64) -> String {
    format!("todo-{}", id)
}

/// Ids of the rows in display order, as sent to `POST /todos/reorder`
pub fn display_ids(rows: &[Todo]) -> Vec<i64> {
    rows.iter().map(|todo| todo.id).collect()
}

/// Rows after dropping `dragged` into `slot`, or `None` if nothing moves
pub fn apply_drop(rows: &[Todo], dragged: i64, slot: usize) -> Option<Vec<Todo>> {
    let order = move_to_slot(&display_ids(rows), dragged, slot)?;
    Some(
        order
            .into_iter()
            .filter_map(|id| rows.iter().find(|todo| todo.id == id).cloned())
            .collect(),
    )
}

/// Drop the row with `id` in place, other rows untouched.
/// Returns whether a row was removed.
pub fn remove_row(rows: &mut Vec<Todo>, id: i64) -> bool {
    let before = rows.len();
    rows.retain(|todo| todo.id != id);
    rows.len() != before
}
