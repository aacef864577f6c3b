//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::ids::IdGenerator;
use crate::list::remove_row;
use crate::menu::MenuState;
use crate::models::Todo;
use crate::schedule::ScheduleDraft;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Rows in display order, as last fetched (or locally reordered/deleted)
    pub todos: Vec<Todo>,
    /// Custom context menu and the todo it was opened on
    pub menu: MenuState,
    /// Open schedule dialog, if any
    pub schedule_draft: Option<ScheduleDraft>,
    /// Client-side id source for new todos
    pub ids: IdGenerator,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_todos(store: &AppStore) -> Vec<Todo> {
    store.todos().get()
}

pub fn store_todos_untracked(store: &AppStore) -> Vec<Todo> {
    store.todos().get_untracked()
}

/// Replace all rows
pub fn store_set_todos(store: &AppStore, todos: Vec<Todo>) {
    store.todos().set(todos);
}

/// Remove one row from the current rows
pub fn store_remove_todo(store: &AppStore, id: i64) {
    remove_row(&mut store.todos().write(), id);
}

pub fn store_menu(store: &AppStore) -> MenuState {
    store.menu().get()
}

pub fn store_show_menu(store: &AppStore, target: Todo, x: i32, y: i32) {
    store.menu().write().show(target, x, y);
}

/// Hide the menu; skips the write when already hidden so the global
/// click listener does not wake every subscriber on each click
pub fn store_hide_menu(store: &AppStore) {
    if store.menu().with_untracked(MenuState::is_visible) {
        store.menu().write().hide();
    }
}

/// Hide the menu and return the todo it was opened on
pub fn store_take_menu_target(store: &AppStore) -> Option<Todo> {
    store.menu().write().take()
}

pub fn store_schedule_draft(store: &AppStore) -> Option<ScheduleDraft> {
    store.schedule_draft().get()
}

pub fn store_open_schedule(store: &AppStore, draft: ScheduleDraft) {
    store.schedule_draft().set(Some(draft));
}

/// Update the picker value of the open dialog
pub fn store_set_schedule_value(store: &AppStore, value: String) {
    if let Some(draft) = store.schedule_draft().write().as_mut() {
        draft.value = value;
    }
}

pub fn store_close_schedule(store: &AppStore) {
    if store.schedule_draft().with_untracked(Option::is_some) {
        store.schedule_draft().set(None);
    }
}

/// Next id for a todo created now
pub fn store_next_id(store: &AppStore, now_millis: i64) -> i64 {
    store.ids().write().next(now_millis)
}
