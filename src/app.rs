//! Todo App
//!
//! Root component: loads todos, owns the global menu/dialog listeners.

use leptos::ev;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::components::{ContextMenu, ScheduleModal, TodoForm, TodoList};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::store::{store_close_schedule, store_hide_menu, store_set_todos, AppState};

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_document();
    log!("[APP] API base {}", config.api_base);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), config);
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // Load todos on mount and whenever the trigger changes. Overlapping
    // loads are not cancelled; the last one to finish wins.
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        spawn_local(async move {
            match actions::fetch_todos(&ctx.api()).await {
                Ok(loaded) => {
                    log!("[TODOS] Loaded {} items, trigger={}", loaded.len(), trigger);
                    store_set_todos(&store, loaded);
                }
                Err(e) => warn!("[API] GET /todos failed: {}", e),
            }
        });
    });

    // Any click hides the context menu; menu items have already taken
    // their target by the time this runs
    let _ = window_event_listener(ev::click, move |_| store_hide_menu(&store));
    let _ = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            store_hide_menu(&store);
            store_close_schedule(&store);
        }
    });

    view! {
        <main class="todo-app">
            <h1>"To-Do List"</h1>
            <TodoForm />
            <TodoList />
            <ContextMenu />
            <ScheduleModal />
        </main>
    }
}
