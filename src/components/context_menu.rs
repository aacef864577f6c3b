//! Context Menu Component
//!
//! Right-click menu on a todo row with the schedule actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{self, Refresh};
use crate::browser;
use crate::components::apply_refresh;
use crate::context::AppContext;
use crate::schedule::{local_now, ScheduleDraft};
use crate::store::{store_menu, store_open_schedule, store_take_menu_target, use_app_store};

/// `#custom-context-menu`, positioned at the right-click
#[component]
pub fn ContextMenu() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    // Both items take the target out of the menu first. The click bubbles
    // from the item to the window, so the hide listener runs after this.
    let add_schedule = move |_| {
        let Some(todo) = store_take_menu_target(&store) else { return };
        let draft = ScheduleDraft::new(todo.id, todo.title.clone(), todo.schedule.as_deref(), local_now());
        store_open_schedule(&store, draft);
    };

    let delete_schedule = move |_| {
        let Some(todo) = store_take_menu_target(&store) else { return };
        spawn_local(async move {
            let result = actions::clear_schedule(&ctx.api(), &todo, || {
                browser::confirm("Delete the schedule of this item?")
            })
            .await;
            apply_refresh(ctx, store, "delete schedule", result, Refresh::Nothing);
        });
    };

    let menu = move || store_menu(&store);
    let style = move || match menu().position() {
        Some((x, y)) => format!("display: block; left: {}px; top: {}px;", x, y),
        None => "display: none;".to_string(),
    };
    let has_schedule = move || menu().target().is_some_and(|t| t.is_scheduled());

    view! {
        <div id="custom-context-menu" class="custom-context-menu" style=style>
            <div class="context-menu-item" on:click=add_schedule>
                "Add schedule"
            </div>
            <div
                class="context-menu-item"
                class:disabled=move || !has_schedule()
                on:click=delete_schedule
            >
                "Delete schedule"
            </div>
        </div>
    }
}
