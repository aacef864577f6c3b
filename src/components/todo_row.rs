//! Todo Row Component
//!
//! A single `<li>` in the todo list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{make_on_mousedown, DndSignals};

use crate::actions::{self, Refresh};
use crate::browser;
use crate::components::apply_refresh;
use crate::context::AppContext;
use crate::list::row_dom_id;
use crate::models::Todo;
use crate::schedule::format_badge;
use crate::store::{store_show_menu, use_app_store};

/// A single todo row: checkbox, `title: description`, schedule badge, actions
#[component]
pub fn TodoRow(
    todo: Todo,
    dnd: DndSignals,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    
    let id = todo.id;
    let completed = todo.completed;
    let content = format!("{}: {}", todo.title, todo.description);
    let badge = todo.schedule.as_deref().filter(|s| !s.is_empty()).map(format_badge);

    let on_mousedown = make_on_mousedown(dnd, id);
    let is_dragging = move || dnd.dragging_id_read.get() == Some(id);

    let todo_for_toggle = todo.clone();
    let toggle = move |_| {
        let todo = todo_for_toggle.clone();
        spawn_local(async move {
            let result = actions::toggle_todo(&ctx.api(), &todo).await;
            // The browser already flipped the checkbox; re-fetch even on failure
            apply_refresh(ctx, store, "toggle", result, Refresh::Reload);
        });
    };

    let todo_for_edit = todo.clone();
    let edit = move |_| {
        let todo = todo_for_edit.clone();
        spawn_local(async move {
            let result = actions::edit_todo(&ctx.api(), &todo, browser::prompt).await;
            apply_refresh(ctx, store, "edit", result, Refresh::Nothing);
        });
    };

    let delete = move |_| {
        spawn_local(async move {
            let result = actions::delete_todo(&ctx.api(), id, || {
                browser::confirm("Are you sure to delete this?")
            })
            .await;
            apply_refresh(ctx, store, "delete", result, Refresh::Nothing);
        });
    };

    let todo_for_menu = todo.clone();
    let open_menu = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        store_show_menu(&store, todo_for_menu.clone(), ev.page_x(), ev.page_y());
    };

    view! {
        <li
            id=row_dom_id(id)
            class="todo-item"
            class:dragging=is_dragging
            on:mousedown=on_mousedown
            on:contextmenu=open_menu
        >
            <input
                class="todo-checkbox"
                type="checkbox"
                prop:checked=completed
                on:click=toggle
            />
            
            <div
                class="todo-content"
                style=if completed { "text-decoration: line-through; color: #aaa;" } else { "" }
            >
                {content}
                {badge.map(|text| view! { <span class="todo-schedule">{text}</span> })}
            </div>
            
            <div class="todo-actions">
                <button on:click=edit>"Edit"</button>
                <button on:click=delete>"Delete"</button>
            </div>
        </li>
    }
}
