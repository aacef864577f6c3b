//! Todo List Component
//!
//! Displays todos in display order with drag-and-drop reordering.
//! Uses leptos-dragdrop with explicit drop slots between rows.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::logging::{log, warn};

use crate::actions;
use crate::components::TodoRow;
use crate::context::AppContext;
use crate::list::apply_drop;
use crate::store::{store_set_todos, store_todos, store_todos_untracked, use_app_store};

use leptos_dragdrop::*;

/// `#todo-list` with DnD support
#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    
    let dnd = create_dnd_signals(ctx.config().drag_threshold_px);
    
    bind_global_mouseup(dnd, move |dragged_id, target| {
        let DropTarget::Slot(slot) = target;
        let rows = store_todos_untracked(&store);
        let Some(moved) = apply_drop(&rows, dragged_id, slot) else {
            return;
        };
        log!("[DND] Drop: dragged={}, slot={}", dragged_id, slot);
        // Shown immediately; not rolled back if the server refuses
        store_set_todos(&store, moved.clone());
        spawn_local(async move {
            if let Err(e) = actions::persist_order(&ctx.api(), &moved).await {
                warn!("[API] reorder failed: {}", e);
            }
        });
    });
    
    let rows = move || store_todos(&store).into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <ul id="todo-list" class="todo-list">
            <DropSlot dnd=dnd slot=0 />
            
            <For
                each=rows
                key=|(index, todo)| {
                    // Every rendered field, so an edited row is rebuilt
                    (
                        *index,
                        todo.id,
                        todo.title.clone(),
                        todo.description.clone(),
                        todo.completed,
                        todo.schedule.clone(),
                    )
                }
                children=move |(index, todo)| {
                    view! {
                        <TodoRow todo=todo dnd=dnd />
                        <DropSlot dnd=dnd slot=index + 1 />
                    }
                }
            />
        </ul>
    }
}

/// Drop slot - a horizontal separator between rows
#[component]
pub fn DropSlot(
    dnd: DndSignals,
    slot: usize,
) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, slot);
    let on_mouseleave = make_on_mouseleave(dnd);
    
    let is_active = move || dnd.drop_target_read.get() == Some(DropTarget::Slot(slot));
    let is_dragging = move || dnd.dragging_id_read.get().is_some();
    
    let slot_class = move || {
        let mut c = String::from("drop-slot");
        if !is_dragging() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };
    
    view! {
        <li
            class=slot_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
