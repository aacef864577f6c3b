//! Todo Form Component
//!
//! Form for creating new todos.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::logging::warn;

use crate::actions::{self, Refresh};
use crate::browser;
use crate::context::AppContext;
use crate::store::{store_next_id, use_app_store};

/// `#todo-form` with `#title` and `#description` inputs
#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get();
        let description = description.get();
        let id = store_next_id(&store, browser::now_millis());
        
        spawn_local(async move {
            match actions::create_todo(&ctx.api(), id, &title, &description).await {
                Ok(refresh) => {
                    // Inputs are cleared only once the server accepted the todo
                    set_title.set(String::new());
                    set_description.set(String::new());
                    if refresh == Refresh::Reload {
                        ctx.reload();
                    }
                }
                Err(e) => warn!("[API] create todo {} failed: {}", id, e),
            }
        });
    };

    view! {
        <form id="todo-form" class="todo-form" on:submit=create_todo>
            <input
                id="title"
                type="text"
                placeholder="Title"
                required
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                id="description"
                type="text"
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
