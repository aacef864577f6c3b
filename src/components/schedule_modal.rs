//! Schedule Modal Component
//!
//! Dialog with a `datetime-local` picker for a todo's schedule.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{self, Refresh};
use crate::components::apply_refresh;
use crate::context::AppContext;
use crate::store::{
    store_close_schedule, store_schedule_draft, store_set_schedule_value, use_app_store,
};

/// `#schedule-modal`; rendered only while a draft is open
#[component]
pub fn ScheduleModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let draft = move || store_schedule_draft(&store);

    let save = move |_| {
        let Some(draft) = store_schedule_draft(&store) else { return };
        spawn_local(async move {
            let result = actions::save_schedule(&ctx.api(), draft.todo_id, &draft.value).await;
            // A blank picker or a failed save keeps the dialog open
            if apply_refresh(ctx, store, "save schedule", result, Refresh::Nothing) == Refresh::Reload {
                store_close_schedule(&store);
            }
        });
    };

    view! {
        <Show when=move || draft().is_some()>
            <div id="schedule-modal" class="modal-backdrop" on:click=move |_| store_close_schedule(&store)>
                // Clicks inside the dialog must not reach the backdrop
                <div class="modal" role="dialog" aria-modal="true" on:click=|ev| ev.stop_propagation()>
                    <h3 class="modal-title">
                        {move || draft().map(|d| format!("Schedule: {}", d.title)).unwrap_or_default()}
                    </h3>
                    <input
                        type="datetime-local"
                        class="schedule-input"
                        prop:value=move || draft().map(|d| d.value).unwrap_or_default()
                        on:input=move |ev| store_set_schedule_value(&store, event_target_value(&ev))
                    />
                    <div class="modal-actions">
                        <button class="save-btn" on:click=save>"Save"</button>
                        <button class="cancel-btn" on:click=move |_| store_close_schedule(&store)>"Cancel"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
