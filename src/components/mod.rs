//! UI Components
//!
//! Reusable Leptos components.

mod todo_row;
mod todo_form;
mod todo_list;
mod context_menu;
mod schedule_modal;

pub use todo_row::TodoRow;
pub use todo_form::TodoForm;
pub use todo_list::TodoList;
pub use context_menu::ContextMenu;
pub use schedule_modal::ScheduleModal;

use leptos::logging::{log, warn};

use crate::actions::{settle, Refresh};
use crate::context::AppContext;
use crate::error::ApiError;
use crate::store::{store_remove_todo, AppStore};

/// Bring the view up to date after an action and log failures.
/// `on_error` is what the view needs when the request failed; the
/// applied update is returned.
pub(crate) fn apply_refresh(
    ctx: AppContext,
    store: AppStore,
    what: &str,
    result: Result<Refresh, ApiError>,
    on_error: Refresh,
) -> Refresh {
    if let Err(e) = &result {
        warn!("[API] {} failed: {}", what, e);
    }
    let refresh = settle(&result, on_error);
    match refresh {
        Refresh::Nothing => {}
        Refresh::Reload => {
            log!("[TODOS] {} settled, reloading", what);
            ctx.reload();
        }
        Refresh::Remove(id) => {
            log!("[TODOS] {} done, removing row {}", what, id);
            store_remove_todo(&store, id);
        }
    }
    refresh
}
