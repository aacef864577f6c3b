//! Todo Actions
//!
//! Each user interaction as one async operation over a [`TodoApi`]. The
//! result tells the view what to do next; the components only wire events
//! to these and apply the [`Refresh`].

use crate::commands::TodoApi;
use crate::error::ApiError;
use crate::list::{display_ids, render_order};
use crate::models::{NewTodo, Todo, TodoPatch};
use crate::schedule::normalize_input;

/// How the view should catch up after an action
#[derive(Debug, Clone, PartialEq)]
pub enum Refresh {
    /// Nothing was sent (cancelled or not applicable)
    Nothing,
    /// Re-fetch the whole list
    Reload,
    /// Drop one row from the rendered list without asking the server
    Remove(i64),
}

/// The view update for a finished action. A 404 means the local copy is
/// stale and always reloads; other failures fall back to `on_error`.
pub fn settle(result: &Result<Refresh, ApiError>, on_error: Refresh) -> Refresh {
    match result {
        Ok(refresh) => refresh.clone(),
        Err(e) if e.status() == Some(404) => Refresh::Reload,
        Err(_) => on_error,
    }
}

/// `GET /todos`, in display order
pub async fn fetch_todos(api: &impl TodoApi) -> Result<Vec<Todo>, ApiError> {
    let todos = api.list_todos().await?;
    Ok(render_order(todos))
}

pub async fn toggle_todo(api: &impl TodoApi, todo: &Todo) -> Result<Refresh, ApiError> {
    api.update_todo(todo.id, &TodoPatch::completed(!todo.completed)).await?;
    Ok(Refresh::Reload)
}

/// Ask for a new title, then a new description. Cancelling either prompt
/// sends nothing.
pub async fn edit_todo<P>(api: &impl TodoApi, todo: &Todo, mut ask: P) -> Result<Refresh, ApiError>
where
    P: FnMut(&str, &str) -> Option<String>,
{
    let Some(title) = ask("New title:", &todo.title) else {
        return Ok(Refresh::Nothing);
    };
    let Some(description) = ask("New description:", &todo.description) else {
        return Ok(Refresh::Nothing);
    };
    api.update_todo(todo.id, &TodoPatch::text(title, description)).await?;
    Ok(Refresh::Reload)
}

/// Delete after confirmation. Only the deleted row is dropped from the
/// rendered list; the list is not re-fetched.
pub async fn delete_todo<C>(api: &impl TodoApi, id: i64, confirm: C) -> Result<Refresh, ApiError>
where
    C: FnOnce() -> bool,
{
    if !confirm() {
        return Ok(Refresh::Nothing);
    }
    api.delete_todo(id).await?;
    Ok(Refresh::Remove(id))
}

pub async fn create_todo(api: &impl TodoApi, id: i64, title: &str, description: &str) -> Result<Refresh, ApiError> {
    let body = NewTodo { id, title, description, completed: false };
    api.create_todo(&body).await?;
    Ok(Refresh::Reload)
}

/// Persist the displayed order. There is no rollback: on failure the
/// rows keep their new order until the next fetch.
pub async fn persist_order(api: &impl TodoApi, rows: &[Todo]) -> Result<(), ApiError> {
    api.reorder_todos(&display_ids(rows)).await
}

/// Save the dialog's picker value. Blank or malformed values send nothing.
pub async fn save_schedule(api: &impl TodoApi, id: i64, value: &str) -> Result<Refresh, ApiError> {
    let Some(schedule) = normalize_input(value) else {
        return Ok(Refresh::Nothing);
    };
    api.update_todo(id, &TodoPatch::schedule(schedule)).await?;
    Ok(Refresh::Reload)
}

/// Clear a schedule after confirmation; unscheduled todos are left alone
/// without asking.
pub async fn clear_schedule<C>(api: &impl TodoApi, todo: &Todo, confirm: C) -> Result<Refresh, ApiError>
where
    C: FnOnce() -> bool,
{
    if !todo.is_scheduled() || !confirm() {
        return Ok(Refresh::Nothing);
    }
    api.update_todo(todo.id, &TodoPatch::clear_schedule()).await?;
    Ok(Refresh::Reload)
}
