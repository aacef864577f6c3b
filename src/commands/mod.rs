//! REST Command Wrappers
//!
//! Frontend bindings to the todo backend's HTTP endpoints.

mod todo;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{NewTodo, Todo, TodoPatch};

pub use todo::HttpTodoApi;

/// The todo backend as seen by the client.
///
/// Futures are `?Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait TodoApi {
    /// `GET /todos`
    async fn list_todos(&self) -> Result<Vec<Todo>, ApiError>;
    /// `POST /todos`
    async fn create_todo(&self, todo: &NewTodo<'_>) -> Result<Todo, ApiError>;
    /// `PUT /todos/{id}`
    async fn update_todo(&self, id: i64, patch: &TodoPatch) -> Result<Todo, ApiError>;
    /// `DELETE /todos/{id}`
    async fn delete_todo(&self, id: i64) -> Result<(), ApiError>;
    /// `POST /todos/reorder`
    async fn reorder_todos(&self, ids: &[i64]) -> Result<(), ApiError>;
}
