//! Todo Commands
//!
//! `reqwest` bindings for the `/todos` endpoints. On wasm32 reqwest issues
//! browser `fetch` calls.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::TodoApi;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::{NewTodo, ReorderRequest, Todo, TodoPatch};

#[derive(Clone)]
pub struct HttpTodoApi {
    client: Client,
    config: ClientConfig,
}

impl HttpTodoApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { client: Client::new(), config }
    }
}

/// Treat non-2xx as an error, keeping the body for the log line
async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status: status.as_u16(), body })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check(response).await?;
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let url = self.config.endpoint("todos")?;
        let response = self.client.get(url).send().await?;
        decode(response).await
    }

    async fn create_todo(&self, todo: &NewTodo<'_>) -> Result<Todo, ApiError> {
        let url = self.config.endpoint("todos")?;
        let response = self.client.post(url).json(todo).send().await?;
        decode(response).await
    }

    async fn update_todo(&self, id: i64, patch: &TodoPatch) -> Result<Todo, ApiError> {
        let url = self.config.endpoint(&format!("todos/{}", id))?;
        let response = self.client.put(url).json(patch).send().await?;
        decode(response).await
    }

    async fn delete_todo(&self, id: i64) -> Result<(), ApiError> {
        let url = self.config.endpoint(&format!("todos/{}", id))?;
        let response = self.client.delete(url).send().await?;
        check(response).await?;
        Ok(())
    }

    async fn reorder_todos(&self, ids: &[i64]) -> Result<(), ApiError> {
        let url = self.config.endpoint("todos/reorder")?;
        let body = ReorderRequest { ids: ids.to_vec() };
        let response = self.client.post(url).json(&body).send().await?;
        check(response).await?;
        Ok(())
    }
}
