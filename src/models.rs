//! Frontend Models
//!
//! Data structures matching the REST backend's JSON bodies.

use serde::{Deserialize, Serialize};

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    /// ISO-8601 datetime; `None` means unscheduled
    #[serde(default)]
    pub schedule: Option<String>,
}

impl Todo {
    pub fn is_scheduled(&self) -> bool {
        self.schedule.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Body for `POST /todos`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTodo<'a> {
    pub id: i64,
    pub title: &'a str,
    pub description: &'a str,
    pub completed: bool,
}

/// Partial body for `PUT /todos/{id}`. Unset fields are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// `Some(None)` serializes as `"schedule": null` and clears the schedule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Option<String>>,
}

impl TodoPatch {
    pub fn completed(completed: bool) -> Self {
        Self { completed: Some(completed), ..Default::default() }
    }

    pub fn text(title: String, description: String) -> Self {
        Self { title: Some(title), description: Some(description), ..Default::default() }
    }

    pub fn schedule(schedule: String) -> Self {
        Self { schedule: Some(Some(schedule)), ..Default::default() }
    }

    pub fn clear_schedule() -> Self {
        Self { schedule: Some(None), ..Default::default() }
    }
}

/// Body for `POST /todos/reorder`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReorderRequest {
    pub ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_todo_without_schedule_field() {
        let todo: Todo = serde_json::from_value(json!({
            "id": 1700000000000i64,
            "title": "Buy milk",
            "description": "2L",
            "completed": false
        }))
        .unwrap();
        assert_eq!(todo.id, 1_700_000_000_000);
        assert_eq!(todo.schedule, None);
        assert!(!todo.is_scheduled());
    }

    #[test]
    fn test_todo_with_null_schedule() {
        let todo: Todo = serde_json::from_value(json!({
            "id": 2, "title": "a", "description": "b", "completed": true, "schedule": null
        }))
        .unwrap();
        assert!(todo.completed);
        assert!(!todo.is_scheduled());
    }

    #[test]
    fn test_patch_bodies() {
        assert_eq!(serde_json::to_value(TodoPatch::completed(true)).unwrap(), json!({ "completed": true }));
        assert_eq!(
            serde_json::to_value(TodoPatch::text("t".into(), "d".into())).unwrap(),
            json!({ "title": "t", "description": "d" })
        );
        assert_eq!(
            serde_json::to_value(TodoPatch::schedule("2024-05-01T14:30".into())).unwrap(),
            json!({ "schedule": "2024-05-01T14:30" })
        );
    }

    #[test]
    fn test_clear_schedule_sends_explicit_null() {
        assert_eq!(serde_json::to_value(TodoPatch::clear_schedule()).unwrap(), json!({ "schedule": null }));
    }

    #[test]
    fn test_new_todo_body() {
        let body = NewTodo { id: 5, title: "t", description: "d", completed: false };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "id": 5, "title": "t", "description": "d", "completed": false })
        );
    }

    #[test]
    fn test_reorder_body() {
        let body = ReorderRequest { ids: vec![3, 1, 2] };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({ "ids": [3, 1, 2] }));
    }
}
