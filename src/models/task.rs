use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents a task entity as stored in the database and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier for the task.
    pub id: i32,
    /// The title of the task. Never blank.
    pub title: String,
    /// An optional description for the task.
    pub description: Option<String>,
    /// Whether the task has been completed.
    pub is_complete: bool,
    /// Identifier of the user who owns the task.
    pub owner_id: i32,
}

/// Body of `POST /tasks`.
///
/// Any owner field a client sends is ignored; the owner always comes from the token.
#[derive(Debug, Deserialize, Validate)]
pub struct TaskInput {
    #[serde(default)]
    #[validate(custom = "crate::models::not_blank")]
    pub title: String,
    pub description: Option<String>,
}

/// Body of `PUT /tasks/{id}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdateInput {
    #[serde(default)]
    #[validate(custom = "crate::models::not_blank")]
    pub title: String,
    /// Replaces the stored description; absent clears it.
    pub description: Option<String>,
    /// Absent keeps the stored completion flag.
    #[serde(alias = "is_complete")]
    pub is_complete: Option<bool>,
}

/// Validated data for inserting a task.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
}

/// Validated data for updating a task.
#[derive(Debug, Clone)]
pub struct TaskChanges {
    pub title: String,
    pub description: Option<String>,
    pub is_complete: Option<bool>,
}

impl From<TaskInput> for NewTask {
    fn from(input: TaskInput) -> Self {
        Self {
            title: input.title,
            description: input.description,
        }
    }
}

impl From<TaskUpdateInput> for TaskChanges {
    fn from(input: TaskUpdateInput) -> Self {
        Self {
            title: input.title,
            description: input.description,
            is_complete: input.is_complete,
        }
    }
}

impl Task {
    /// Applies an update to this task in place, following the same rules as the stores.
    pub fn apply(&mut self, changes: TaskChanges) {
        self.title = changes.title;
        self.description = changes.description;
        if let Some(is_complete) = changes.is_complete {
            self.is_complete = is_complete;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_serializes_camel_case() {
        let task = Task {
            id: 1,
            title: "buy milk".to_string(),
            description: None,
            is_complete: false,
            owner_id: 3,
        };
        assert_eq!(
            serde_json::to_value(&task).unwrap(),
            json!({
                "id": 1,
                "title": "buy milk",
                "description": null,
                "isComplete": false,
                "ownerId": 3
            })
        );
    }

    #[test]
    fn test_task_input_validation() {
        let input: TaskInput = serde_json::from_value(json!({ "title": "Valid Task" })).unwrap();
        assert!(input.validate().is_ok());

        let input: TaskInput = serde_json::from_value(json!({ "description": "no title" })).unwrap();
        assert!(input.validate().is_err(), "missing title must fail");

        let input: TaskInput = serde_json::from_value(json!({ "title": "   " })).unwrap();
        assert!(input.validate().is_err(), "blank title must fail");
    }

    #[test]
    fn test_task_input_ignores_owner() {
        let input: TaskInput =
            serde_json::from_value(json!({ "title": "mine", "ownerId": 99, "owner_id": 99 }))
                .unwrap();
        let new_task = NewTask::from(input);
        assert_eq!(new_task.title, "mine");
    }

    #[test]
    fn test_update_accepts_both_spellings() {
        let camel: TaskUpdateInput =
            serde_json::from_value(json!({ "title": "t", "isComplete": true })).unwrap();
        assert_eq!(camel.is_complete, Some(true));

        let snake: TaskUpdateInput =
            serde_json::from_value(json!({ "title": "t", "is_complete": true })).unwrap();
        assert_eq!(snake.is_complete, Some(true));
    }

    #[test]
    fn test_apply_keeps_completion_when_absent() {
        let mut task = Task {
            id: 1,
            title: "old".to_string(),
            description: Some("desc".to_string()),
            is_complete: true,
            owner_id: 1,
        };
        task.apply(TaskChanges {
            title: "new".to_string(),
            description: None,
            is_complete: None,
        });
        assert_eq!(task.title, "new");
        assert_eq!(task.description, None);
        assert!(task.is_complete);

        task.apply(TaskChanges {
            title: "new".to_string(),
            description: None,
            is_complete: Some(false),
        });
        assert!(!task.is_complete);
    }
}
