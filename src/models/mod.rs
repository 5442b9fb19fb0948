pub mod task;
pub mod user;

pub use task::{NewTask, Task, TaskChanges, TaskInput, TaskUpdateInput};
pub use user::User;

use validator::ValidationError;

/// Presence check shared by request bodies: rejects empty and whitespace-only strings.
///
/// Missing JSON fields deserialize to an empty string, so this covers both cases.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}
