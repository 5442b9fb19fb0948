//! Data access.
//!
//! [`CredentialStore`] holds identities; [`TaskStore`] holds tasks. Every `TaskStore`
//! method takes the caller's user id and applies `owner_id = caller` inside the same
//! storage operation, so a task that belongs to someone else looks exactly like a
//! task that does not exist.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{NewTask, Task, TaskChanges, User};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Inserts a new identity.
    ///
    /// Fails with `AppError::DuplicateUsername` if the name is taken, including when
    /// two registrations for the same name race each other.
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, AppError>;
}

#[async_trait]
pub trait TaskStore: Send + Sync {
    /// All tasks owned by `owner_id`, ascending by id.
    async fn list_tasks(&self, owner_id: i32) -> Result<Vec<Task>, AppError>;

    async fn find_task(&self, owner_id: i32, task_id: i32) -> Result<Option<Task>, AppError>;

    /// Inserts a task owned by `owner_id`, incomplete.
    async fn create_task(&self, owner_id: i32, task: NewTask) -> Result<Task, AppError>;

    /// Returns `None` if no task with this id is owned by `owner_id`.
    async fn update_task(
        &self,
        owner_id: i32,
        task_id: i32,
        changes: TaskChanges,
    ) -> Result<Option<Task>, AppError>;

    /// Returns `false` if no task with this id is owned by `owner_id`.
    async fn delete_task(&self, owner_id: i32, task_id: i32) -> Result<bool, AppError>;

    /// Cheap reachability check for health reporting.
    async fn ping(&self) -> Result<(), AppError>;
}
