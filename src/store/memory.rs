use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::{CredentialStore, TaskStore};
use crate::error::AppError;
use crate::models::{NewTask, Task, TaskChanges, User};

/// Non-persistent store holding everything behind one mutex.
///
/// Used by the test suite and for trying the API without a database. Each operation
/// runs under a single lock acquisition, which gives it the same atomicity the
/// Postgres statements have.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<i32, User>,
    tasks: BTreeMap<i32, Task>,
    next_user_id: i32,
    next_task_id: i32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::InternalServerError("memory store lock poisoned".into()))
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let inner = self.lock()?;
        Ok(inner
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, AppError> {
        let mut inner = self.lock()?;
        if inner.users.values().any(|user| user.username == username) {
            return Err(AppError::DuplicateUsername);
        }

        inner.next_user_id += 1;
        let user = User {
            id: inner.next_user_id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        };
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn list_tasks(&self, owner_id: i32) -> Result<Vec<Task>, AppError> {
        let inner = self.lock()?;
        Ok(inner
            .tasks
            .values()
            .filter(|task| task.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_task(&self, owner_id: i32, task_id: i32) -> Result<Option<Task>, AppError> {
        let inner = self.lock()?;
        Ok(inner
            .tasks
            .get(&task_id)
            .filter(|task| task.owner_id == owner_id)
            .cloned())
    }

    async fn create_task(&self, owner_id: i32, task: NewTask) -> Result<Task, AppError> {
        let mut inner = self.lock()?;
        if !inner.users.contains_key(&owner_id) {
            // Mirrors the foreign key on tasks.owner_id.
            return Err(AppError::DatabaseError(format!(
                "owner {} does not exist",
                owner_id
            )));
        }

        inner.next_task_id += 1;
        let created = Task {
            id: inner.next_task_id,
            title: task.title,
            description: task.description,
            is_complete: false,
            owner_id,
        };
        inner.tasks.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_task(
        &self,
        owner_id: i32,
        task_id: i32,
        changes: TaskChanges,
    ) -> Result<Option<Task>, AppError> {
        let mut inner = self.lock()?;
        match inner.tasks.get_mut(&task_id) {
            Some(task) if task.owner_id == owner_id => {
                task.apply(changes);
                Ok(Some(task.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete_task(&self, owner_id: i32, task_id: i32) -> Result<bool, AppError> {
        let mut inner = self.lock()?;
        let owned = matches!(inner.tasks.get(&task_id), Some(task) if task.owner_id == owner_id);
        if owned {
            inner.tasks.remove(&task_id);
        }
        Ok(owned)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.lock().map(|_| ())
    }
}
