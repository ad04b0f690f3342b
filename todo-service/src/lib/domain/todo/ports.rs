use async_trait::async_trait;

use crate::domain::page::Page;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoFilter;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::UpdateTodoCommand;
use crate::domain::user::models::UserId;

/// Port for todo domain service operations.
#[async_trait]
pub trait TodoServicePort: Send + Sync + 'static {
    /// Create a new todo owned by the given user.
    ///
    /// # Arguments
    /// * `owner` - Authenticated principal creating the todo
    /// * `command` - Validated title, description, and state
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_todo(
        &self,
        owner: &UserId,
        command: CreateTodoCommand,
    ) -> Result<Todo, TodoError>;

    /// List the owner's todos matching the filter, within a page window.
    ///
    /// Results are always scoped to the owner; one user never sees
    /// another's items.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_todos(
        &self,
        owner: &UserId,
        filter: TodoFilter,
        page: Page,
    ) -> Result<Vec<Todo>, TodoError>;

    /// Patch an existing todo; only the owner may do so.
    ///
    /// Existence is checked before ownership, so a missing todo reports
    /// `NotFound` even to a caller who would not have been allowed to
    /// touch it.
    ///
    /// # Errors
    /// * `NotFound` - Todo does not exist
    /// * `PermissionDenied` - Actor does not own the todo
    /// * `DatabaseError` - Database operation failed
    async fn update_todo(
        &self,
        actor: &UserId,
        id: &TodoId,
        command: UpdateTodoCommand,
    ) -> Result<Todo, TodoError>;

    /// Delete an existing todo; only the owner may do so.
    ///
    /// # Errors
    /// * `NotFound` - Todo does not exist
    /// * `PermissionDenied` - Actor does not own the todo
    /// * `DatabaseError` - Database operation failed
    async fn delete_todo(&self, actor: &UserId, id: &TodoId) -> Result<(), TodoError>;
}

/// Persistence operations for todo aggregate.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    /// Persist new todo to storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, todo: Todo) -> Result<Todo, TodoError>;

    /// Retrieve todo by identifier, regardless of owner.
    ///
    /// # Returns
    /// Optional todo entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, TodoError>;

    /// Retrieve a window of the owner's todos matching the filter.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list(
        &self,
        owner: &UserId,
        filter: &TodoFilter,
        page: &Page,
    ) -> Result<Vec<Todo>, TodoError>;

    /// Update existing todo in storage.
    ///
    /// # Errors
    /// * `NotFound` - Todo does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, todo: Todo) -> Result<Todo, TodoError>;

    /// Remove todo from storage.
    ///
    /// # Errors
    /// * `NotFound` - Todo does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &TodoId) -> Result<(), TodoError>;
}
