use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ownership::ensure_owner;
use crate::domain::page::Page;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoFilter;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::UpdateTodoCommand;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::todo::ports::TodoServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for todo operations.
///
/// Concrete implementation of TodoServicePort with dependency injection.
pub struct TodoService<TR>
where
    TR: TodoRepository,
{
    repository: Arc<TR>,
}

impl<TR> TodoService<TR>
where
    TR: TodoRepository,
{
    /// Create a new todo service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Todo persistence implementation
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TR> TodoServicePort for TodoService<TR>
where
    TR: TodoRepository,
{
    async fn create_todo(
        &self,
        owner: &UserId,
        command: CreateTodoCommand,
    ) -> Result<Todo, TodoError> {
        let now = Utc::now();

        let todo = Todo {
            id: TodoId::new(),
            owner: *owner,
            title: command.title,
            description: command.description,
            state: command.state,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(todo).await
    }

    async fn list_todos(
        &self,
        owner: &UserId,
        filter: TodoFilter,
        page: Page,
    ) -> Result<Vec<Todo>, TodoError> {
        self.repository.list(owner, &filter, &page).await
    }

    async fn update_todo(
        &self,
        actor: &UserId,
        id: &TodoId,
        command: UpdateTodoCommand,
    ) -> Result<Todo, TodoError> {
        // Existence before ownership: 404 takes precedence over 403
        let mut todo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TodoError::NotFound)?;

        ensure_owner(actor, &todo.owner)?;

        if let Some(title) = command.title {
            todo.title = title;
        }

        if let Some(description) = command.description {
            todo.description = Some(description);
        }

        if let Some(state) = command.state {
            todo.state = state;
        }

        todo.updated_at = Utc::now();

        self.repository.update(todo).await
    }

    async fn delete_todo(&self, actor: &UserId, id: &TodoId) -> Result<(), TodoError> {
        let todo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TodoError::NotFound)?;

        ensure_owner(actor, &todo.owner)?;

        self.repository.delete(id).await
    }
}
