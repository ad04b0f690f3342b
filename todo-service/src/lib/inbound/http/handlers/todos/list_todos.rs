use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;
use serde::Serialize;

use super::TodoData;
use crate::domain::page::Page;
use crate::domain::todo::models::TodoFilter;
use crate::domain::todo::models::TodoState;
use crate::domain::todo::ports::TodoServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Query parameters for the todo listing: filters plus pagination.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListTodosQuery {
    title: Option<String>,
    description: Option<String>,
    state: Option<TodoState>,
    #[serde(default)]
    skip: i64,
    #[serde(default = "default_limit")]
    limit: i64,
}

fn default_limit() -> i64 {
    Page::DEFAULT_LIMIT
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListTodosResponseData {
    pub todos: Vec<TodoData>,
}

pub async fn list_todos(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Query(query): Query<ListTodosQuery>,
) -> Result<ApiSuccess<ListTodosResponseData>, ApiError> {
    let page = Page::new(query.skip, query.limit);
    let filter = TodoFilter {
        title: query.title,
        description: query.description,
        state: query.state,
    };

    state
        .todo_service
        .list_todos(&auth_user.user_id, filter, page)
        .await
        .map_err(ApiError::from)
        .map(|todos| {
            ApiSuccess::new(
                StatusCode::OK,
                ListTodosResponseData {
                    todos: todos.iter().map(TodoData::from).collect(),
                },
            )
        })
}
