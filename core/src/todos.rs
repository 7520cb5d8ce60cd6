//! Typed CRUD operations for todos.
//!
//! # Design
//! `TodosResource` validates its inputs, picks the method, path and payload,
//! and delegates the round-trip to `Client`. Validation failures return
//! before a request is even built, so a rejected call never reaches the
//! network. Every call is single-shot: no retries, no caching, no batching.

use tracing::instrument;

use crate::client::{Client, NO_BODY};
use crate::context::Context;
use crate::error::{ApiError, Result};
use crate::http::HttpMethod;
use crate::types::{
    valid_string_id, Todo, TodoCreateOptions, TodoList, TodoListOptions, TodoUpdateOptions,
};

/// The todo operations the TodoStore API supports.
pub trait Todos {
    /// List todos. A zero limit means `DEFAULT_LIST_LIMIT`.
    fn list(&self, ctx: &Context, options: TodoListOptions) -> Result<TodoList>;

    /// Create a todo. Title and memo must both be non-empty.
    fn create(&self, ctx: &Context, options: TodoCreateOptions) -> Result<Todo>;

    /// Read a todo by its id.
    fn read(&self, ctx: &Context, todo_id: &str) -> Result<Todo>;

    /// Update a todo by its id. Only the fields set in `options` are sent.
    fn update(&self, ctx: &Context, todo_id: &str, options: TodoUpdateOptions) -> Result<Todo>;

    /// Delete a todo by its id.
    fn delete(&self, ctx: &Context, todo_id: &str) -> Result<()>;
}

/// `Todos` over HTTP. Obtained from `Client::todos`.
#[derive(Debug, Clone)]
pub struct TodosResource {
    client: Client,
}

impl TodosResource {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Todos for TodosResource {
    #[instrument(skip(self, ctx), fields(limit = options.limit))]
    fn list(&self, ctx: &Context, options: TodoListOptions) -> Result<TodoList> {
        let options = options.effective();
        let req = self.client.new_request(HttpMethod::Get, "todos", Some(&options))?;
        self.client.execute(ctx, &req)
    }

    #[instrument(skip_all)]
    fn create(&self, ctx: &Context, options: TodoCreateOptions) -> Result<Todo> {
        options.validate()?;
        let req = self.client.new_request(HttpMethod::Post, "todos", Some(&options))?;
        self.client.execute(ctx, &req)
    }

    #[instrument(skip(self, ctx))]
    fn read(&self, ctx: &Context, todo_id: &str) -> Result<Todo> {
        let path = todo_path(todo_id)?;
        let req = self.client.new_request(HttpMethod::Get, &path, NO_BODY)?;
        self.client.execute(ctx, &req)
    }

    #[instrument(skip(self, ctx, options))]
    fn update(&self, ctx: &Context, todo_id: &str, options: TodoUpdateOptions) -> Result<Todo> {
        let path = todo_path(todo_id)?;
        let req = self.client.new_request(HttpMethod::Patch, &path, Some(&options))?;
        self.client.execute(ctx, &req)
    }

    #[instrument(skip(self, ctx))]
    fn delete(&self, ctx: &Context, todo_id: &str) -> Result<()> {
        let path = todo_path(todo_id)?;
        let req = self.client.new_request(HttpMethod::Delete, &path, NO_BODY)?;
        self.client.execute_empty(ctx, &req)
    }
}

/// `todos/{id}` with the id percent-encoded as a single path segment.
fn todo_path(todo_id: &str) -> Result<String> {
    if !valid_string_id(todo_id) {
        return Err(ApiError::Validation("invalid value for todo id".to_string()));
    }
    // Form encoding writes spaces as `+`; literal `+` is already `%2B`.
    let encoded: String = url::form_urlencoded::byte_serialize(todo_id.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    Ok(format!("todos/{encoded}"))
}
