//! Blocking client for the TodoStore REST API.
//!
//! # Overview
//! `Client` turns a method, path and optional payload into an `HttpRequest`,
//! runs it through a `Transport`, and decodes the JSON response. The `Todos`
//! trait, implemented by `TodosResource`, offers typed List, Create, Read,
//! Update and Delete on top of it.
//!
//! ```no_run
//! use todostore::{Client, Config, Context, TodoCreateOptions, Todos};
//!
//! # fn main() -> todostore::Result<()> {
//! let client = Client::new(Config::new("http://localhost:8000"))?;
//! let ctx = Context::background();
//! let todo = client
//!     .todos()
//!     .create(&ctx, TodoCreateOptions::new("Write client", "in Rust"))?;
//! println!("created {}", todo.id);
//! # Ok(())
//! # }
//! ```
//!
//! # Design
//! - `Client` is immutable after construction; clone it freely.
//! - Every operation takes an explicit `Context` carrying an optional
//!   deadline and a cancellation flag.
//! - Input validation runs before a request is built, so rejected calls never
//!   touch the network.
//! - Only `Transport` performs I/O. `UreqTransport` is the default; tests
//!   plug in their own.
//! - Failures are returned as `ApiError`. Nothing is retried.

pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod http;
pub mod todos;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use client::{Client, NO_BODY};
pub use config::{Config, DEFAULT_ADDRESS, DEFAULT_TIMEOUT};
pub use context::Context;
pub use error::{ApiError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use todos::{Todos, TodosResource};
pub use transport::{Transport, UreqTransport};
pub use types::{
    Todo, TodoCreateOptions, TodoList, TodoListOptions, TodoUpdateOptions, DEFAULT_LIST_LIMIT,
};
