//! Walks a TodoStore server through list, create, update, read, delete.
//!
//! ```bash
//! cargo run -p mock-server &
//! cargo run -p todostore-demo -- --address http://localhost:8000
//! ```

use std::time::Duration;

use anyhow::Context as _;
use clap::Parser;
use todostore::{
    Client, Config, Context, TodoCreateOptions, TodoListOptions, TodoUpdateOptions, Todos,
    DEFAULT_ADDRESS,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Base address of the TodoStore API.
    #[arg(long, env = "TODOSTORE_ADDRESS", default_value = DEFAULT_ADDRESS)]
    address: String,

    /// Per-request timeout in seconds.
    #[arg(long, env = "TODOSTORE_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    #[arg(long, default_value = "Rust Todo")]
    title: String,

    #[arg(long, default_value = "Write a Rust client for TodoStore")]
    memo: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let timeout = Duration::from_secs(args.timeout_secs);
    let client = Client::new(Config::new(&args.address).with_timeout(Some(timeout)))
        .with_context(|| format!("configuring client for {}", args.address))?;
    let todos = client.todos();

    let ctx = Context::background();

    let list = todos.list(&ctx, TodoListOptions::default()).context("listing todos")?;
    println!("todo list: {list:#?}");

    let todo = todos
        .create(&ctx, TodoCreateOptions::new(args.title.clone(), args.memo))
        .context("creating todo")?;
    println!("created: {todo:#?}");

    let todo = todos
        .update(
            &ctx,
            &todo.id,
            TodoUpdateOptions::default().title(format!("{} modified", args.title)),
        )
        .context("updating todo")?;
    tracing::info!(id = %todo.id, "updated");

    let todo = todos.read(&ctx, &todo.id).context("reading todo")?;
    println!("todo: {todo:#?}");

    todos.delete(&ctx, &todo.id).context("deleting todo")?;
    tracing::info!(id = %todo.id, "deleted");

    let list = todos.list(&ctx, TodoListOptions::default()).context("listing todos")?;
    println!("todo list: {list:#?}");

    Ok(())
}
