//! Terminal to-do list.
//!
//! # Responsibility
//! - Wire store, model, view and controller from command-line settings.
//! - Feed typed commands to the controller as view events or route changes.

mod input;
mod view;

use anyhow::{Context, Result};
use clap::Parser;
use input::{parse_input, Input, HELP};
use log::error;
use std::io::Stdout;
use std::path::PathBuf;
use todo_core::config::DEFAULT_STORE_NAME;
use todo_core::db::{open_db, open_db_in_memory};
use todo_core::{
    init_logging, init_stderr_logging, ControllerResult, Filter, SqliteTodoStore, TodoConfig,
    TodoController, TodoService,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use view::TerminalView;

type Controller<'conn> =
    TodoController<TodoService<SqliteTodoStore<'conn>>, TerminalView<Stdout>>;

#[derive(Parser, Debug)]
#[command(name = "todo", version, about = "A small to-do list for the terminal")]
struct Args {
    /// List name; the database file defaults to `<name>.sqlite3`.
    #[arg(long, default_value = DEFAULT_STORE_NAME)]
    name: String,
    /// Explicit SQLite file path.
    #[arg(long, conflicts_with = "memory")]
    db: Option<PathBuf>,
    /// Keep the list in memory only.
    #[arg(long)]
    memory: bool,
    /// Initial route fragment, e.g. `#/active`.
    #[arg(long, default_value = "")]
    route: String,
    /// Developer mode: verbose logging and detailed warnings.
    #[arg(long)]
    dev: bool,
    #[arg(long)]
    log_level: Option<String>,
    /// Absolute directory for rolling log files. Logs go to stderr without it.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = TodoConfig::new(args.name.clone(), args.dev);

    let level = args
        .log_level
        .as_deref()
        .unwrap_or_else(|| config.default_log_level());
    let logging = match &args.log_dir {
        Some(log_dir) => init_logging(level, &log_dir.to_string_lossy(), config.dev_mode),
        None => init_stderr_logging(level),
    };
    logging
        .map_err(anyhow::Error::msg)
        .context("failed to start logging")?;

    let conn = if args.memory {
        open_db_in_memory()?
    } else {
        let path = args
            .db
            .clone()
            .unwrap_or_else(|| PathBuf::from(config.db_file_name()));
        open_db(&path).with_context(|| format!("failed to open {}", path.display()))?
    };

    let model = TodoService::new(SqliteTodoStore::new(&conn));
    let view = TerminalView::new(std::io::stdout());
    let mut controller = TodoController::new(model, view, config);

    let mut route = args.route;
    controller.set_view(&route).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = match parse_input(&line, controller.view().entries()) {
            Ok(input) => input,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };

        let outcome = match input {
            Input::Event(event) => controller.handle_event(event).await,
            Input::Route(fragment) => {
                route = fragment;
                controller.set_view(&route).await
            }
            Input::List => refresh(&mut controller).await,
            Input::Reset => reset(&mut controller).await,
            Input::Help => {
                println!("{HELP}");
                Ok(())
            }
            Input::Quit => break,
            Input::Empty => Ok(()),
        };

        if let Err(err) = outcome {
            error!("event=command module=cli status=error error={err}");
            eprintln!("error: {err}");
        }
    }

    Ok(())
}

/// Re-renders the list for the active route, even when it would be skipped.
async fn refresh(controller: &mut Controller<'_>) -> ControllerResult<()> {
    match controller.active_filter() {
        Some(Filter::Active) => controller.show_active().await,
        Some(Filter::Completed) => controller.show_completed().await,
        Some(Filter::All) | None => controller.show_all().await,
    }
}

async fn reset(controller: &mut Controller<'_>) -> ControllerResult<()> {
    let removed = controller.model().remove_all()?;
    println!("removed {removed} item(s)");
    refresh(controller).await?;
    controller.update_count().await
}
