use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use thiserror::Error;

use crate::model::{revision_generation, DocumentRevisions, ServerConfig, Tombstone};
use crate::store::{ListOptions, StoreClient, StoreError};

mod context;
pub use self::context::NavContext;
mod routes;
pub use self::routes::*;
mod router;
pub use self::router::{match_route, Params};
mod dispatch;
pub use self::dispatch::execute;
mod revtree;
pub use self::revtree::{render_revision_tree, revision_groups};
mod repair;
pub use self::repair::{supervised_plan, unsupervised_plan};
mod prefix;
pub use self::prefix::longest_common_prefix;
mod complete;
pub use self::complete::{collapse, command_candidates, complete, Completion};
mod readline;
use self::readline::ShellHelper;

/// How many databases/documents a listing or completion query returns at most.
pub const LIST_LIMIT: u64 = 10;

/// End key appended to a start key to range-scan everything sharing its prefix.
pub const HIGH_KEY_SENTINEL: char = '\u{ffff}';

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("{0}")]
    InvalidContext(&'static str),
    #[error("{0}")]
    InvalidInput(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        CommandError::InvalidInput(err.to_string())
    }
}

pub fn run(config: ServerConfig) -> Result<()> {
    let routes = route_table();
    let context = Arc::new(RwLock::new(NavContext::Root));

    let mut editor: Editor<ShellHelper, DefaultHistory> = Editor::new()?;
    editor.set_helper(Some(ShellHelper::new(config.clone(), Arc::clone(&context))));

    loop {
        let prompt = context.read().expect("navigation lock poisoned").prompt();
        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Eof) => break,
            Err(ReadlineError::Interrupted) => continue,
            Err(err) => return Err(err.into()),
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        editor.add_history_entry(line)?;

        // Credentials may be rotated between commands, so the client is
        // rebuilt every time and never outlives one command.
        let client = match StoreClient::new(&config) {
            Ok(client) => client,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        let snapshot = context.read().expect("navigation lock poisoned").clone();
        match execute(&routes, &client, &snapshot, line) {
            Ok(Action::Print(text)) => println!("{text}"),
            Ok(Action::Bind(name)) => {
                *context.write().expect("navigation lock poisoned") = NavContext::Database(name);
            }
            Ok(Action::Unbind) => {
                *context.write().expect("navigation lock poisoned") = NavContext::Root;
            }
            Ok(Action::Help) => println!("{}", render_help(&routes)),
            Ok(Action::Quit) => break,
            Err(err) => eprintln!("{err}"),
        }
    }

    Ok(())
}
