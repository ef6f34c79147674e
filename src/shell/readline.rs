use rustyline::completion::{Completer, Pair};

use super::*;

/// Line-editor adapter: translates engine candidates into rustyline pairs.
/// Shares the navigation context read-only and builds a fresh store client
/// per request.
pub(super) struct ShellHelper {
    config: ServerConfig,
    context: Arc<RwLock<NavContext>>,
    routes: Vec<Route>,
}

impl ShellHelper {
    pub(super) fn new(config: ServerConfig, context: Arc<RwLock<NavContext>>) -> Self {
        Self {
            config,
            context,
            routes: route_table(),
        }
    }
}

fn pair(text: String) -> Pair {
    Pair {
        display: text.clone(),
        replacement: text,
    }
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];
        let Ok(client) = StoreClient::new(&self.config) else {
            return Ok((pos, Vec::new()));
        };
        let context = self
            .context
            .read()
            .expect("navigation lock poisoned")
            .clone();
        match complete(&self.routes, &client, &context, input) {
            // A collapsed candidate already carries the whole input.
            Ok(Completion::Line(text)) => Ok((0, vec![pair(text)])),
            Ok(Completion::Candidates(candidates)) => {
                let (start, _) = complete::completion_key(input);
                Ok((start, candidates.into_iter().map(pair).collect()))
            }
            Err(_) => Ok((pos, Vec::new())),
        }
    }
}

impl rustyline::Helper for ShellHelper {}

impl rustyline::highlight::Highlighter for ShellHelper {}

impl rustyline::hint::Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        None
    }
}

impl rustyline::validate::Validator for ShellHelper {}
