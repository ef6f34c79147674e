use super::*;

/// The outcome of one completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// One unambiguous replacement for the whole input line.
    Line(String),
    /// Choices for the token being completed.
    Candidates(Vec<String>),
}

/// Byte offset and text of the token under completion (everything after the
/// last space; the whole input when there is none).
pub(super) fn completion_key(input: &str) -> (usize, &str) {
    match input.rsplit_once(' ') {
        Some((head, key)) => (head.len() + 1, key),
        None => (0, input),
    }
}

/// Command names whose prefix equals the input, in registration order.
pub fn command_candidates(routes: &[Route], input: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for route in routes {
        let command = route.pattern.split_whitespace().next().unwrap_or("");
        if command.starts_with(input) && !out.iter().any(|c| c == command) {
            out.push(command.to_string());
        }
    }
    out
}

/// When every candidate shares a prefix longer than the key, collapse the
/// list to a single line completing that prefix; otherwise keep the choices.
pub fn collapse(input: &str, key: &str, candidates: Vec<String>) -> Completion {
    let lcp = longest_common_prefix(&candidates);
    match lcp.strip_prefix(key) {
        Some(suffix) if !suffix.is_empty() => Completion::Line(format!("{}{}", input, suffix)),
        _ => Completion::Candidates(candidates),
    }
}

/// One completion request: local command completion while the first token is
/// still being typed, then remote id/name completion keyed on the last token.
pub fn complete(
    routes: &[Route],
    client: &StoreClient,
    context: &NavContext,
    input: &str,
) -> Result<Completion, StoreError> {
    if !input.contains(' ') {
        return Ok(Completion::Candidates(command_candidates(routes, input)));
    }

    let (_, key) = completion_key(input);
    let candidates: Vec<String> = match context {
        NavContext::Database(db) => {
            let opts = ListOptions {
                limit: Some(LIST_LIMIT),
                startkey: Some(key.to_string()),
                endkey: Some(format!("{}{}", key, HIGH_KEY_SENTINEL)),
                ..ListOptions::default()
            };
            client
                .list_documents(db, &opts)?
                .into_iter()
                .map(|row| row.id)
                .collect()
        }
        NavContext::Root => client
            .list_databases()?
            .into_iter()
            .filter(|name| name.starts_with(key))
            .collect(),
    };
    Ok(collapse(input, key, candidates))
}

#[cfg(test)]
#[path = "../tests/shell/complete_tests.rs"]
mod tests;
