use super::*;

/// Parameters bound from a matched route pattern, by name.
#[derive(Debug, Default, Clone)]
pub struct Params(HashMap<String, String>);

impl Params {
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or_default()
    }
}

/// Split a command line into route tokens.
///
/// `echo` is the one command whose argument may contain whitespace: the JSON
/// literal runs to the last ` > ` separator (or to the end of the line), so
/// it stays one token.
pub(super) fn tokenize_command(line: &str) -> Vec<String> {
    let mut parts = line.splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("");
    if first == "echo" {
        if let Some(tail) = parts.next() {
            let tail = tail.trim();
            if !tail.is_empty() {
                return match tail.rsplit_once(" > ") {
                    Some((json, id)) => vec![
                        "echo".to_string(),
                        json.trim().to_string(),
                        ">".to_string(),
                        id.trim().to_string(),
                    ],
                    None => vec!["echo".to_string(), tail.to_string()],
                };
            }
        }
        return vec!["echo".to_string()];
    }
    line.split_whitespace().map(str::to_string).collect()
}

fn bind(pattern: &str, tokens: &[String]) -> Option<Params> {
    let segments: Vec<&str> = pattern.split_whitespace().collect();
    if segments.len() != tokens.len() {
        return None;
    }
    let mut params = HashMap::new();
    for (segment, token) in segments.iter().zip(tokens) {
        if let Some(name) = segment.strip_prefix(':') {
            params.insert(name.to_string(), token.clone());
        } else if *segment != token.as_str() {
            return None;
        }
    }
    Some(Params(params))
}

fn literal_count(pattern: &str) -> usize {
    pattern
        .split_whitespace()
        .filter(|segment| !segment.starts_with(':'))
        .count()
}

/// Find the route matching the input, preferring the candidate with the
/// most literal tokens (`cd ..` over `cd :db`). No match fails with the
/// input echoed back; nothing runs partially.
pub fn match_route<'r>(
    routes: &'r [Route],
    line: &str,
) -> Result<(&'r Route, Params), CommandError> {
    let tokens = tokenize_command(line);
    let mut best: Option<(&Route, Params, usize)> = None;
    for route in routes {
        if let Some(params) = bind(route.pattern, &tokens) {
            let literals = literal_count(route.pattern);
            if best.as_ref().is_none_or(|(_, _, count)| literals > *count) {
                best = Some((route, params, literals));
            }
        }
    }
    match best {
        Some((route, params, _)) => Ok((route, params)),
        None => Err(CommandError::UnknownCommand(line.to_string())),
    }
}

#[cfg(test)]
#[path = "../tests/shell/router_tests.rs"]
mod tests;
