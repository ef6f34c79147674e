use super::*;

/// Where the session currently is: the server root, or inside one database.
/// Replaced wholesale on every transition; handlers only ever read it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavContext {
    Root,
    Database(String),
}

impl NavContext {
    pub fn prompt(&self) -> String {
        match self {
            NavContext::Root => ">> ".to_string(),
            NavContext::Database(name) => format!("{} >> ", name),
        }
    }

    pub fn database(&self) -> Option<&str> {
        match self {
            NavContext::Root => None,
            NavContext::Database(name) => Some(name),
        }
    }
}

#[cfg(test)]
#[path = "../tests/shell/context_tests.rs"]
mod tests;
