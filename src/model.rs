use serde::{Deserialize, Serialize};

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub base_url: String,
}

impl ServerConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a bare database name against the server; absolute URLs pass through.
    pub fn database_url(&self, target: &str) -> String {
        if reqwest::Url::parse(target).is_ok() {
            return target.to_string();
        }
        format!("{}/{}", self.base_url, target)
    }
}

/// The revision state of one document: the winning revision plus the
/// historical and conflicting descriptors reported by the server.
#[derive(Clone, Debug, Deserialize)]
pub struct DocumentRevisions {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_rev")]
    pub rev: String,
    #[serde(rename = "_revs_info", default)]
    pub revs_info: Vec<RevInfo>,
    #[serde(rename = "_conflicts", default)]
    pub conflicts: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RevInfo {
    pub rev: String,
    #[serde(default)]
    pub status: String,
}

/// Parse the generation number from a `<generation>-<hash>` descriptor.
/// Descriptors without a leading number have no generation.
pub fn revision_generation(rev: &str) -> Option<u64> {
    let end = rev
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rev.len());
    rev[..end].parse().ok()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tombstone {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_rev")]
    pub rev: String,
    #[serde(rename = "_deleted")]
    pub deleted: bool,
}

impl Tombstone {
    pub fn new(id: &str, rev: &str) -> Self {
        Self {
            id: id.to_string(),
            rev: rev.to_string(),
            deleted: true,
        }
    }
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
