use super::*;

#[derive(Debug, Deserialize)]
pub(super) struct ErrorBody {
    pub error: Option<String>,
    pub reason: Option<String>,
}

impl ErrorBody {
    pub(super) fn describe(self, status: reqwest::StatusCode) -> String {
        self.reason
            .or(self.error)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ack {
    pub ok: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WriteAck {
    pub ok: bool,
    pub id: String,
    pub rev: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BulkRow {
    pub id: String,
    #[serde(default)]
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DocRow {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AllDocsResponse {
    pub rows: Vec<DocRow>,
}

#[derive(Clone, Debug, Default)]
pub struct ListOptions {
    pub limit: Option<u64>,
    pub startkey: Option<String>,
    pub endkey: Option<String>,
    pub include_docs: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct ReplicationRequest {
    pub source: String,
    pub target: String,
    pub create_target: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct BulkDocsRequest<'a> {
    pub docs: &'a [Tombstone],
}
