//! Static record corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of JSON records shaped like the
//! Notion API returns them.

/// Bot users whose owner carries a type-named payload.
pub const CORPUS_BOT_USERS: &[&str] = &[
    r#"{"object":"user","id":"b-1","type":"bot","name":"Sync","bot":{"owner":{"type":"workspace","workspace":true},"workspace_name":"Acme"}}"#,
    r#"{"object":"user","id":"b-2","type":"bot","name":"Importer","bot":{"owner":{"type":"user","user":{"object":"user","id":"u-9","name":"Ada","type":"person","person":{"email":"ada@acme.io"}}}}}"#,
    r#"{"object":"user","id":"b-3","type":"bot","bot":{"owner":{"type":"bot","bot":{"workspace_name":"Acme"}}}}"#,
];

/// Records that must pass through the user transformation untouched.
pub const CORPUS_UNTOUCHED_USERS: &[&str] = &[
    r#"{"object":"user","id":"p-1","type":"person","person":{"email":"a@b.com"}}"#,
    r#"{"object":"user","id":"b-4","type":"bot","bot":{}}"#,
    r#"{"object":"user","id":"b-5","type":"bot","bot":{"owner":{}}}"#,
    r#"{"object":"user","id":"b-6","type":"bot","bot":{"owner":{"type":"user"}}}"#,
    r#"{"object":"user","id":"b-7","type":"bot","bot":{"owner":{"type":"workspace","workspace":false}}}"#,
    r#"{"object":"user","id":"b-8","type":"bot","bot":{"owner":null}}"#,
    r#"{"object":"user","id":"b-9","type":"bot","bot":"legacy"}"#,
];

/// Page and block records; the other streams' steps leave them alone.
pub const CORPUS_PAGES_AND_BLOCKS: &[&str] = &[
    r#"{"object":"page","id":"pg-1","created_by":{"object":"user","id":"u-1"},"properties":{"Name":{"type":"title","title":[]}}}"#,
    r#"{"object":"database","id":"db-1","title":[{"type":"text","plain_text":"Tasks"}]}"#,
    r#"{"object":"block","id":"bl-1","type":"paragraph","paragraph":{"rich_text":[]},"has_children":false}"#,
];

/// Parse one corpus line into a record.
pub fn parse(line: &str) -> notion_shape::Record {
    match serde_json::from_str::<serde_json::Value>(line) {
        Ok(serde_json::Value::Object(record)) => record,
        other => panic!("fixture is not a JSON object: {other:?}"),
    }
}
