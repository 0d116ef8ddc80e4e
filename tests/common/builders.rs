//! Test builders: ergonomic constructors for user records.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use notion_shape::Record;
use serde_json::{json, Map, Value};

/// Fluent builder for Notion user records.
///
/// # Example
///
/// ```rust
/// let record = UserRecordBuilder::bot("b-1")
///     .owner_type("workspace")
///     .owner_field("workspace", true)
///     .build();
/// ```
pub struct UserRecordBuilder {
    record: Record,
    owner: Option<Map<String, Value>>,
}

impl UserRecordBuilder {
    pub fn person(id: &str, email: &str) -> Self {
        let record = json!({
            "object": "user",
            "id": id,
            "type": "person",
            "person": {"email": email},
        });
        Self {
            record: into_record(record),
            owner: None,
        }
    }

    pub fn bot(id: &str) -> Self {
        let record = json!({"object": "user", "id": id, "type": "bot", "bot": {}});
        Self {
            record: into_record(record),
            owner: None,
        }
    }

    pub fn owner_type(self, owner_type: impl Into<Value>) -> Self {
        self.owner_field("type", owner_type)
    }

    pub fn owner_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.owner
            .get_or_insert_with(Map::new)
            .insert(key.to_string(), value.into());
        self
    }

    pub fn build(mut self) -> Record {
        if let Some(owner) = self.owner {
            if let Some(Value::Object(bot)) = self.record.get_mut("bot") {
                bot.insert("owner".to_string(), Value::Object(owner));
            }
        }
        self.record
    }
}

fn into_record(value: Value) -> Record {
    match value {
        Value::Object(record) => record,
        other => panic!("builder produced a non-object: {other}"),
    }
}

/// A bot owned by the whole workspace.
pub fn workspace_bot(id: &str) -> Record {
    UserRecordBuilder::bot(id)
        .owner_type("workspace")
        .owner_field("workspace", true)
        .build()
}

/// A bot owned by a person, with the owner's user object as payload.
pub fn user_owned_bot(id: &str, owner_id: &str) -> Record {
    UserRecordBuilder::bot(id)
        .owner_type("user")
        .owner_field("user", json!({"object": "user", "id": owner_id}))
        .build()
}
