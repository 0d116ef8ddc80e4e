//! Bot owner normalization for the `users` stream.
//!
//! A Notion bot user carries its owner as
//! `{"type": "<kind>", "<kind>": {...}}`. Downstream schemas want one fixed
//! column, so the payload under the type-named key moves to `info`.

use super::{RecordTransformation, TransformContext};
use crate::types::{is_truthy, object_mut, Record};
use serde_json::Value;

const OWNER_INFO_KEY: &str = "info";

/// Moves `bot.owner.<type>` to `bot.owner.info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotionUserTransformation;

impl RecordTransformation for NotionUserTransformation {
    fn transform(&self, record: &mut Record, _ctx: &TransformContext) {
        let Some(owner) = object_mut(record, "bot").and_then(|bot| object_mut(bot, "owner")) else {
            return;
        };
        if owner.is_empty() {
            return;
        }

        let owner_type = match owner.get("type") {
            Some(Value::String(t)) if !t.is_empty() => t.clone(),
            _ => return,
        };
        // Already in normalized shape; moving it would drop the payload.
        if owner_type == OWNER_INFO_KEY {
            return;
        }
        if !owner.get(&owner_type).is_some_and(is_truthy) {
            return;
        }

        if let Some(payload) = owner.shift_remove(&owner_type) {
            tracing::debug!(owner_type = %owner_type, "normalized bot owner");
            owner.insert(OWNER_INFO_KEY.to_string(), payload);
        }
    }

    fn name(&self) -> &'static str {
        "NotionUserTransformation"
    }
}
