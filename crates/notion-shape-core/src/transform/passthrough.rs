use super::{RecordTransformation, TransformContext};
use crate::types::Record;

/// Declared on the `pages` and `databases` streams. Leaves records as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotionPageDatabaseTransformation;

impl RecordTransformation for NotionPageDatabaseTransformation {
    fn transform(&self, _record: &mut Record, _ctx: &TransformContext) {}

    fn name(&self) -> &'static str {
        "NotionPageDatabaseTransformation"
    }
}

/// Declared on the `blocks` stream. Leaves records as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotionBlocksTransformation;

impl RecordTransformation for NotionBlocksTransformation {
    fn transform(&self, _record: &mut Record, _ctx: &TransformContext) {}

    fn name(&self) -> &'static str {
        "NotionBlocksTransformation"
    }
}
