//! Record transformations: the per-record steps a stream pipeline runs.
//!
//! Every step implements [`RecordTransformation`]. The extraction framework
//! calls each declared step with the same signature whether or not it does
//! any work, so no-op steps are first-class citizens here.

mod passthrough;
mod user;

pub use passthrough::{NotionBlocksTransformation, NotionPageDatabaseTransformation};
pub use user::NotionUserTransformation;

use crate::types::Record;
use serde_json::Value;

/// Extra arguments the framework passes alongside each record.
///
/// None of the built-in steps read them; they are carried so that custom
/// steps registered by embedders see the same calling convention.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformContext {
    /// Connector configuration as supplied by the framework.
    pub config: Option<Value>,
    /// Current incremental state of the stream.
    pub stream_state: Option<Value>,
    /// Slice (partition) the record was read from.
    pub stream_slice: Option<Value>,
}

impl TransformContext {
    pub fn with_config(mut self, config: Value) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_stream_state(mut self, state: Value) -> Self {
        self.stream_state = Some(state);
        self
    }

    pub fn with_stream_slice(mut self, slice: Value) -> Self {
        self.stream_slice = Some(slice);
        self
    }
}

/// A single record-shaping step.
///
/// Implementations mutate the record in place and must not fail: anything
/// they do not recognise is left as it is.
pub trait RecordTransformation: Send + Sync {
    fn transform(&self, record: &mut Record, ctx: &TransformContext);

    /// Name the step is registered under.
    fn name(&self) -> &'static str;
}
