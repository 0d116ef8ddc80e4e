//! Pipeline: the ordered transformation steps declared for one stream.

use std::sync::Arc;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::registry::TransformationRegistry;
use crate::transform::{RecordTransformation, TransformContext};
use crate::types::Record;

/// Ordered chain of [`RecordTransformation`] steps. An empty pipeline leaves
/// records untouched.
#[derive(Clone, Default)]
pub struct Pipeline {
    steps: Vec<Arc<dyn RecordTransformation>>,
}

impl Pipeline {
    pub fn new(steps: Vec<Arc<dyn RecordTransformation>>) -> Self {
        Self { steps }
    }

    /// Resolve `names` against `registry`, failing on the first unknown name.
    pub fn from_names<S: AsRef<str>>(registry: &TransformationRegistry, names: &[S]) -> Result<Self> {
        let steps = names
            .iter()
            .map(|name| registry.get(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(steps))
    }

    /// Build the pipeline configured for `stream`.
    pub fn for_stream(config: &Config, registry: &TransformationRegistry, stream: &str) -> Result<Self> {
        let stream_cfg = config
            .stream(stream)
            .ok_or_else(|| Error::UnknownStream(stream.to_string()))?;
        let pipeline = Self::from_names(registry, stream_cfg.transformations.as_slice())?;
        tracing::debug!(stream, steps = ?pipeline.step_names(), "built stream pipeline");
        Ok(pipeline)
    }

    /// Run every step over `record`, in declaration order.
    pub fn apply(&self, record: &mut Record, ctx: &TransformContext) {
        for step in &self.steps {
            step.transform(record, ctx);
        }
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("steps", &self.step_names())
            .finish()
    }
}
