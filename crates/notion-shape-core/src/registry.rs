use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::transform::{
    NotionBlocksTransformation, NotionPageDatabaseTransformation, NotionUserTransformation,
    RecordTransformation,
};

/// Registry of named record transformations.
///
/// Names match the class names the connector manifest declares, so a stream
/// definition can be resolved without knowing any concrete type.
#[derive(Clone, Default)]
pub struct TransformationRegistry {
    transformations: HashMap<String, Arc<dyn RecordTransformation>>,
}

impl TransformationRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the Notion transformations.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(NotionUserTransformation));
        registry.register(Arc::new(NotionPageDatabaseTransformation));
        registry.register(Arc::new(NotionBlocksTransformation));
        registry
    }

    /// Register a transformation under its own name, replacing any previous
    /// entry with that name.
    pub fn register(&mut self, transformation: Arc<dyn RecordTransformation>) {
        self.transformations
            .insert(transformation.name().to_string(), transformation);
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn RecordTransformation>> {
        self.transformations
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownTransformation(name.to_string()))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.transformations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for TransformationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformationRegistry")
            .field("transformations", &self.names())
            .finish()
    }
}
